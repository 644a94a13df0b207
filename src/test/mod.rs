mod test_moves;
mod test_util;
