pub use dissimilar::diff as __diff;
use crate::console_interface::{parse_level, render_game_to_string};
use crate::core::{Direction, GameUpdate, Session, Vec2};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub session: Session,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let (warehouse, player) = parse_level(level).expect("test level should parse");
        Self { session: Session::new(warehouse, player).expect("test level should start a session") }
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(self.session.warehouse(), self.session.player()).trim_matches('\n').into()
    }

    pub fn player(&self) -> Vec2 {
        self.session.player()
    }

    pub fn assert_move(&mut self, direction: Direction) -> GameUpdate {
        let update = self.session.apply_move(direction);
        if !update.is_moved() {
            panic!("Expected {:?} to move, got {:?}, in map\n{}", direction, update, self.game_to_string());
        }
        update
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    /// Asserts the move is refused and that nothing at all changed.
    pub fn assert_blocked(&mut self, direction: Direction) -> GameUpdate {
        let before = self.session.clone();
        let update = self.session.apply_move(direction);
        if update.is_moved() {
            panic!("Expected {:?} to be blocked, in map\n{}", direction, self.game_to_string());
        }
        assert_eq!(before.warehouse(), self.session.warehouse());
        assert_eq!(before.player(), self.session.player());
        assert_eq!(before.move_count(), self.session.move_count());
        update
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}

pub fn assert_symbols_match(expected: &str, actual: &str) {
    assert_eq_text!(expected.trim_matches('\n'), actual.trim_matches('\n'));
}
