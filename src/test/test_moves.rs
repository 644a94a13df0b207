use crate::core::Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

fn open_warehouse() -> Warehouse {
    Warehouse::new(10)
}

/// Box at `pos` with its destination tucked away in a far corner.
fn place_box_with_destination(warehouse: &mut Warehouse, pos: Vec2) {
    warehouse.place_box(pos).unwrap();
    warehouse.place_destination(Vec2::new(1, 1)).unwrap();
}

#[test]
fn when_walking_into_pillar_nothing_changes() {
    let mut warehouse = open_warehouse();
    warehouse.place_pillar(Vec2::new(5, 6)).unwrap();
    let mut session = Session::new(warehouse.clone(), Vec2::new(5, 5)).unwrap();

    let update = session.apply_move(Up);

    assert_eq!(update, GameUpdate::Blocked(BlockReason::Pillar));
    assert_eq!(session.player(), Vec2::new(5, 5));
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.warehouse(), &warehouse);
}

#[test]
fn when_pushing_box_into_free_tile_box_moves() {
    let mut warehouse = open_warehouse();
    place_box_with_destination(&mut warehouse, Vec2::new(5, 6));
    let mut session = Session::new(warehouse, Vec2::new(5, 5)).unwrap();

    let update = session.apply_move(Up);

    assert_eq!(update, GameUpdate::Moved(GameChangeType::PlayerAndBoxMove));
    assert_eq!(session.player(), Vec2::new(5, 6));
    assert!(!session.warehouse().tile(Vec2::new(5, 6)).has_box());
    assert!(session.warehouse().tile(Vec2::new(5, 7)).has_box());
    assert_eq!(session.move_count(), 1);
}

#[test]
fn when_pushing_box_into_pillar_nothing_changes() {
    let mut warehouse = open_warehouse();
    place_box_with_destination(&mut warehouse, Vec2::new(5, 6));
    warehouse.place_pillar(Vec2::new(5, 7)).unwrap();
    let mut session = Session::new(warehouse.clone(), Vec2::new(5, 5)).unwrap();

    let update = session.apply_move(Up);

    assert_eq!(update, GameUpdate::Blocked(BlockReason::BoxBlocked));
    assert_eq!(session.player(), Vec2::new(5, 5));
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.warehouse(), &warehouse);
}

#[test]
fn when_walking_into_wall_nothing_changes() {
    let mut session = Session::new(open_warehouse(), Vec2::new(1, 1)).unwrap();

    assert_eq!(session.apply_move(Right), GameUpdate::Blocked(BlockReason::Obstacle));
    assert_eq!(session.apply_move(Down), GameUpdate::Blocked(BlockReason::Obstacle));
    assert_eq!(session.player(), Vec2::new(1, 1));
    assert_eq!(session.move_count(), 0);
}

#[test]
fn directions_follow_board_axes() {
    // (0, 0) is the bottom right corner, so Left walks towards larger x
    let mut session = Session::new(open_warehouse(), Vec2::new(5, 5)).unwrap();

    session.apply_move(Up);
    assert_eq!(session.player(), Vec2::new(5, 6));
    session.apply_move(Left);
    assert_eq!(session.player(), Vec2::new(6, 6));
    session.apply_move(Down);
    assert_eq!(session.player(), Vec2::new(6, 5));
    session.apply_move(Right);
    assert_eq!(session.player(), Vec2::new(5, 5));
    assert_eq!(session.move_count(), 4);
}

#[test]
fn session_refuses_player_off_the_open_interior() {
    let warehouse = open_warehouse();
    assert_eq!(
        Session::new(warehouse.clone(), Vec2::new(0, 5)).unwrap_err(),
        SessionError::PlayerPlacement(Vec2::new(0, 5))
    );

    let mut warehouse = warehouse;
    warehouse.place_pillar(Vec2::new(4, 4)).unwrap();
    place_box_with_destination(&mut warehouse, Vec2::new(6, 6));
    assert_eq!(
        Session::new(warehouse.clone(), Vec2::new(4, 4)).unwrap_err(),
        SessionError::PlayerPlacement(Vec2::new(4, 4))
    );
    assert_eq!(
        Session::new(warehouse, Vec2::new(6, 6)).unwrap_err(),
        SessionError::PlayerPlacement(Vec2::new(6, 6))
    );
}

#[test]
fn session_refuses_unwinnable_box_count() {
    let mut warehouse = open_warehouse();
    warehouse.place_box(Vec2::new(4, 4)).unwrap();
    warehouse.place_box(Vec2::new(6, 6)).unwrap();
    warehouse.place_destination(Vec2::new(2, 2)).unwrap();

    assert_eq!(
        Session::new(warehouse, Vec2::new(5, 5)).unwrap_err(),
        SessionError::Invariant(InvariantViolation::CountMismatch { boxes: 2, destinations: 1 })
    );
}

#[test]
fn when_move_left_observes_move_left() {
    let mut game = GameTestState::new(r#"
#######
#     #
#     #
#   @ #
#     #
#     #
#######
"#);
    assert_eq!(game.assert_move(Left), GameUpdate::Moved(GameChangeType::PlayerMove));

    game.assert_matches(r#"
#######
#     #
#     #
#  @  #
#     #
#     #
#######
"#);
}

#[test]
fn when_push_pushes() {
    let mut game = GameTestState::new(r#"
#######
#    .#
#     #
# $@  #
#     #
#     #
#######
"#);
    game.assert_move(Left);

    game.assert_matches(r#"
#######
#    .#
#     #
#$@   #
#     #
#     #
#######
"#);
}

#[test]
fn when_box_pushed_into_wall_remains() {
    let mut game = GameTestState::new(r#"
#######
#    .#
#     #
#$@   #
#     #
#     #
#######
"#);
    assert_eq!(game.assert_blocked(Left), GameUpdate::Blocked(BlockReason::BoxBlocked));
}

#[test]
fn when_block_pushed_into_block_remains_two_blocks() {
    let mut game = GameTestState::new(r#"
#######
#   ..#
#     #
#@$$  #
#     #
#     #
#######
"#);
    game.assert_blocked(Right);

    game.assert_matches(r#"
#######
#   ..#
#     #
#@$$  #
#     #
#     #
#######
"#);
}

#[test]
fn when_box_pushed_into_pillar_remains() {
    let mut game = GameTestState::new(r#"
#######
#    .#
#  I  #
#  $  #
#  @  #
#     #
#######
"#);
    assert_eq!(game.assert_blocked(Up), GameUpdate::Blocked(BlockReason::BoxBlocked));
}

#[test]
fn when_player_walks_over_destination_it_stays() {
    let mut game = GameTestState::new(r#"
#######
#     #
#     #
# .@  #
#     #
#    $#
#######
"#);
    game.assert_move(Left);
    game.assert_matches(r#"
#######
#     #
#     #
# +   #
#     #
#    $#
#######
"#);
    game.assert_move(Left);
    game.assert_matches(r#"
#######
#     #
#     #
#@.   #
#     #
#    $#
#######
"#);
}

#[test]
fn when_box_pushed_off_destination_destination_remains() {
    let mut game = GameTestState::new(r#"
#######
#     #
#     #
#  *@ #
#     #
#     #
#######
"#);
    game.assert_move(Left);
    game.assert_matches(r#"
#######
#     #
#     #
# $+  #
#     #
#     #
#######
"#);
}

#[test]
fn when_walking_loop_returns_to_start() {
    let mut game = GameTestState::new(r#"
#######
#     #
#  $  #
# @   #
#     #
#    .#
#######
"#);
    let start = game.game_to_string();
    game.assert_moves(&[Down, Right, Right, Up, Up, Up, Left, Left, Down, Down]);
    assert_eq!(game.game_to_string(), start);
    assert_eq!(game.session.move_count(), 10);
}

#[test]
fn rejected_moves_do_not_count() {
    let mut game = GameTestState::new(r#"
#####
#@  #
#   #
#   #
#####
"#);
    assert_eq!(game.player(), Vec2::new(3, 3));
    game.assert_blocked(Up);
    game.assert_blocked(Left);
    game.assert_move(Right);
    assert_eq!(game.session.move_count(), 1);
    assert_eq!(game.player(), Vec2::new(2, 3));
}
