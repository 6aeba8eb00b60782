//! End-to-end tests for the game session.

use timeline_tictactoe::{
    Board, GameSession, GameStatus, MoveError, Player, Position, opponent, rules,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn test_empty_board_has_no_winner_and_is_not_full() {
    let board = Board::new();
    assert_eq!(rules::check_winner(&board), None);
    assert!(!rules::is_full(&board));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board("XOX XOO OXX");
    assert!(rules::is_full(&board));
    assert_eq!(rules::check_winner(&board), None);
    assert_eq!(rules::status(&board), GameStatus::Draw);
}

#[test]
fn test_selector_wins_now() {
    assert_eq!(opponent::select_move(&board("OO. ... ...")), Some(Position::TopRight));
}

#[test]
fn test_selector_blocks() {
    assert_eq!(opponent::select_move(&board("XX. O.. ...")), Some(Position::TopRight));
}

#[test]
fn test_center_opening_against_computer() {
    let mut session = GameSession::new();
    session.play(Position::Center).unwrap();

    assert_eq!(*session.board(), board("O.. .X. ..."));
    assert_eq!(session.next_player(), Player::X);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_append_after_jump_discards_future() {
    let mut session = GameSession::with_options(false, false);
    session.play(Position::Center).unwrap();
    session.play(Position::TopLeft).unwrap();
    assert_eq!(session.history().len(), 3);

    session.jump_to(0).unwrap();
    assert_eq!(session.history().len(), 3);

    session.play(Position::BottomRight).unwrap();
    assert_eq!(session.history().len(), 2);
    assert_eq!(*session.board(), board("... ... ..X"));
}

#[test]
fn test_jump_recomputes_turn() {
    let mut session = GameSession::with_options(false, false);
    for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
        session.play(pos).unwrap();
    }
    assert_eq!(session.next_player(), Player::O);
    session.jump_to(2).unwrap();
    assert_eq!(session.next_player(), Player::X);
    session.jump_to(1).unwrap();
    assert_eq!(session.next_player(), Player::O);
    assert!(session.jump_to(4).is_err());
    assert_eq!(session.history().step(), 1);
}

#[test]
fn test_jump_back_from_finished_game_allows_play() {
    let mut session = GameSession::with_options(false, false);
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ] {
        session.play(pos).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Won(Player::X));
    assert_eq!(session.play(Position::BottomRight), Err(MoveError::GameOver));

    session.jump_to(4).unwrap();
    assert_eq!(session.status(), GameStatus::InProgress);
    session.play(Position::BottomRight).unwrap();
    assert_eq!(session.history().len(), 6);
}

#[test]
fn test_computer_blocks_and_wins() {
    let mut session = GameSession::new();

    // X 4, O 0 (fallback)
    session.play(Position::Center).unwrap();
    // X 8: no threat on 0-4-8 since O holds 0, fallback to 1
    let turn = session.play(Position::BottomRight).unwrap();
    assert_eq!(turn.reply.map(|m| m.position), Some(Position::TopCenter));
    // X 6 threatens 2-4-6 and 6-7-8; O completes 0-1-2 instead
    let turn = session.play(Position::BottomLeft).unwrap();
    assert_eq!(turn.reply.map(|m| m.position), Some(Position::TopRight));
    assert_eq!(turn.status, GameStatus::Won(Player::O));
    assert_eq!(session.snapshot().status_text(), "Winner: O");
}

#[test]
fn test_game_against_computer_ends_in_draw() {
    let mut session = GameSession::new();
    // X 4 -> O 0 ; X 2 -> O 6 (block 2-4-6) ; X 3 -> O 5 (block 3-4-5)
    // X 7 -> O 1 (block 1-4-7) ; X 8 fills the board
    for pos in [
        Position::Center,
        Position::TopRight,
        Position::MiddleLeft,
        Position::BottomCenter,
    ] {
        let turn = session.play(pos).unwrap();
        assert_eq!(turn.status, GameStatus::InProgress);
    }
    assert_eq!(*session.board(), board("OOX XXO OX."));

    let turn = session.play(Position::BottomRight).unwrap();
    assert_eq!(turn.reply, None);
    assert_eq!(turn.status, GameStatus::Draw);
    assert!(session.is_draw());
    assert_eq!(session.snapshot().status_text(), "Draw!");
}
