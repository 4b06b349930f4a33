//! Console session driven by scripted input.

use tapatan::{AppConfig, ConsoleSession, Difficulty, Phase, Player};

fn run(config: &str, input: &str) -> (tapatan::GameSnapshot, String) {
    let config = AppConfig::from_toml(config).unwrap();
    let mut session = ConsoleSession::new(&config, input.as_bytes(), Vec::new());
    let snapshot = session.run().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    (snapshot, output)
}

#[test]
fn test_two_players_finish_a_game() {
    // X: 1, 2, 3 (top row). O: 4, 5.
    let (snapshot, output) = run("mode = \"multi\"\nfirst = \"x\"", "1\n4\n2\n5\n3\nq\n");
    assert_eq!(snapshot.phase, Phase::Terminal);
    assert_eq!(snapshot.outcome.and_then(|o| o.winner()), Some(Player::X));
    assert!(output.contains("X moves first."));
    assert!(output.contains("Winning line: 1-2-3"));
    assert!(output.contains("Player X wins on 0-1-2"));
    assert!(!output.contains("No piece can move."));
}

#[test]
fn test_rejections_are_reported() {
    let (snapshot, output) = run("mode = \"multi\"\nfirst = \"o\"", "5\n5\nhello\nd\n");
    assert_eq!(snapshot.to_move, Some(Player::X));
    assert!(output.contains("Illegal move"));
    assert!(output.contains("Unknown command"));
    assert!(output.contains("Invalid selection: Pieces cannot be selected during the"));
}

#[test]
fn test_computer_answers_in_single_player() {
    let (snapshot, output) = run(
        "mode = \"single\"\ncomputer = \"o\"\nfirst = \"x\"\ndifficulty = \"easy\"",
        "5\nq\n",
    );
    assert!(output.contains("Playing against the computer (O, Easy)."));
    assert!(output.contains("Computer plays"));
    assert_eq!(snapshot.remaining.x, 2);
    assert_eq!(snapshot.remaining.o, 2);
    assert_eq!(snapshot.difficulty, Difficulty::Easy);
    assert_eq!(snapshot.to_move, Some(Player::X));
}

#[test]
fn test_reset_starts_over() {
    let (snapshot, output) = run("mode = \"multi\"\nfirst = \"x\"", "1\n2\nr\n");
    assert_eq!(snapshot.board, tapatan::Board::new());
    assert_eq!(snapshot.phase, Phase::Placing);
    assert_eq!(output.matches("X moves first.").count(), 2);
}

#[test]
fn test_help_lists_commands() {
    let (_, output) = run("mode = \"multi\"\nfirst = \"x\"", "h\nq\n");
    assert!(output.contains("Commands:"));
    assert!(!output.contains("Playing against the computer"));
}

#[test]
fn test_pick_up_and_slide() {
    // X: 1, 3, 8. O: 2, 5, 7. X tries 3 -> 4, then slides 8 -> 9.
    let (snapshot, output) = run(
        "mode = \"multi\"\nfirst = \"x\"",
        "1\n2\n3\n5\n8\n7\n1\n3\n4\n8\n9\n",
    );
    assert!(output.contains("Picked up 1; it can go to 4."));
    assert!(output.contains("Illegal move"));
    assert_eq!(snapshot.phase, Phase::Moving);
    assert_eq!(snapshot.to_move, Some(Player::O));
    assert!(snapshot.board.is_owned_by(tapatan::Position::BottomRight, Player::X));
}
