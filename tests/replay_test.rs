use std::io::Cursor;

use tetris_board::core::Board;
use tetris_board::replay::replay;

fn run(board: &mut Board, input: &str) -> (usize, String) {
    let mut out = Vec::new();
    let applied = replay(Cursor::new(input), &mut out, board).unwrap();
    (applied, String::from_utf8(out).unwrap())
}

#[test]
fn replay_skips_rejected_lines_and_keeps_going() {
    let mut board = Board::new(2, 3).unwrap();
    let input = [
        r#"{"type":"tick","positions":[[0,0]],"marker":"T"}"#,
        "not json",
        "",
        r#"{"type":"tick","positions":[[5,0]],"marker":"T"}"#,
        r#"{"type":"board","rows":["___"]}"#,
        r#"{"type":"spin"}"#,
        "   ",
        r#"{"type":"board","rows":["___","ZZ_"]}"#,
    ]
    .join("\n");

    let (applied, out) = run(&mut board, &input);

    assert_eq!(applied, 2);
    assert_eq!(out, "T__\n___\n\nT__\nZZ_\n\n");
    assert_eq!(board.rendered().to_strings(), vec!["T__", "ZZ_"]);
}

#[test]
fn replay_of_only_bad_lines_prints_nothing() {
    let mut board = Board::new(2, 2).unwrap();
    let before = board.rendered().clone();

    let (applied, out) = run(&mut board, "{\n{\"type\":\"board\",\"rows\":[\"_\"]}\n");

    assert_eq!(applied, 0);
    assert!(out.is_empty());
    assert_eq!(board.rendered(), &before);
}

#[test]
fn replay_of_empty_input_applies_nothing() {
    let mut board = Board::new(1, 1).unwrap();
    assert_eq!(run(&mut board, ""), (0, String::new()));
}
