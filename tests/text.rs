use nonet::{text::{self, ParseError}, Grid};
use pretty_assertions::assert_eq;

const EASY: &str = "\
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079
";

#[test]
fn renders_the_fixed_width_layout() {
    let grid = text::parse(EASY).unwrap();
    let expected = "\
+-----------------------+
| 5 3 0 | 0 7 0 | 0 0 0 |
| 6 0 0 | 1 9 5 | 0 0 0 |
| 0 9 8 | 0 0 0 | 0 6 0 |
|-------+-------+-------|
| 8 0 0 | 0 6 0 | 0 0 3 |
| 4 0 0 | 8 0 3 | 0 0 1 |
| 7 0 0 | 0 2 0 | 0 0 6 |
|-------+-------+-------|
| 0 6 0 | 0 0 0 | 2 8 0 |
| 0 0 0 | 4 1 9 | 0 0 5 |
| 0 0 0 | 0 8 0 | 0 7 9 |
+-----------------------+
";
    assert_eq!(text::render(&grid), expected);
}

#[test]
fn round_trips_through_the_layout() {
    for fixture in [text::parse(EASY).unwrap(), Grid::empty()] {
        let reparsed = text::parse(&text::render(&fixture)).unwrap();
        assert_eq!(reparsed, fixture);
    }
}

#[test]
fn parse_skips_blank_and_separator_lines() {
    let input = "
+-----------------------+
| 5 3 0 | 0 7 0 | 0 0 0 |

| 6 0 0 | 1 9 5 | 0 0 0 |
| 0 9 8 | 0 0 0 | 0 6 0 |
|-------+-------+-------|
| 8 0 0 | 0 6 0 | 0 0 3 |
| 4 0 0 | 8 0 3 | 0 0 1 |
| 7 0 0 | 0 2 0 | 0 0 6 |
-------
| 0 6 0 | 0 0 0 | 2 8 0 |
| 0 0 0 | 4 1 9 | 0 0 5 |
| 0 0 0 | 0 8 0 | 0 7 9 |
+-----------------------+
";
    assert_eq!(text::parse(input).unwrap(), text::parse(EASY).unwrap());
}

#[test]
fn parse_ignores_lines_past_the_ninth_row() {
    let input = format!("{EASY}this line is never read\n");
    assert_eq!(text::parse(&input).unwrap(), text::parse(EASY).unwrap());
}

#[test]
fn parse_rejects_stray_characters() {
    let input = EASY.replace("098000060", "09800x060");
    assert_eq!(
        text::parse(&input),
        Err(ParseError::UnexpectedCharacter { line: 3, ch: 'x' })
    );
}

#[test]
fn parse_rejects_short_rows() {
    let input = EASY.replace("530070000", "53007000");
    assert_eq!(
        text::parse(&input),
        Err(ParseError::WrongRowLength { line: 1, found: 8 })
    );
}

#[test]
fn parse_rejects_overlong_rows() {
    let input = EASY.replace("530070000", "5300700001");
    assert_eq!(
        text::parse(&input),
        Err(ParseError::WrongRowLength { line: 1, found: 10 })
    );
}

#[test]
fn parse_rejects_truncated_grids() {
    let input = "530070000\n600195000\n";
    assert_eq!(text::parse(input), Err(ParseError::TooFewRows { found: 2 }));
}

#[test]
fn display_matches_render() {
    let grid = text::parse(EASY).unwrap();
    assert_eq!(grid.to_string(), text::render(&grid));
}
