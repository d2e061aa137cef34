use std::fmt::{self, Display, Formatter};

use colored::Colorize;
use thiserror::Error;

use crate::board::{Board, Grid};

const BORDER: &str = "+-----------------------+";
const BOX_SEPARATOR: &str = "|-------+-------+-------|";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {ch:?} on line {line}")]
    UnexpectedCharacter { line: usize, ch: char },
    #[error("expected 9 digits on line {line}, found {found}")]
    WrongRowLength { line: usize, found: usize },
    #[error("expected 9 rows of digits, found {found}")]
    TooFewRows { found: usize },
}

/// Parse the fixed-width grid layout produced by [`render`].
///
/// Separator and border lines (first character after any `|`/`+` edge is a
/// dash) and empty lines are skipped; spaces, tabs and `|` inside content
/// lines are ignored. Any other non-digit character fails the parse. Exactly
/// 9 content rows of 9 digits are read; lines past the ninth row are ignored.
pub fn parse(input: &str) -> Result<Grid, ParseError> {
    let mut rows = [[0u8; 9]; 9];
    let mut row = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.trim_start_matches(&['|', '+'][..]).starts_with('-') {
            continue;
        }
        if row == 9 {
            break;
        }
        let mut col = 0;
        for ch in line.chars() {
            match ch {
                ' ' | '\t' | '|' => {}
                '0'..='9' => {
                    if col < 9 {
                        rows[row][col] = ch as u8 - b'0';
                    }
                    col += 1;
                }
                _ => return Err(ParseError::UnexpectedCharacter { line: i + 1, ch }),
            }
        }
        if col != 9 {
            return Err(ParseError::WrongRowLength { line: i + 1, found: col });
        }
        row += 1;
    }
    if row != 9 {
        return Err(ParseError::TooFewRows { found: row });
    }
    Ok(Grid::from_rows(rows))
}

fn layout(cell: impl Fn(usize, usize) -> String) -> String {
    let mut s = String::new();
    s.push_str(BORDER);
    s.push('\n');
    for row in 0..9 {
        s.push_str("| ");
        for col in 0..9 {
            s.push_str(&cell(row, col));
            s.push(' ');
            if (col + 1) % 3 == 0 {
                s.push_str("| ");
            }
        }
        // drop the trailing space after the final box edge
        s.pop();
        s.push('\n');
        if row == 2 || row == 5 {
            s.push_str(BOX_SEPARATOR);
            s.push('\n');
        }
    }
    s.push_str(BORDER);
    s.push('\n');
    s
}

/// Render a grid to the fixed-width text layout, `0` for empty cells.
pub fn render(grid: &Grid) -> String {
    layout(|row, col| grid.get(row, col).to_string())
}

/// Like [`render`], but solver-derived cells are colorized so they stand out
/// from the given clues.
pub fn render_highlighted(board: &Board) -> String {
    layout(|row, col| {
        let digit = board.grid().get(row, col).to_string();
        if board.is_derived(row, col) {
            digit.green().bold().to_string()
        } else {
            digit
        }
    })
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.grid()))
    }
}
