//! 移動表のテキスト形式
//!
//! 上の行から順に、各マスで次に使う手の移動インデックス（`MoveDelta::index`, 0-7）を
//! 1マス1文字で書き、1行ごとに改行する。例えば 6x6 の巡回は次のようになる。
//!
//! ```text
//! 657455
//! 053043
//! 652062
//! 621265
//! 704014
//! 110133
//! ```
//!
//! 手が記録されていないマスは `.` で表す。

use std::io::{Read, Write};

use crate::board::Board;
use crate::error::{BoardError, BoardResult};
use crate::types::{MoveDelta, UNUSED};

/// 空きマスの文字
const EMPTY_CELL: char = '.';

/// テキスト形式の読み込みエラー
#[derive(thiserror::Error, Debug)]
pub enum MoveTextError {
    /// 行が1つもない
    #[error("move table is empty")]
    Empty,

    /// 行の長さが揃っていない
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    /// 0-7 と `.` 以外の文字
    #[error("invalid character {ch:?} at row {row}, column {col}")]
    InvalidChar { row: usize, col: usize, ch: char },

    /// 移動先が盤外
    #[error("move at row {row}, column {col} leaves the board")]
    OffBoard { row: usize, col: usize },

    /// 盤面を作れない（マス数が奇数など）
    #[error(transparent)]
    Board(#[from] BoardError),

    /// 読み込み時のI/Oエラー
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// 盤面をテキスト形式にする（無向盤面のみ）
pub fn to_move_text(board: &Board) -> BoardResult<String> {
    board.require_undirected("to_move_text")?;

    let (w, h) = (board.width(), board.height());
    let mut text = String::with_capacity((w + 1) * h);
    for (cell, &dest) in board.moves().iter().enumerate() {
        let index = board.move_index(cell as i32, dest);
        text.push(if index == UNUSED {
            EMPTY_CELL
        } else {
            char::from(b'0' + index as u8)
        });
        if (cell + 1) % w == 0 {
            text.push('\n');
        }
    }
    Ok(text)
}

/// 盤面をテキスト形式で書き出す（無向盤面のみ）
pub fn write_move_text<W: Write + ?Sized>(board: &Board, out: &mut W) -> BoardResult<()> {
    let text = to_move_text(board)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// テキスト形式から無向盤面を作る
///
/// 空行と行末の空白は無視する。
pub fn parse_move_text(text: &str) -> Result<Board, MoveTextError> {
    let rows: Vec<&str> = text.lines().map(str::trim_end).filter(|line| !line.is_empty()).collect();
    let Some(first) = rows.first() else {
        return Err(MoveTextError::Empty);
    };

    let width = first.chars().count();
    let height = rows.len();
    let mut moves = Vec::with_capacity(width * height);

    for (y, line) in rows.iter().enumerate() {
        let actual = line.chars().count();
        if actual != width {
            return Err(MoveTextError::RaggedRow { row: y, expected: width, actual });
        }
        for (x, ch) in line.chars().enumerate() {
            moves.push(parse_cell(ch, x, y, width, height)?);
        }
    }

    Ok(Board::from_moves(&moves, width, height)?)
}

/// テキスト形式を読み込んで無向盤面を作る
pub fn read_move_text<R: Read + ?Sized>(reader: &mut R) -> Result<Board, MoveTextError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_move_text(&text)
}

/// 1マス分の文字を移動先のマス番号にする
fn parse_cell(ch: char, x: usize, y: usize, width: usize, height: usize) -> Result<i32, MoveTextError> {
    if ch == EMPTY_CELL {
        return Ok(UNUSED);
    }
    let delta = ch
        .to_digit(10)
        .and_then(|d| MoveDelta::from_index(d as i32))
        .ok_or(MoveTextError::InvalidChar { row: y, col: x, ch })?;

    let dx = x as i32 + delta.dx;
    let dy = y as i32 + delta.dy;
    if dx < 0 || dy < 0 || dx >= width as i32 || dy >= height as i32 {
        return Err(MoveTextError::OffBoard { row: y, col: x });
    }
    Ok(dy * width as i32 + dx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KNIGHT_DELTAS;

    #[test]
    fn test_round_trip_partial_board() {
        let text = "77..\n....\n....\n....\n";
        let board = parse_move_text(text).unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 4);
        assert_eq!(board[0], board.dest(0, KNIGHT_DELTAS[7]));
        assert_eq!(board[0], 6);
        assert_eq!(board[1], 7);
        assert_eq!(board[2], UNUSED);
        assert_eq!(to_move_text(&board).unwrap(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_move_text(""), Err(MoveTextError::Empty)));
        assert!(matches!(parse_move_text("\n\n"), Err(MoveTextError::Empty)));
        assert!(matches!(
            parse_move_text("7...\n...\n"),
            Err(MoveTextError::RaggedRow { row: 1, expected: 4, actual: 3 })
        ));
        assert!(matches!(
            parse_move_text("7.x.\n....\n"),
            Err(MoveTextError::InvalidChar { row: 0, col: 2, ch: 'x' })
        ));
        assert!(matches!(
            parse_move_text("8...\n....\n"),
            Err(MoveTextError::InvalidChar { ch: '8', .. })
        ));
        // (0,0) から dx=-2 は盤外
        assert!(matches!(
            parse_move_text("3...\n....\n"),
            Err(MoveTextError::OffBoard { row: 0, col: 0 })
        ));
        assert!(matches!(
            parse_move_text("...\n...\n...\n"),
            Err(MoveTextError::Board(BoardError::OddSize { width: 3, height: 3 }))
        ));
    }

    #[test]
    fn test_directed_board_rejected() {
        let mut board = Board::new(4, 4).unwrap();
        board.make_directed();
        assert!(matches!(to_move_text(&board), Err(BoardError::NotUndirected { .. })));
    }

    #[test]
    fn test_write_and_read() {
        let mut board = Board::new(4, 2).unwrap();
        board.insert_undirected_move(0, 6).unwrap();
        board.insert_undirected_move(5, 3).unwrap();

        let mut buf = Vec::new();
        write_move_text(&board, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "7...\n.0..\n");

        let read = read_move_text(&mut buf.as_slice()).unwrap();
        assert_eq!(read.moves(), board.moves());
    }
}
