//! # tourney-core
//!
//! ナイトの巡回（knight's tour）と tourney を表す盤面ライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（MoveDelta, UNUSED）
//! - `board`: 盤面と移動表、手の挿入・削除、有向/無向の変換、巡回の判定、部分盤面の合成
//! - `export`: テキスト形式と SVG の入出力
//! - `error`: エラー型
//!

pub mod board;
pub mod error;
pub mod export;
pub mod types;

pub use board::{Board, BoardReport};
pub use error::{BoardError, BoardResult};
pub use export::{
    MoveTextError, SvgOptions, num_string, parse_move_text, read_move_text, render_svg,
    to_move_text, write_move_text, write_svg,
};
pub use types::{KNIGHT_DELTAS, MoveDelta, UNUSED};
