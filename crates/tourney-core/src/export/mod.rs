//! 盤面の書き出し・読み込み
//!
//! - `text`: 移動インデックスを1マス1文字で並べるテキスト形式（読み書き）
//! - `svg`: 手を線分で描く SVG（書き出しのみ）

pub mod num;
pub mod svg;
pub mod text;

pub use num::num_string;
pub use svg::{SvgOptions, render_svg, write_svg};
pub use text::{MoveTextError, parse_move_text, read_move_text, to_move_text, write_move_text};
