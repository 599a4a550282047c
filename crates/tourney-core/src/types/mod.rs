//! 基本型モジュール
//!
//! - `MoveDelta`: ナイトの移動量と、保存形式で使う移動インデックス（0-7）
//! - `KNIGHT_DELTAS`: 8方向の移動量表（移動インデックス順）
//! - `UNUSED`: 移動表の空き／盤外を表す番兵値

mod delta;

pub use delta::{KNIGHT_DELTAS, MoveDelta, UNUSED};
