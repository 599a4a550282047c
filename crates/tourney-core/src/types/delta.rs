//! 桂馬跳び（ナイト）の移動量（MoveDelta）

use serde::{Deserialize, Serialize};

/// 未使用を表す番兵値
///
/// 移動表の空きマスと、盤外を指すマス番号の両方にこの値を使う。
pub const UNUSED: i32 = -1;

/// 移動量 (dx, dy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDelta {
    pub dx: i32,
    pub dy: i32,
}

impl MoveDelta {
    /// 移動量の種類数
    pub const NUM: usize = 8;

    /// 値から生成
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> MoveDelta {
        MoveDelta { dx, dy }
    }

    /// ナイトの移動量かどうか（|dx|,|dy| が {1,2} の組）
    #[inline]
    pub const fn is_knight(self) -> bool {
        let ax = self.dx.abs();
        let ay = self.dy.abs();
        (ax == 1 && ay == 2) || (ax == 2 && ay == 1)
    }

    /// 正規化された移動インデックス（0-7）を返す
    ///
    /// テキスト形式の保存ファイルはこの番号を1桁ずつ書き出すので、
    /// 対応表を変えてはならない。ナイトの移動でなければ `UNUSED`。
    #[inline]
    pub const fn index(self) -> i32 {
        match (self.dx, self.dy) {
            (2, -1) => 0,
            (1, -2) => 1,
            (-1, -2) => 2,
            (-2, -1) => 3,
            (-2, 1) => 4,
            (-1, 2) => 5,
            (1, 2) => 6,
            (2, 1) => 7,
            _ => UNUSED,
        }
    }

    /// 移動インデックスから移動量を得る
    #[inline]
    pub const fn from_index(index: i32) -> Option<MoveDelta> {
        if 0 <= index && index < Self::NUM as i32 {
            Some(KNIGHT_DELTAS[index as usize])
        } else {
            None
        }
    }
}

/// ナイトの8方向の移動量
///
/// 並びは `MoveDelta::index` の対応表と一致している（反時計回り）。
pub const KNIGHT_DELTAS: [MoveDelta; 8] = [
    MoveDelta::new(2, -1),
    MoveDelta::new(1, -2),
    MoveDelta::new(-1, -2),
    MoveDelta::new(-2, -1),
    MoveDelta::new(-2, 1),
    MoveDelta::new(-1, 2),
    MoveDelta::new(1, 2),
    MoveDelta::new(2, 1),
];
