//! 盤面モジュール
//!
//! ナイトの巡回（tour）・トーナメント（tourney）を表す移動表と、その上のグラフ操作を提供する。
//!
//! - `Board`: 盤面本体（幅・高さ・移動表・乱数源）
//! - 移動表は無向（主表のみ）か有向（主表＋副表）のどちらか。副表の有無がそのまま向きを表す
//! - 手の挿入・削除（`edit`）、向きの変換（`direction`）、巡回判定（`validate`）、
//!   部分盤面への合成（`compose`）、各種問い合わせ（`query`）
//!
//! マス番号は `y * width + x` の `i32` で、空き／盤外は `UNUSED`（-1）で表す。
//! 移動表の各値は常にマス番号か `UNUSED` のどちらかで、盤面の幅・高さは生成後に変わらない。

mod compose;
mod direction;
mod edit;
mod query;
mod validate;

pub use validate::BoardReport;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{BoardError, BoardResult};
use crate::types::{KNIGHT_DELTAS, MoveDelta, UNUSED};

/// 移動表
///
/// 無向盤面では1マス1スロットで、辺 {i, j} は `moves[i] = j` か `moves[j] = i` の片方にだけ記録される。
/// 有向盤面では1マス2スロット（主表・副表）で、各マスに接する最大2本の辺を両端で記録する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MoveTables {
    Undirected { moves: Box<[i32]> },
    Directed { moves: Box<[i32]>, back_moves: Box<[i32]> },
}

impl MoveTables {
    fn unused(size: usize) -> Box<[i32]> {
        vec![UNUSED; size].into_boxed_slice()
    }

    /// 主表
    #[inline]
    pub(crate) fn primary(&self) -> &[i32] {
        match self {
            MoveTables::Undirected { moves } | MoveTables::Directed { moves, .. } => moves,
        }
    }

    /// 副表（無向盤面では存在しない）
    #[inline]
    pub(crate) fn secondary(&self) -> Option<&[i32]> {
        match self {
            MoveTables::Undirected { .. } => None,
            MoveTables::Directed { back_moves, .. } => Some(back_moves),
        }
    }
}

/// 盤面
///
/// 幅 `width`・高さ `height` の格子と、マスからマスへの移動表を持つ。
/// マス数が奇数の盤面では閉じた巡回が作れないため、生成時に `BoardError::OddSize` を返す。
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    tables: MoveTables,
    /// 巡回の構築ヒューリスティック用の乱数源（盤面操作自体は乱数を使わない）
    rng: Xoshiro256PlusPlus,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// 空の盤面（0x0）
    pub fn empty() -> Board {
        Board {
            width: 0,
            height: 0,
            tables: MoveTables::Undirected {
                moves: MoveTables::unused(0),
            },
            rng: Xoshiro256PlusPlus::seed_from_u64(0),
        }
    }

    /// 正方形の無向盤面
    pub fn square(n: usize) -> BoardResult<Board> {
        Board::new(n, n)
    }

    /// 長方形の無向盤面（全マス `UNUSED`）
    pub fn new(width: usize, height: usize) -> BoardResult<Board> {
        let rng = Xoshiro256PlusPlus::from_rng(&mut rand::rng());
        Board::with_rng(width, height, rng)
    }

    /// 乱数の種を指定して盤面を生成する
    pub fn with_seed(width: usize, height: usize, seed: u64) -> BoardResult<Board> {
        Board::with_rng(width, height, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: Xoshiro256PlusPlus) -> BoardResult<Board> {
        let size = checked_even_size(width, height)?;
        Ok(Board {
            width,
            height,
            tables: MoveTables::Undirected {
                moves: MoveTables::unused(size),
            },
            rng,
        })
    }

    /// 移動表から無向盤面を生成する
    ///
    /// 各値はマス番号か `UNUSED` でなければならない（`BoardError::MoveOutOfRange`）。
    pub fn from_moves(moves: &[i32], width: usize, height: usize) -> BoardResult<Board> {
        let size = checked_even_size(width, height)?;
        if moves.len() != size {
            return Err(BoardError::TableLength {
                expected: size,
                actual: moves.len(),
            });
        }
        if let Some((cell, &value)) = moves
            .iter()
            .enumerate()
            .find(|&(_, &m)| m != UNUSED && !(0 <= m && (m as usize) < size))
        {
            return Err(BoardError::MoveOutOfRange { cell, value });
        }
        Ok(Board {
            width,
            height,
            tables: MoveTables::Undirected {
                moves: moves.into(),
            },
            rng: Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
        })
    }

    /// 全マスを `UNUSED` に戻し、副表を捨てて無向盤面にする
    pub fn clear(&mut self) {
        let size = self.size();
        self.tables = MoveTables::Undirected {
            moves: MoveTables::unused(size),
        };
    }

    /// 幅
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// 高さ
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// マス数（幅 x 高さ）
    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// 主表
    #[inline]
    pub fn moves(&self) -> &[i32] {
        self.tables.primary()
    }

    /// 副表（有向盤面のみ）
    #[inline]
    pub fn back_moves(&self) -> Option<&[i32]> {
        self.tables.secondary()
    }

    /// 乱数源
    pub fn rng_mut(&mut self) -> &mut Xoshiro256PlusPlus {
        &mut self.rng
    }

    /// 乱数源の種を設定し直す
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    }

    /// 8方向の移動量を乱数順に並べ替えて返す
    ///
    /// Warnsdorff 系の構築で同点の候補を散らすために使う。
    pub fn shuffled_deltas(&mut self) -> [MoveDelta; 8] {
        let mut deltas = KNIGHT_DELTAS;
        deltas.shuffle(&mut self.rng);
        deltas
    }

    /// 座標 (x, y) のマス番号（盤外なら `UNUSED`）
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> i32 {
        if self.in_range_x(x) && self.in_range_y(y) {
            y * self.cols() + x
        } else {
            UNUSED
        }
    }

    /// マス番号の座標 (x, y)
    ///
    /// 範囲チェックはしない。呼び出し側で `cell_index_in_range` を確認すること。
    #[inline]
    pub fn coords(&self, index: i32) -> (i32, i32) {
        let w = self.cols();
        if w == 0 {
            return (UNUSED, UNUSED);
        }
        (index % w, index / w)
    }

    #[inline]
    fn cols(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    fn rows(&self) -> i32 {
        self.height as i32
    }

    /// 無向盤面であることを要求する
    pub(crate) fn require_undirected(&self, op: &'static str) -> BoardResult<()> {
        if self.is_undirected() {
            Ok(())
        } else {
            Err(BoardError::NotUndirected { op })
        }
    }

    /// マス番号が盤内であることを要求する
    pub(crate) fn require_cell(&self, index: i32) -> BoardResult<usize> {
        if self.cell_index_in_range(index) {
            Ok(index as usize)
        } else {
            Err(BoardError::CellOutOfRange {
                index,
                size: self.size(),
            })
        }
    }
}

/// 偶数マスの盤面サイズを返す
fn checked_even_size(width: usize, height: usize) -> BoardResult<usize> {
    let size = width
        .checked_mul(height)
        .filter(|&n| n <= i32::MAX as usize)
        .ok_or(BoardError::TooLarge { width, height })?;
    if size & 1 != 0 {
        return Err(BoardError::OddSize { width, height });
    }
    Ok(size)
}
