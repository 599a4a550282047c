//! 範囲判定・移動先計算・空きマスの問い合わせ
//!
//! 盤外の扱いが問い合わせごとに異なる点に注意。
//! `is_unused` は盤外を「使用済み」と答え（次の一歩として選べない）、
//! `get_move` / `board[index]` は盤外を `UNUSED`（何も記録されていない）と答える。

use std::ops::Index;

use super::Board;
use crate::error::BoardResult;
use crate::types::{KNIGHT_DELTAS, MoveDelta, UNUSED};

impl Board {
    /// マス番号が盤内かどうか
    #[inline]
    pub fn cell_index_in_range(&self, index: i32) -> bool {
        0 <= index && (index as usize) < self.size()
    }

    /// x座標が盤内かどうか
    #[inline]
    pub fn in_range_x(&self, x: i32) -> bool {
        0 <= x && x < self.cols()
    }

    /// y座標が盤内かどうか
    #[inline]
    pub fn in_range_y(&self, y: i32) -> bool {
        0 <= y && y < self.rows()
    }

    /// マス `i` から移動量 `delta` だけ動いた先のマス番号（盤外なら `UNUSED`）
    pub fn dest(&self, i: i32, delta: MoveDelta) -> i32 {
        if !self.cell_index_in_range(i) {
            return UNUSED;
        }
        let (x, y) = self.coords(i);
        match (x.checked_add(delta.dx), y.checked_add(delta.dy)) {
            (Some(dx), Some(dy)) => self.index_of(dx, dy),
            _ => UNUSED,
        }
    }

    /// `j` が `i` からナイトの一手で（盤内に留まって）届くかどうか
    pub fn is_knight_move(&self, i: i32, j: i32) -> bool {
        self.cell_index_in_range(i)
            && self.cell_index_in_range(j)
            && KNIGHT_DELTAS.iter().any(|&delta| self.dest(i, delta) == j)
    }

    /// `src` から `dest` への移動の移動インデックス（0-7）
    ///
    /// ナイトの移動でない、またはどちらかが盤外なら `UNUSED`。
    pub fn move_index(&self, src: i32, dest: i32) -> i32 {
        if !self.cell_index_in_range(src) || !self.cell_index_in_range(dest) {
            return UNUSED;
        }
        let (sx, sy) = self.coords(src);
        let (dx, dy) = self.coords(dest);
        MoveDelta::new(dx - sx, dy - sy).index()
    }

    /// マスが空いているか（無向盤面のみ）
    ///
    /// 盤外のマスは使用済みとして `false` を返す（`get_move` とは逆の扱い）。
    pub fn is_unused(&self, index: i32) -> BoardResult<bool> {
        self.require_undirected("is_unused")?;
        Ok(self.cell_index_in_range(index) && self.moves()[index as usize] == UNUSED)
    }

    /// `pos` から `delta` だけ動いた先が盤内かつ空きかどうか（無向盤面のみ）
    pub fn is_unused_at(&self, pos: i32, delta: MoveDelta) -> BoardResult<bool> {
        self.require_undirected("is_unused_at")?;
        let dest = self.dest(pos, delta);
        Ok(dest != UNUSED && self.moves()[dest as usize] == UNUSED)
    }

    /// `pos` から `delta` だけ動いた先が盤内かどうか（無向盤面のみ）
    pub fn is_on_board(&self, pos: i32, delta: MoveDelta) -> BoardResult<bool> {
        self.require_undirected("is_on_board")?;
        Ok(self.dest(pos, delta) != UNUSED)
    }

    /// `index` から盤内の空きマスへ動ける方向の数（無向盤面のみ）
    pub fn available_move_count(&self, index: i32) -> BoardResult<usize> {
        self.require_undirected("available_move_count")?;
        self.require_cell(index)?;
        let moves = self.moves();
        Ok(KNIGHT_DELTAS
            .iter()
            .map(|&delta| self.dest(index, delta))
            .filter(|&dest| dest != UNUSED && moves[dest as usize] == UNUSED)
            .count())
    }

    /// マスに記録された移動先（無向盤面のみ）
    ///
    /// 盤外のマスは `UNUSED` を返す（`is_unused` とは逆の扱い）。
    pub fn get_move(&self, index: i32) -> BoardResult<i32> {
        self.require_undirected("get_move")?;
        Ok(self.move_or_unused(index))
    }

    #[inline]
    fn move_or_unused(&self, index: i32) -> i32 {
        if self.cell_index_in_range(index) {
            self.moves()[index as usize]
        } else {
            UNUSED
        }
    }
}

/// `board[index]` は `get_move` と同じ値を返す
///
/// # Panics
/// 有向盤面に対して呼ぶと panic する。回復したい場合は `get_move` を使うこと。
impl Index<i32> for Board {
    type Output = i32;

    fn index(&self, index: i32) -> &i32 {
        assert!(self.is_undirected(), "board[{index}] requires an undirected board");
        if self.cell_index_in_range(index) {
            &self.moves()[index as usize]
        } else {
            &UNUSED
        }
    }
}
