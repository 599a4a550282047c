//! 手の挿入・削除
//!
//! 無向盤面は1辺につき1スロット、有向盤面は1辺につき両端の2スロットを使う。
//! 挿入・削除はどちらも「全部書くか、何も書かないか」で、失敗時に移動表を途中まで
//! 書き換えたまま返すことはない。

use super::{Board, MoveTables};
use crate::error::{BoardError, BoardResult};
use crate::types::UNUSED;

/// 有向盤面のスロット位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Primary,
    Secondary,
}

impl Slot {
    /// 主表→副表の順に空きスロットを探す
    #[inline]
    fn free(moves: &[i32], back_moves: &[i32], cell: usize) -> Option<Slot> {
        if moves[cell] < 0 {
            Some(Slot::Primary)
        } else if back_moves[cell] < 0 {
            Some(Slot::Secondary)
        } else {
            None
        }
    }

    #[inline]
    fn set(self, moves: &mut [i32], back_moves: &mut [i32], cell: usize, value: i32) {
        match self {
            Slot::Primary => moves[cell] = value,
            Slot::Secondary => back_moves[cell] = value,
        }
    }
}

impl Board {
    /// 無向の手 {src, dest} を記録する（無向盤面のみ）
    ///
    /// `src` のスロットが空いていれば `src` に、そうでなければ `dest` のスロットに書く。
    /// 両方埋まっていれば `Ok(false)`。成功時に書き換わるスロットはちょうど1つ。
    pub fn insert_undirected_move(&mut self, src: i32, dest: i32) -> BoardResult<bool> {
        self.require_undirected("insert_undirected_move")?;
        let s = self.require_cell(src)?;
        let d = self.require_cell(dest)?;

        let MoveTables::Undirected { moves } = &mut self.tables else {
            return Err(BoardError::NotUndirected {
                op: "insert_undirected_move",
            });
        };

        if moves[s] < 0 {
            moves[s] = dest;
        } else if moves[d] < 0 {
            moves[d] = src;
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// 有向の手 src→dest を記録する（有向盤面のみ）
    ///
    /// `src` 側に dest、`dest` 側に src を、それぞれ主表→副表の順で空いている方に書く。
    /// どちらかの端に空きがなければ何も書かずに `Ok(false)`。
    pub fn insert_directed_move(&mut self, src: i32, dest: i32) -> BoardResult<bool> {
        let s = self.require_cell(src)?;
        let d = self.require_cell(dest)?;

        let MoveTables::Directed { moves, back_moves } = &mut self.tables else {
            return Err(BoardError::NotDirected {
                op: "insert_directed_move",
            });
        };

        let Some(src_slot) = Slot::free(moves, back_moves, s) else {
            return Ok(false);
        };
        src_slot.set(moves, back_moves, s, dest);

        // src == dest のときは src 側で埋めたスロットを考慮して探す
        let Some(dest_slot) = Slot::free(moves, back_moves, d) else {
            src_slot.set(moves, back_moves, s, UNUSED);
            return Ok(false);
        };
        dest_slot.set(moves, back_moves, d, src);
        Ok(true)
    }

    /// 手 {src, dest} を削除する（無向・有向どちらでも可）
    ///
    /// 手が記録されていなければ何もせずに `false`。
    /// 記録されていれば、両端のスロットのうち相手を指しているものをすべて `UNUSED` に戻す。
    pub fn delete_move(&mut self, src: i32, dest: i32) -> bool {
        if !self.is_move(src, dest) {
            return false;
        }
        let (s, d) = (src as usize, dest as usize);

        match &mut self.tables {
            MoveTables::Undirected { moves } => {
                unlink(moves, s, d);
            }
            MoveTables::Directed { moves, back_moves } => {
                unlink(moves, s, d);
                unlink(back_moves, s, d);
            }
        }
        true
    }

    /// 手 {i, j} が記録されているか（無向・有向どちらでも可）
    ///
    /// 最大4スロット（主表・副表 × 両端）のどれかが相手を指していれば `true`。
    /// 無向盤面には副表がないので主表だけを見る。
    pub fn is_move(&self, i: i32, j: i32) -> bool {
        if !self.cell_index_in_range(i) || !self.cell_index_in_range(j) {
            return false;
        }
        let links = |table: &[i32]| table[i as usize] == j || table[j as usize] == i;
        links(self.tables.primary()) || self.tables.secondary().is_some_and(links)
    }
}

/// 表中の s→d, d→s の記録を消す
#[inline]
fn unlink(table: &mut [i32], s: usize, d: usize) {
    if table[s] == d as i32 {
        table[s] = UNUSED;
    }
    if table[d] == s as i32 {
        table[d] = UNUSED;
    }
}
