//! 無向盤面と有向盤面の相互変換

use super::{Board, MoveTables};
use crate::types::UNUSED;

impl Board {
    /// 無向盤面かどうか（副表を持たない）
    #[inline]
    pub fn is_undirected(&self) -> bool {
        matches!(self.tables, MoveTables::Undirected { .. })
    }

    /// 有向盤面かどうか（副表を持つ）
    #[inline]
    pub fn is_directed(&self) -> bool {
        !self.is_undirected()
    }

    /// 有向盤面にする
    ///
    /// 副表を `UNUSED` で作り、主表の各辺 i→m[i] を副表に逆向き m2[m[i]] = i として書く。
    /// 主表が一方向に揃った閉路なら、主表が次のマス、副表が前のマスを指すことになる。
    /// すでに有向なら何もしない。
    pub fn make_directed(&mut self) {
        let size = self.size();
        let MoveTables::Undirected { moves } = &mut self.tables else {
            return;
        };

        let moves = std::mem::take(moves);
        let mut back_moves = vec![UNUSED; size].into_boxed_slice();
        for (i, &m) in moves.iter().enumerate() {
            if 0 <= m && (m as usize) < size {
                back_moves[m as usize] = i as i32;
            }
        }
        self.tables = MoveTables::Directed { moves, back_moves };
    }

    /// 無向盤面にする
    ///
    /// 有向盤面が tourney（全マス次数2）のときだけ変換し `true` を返す。
    /// 各閉路を未処理のマスから辿り直し、直前のマスに戻らない側のスロットを選びながら
    /// `temp[prev] = cur` を書いていくことで、閉路ごとに一方向へ揃った主表を作る。
    /// 閉路がいくつあっても1パスで処理する。それ以外の場合は何もせず `false`。
    pub fn make_undirected(&mut self) -> bool {
        if self.is_undirected() || !self.is_tourney() {
            return false;
        }
        let MoveTables::Directed { moves, back_moves } = &self.tables else {
            return false;
        };

        let mut temp = vec![UNUSED; self.size()].into_boxed_slice();
        let mut cycles = 0usize;

        for start in 0..self.size() {
            if temp[start] != UNUSED {
                continue;
            }
            cycles += 1;

            let start = start as i32;
            let mut prev = start;
            let mut cur = moves[start as usize];

            while self.cell_index_in_range(cur) && cur != start {
                temp[prev as usize] = cur;
                let next = next_on_cycle(moves, back_moves, prev, cur);
                prev = cur;
                cur = next;
            }

            if self.cell_index_in_range(prev) && self.cell_index_in_range(cur) {
                temp[prev as usize] = cur;
            }
        }

        log::debug!(
            "make_undirected: {}x{} board, {} cycle(s)",
            self.width,
            self.height,
            cycles
        );
        self.tables = MoveTables::Undirected { moves: temp };
        true
    }
}

/// 閉路上で prev→cur と来たときの次のマス
///
/// cur の主表が prev を指していれば副表側、そうでなければ主表側へ進む。
#[inline]
fn next_on_cycle(moves: &[i32], back_moves: &[i32], prev: i32, cur: i32) -> i32 {
    let c = cur as usize;
    if moves[c] == prev { back_moves[c] } else { moves[c] }
}
