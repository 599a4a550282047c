//! 巡回（tour）・トーナメント（tourney）の判定
//!
//! - tour: 全マスをちょうど1回ずつ通る1本の閉路
//! - tourney: 全マスを覆う互いに素な閉路の集まり（全マスの次数がちょうど2）
//!
//! 判定はどれも失敗理由を区別せず、不正な構造には `false` を返す。

use serde::Serialize;

use super::{Board, MoveTables};

/// 盤面の要約
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardReport {
    pub width: usize,
    pub height: usize,
    pub directed: bool,
    /// 辺が1本以上接しているマスの数
    pub used_cells: usize,
    pub tour: bool,
    pub tourney: bool,
    /// tourney のときの閉路の数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycles: Option<usize>,
}

impl Board {
    /// 閉じたナイトの巡回（1本の閉路）かどうか
    ///
    /// マス0から、直前のマスに戻らない側のスロットを選びながら最大 n 歩辿り、
    /// ちょうど n マス訪れてマス0に戻れば `true`。
    /// 無向盤面で直前のマスに戻ろうとした場合は向きが揃っていないので `false`。
    pub fn is_tour(&self) -> bool {
        let n = self.size();
        if n == 0 {
            return false;
        }
        let moves = self.tables.primary();
        let back_moves = self.tables.secondary();

        let mut prev = 0i32;
        let mut cur = moves[0];
        let mut count = 1usize;

        while count < n && self.cell_index_in_range(cur) && cur != 0 {
            let dest = moves[cur as usize];
            let next = if dest == prev {
                match back_moves {
                    Some(back_moves) => back_moves[cur as usize],
                    None => return false,
                }
            } else {
                dest
            };
            prev = cur;
            cur = next;
            count += 1;
        }

        count == n && cur == 0
    }

    /// tourney（全マスの次数が2）かどうか
    ///
    /// 無向盤面では主表の各辺で両端の次数を、有向盤面では主表・副表の各値の行き先の次数を数える。
    /// 盤外を指す値（`UNUSED` を含む）が1つでもあれば `false`。
    pub fn is_tourney(&self) -> bool {
        if self.size() == 0 {
            return false;
        }
        match self.degrees() {
            Some(degrees) => degrees.iter().all(|&d| d == 2),
            None => false,
        }
    }

    /// tourney の閉路の数（tourney でなければ `None`）
    pub fn cycle_count(&self) -> Option<usize> {
        if !self.is_tourney() {
            return None;
        }
        let neighbours = self.neighbours();
        let n = self.size();
        let mut visited = vec![false; n];
        let mut cycles = 0;

        for start in 0..n {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut prev = start;
            let mut cur = start;
            loop {
                visited[cur] = true;
                let [a, b] = neighbours[cur];
                let next = if a != prev || cur == start { a } else { b };
                prev = cur;
                cur = next;
                if cur == start {
                    break;
                }
            }
        }
        Some(cycles)
    }

    /// 盤面の要約を作る
    pub fn report(&self) -> BoardReport {
        let used_cells = match &self.tables {
            MoveTables::Undirected { moves } => {
                let mut used = vec![false; self.size()];
                for (i, &m) in moves.iter().enumerate() {
                    if self.cell_index_in_range(m) {
                        used[i] = true;
                        used[m as usize] = true;
                    }
                }
                used.iter().filter(|&&u| u).count()
            }
            MoveTables::Directed { moves, back_moves } => moves
                .iter()
                .zip(back_moves.iter())
                .filter(|&(&a, &b)| self.cell_index_in_range(a) || self.cell_index_in_range(b))
                .count(),
        };

        BoardReport {
            width: self.width,
            height: self.height,
            directed: self.is_directed(),
            used_cells,
            tour: self.is_tour(),
            tourney: self.is_tourney(),
            cycles: self.cycle_count(),
        }
    }

    /// 各マスの次数（盤外を指す値があれば `None`）
    fn degrees(&self) -> Option<Vec<u32>> {
        let mut degrees = vec![0u32; self.size()];
        match &self.tables {
            MoveTables::Undirected { moves } => {
                for (i, &m) in moves.iter().enumerate() {
                    if !self.cell_index_in_range(m) {
                        return None;
                    }
                    degrees[i] += 1;
                    degrees[m as usize] += 1;
                }
            }
            MoveTables::Directed { moves, back_moves } => {
                for (&a, &b) in moves.iter().zip(back_moves.iter()) {
                    if !self.cell_index_in_range(a) || !self.cell_index_in_range(b) {
                        return None;
                    }
                    degrees[a as usize] += 1;
                    degrees[b as usize] += 1;
                }
            }
        }
        Some(degrees)
    }

    /// tourney の各マスの隣接2マス
    ///
    /// `is_tourney()` が成り立っていることを前提とする。
    fn neighbours(&self) -> Vec<[usize; 2]> {
        match &self.tables {
            MoveTables::Undirected { moves } => {
                let mut adj: Vec<Vec<usize>> = vec![Vec::with_capacity(2); self.size()];
                for (i, &m) in moves.iter().enumerate() {
                    adj[i].push(m as usize);
                    adj[m as usize].push(i);
                }
                adj.into_iter().map(|v| [v[0], v[1]]).collect()
            }
            MoveTables::Directed { moves, back_moves } => moves
                .iter()
                .zip(back_moves.iter())
                .map(|(&a, &b)| [a as usize, b as usize])
                .collect(),
        }
    }
}
