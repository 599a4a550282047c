//! 部分盤面への合成
//!
//! 小さな巡回・tourney の盤面を大きな盤面の一部に敷き詰めるために使う。

use super::Board;
use crate::error::{BoardError, BoardResult};

impl Board {
    /// 無向盤面 `other` をこの盤面の (x0, y0) を左上とする領域にコピーする
    ///
    /// `other` の各手の両端を (x0, y0) だけずらし、この盤面の向きに応じて
    /// `insert_directed_move` / `insert_undirected_move` で挿入する。
    /// 記録のないマスは飛ばし、挿入の衝突は警告して飛ばす。挿入できた手の数を返す。
    pub fn copy_to_sub_board(&mut self, other: &Board, x0: i32, y0: i32) -> BoardResult<usize> {
        if other.is_directed() {
            return Err(BoardError::SourceDirected);
        }

        let (bw, bh) = (other.cols(), other.rows());
        let fits = |origin: i32, len: i32, limit: i32| {
            origin >= 0 && origin.checked_add(len).is_some_and(|end| end <= limit)
        };
        if !fits(x0, bw, self.cols()) || !fits(y0, bh, self.rows()) {
            return Err(BoardError::SubBoardOutOfBounds {
                x0,
                y0,
                width: other.width,
                height: other.height,
            });
        }

        let directed = self.is_directed();
        let mut inserted = 0usize;

        for (bsrc, &bdest) in other.moves().iter().enumerate() {
            if !other.cell_index_in_range(bdest) {
                continue;
            }
            let (bsrcx, bsrcy) = other.coords(bsrc as i32);
            let (bdestx, bdesty) = other.coords(bdest);

            let src = self.index_of(bsrcx + x0, bsrcy + y0);
            let dest = self.index_of(bdestx + x0, bdesty + y0);

            let ok = if directed {
                self.insert_directed_move(src, dest)?
            } else {
                self.insert_undirected_move(src, dest)?
            };

            if ok {
                inserted += 1;
            } else {
                log::warn!("copy_to_sub_board: cells {src} and {dest} are already full, move skipped");
            }
        }

        log::debug!(
            "copy_to_sub_board: {}x{} at ({x0}, {y0}), {inserted} move(s)",
            other.width,
            other.height
        );
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNUSED;

    /// 2x2 の輪 0→1→3→2→0（ナイトの手ではない）
    fn ring2x2() -> Board {
        Board::from_moves(&[1, 3, 0, 2], 2, 2).unwrap()
    }

    #[test]
    fn test_copy_translates_moves() {
        let mut board = Board::new(4, 4).unwrap();
        assert_eq!(board.copy_to_sub_board(&ring2x2(), 2, 2).unwrap(), 4);
        // (2,2)=10, (3,2)=11, (2,3)=14, (3,3)=15
        assert!(board.is_move(10, 11));
        assert!(board.is_move(11, 15));
        assert!(board.is_move(15, 14));
        assert!(board.is_move(14, 10));
        assert_eq!(board[0], UNUSED);
    }

    #[test]
    fn test_copy_into_directed_board() {
        let mut board = Board::new(4, 2).unwrap();
        board.make_directed();
        assert_eq!(board.copy_to_sub_board(&ring2x2(), 0, 0).unwrap(), 4);
        assert_eq!(board.copy_to_sub_board(&ring2x2(), 2, 0).unwrap(), 4);
        assert!(board.is_directed());
        assert!(board.is_tourney());
        assert_eq!(board.cycle_count(), Some(2));
    }

    #[test]
    fn test_copy_skips_unused_and_conflicts() {
        let mut source = Board::new(2, 2).unwrap();
        source.insert_undirected_move(0, 3).unwrap();

        let mut board = Board::new(4, 4).unwrap();
        assert_eq!(board.copy_to_sub_board(&source, 0, 0).unwrap(), 1);
        assert_eq!(board.moves().iter().filter(|&&m| m != UNUSED).count(), 1);

        // 同じ手をもう一度: 0 は埋まっているので 5 側に入る
        assert_eq!(board.copy_to_sub_board(&source, 0, 0).unwrap(), 1);
        // 三度目は両端とも埋まっている
        assert_eq!(board.copy_to_sub_board(&source, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_copy_rejects_bad_source_or_offset() {
        let mut board = Board::new(4, 4).unwrap();
        assert!(matches!(
            board.copy_to_sub_board(&ring2x2(), 3, 0),
            Err(BoardError::SubBoardOutOfBounds { x0: 3, y0: 0, .. })
        ));
        assert!(matches!(
            board.copy_to_sub_board(&ring2x2(), 0, -1),
            Err(BoardError::SubBoardOutOfBounds { .. })
        ));
        // 端の計算が桁あふれしても範囲外として扱う
        assert!(matches!(
            board.copy_to_sub_board(&ring2x2(), i32::MAX, 0),
            Err(BoardError::SubBoardOutOfBounds { x0: i32::MAX, y0: 0, .. })
        ));
        assert!(matches!(
            board.copy_to_sub_board(&ring2x2(), 0, i32::MAX),
            Err(BoardError::SubBoardOutOfBounds { .. })
        ));

        let mut directed = ring2x2();
        directed.make_directed();
        assert!(matches!(
            board.copy_to_sub_board(&directed, 0, 0),
            Err(BoardError::SourceDirected)
        ));
        assert!(board.moves().iter().all(|&m| m == UNUSED));
    }
}
