//! 盤面ファイルの入出力（パス `-` は標準入出力）

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tourney_core::{Board, read_move_text};

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// テキスト形式の盤面を読み込む
pub fn read_board(path: &Path) -> Result<Board> {
    let board = if is_stdio(path) {
        read_move_text(&mut io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        read_move_text(&mut BufReader::new(file))
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;

    log::debug!("read {}x{} board from {}", board.width(), board.height(), path.display());
    Ok(board)
}

/// `path` に書き出す
///
/// `write` が成功したときだけ出力をフラッシュし、ファイルの書き込みエラーも返す。
pub fn write_output<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    if is_stdio(path) {
        let mut out = io::stdout().lock();
        write(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(&mut out)?;
    out.into_inner()
        .map_err(|e| e.into_error())
        .and_then(|mut file| file.flush())
        .with_context(|| format!("failed to write {}", path.display()))
}
