//! 盤面操作のエラー型

/// 盤面操作のエラー
///
/// 挿入の衝突や存在しない手の削除は `Ok(false)` で返し、ここには含めない。
/// ここに並ぶのは呼び出し側の前提違反（モード違い・範囲外・サイズ不正）である。
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    /// マス数が奇数（閉じた巡回が存在し得ないため移動表を持てない）
    #[error("board size {width}x{height} is odd")]
    OddSize { width: usize, height: usize },

    /// マス数が `i32` で表せない
    #[error("board size {width}x{height} is too large")]
    TooLarge { width: usize, height: usize },

    /// 渡された移動表に盤外のマス番号がある
    #[error("move table entry {value} at cell {cell} is out of range")]
    MoveOutOfRange { cell: usize, value: i32 },

    /// 渡された移動表の長さが盤面サイズと一致しない
    #[error("move table length mismatch: expected {expected}, got {actual}")]
    TableLength { expected: usize, actual: usize },

    /// 無向盤面でのみ使える操作を有向盤面で呼んだ
    #[error("{op} requires an undirected board")]
    NotUndirected { op: &'static str },

    /// 有向盤面でのみ使える操作を無向盤面で呼んだ
    #[error("{op} requires a directed board")]
    NotDirected { op: &'static str },

    /// マス番号が盤外
    #[error("cell index {index} out of range (size {size})")]
    CellOutOfRange { index: i32, size: usize },

    /// 部分盤面のコピー元が有向盤面
    #[error("source board must be undirected")]
    SourceDirected,

    /// 部分盤面がコピー先の盤面からはみ出す
    #[error("sub-board {width}x{height} at ({x0}, {y0}) does not fit")]
    SubBoardOutOfBounds { x0: i32, y0: i32, width: usize, height: usize },

    /// 書き出し時のI/Oエラー
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// 盤面操作の結果型
pub type BoardResult<T> = Result<T, BoardError>;
