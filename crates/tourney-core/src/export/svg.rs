//! SVG 形式での書き出し
//!
//! 盤面の枠と罫線、各手を結ぶ線分と始点の丸を描く。
//! 行0が一番下に来るように y 軸を反転する。ベクタ形式なので拡大しても粗くならないが、
//! 大きな盤面ではファイルが大きくなるためマス目を縮小する。

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::num::num_string;
use crate::board::Board;
use crate::error::BoardResult;

/// 縮小前のマス目の大きさ
pub const DEFAULT_CELL_SIZE: f32 = 32.0;

/// 周囲の余白
const MARGIN: u32 = 4;

/// SVG 書き出しの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    /// 縮小前のマス目の大きさ
    pub cell_size: f32,
    /// 縮小率（未指定なら盤面サイズから決める）
    pub scale: Option<f32>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            cell_size: DEFAULT_CELL_SIZE,
            scale: None,
        }
    }
}

impl SvgOptions {
    /// 盤面に対する縮小率
    pub fn scale_for(&self, size: usize) -> f32 {
        self.scale.unwrap_or_else(|| default_scale(size))
    }
}

/// マス数に応じた既定の縮小率
pub fn default_scale(size: usize) -> f32 {
    if size > 100_000 {
        0.01
    } else if size > 16_384 {
        0.125
    } else if size > 1024 {
        0.25
    } else {
        0.5
    }
}

/// SVG を書き出す（無向盤面のみ）
pub fn write_svg<W: Write + ?Sized>(board: &Board, options: &SvgOptions, out: &mut W) -> BoardResult<()> {
    board.require_undirected("write_svg")?;

    let w = board.width() as i32;
    let h = board.height() as i32;

    let scale = options.scale_for(board.size());
    let cell = scale * options.cell_size;
    let spot = cell / 6.0;
    let stroke = 2.0 * scale;

    let sw = (w as f32 * cell).ceil() as u32;
    let sh = (h as f32 * cell).ceil() as u32;

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg width="{vw}" height="{vh}" viewBox="-{MARGIN} -{MARGIN} {vw} {vh}" xmlns="http://www.w3.org/2000/svg">"#,
        vw = sw + 2 * MARGIN,
        vh = sh + 2 * MARGIN,
    )?;
    writeln!(
        out,
        "<style>circle{{fill:black;r:{spot:.1}}}line{{stroke:black;stroke-width:{:.1}}}</style>",
        2.0 * stroke
    )?;

    // 盤面
    writeln!(
        out,
        r#"<rect width="{sw}" height="{sh}" style="fill:white;stroke:black;stroke-width:{}"/>"#,
        num_string(stroke)
    )?;

    let grid = format!(r#"style="stroke-width:{}""#, num_string(stroke));
    for i in 1..h {
        let y = num_string(i as f32 * cell);
        writeln!(
            out,
            r#"<line x1="0" y1="{y}" x2="{}" y2="{y}" {grid}/>"#,
            num_string(w as f32 * cell)
        )?;
    }
    for i in 1..w {
        let x = num_string(i as f32 * cell);
        writeln!(
            out,
            r#"<line x1="{x}" y1="0" x2="{x}" y2="{}" {grid}/>"#,
            num_string(h as f32 * cell)
        )?;
    }

    // 手
    let moves = board.moves();
    for x in 0..w {
        for y in 0..h {
            let src = y * w + x;
            let dest = moves[src as usize];
            if !board.cell_index_in_range(dest) {
                continue;
            }
            let (dx, dy) = board.coords(dest);

            let srcx = num_string((x as f32 + 0.5) * cell);
            let srcy = num_string(((h - 1 - y) as f32 + 0.5) * cell);
            let destx = num_string((dx as f32 + 0.5) * cell);
            let desty = num_string(((h - 1 - dy) as f32 + 0.5) * cell);

            writeln!(out, r#"<line x1="{srcx}" y1="{srcy}" x2="{destx}" y2="{desty}"/>"#)?;
            writeln!(out, r#"<circle cx="{srcx}" cy="{srcy}"/>"#)?;
        }
    }

    writeln!(out, "</svg>")?;
    Ok(())
}

/// SVG を文字列にする（無向盤面のみ）
pub fn render_svg(board: &Board, options: &SvgOptions) -> BoardResult<String> {
    let mut buf = Vec::new();
    write_svg(board, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
