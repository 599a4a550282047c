//! ナイトの巡回・tourney 盤面のコマンドラインツール
//!
//! 盤面はテキスト形式（1マス1文字の移動インデックス）で読み書きする。
//!
//! ```shell
//! tourney check board.txt --json
//! tourney svg board.txt -o board.svg
//! tourney tile tourney4x4.txt --cols 2 --rows 2 -o tourney8x8.txt
//! tourney roundtrip board.txt -o canonical.txt
//! ```

mod config;
mod io;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser as _;
use tourney_core::{Board, write_move_text, write_svg};

use crate::config::CliConfig;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(clap::Parser, Debug)]
#[command(name = "tourney", version, about = "Check, tile and render knight's tour boards")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Report whether a board is a tour or a tourney (exit 1 if neither)
    Check {
        /// Board file ("-" for stdin)
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a board as SVG
    Svg {
        /// Board file ("-" for stdin)
        file: PathBuf,

        /// Output file ("-" for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },

    /// Tile copies of a board into a larger board
    Tile {
        /// Board file ("-" for stdin)
        file: PathBuf,

        /// Number of copies across
        #[arg(long, default_value_t = 2)]
        cols: usize,

        /// Number of copies down
        #[arg(long, default_value_t = 2)]
        rows: usize,

        /// Output file ("-" for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },

    /// Convert to a directed board and back, reorienting every cycle
    Roundtrip {
        /// Board file ("-" for stdin)
        file: PathBuf,

        /// Write the reoriented board here ("-" for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Check { file, json } => check(&file, json),
        Command::Svg { file, output } => {
            let board = io::read_board(&file)?;
            io::write_output(&output, |out| {
                write_svg(&board, &config.svg, out).context("failed to render SVG")
            })?;
            log::info!("wrote SVG to {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Tile { file, cols, rows, output } => {
            let tile = io::read_board(&file)?;
            let board = tile_board(&tile, cols, rows)?;
            write_board(&board, &output)?;
            log::info!("wrote {}x{} board to {}", board.width(), board.height(), output.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Roundtrip { file, output } => roundtrip(&file, output.as_deref()),
    }
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

fn check(file: &Path, json: bool) -> Result<ExitCode> {
    let board = io::read_board(file)?;
    let report = board.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("size:    {}x{}", report.width, report.height);
        println!("used:    {}/{}", report.used_cells, board.size());
        println!("tour:    {}", report.tour);
        println!("tourney: {}", report.tourney);
        if let Some(cycles) = report.cycles {
            println!("cycles:  {cycles}");
        }
    }

    Ok(if report.tour || report.tourney {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `tile` を `cols` x `rows` 個並べた盤面を作る
fn tile_board(tile: &Board, cols: usize, rows: usize) -> Result<Board> {
    if cols == 0 || rows == 0 {
        bail!("--cols and --rows must be at least 1");
    }
    let width = tile.width().checked_mul(cols).context("board width overflow")?;
    let height = tile.height().checked_mul(rows).context("board height overflow")?;
    let mut board = Board::new(width, height)?;

    for row in 0..rows {
        for col in 0..cols {
            let x0 = i32::try_from(col * tile.width())?;
            let y0 = i32::try_from(row * tile.height())?;
            board.copy_to_sub_board(tile, x0, y0)?;
        }
    }
    Ok(board)
}

fn roundtrip(file: &Path, output: Option<&Path>) -> Result<ExitCode> {
    let mut board = io::read_board(file)?;

    board.make_directed();
    if !board.make_undirected() {
        log::warn!("{} is not a tourney, cycles were not reoriented", file.display());
        println!("tourney: false");
        return Ok(ExitCode::FAILURE);
    }
    println!("tourney: {}", board.is_tourney());
    log::info!("reoriented {} cycle(s)", board.cycle_count().unwrap_or(0));

    if let Some(output) = output {
        write_board(&board, output)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn write_board(board: &Board, output: &Path) -> Result<()> {
    io::write_output(output, |out| write_move_text(board, out).context("failed to write board"))
}
