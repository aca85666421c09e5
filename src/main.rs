//! Katamino board runner (default binary).
//!
//! Builds a board, optionally replays a TOML play script against it, and prints the
//! result as text or as a JSON snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use katamino::core::Grid;
use katamino::engine::Session;
use katamino::script::{validate_cell_size, PlayScript};
use katamino::types::{BoardSize, TILE_COUNT};

#[derive(Parser)]
#[command(name = "katamino", about = "Replay pentomino placements on a Katamino board")]
struct Cli {
    /// Playable board size as HEIGHTxWIDTH (overrides the script's size)
    #[arg(short, long, env = "KATAMINO_SIZE")]
    size: Option<BoardSize>,

    /// Path to a TOML play script
    #[arg(long)]
    script: Option<PathBuf>,

    /// Cell size in points for drop steps (overrides the script's cell size, default 40)
    #[arg(long, value_parser = parse_cell_size)]
    cell_size: Option<f64>,

    /// Print the final board as a JSON snapshot
    #[arg(long)]
    json: bool,
}

fn parse_cell_size(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    validate_cell_size(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let script = match &cli.script {
        Some(path) => Some(
            PlayScript::load(path)
                .with_context(|| format!("loading script {}", path.display()))?,
        ),
        None => None,
    };

    let script_size = match &script {
        Some(s) => s.board_size().context("script size")?,
        None => None,
    };
    let size = cli.size.or(script_size).unwrap_or_default();

    let mut session = Session::new(size);
    tracing::info!(%size, "board created");

    if let Some(script) = &script {
        let applied = script
            .run(&mut session, cli.cell_size)
            .context("running script")?;
        tracing::info!(steps = applied, "script applied");
    }

    if cli.json {
        let snapshot = session.board().snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", session.board().render_text());
        println!(
            "placed {}/{}, {}",
            session.board().placed_count(),
            TILE_COUNT,
            if session.is_solved() { "solved" } else { "unsolved" }
        );
    }

    Ok(())
}
