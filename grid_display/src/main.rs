// main.rs - Windowed Conway's Game of Life
// Space pauses, S saves, L loads, clicks toggle cells, the green button steps.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use conway::{Config, Pacer, Simulation};

mod ui;

#[derive(Parser, Debug)]
#[command(name = "grid_display", version, about = "Interactive Conway's Game of Life")]
struct Args {
    /// Window width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Window height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Number of cell columns.
    #[arg(long, default_value_t = 40)]
    cells_x: usize,
    /// Number of cell rows.
    #[arg(long, default_value_t = 30)]
    cells_y: usize,
    /// Milliseconds between generations.
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,
    /// Probability that a cell starts alive.
    #[arg(long, default_value_t = 0.2)]
    density: f64,
    /// Seed for the initial grid (random if omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// File used by the save (S) and load (L) keys.
    #[arg(long, default_value = conway::snapshot::DEFAULT_STATE_PATH)]
    state_file: PathBuf,
    /// Start paused.
    #[arg(long)]
    paused: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            window_width: args.width,
            window_height: args.height,
            cells_x: args.cells_x,
            cells_y: args.cells_y,
            tick_interval: Duration::from_millis(args.tick_ms),
            density: args.density,
            seed: args.seed,
            state_path: args.state_file,
            start_paused: args.paused,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    let sim = Simulation::new(&config).context("invalid configuration")?;
    log::info!(
        "Starting {}x{} grid in a {}x{} window, tick {:?}, state file {}",
        config.cells_x,
        config.cells_y,
        config.window_width,
        config.window_height,
        config.tick_interval,
        config.state_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    let pacer = Pacer::new(config.tick_interval, Instant::now());
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(ui::GridDisplay::new(sim, pacer))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_config() {
        let args = Args::parse_from(["grid_display"]);
        assert_eq!(Config::from(args), Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "grid_display",
            "--cells-x",
            "10",
            "--tick-ms",
            "250",
            "--seed",
            "9",
            "--state-file",
            "board.json",
            "--paused",
        ]);
        let config = Config::from(args);
        assert_eq!(config.cells_x, 10);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.state_path, PathBuf::from("board.json"));
        assert!(config.start_paused);
    }
}
