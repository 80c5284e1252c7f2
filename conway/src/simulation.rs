// simulation.rs - Owned simulator state and the actions that mutate it

use std::mem;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::error::{ConfigError, PersistError};
use crate::grid::Grid;
use crate::input::{Action, InputEvent, map_event};
use crate::layout::Layout;
use crate::rules;
use crate::snapshot::{self, Snapshot};

/// Where the simulation loop currently is. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    RunningUnpaused,
    RunningPaused,
    Stopped,
}

/// One simulator instance: the grid, its double buffer, and the run flags.
///
/// Nothing here is global; build as many as you like, each is independent.
pub struct Simulation {
    current: Grid,
    next: Grid,
    layout: Layout,
    running: bool,
    paused: bool,
    generation: u64,
    state_path: PathBuf,
}

impl Simulation {
    /// Validate `config` and seed a random grid from it.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::random(config.cells_x, config.cells_y, config.density, &mut rng);
        log::debug!(
            "Seeded {}x{} grid with {} live cells",
            config.cells_x,
            config.cells_y,
            grid.population()
        );
        Self::with_grid(config, grid)
    }

    /// Start from a given grid; its dimensions override the configured cell counts.
    pub fn with_grid(config: &Config, grid: Grid) -> Result<Self, ConfigError> {
        let config = Config {
            cells_x: grid.width(),
            cells_y: grid.height(),
            ..config.clone()
        };
        config.validate()?;

        Ok(Self {
            next: Grid::new(grid.width(), grid.height()),
            current: grid,
            layout: config.layout(),
            running: true,
            paused: config.start_paused,
            generation: 0,
            state_path: config.state_path,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    pub fn state(&self) -> LoopState {
        match (self.running, self.paused) {
            (false, _) => LoopState::Stopped,
            (true, true) => LoopState::RunningPaused,
            (true, false) => LoopState::RunningUnpaused,
        }
    }

    /// Compute one generation into the back buffer and swap it in.
    pub fn advance(&mut self) {
        rules::step_into(&self.current, &mut self.next);
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        log::trace!(
            "Generation {} population {}",
            self.generation,
            self.current.population()
        );
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        self.current.toggle(x, y)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("Simulation {}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn quit(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Stopping after generation {}", self.generation);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            game_state: self.current.clone(),
            paused: self.paused,
        }
    }

    /// Replace grid and pause flag wholesale. A snapshot of a different
    /// shape is refused and nothing changes.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), PersistError> {
        let expected = self.current.dimensions();
        let found = snapshot.game_state.dimensions();
        if found != expected {
            return Err(PersistError::ShapeMismatch { expected, found });
        }
        self.current = snapshot.game_state;
        self.paused = snapshot.paused;
        self.generation = 0;
        Ok(())
    }

    /// Save to the configured state file.
    pub fn save_state(&self) -> Result<(), PersistError> {
        snapshot::save(&self.state_path, &self.snapshot())
    }

    /// Load from the configured state file.
    pub fn load_state(&mut self) -> Result<(), PersistError> {
        let loaded = snapshot::load(&self.state_path)?;
        self.restore(loaded)
    }

    /// Apply one action. Save/load failures are logged and leave state as it was.
    ///
    /// Once stopped only `Save` and `Load` still take effect; neither can
    /// bring the loop back.
    pub fn apply(&mut self, action: Action) {
        if !self.running && !matches!(action, Action::Save | Action::Load) {
            return;
        }
        match action {
            Action::Quit => self.quit(),
            Action::Step => {
                self.advance();
                log::debug!("Manual step to generation {}", self.generation);
            }
            Action::ToggleCell { x, y } => {
                if !self.toggle_cell(x, y) {
                    log::warn!("Ignoring toggle outside the grid at ({x}, {y})");
                }
            }
            Action::TogglePause => self.toggle_pause(),
            Action::Save => match self.save_state() {
                Ok(()) => log::info!("Saved state to {}", self.state_path.display()),
                Err(e) => log::error!("Save failed: {e}"),
            },
            Action::Load => match self.load_state() {
                Ok(()) => log::info!("Loaded state from {}", self.state_path.display()),
                Err(e) => log::error!("Load failed: {e}"),
            },
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if let Some(action) = map_event(&self.layout, event) {
            self.apply(action);
        }
    }

    /// The non-rendering part of one loop iteration: apply every pending
    /// event, then auto-advance if still running and not paused.
    pub fn iterate<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_event(&event);
        }
        if self.state() == LoopState::RunningUnpaused {
            self.advance();
        }
    }
}
