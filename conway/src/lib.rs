//! Conway's Game of Life on a torus, with the interaction loop that drives it.
//!
//! The crate holds everything except drawing: the grid, the B3/S23
//! transition, save/load, mapping raw input to actions, and a paced loop
//! over a [`Frontend`] that a windowing layer implements.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod rules;
pub mod simulation;
pub mod snapshot;

pub use config::Config;
pub use driver::{Frontend, Pacer, frame, run};
pub use error::{ConfigError, PersistError};
pub use grid::Grid;
pub use input::{Action, InputEvent, Key, PointerButton};
pub use layout::{Hit, Layout, PixelRect};
pub use simulation::{LoopState, Simulation};
pub use snapshot::Snapshot;
