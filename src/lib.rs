#![warn(clippy::all)]

mod board;
mod driver;
mod engine;
mod error;
mod render;
mod utils;

pub use board::{Board, CellState, TextGrid};
pub use driver::{run, RunOutcome};
pub use engine::{next_generation, transition, Simulation};
pub use error::{ConfigError, ParseError};
pub use render::{format_frame, Frame, MemoryRenderer, Renderer, TerminalRenderer, TITLE};
pub use utils::{Clock, Config, FpsLimiter, Unpaced};
