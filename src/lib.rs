//! # robot-grid
//!
//! A discrete motion engine for robots on a bounded 2D grid.
//!
//! A [`Robot`] holds a position and a compass [`Orientation`]. Applying a [`Command`]
//! turns it or advances it one cell; advances that would leave the [`Grid`] are
//! discarded rather than reported as errors. The [`CommandInterpreter`] sits in front
//! of the engine and decodes external command input, silently dropping anything it
//! does not recognise.

pub mod grid;
pub mod interpreter;
pub mod robot;

pub use grid::*;
pub use interpreter::*;
pub use robot::*;
