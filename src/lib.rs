//! Simulation engine and terminal shell for a grid snake arcade game.
//!
//! The engine ([`game::GameState`]) owns all gameplay state and advances it
//! one discrete tick at a time from a set of symbolic input actions. The
//! surrounding modules decode keyboard events into those actions and draw
//! frames from the engine's read-only surface; neither direction leaks raw
//! key codes or terminal details into the simulation.

pub mod apple;
pub mod config;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
