//! Grid snake: a tick-driven snake engine with a terminal front end.
//!
//! The engine (`grid`, `snake`, `food`, `game`) has no I/O; `session`,
//! `renderer`, `ui` and `terminal_runtime` adapt it to a crossterm terminal.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ticker;
pub mod ui;
