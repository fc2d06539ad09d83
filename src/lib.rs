//! Grid-based snake game.
//!
//! The library half owns all game logic: the grid/entity model, the
//! collision and growth resolver, the throttled tick clock, and the session
//! state machine with injected high-score persistence. The binary half
//! (`main.rs`, `renderer`, `ui`) is a thin ratatui presentation layer that
//! consumes immutable [`session::Snapshot`]s and never feeds logic back in.

pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod score;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
