//! Renders a GitHub-style contribution grid as an animated space-shooter:
//! one enemy per non-empty cell, a ship that sweeps the columns under a
//! pluggable targeting strategy, and a lazy stream of RGBA frames fed to an
//! output encoder.

pub mod animator;
pub mod config;
pub mod console;
pub mod entities;
pub mod error;
pub mod game;
pub mod graph;
pub mod output;
pub mod raster;
pub mod render;
pub mod strategy;

pub use animator::{Animator, FrameStream};
pub use config::SimConfig;
pub use error::{Error, Result};
pub use game::GameState;
pub use graph::ContributionGraph;
pub use strategy::{strategy_from_name, Action, Strategy};
