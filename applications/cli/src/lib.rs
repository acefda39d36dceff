//! Cadence CLI
//!
//! Terminal rendering layer for the playback store: a mock catalog, local
//! player controls and a line-oriented command loop.

pub mod catalog;
pub mod command;
pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod render;
pub mod session;

pub use error::{CliError, Result};
