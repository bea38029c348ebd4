//! Confetti Core - Foundational types for the confetti crates
//!
//! This crate provides the types every other confetti crate depends on:
//! - `Rgba` and the fixed 12-entry stroke palette
//! - `ConfettiConfig` - runtime tuning knobs, TOML-loadable
//! - Error types and Result alias

mod color;
mod config;
mod error;

pub use color::{Rgba, PALETTE};
pub use config::ConfettiConfig;
pub use error::{ConfettiError, Result};
