// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod delta;
pub mod ranking;
pub mod runner;
pub mod store;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
