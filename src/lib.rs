//! Common functionality for bincalc.
//!
//! bincalc calculates how many waste, recycling and organics bins a residential development needs
//! and how much floor space they take up. Start with [`registry::create_calculator`] for a single
//! development type or [`session::CalculatorSession`] to hold a calculator for every type.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod calculator;
pub mod cli;
pub mod development_type;
pub mod engine;
pub mod error;
pub mod input;
pub mod log;
pub mod output;
pub mod registry;
pub mod report;
pub mod session;
pub mod settings;
pub mod units;

#[cfg(test)]
mod fixture;

pub use calculator::{Calculator, InputField, Inputs};
pub use development_type::DevelopmentType;
pub use engine::{Results, compute};
pub use error::CalculatorError;
pub use registry::create_calculator;
pub use session::CalculatorSession;

/// Get config dir for program.
///
/// Falls back on the current directory if the platform has no config directory.
pub fn get_bincalc_config_dir() -> PathBuf {
    let Some(mut config_dir) = dirs::config_dir() else {
        return PathBuf::from(".");
    };
    config_dir.push("bincalc");

    config_dir
}
