//! Core engine: the company executor and the multi-round runner.

pub mod company;
pub mod runner;

pub use company::Company;
pub use runner::{RoundReport, SimulationReport, SimulationRunner};
