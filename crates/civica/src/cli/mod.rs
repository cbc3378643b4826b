//! Command-line interface for the municipal services application

pub mod commands;
pub mod display;
