//! Command line front end for NAD address point normalization.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
