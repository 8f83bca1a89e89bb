//! Comparison coordinators
//!
//! This module contains the stateful parts of the tool:
//!
//! - `config`: `.gdiff.toml` settings
//! - `engine`: Configured engine that runs comparisons
//! - `source`: Reading inputs into ordered line lists
//! - `viewer`: Engine plus output writer used by the commands

pub mod config;
pub mod engine;
pub mod source;
pub mod viewer;
