//! Command implementations
//!
//! Each command is an `impl Viewer` block that runs the engine and writes
//! to the viewer's output:
//!
//! - `compare`: Compare two files and print the annotated rows
//! - `stat`: Summary counts of added, removed and unchanged lines

pub mod compare;
pub mod stat;
