//! Line-level text comparison with intra-line highlighting.
//!
//! The [`Engine`] aligns two line sequences, then pairs every replaced
//! block line by line and marks the token spans that differ inside each
//! pair. Results are plain data ([`ComparisonResult`]) that front-ends
//! render however they like.

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use areas::engine::{Engine, EngineOptions};
pub use areas::source::CompareError;
pub use artifacts::comparison::display_line::{DisplayLine, LineType};
pub use artifacts::comparison::filter::LineFilter;
pub use artifacts::comparison::result::{ComparisonResult, Stats};
pub use artifacts::highlight::Highlight;
