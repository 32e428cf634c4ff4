//! File system operations module
//!
//! Extension bucket naming and the best-effort copier used by the walker.

mod bucket;
mod copier;

pub use bucket::*;
pub use copier::*;
