//! Core sorting module
//!
//! Provides the concurrent tree walker, the driver that runs it, and the
//! summaries they produce.

mod driver;
mod summary;
mod walker;

pub use driver::*;
pub use summary::*;
pub use walker::*;
