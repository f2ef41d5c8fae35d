//! Source-side pieces of the Lucent pipeline: toolchain checks, fetching
//! the pinned Firefox checkout, and applying local patches over it.

pub mod deps;
mod error;
pub mod fetch;
pub mod patches;

pub use error::{Error, Result};
