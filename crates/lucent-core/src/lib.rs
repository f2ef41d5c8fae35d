//! Shared plumbing for the Lucent build pipeline: the fixed workspace
//! layout, platform detection, child-process helpers, terminal status
//! output, interactive prompts, and the `mach` driver wrapper.

pub mod error;
pub mod mach;
pub mod platform;
pub mod process;
pub mod prompt;
pub mod term;
pub mod workspace;

pub use error::{Error, Result};
