//! Siteproc Patcher: one-shot guarded text patchers for the siteproc web UI
//!
//! Two fixed patch recipes over local project files: wrapping the project
//! detail page in `AppLayout` with a proper loading spinner, and swapping the
//! landing page's dashboard mockup for the live-style markup.
//!
//! # Architecture
//!
//! Every recipe compiles down to a short list of [`PatchStep`] primitives
//! applied sequentially to the file's in-memory content. Steps are guarded:
//! a step whose target pattern is absent warns and leaves the content alone,
//! and never aborts later steps. After the last step the file is rewritten
//! unconditionally via an atomic write.
//!
//! # Safety
//!
//! - Guards make a second run a fixed point (already-applied steps skip)
//! - Atomic file writes (tempfile + fsync + rename)
//! - Root boundary enforcement
//!
//! # Example
//!
//! ```no_run
//! use siteproc_patcher::{recipes, RootGuard};
//!
//! let guard = RootGuard::new(".")?;
//! let report = recipes::fix_detail().apply(&guard, false)?;
//! for step in &report.steps {
//!     println!("{}: {:?}", step.label, step.outcome);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod fuzzy;
pub mod patch;
pub mod recipe;
pub mod recipes;
pub mod safety;

// Re-exports
pub use fuzzy::NearMiss;
pub use patch::{PatchError, PatchStep, StepOutcome};
pub use recipe::{Recipe, RecipeReport, Step, StepReport};
pub use safety::{RootGuard, SafetyError};
