//! Patch recipes - ordered, labelled steps bound to one target file.
//!
//! A recipe mirrors the shape of the one-off scripts it replaces: read the
//! file fully, run a fixed sequence of guarded edits against the in-memory
//! content, then write the whole file back. Steps are independent; a missed
//! pattern is reported and the remaining steps still run. The write-back is
//! unconditional, even when every step missed (a no-op rewrite).

use std::fs;
use std::path::PathBuf;

use crate::patch::{atomic_write, PatchError, PatchStep, StepOutcome};
use crate::safety::RootGuard;

/// One labelled edit within a recipe.
#[derive(Debug, Clone)]
pub struct Step {
    /// Short human-readable name, used in status output
    pub label: &'static str,
    pub edit: PatchStep,
}

/// A fixed patch script: a target file and its ordered edits.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub name: &'static str,
    /// Target path, relative to the project root
    pub file: &'static str,
    pub steps: Vec<Step>,
}

/// Outcome of one step, with its label.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub label: &'static str,
    pub outcome: StepOutcome,
}

/// Full record of one recipe run.
#[derive(Debug, Clone)]
#[must_use = "RecipeReport should be checked for missed steps"]
pub struct RecipeReport {
    /// Canonical path of the patched file
    pub file: PathBuf,
    pub steps: Vec<StepReport>,
    /// Whether the patched content differs from what was read
    pub changed: bool,
    /// Whether the file was written back (false under dry-run)
    pub written: bool,
    /// Content as read, kept for diff display
    pub original: String,
    /// Content after all steps
    pub patched: String,
}

impl RecipeReport {
    pub fn applied(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_applied()).count()
    }

    pub fn missed(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_miss()).count()
    }
}

impl Recipe {
    /// Run every step against the target file and write the result back.
    ///
    /// Any I/O or safety error aborts before the write, leaving the target
    /// untouched. Under `dry_run` the steps run but nothing is written.
    pub fn apply(&self, guard: &RootGuard, dry_run: bool) -> Result<RecipeReport, PatchError> {
        let path = guard.validate_path(self.file)?;

        let original = fs::read_to_string(&path).map_err(|source| PatchError::Read {
            path: path.clone(),
            source,
        })?;

        let mut content = original.clone();
        let mut steps = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let outcome = step.edit.apply(&mut content)?;
            steps.push(StepReport {
                label: step.label,
                outcome,
            });
        }

        // The original scripts rewrite the file even when nothing matched
        let written = if dry_run {
            false
        } else {
            atomic_write(&path, content.as_bytes()).map_err(|source| PatchError::Write {
                path: path.clone(),
                source,
            })?;
            true
        };

        Ok(RecipeReport {
            file: path,
            changed: content != original,
            written,
            steps,
            original,
            patched: content,
        })
    }
}
