use std::path::{Path, PathBuf};

use thiserror::Error;

/// Root safety checks to prevent patching files outside the target project.
#[derive(Debug, Clone)]
pub struct RootGuard {
    /// Absolute path to the project root
    root: PathBuf,
    /// Canonical paths to forbidden directories
    forbidden_paths: Vec<PathBuf>,
}

#[derive(Error, Debug)]
pub enum SafetyError {
    #[error("path is outside project root: {path} (root: {root})")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("path is in forbidden directory: {path} (forbidden: {forbidden})")]
    ForbiddenPath { path: PathBuf, forbidden: PathBuf },

    #[error("failed to resolve path: {0}")]
    Canonicalize(#[from] std::io::Error),
}

impl RootGuard {
    /// Create a new guard for the given project root.
    ///
    /// The root is canonicalized so symlinked checkouts resolve correctly.
    /// Generated directories inside the root are forbidden targets.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, SafetyError> {
        let root = root.as_ref().canonicalize()?;

        let mut forbidden_paths = Vec::new();
        for generated in ["node_modules", ".next"] {
            if let Ok(dir) = root.join(generated).canonicalize() {
                forbidden_paths.push(dir);
            }
        }

        Ok(Self {
            root,
            forbidden_paths,
        })
    }

    /// Check that a path is safe to patch.
    ///
    /// Relative paths resolve against the project root. Returns the
    /// canonicalized absolute path if safe; a missing target file surfaces
    /// here as a canonicalization error, before anything is written.
    pub fn validate_path(&self, path: impl AsRef<Path>) -> Result<PathBuf, SafetyError> {
        let path = path.as_ref();

        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        // Canonicalize to resolve symlinks and .. components
        let canonical = absolute.canonicalize()?;

        if !canonical.starts_with(&self.root) {
            return Err(SafetyError::OutsideRoot {
                path: canonical,
                root: self.root.clone(),
            });
        }

        for forbidden in &self.forbidden_paths {
            if canonical.starts_with(forbidden) {
                return Err(SafetyError::ForbiddenPath {
                    path: canonical,
                    forbidden: forbidden.clone(),
                });
            }
        }

        Ok(canonical)
    }

    /// Get the project root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
