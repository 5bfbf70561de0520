use std::io::Write;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

use crate::fuzzy::{self, NearMiss};

/// The fundamental patch primitive: a guarded edit over in-memory content.
///
/// All recipes compile down to these three step kinds. Each step touches the
/// content at most once (first occurrence / first regex match); a miss leaves
/// the content byte-identical and never aborts later steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "PatchStep does nothing until apply() is called"]
pub enum PatchStep {
    /// Insert `text` on its own line after the first occurrence of `anchor`,
    /// skipped when `marker` is already present anywhere in the content.
    InsertAfter {
        anchor: String,
        text: String,
        marker: String,
    },
    /// Replace the first occurrence of `search` with `replace`.
    Replace { search: String, replace: String },
    /// Replace the first span matched by `pattern` with `replacement`.
    ///
    /// The replacement is spliced in verbatim; capture-group syntax in it is
    /// never expanded. Patterns typically use `(?s)` with a non-greedy body
    /// so the span ends at the nearest closing marker.
    ReplaceRegion {
        pattern: String,
        replacement: String,
    },
}

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid region pattern {pattern:?}: {source}")]
    BadPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error(transparent)]
    Safety(#[from] crate::safety::SafetyError),
}

/// Result of applying a single step.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "StepOutcome should be checked for applied/missed status"]
pub enum StepOutcome {
    /// The edit was made to the content.
    Applied { bytes_changed: usize },
    /// The guard found the edit already in place.
    AlreadyApplied,
    /// The target pattern was not found; content left unchanged. For literal
    /// searches, carries the closest span found (if any) to help diagnose
    /// target drift.
    NotFound { hint: Option<NearMiss> },
}

impl StepOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Applied { .. })
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, StepOutcome::NotFound { .. })
    }
}

impl PatchStep {
    /// Apply this step to `content` in place.
    pub fn apply(&self, content: &mut String) -> Result<StepOutcome, PatchError> {
        match self {
            PatchStep::InsertAfter {
                anchor,
                text,
                marker,
            } => {
                if content.contains(marker.as_str()) {
                    return Ok(StepOutcome::AlreadyApplied);
                }
                match content.find(anchor.as_str()) {
                    Some(pos) => {
                        let insertion = format!("\n{text}");
                        content.insert_str(pos + anchor.len(), &insertion);
                        Ok(StepOutcome::Applied {
                            bytes_changed: insertion.len(),
                        })
                    }
                    None => Ok(StepOutcome::NotFound {
                        hint: fuzzy::nearest_span(content, anchor),
                    }),
                }
            }

            PatchStep::Replace { search, replace } => match content.find(search.as_str()) {
                Some(pos) => {
                    content.replace_range(pos..pos + search.len(), replace);
                    Ok(StepOutcome::Applied {
                        bytes_changed: replace.len(),
                    })
                }
                None if content.contains(replace.as_str()) => Ok(StepOutcome::AlreadyApplied),
                None => Ok(StepOutcome::NotFound {
                    hint: fuzzy::nearest_span(content, search),
                }),
            },

            PatchStep::ReplaceRegion {
                pattern,
                replacement,
            } => {
                if content.contains(replacement.as_str()) {
                    return Ok(StepOutcome::AlreadyApplied);
                }
                let re = Regex::new(pattern).map_err(|source| PatchError::BadPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                match re.find(content) {
                    Some(m) => {
                        let range = m.range();
                        content.replace_range(range, replacement);
                        Ok(StepOutcome::Applied {
                            bytes_changed: replacement.len(),
                        })
                    }
                    None => Ok(StepOutcome::NotFound { hint: None }),
                }
            }
        }
    }
}

/// Atomic file write: tempfile + fsync + rename.
///
/// Either the full rewrite lands or the original file is untouched.
pub(crate) fn atomic_write(path: &Path, content: &[u8]) -> Result<(), std::io::Error> {
    // Tempfile in the same directory so the rename stays on one filesystem
    let parent = path.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path has no parent directory",
        )
    })?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    // Bump mtime so dev-server file watchers notice no-op rewrites too
    filetime::set_file_mtime(path, filetime::FileTime::now())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(step: &PatchStep, input: &str) -> (String, StepOutcome) {
        let mut content = input.to_string();
        let outcome = step.apply(&mut content).unwrap();
        (content, outcome)
    }

    #[test]
    fn test_insert_after_adds_line() {
        let step = PatchStep::InsertAfter {
            anchor: "import a from 'a'".into(),
            text: "import b from 'b'".into(),
            marker: "import b".into(),
        };
        let (content, outcome) = apply(&step, "import a from 'a'\n\nbody\n");
        assert!(outcome.is_applied());
        assert_eq!(content, "import a from 'a'\nimport b from 'b'\n\nbody\n");
    }

    #[test]
    fn test_insert_after_skips_when_marker_present() {
        let step = PatchStep::InsertAfter {
            anchor: "import a from 'a'".into(),
            text: "import b from 'b'".into(),
            marker: "import b".into(),
        };
        let input = "import a from 'a'\nimport b from 'b'\n";
        let (content, outcome) = apply(&step, input);
        assert_eq!(outcome, StepOutcome::AlreadyApplied);
        assert_eq!(content, input);
    }

    #[test]
    fn test_insert_after_missing_anchor_warns() {
        let step = PatchStep::InsertAfter {
            anchor: "import a from 'a'".into(),
            text: "import b from 'b'".into(),
            marker: "import b".into(),
        };
        let (content, outcome) = apply(&step, "nothing relevant\n");
        assert!(outcome.is_miss());
        assert_eq!(content, "nothing relevant\n");
    }

    #[test]
    fn test_replace_first_occurrence_only() {
        let step = PatchStep::Replace {
            search: "old".into(),
            replace: "new".into(),
        };
        let (content, outcome) = apply(&step, "old old old");
        assert!(outcome.is_applied());
        assert_eq!(content, "new old old");
    }

    #[test]
    fn test_replace_already_applied() {
        let step = PatchStep::Replace {
            search: "old block".into(),
            replace: "new block".into(),
        };
        let (content, outcome) = apply(&step, "prefix new block suffix");
        assert_eq!(outcome, StepOutcome::AlreadyApplied);
        assert_eq!(content, "prefix new block suffix");
    }

    #[test]
    fn test_replace_missing_reports_near_miss() {
        let step = PatchStep::Replace {
            search: "  if (!project) return null".into(),
            replace: "  if (!project) return spinner".into(),
        };
        let (content, outcome) = apply(&step, "header\n  if (!projects) return null\nfooter\n");
        assert_eq!(content, "header\n  if (!projects) return null\nfooter\n");
        match outcome {
            StepOutcome::NotFound { hint: Some(near) } => assert_eq!(near.line, 2),
            other => panic!("expected near-miss hint, got {other:?}"),
        }
    }

    #[test]
    fn test_region_replaces_nearest_closing_marker() {
        let step = PatchStep::ReplaceRegion {
            pattern: r"(?s)<start>.*?</end>".into(),
            replacement: "X".into(),
        };
        let (content, outcome) = apply(&step, "a <start>one</end> b </end> c");
        assert!(outcome.is_applied());
        // Non-greedy: stops at the first closing marker
        assert_eq!(content, "a X b </end> c");
    }

    #[test]
    fn test_region_replacement_is_verbatim() {
        // "$2.4M" in the markup must never be treated as a capture reference
        let step = PatchStep::ReplaceRegion {
            pattern: r"(?s)<div (class)>.*?</div>".into(),
            replacement: "budget $1 is $2.4M".into(),
        };
        let (content, _) = apply(&step, "<div class>old</div>");
        assert_eq!(content, "budget $1 is $2.4M");
    }

    #[test]
    fn test_region_no_match_is_noop() {
        let step = PatchStep::ReplaceRegion {
            pattern: r#"(?s)<div class="dashboard-mockup">.*?</div>"#.into(),
            replacement: "X".into(),
        };
        let (content, outcome) = apply(&step, "<html><body></body></html>");
        assert_eq!(outcome, StepOutcome::NotFound { hint: None });
        assert_eq!(content, "<html><body></body></html>");
    }

    #[test]
    fn test_region_bad_pattern_errors() {
        let step = PatchStep::ReplaceRegion {
            pattern: "(unclosed".into(),
            replacement: "X".into(),
        };
        let mut content = String::from("anything");
        let result = step.apply(&mut content);
        assert!(matches!(result, Err(PatchError::BadPattern { .. })));
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("test.html");
        std::fs::write(&file_path, b"original").unwrap();

        atomic_write(&file_path, b"rewritten").unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "rewritten");
    }
}
