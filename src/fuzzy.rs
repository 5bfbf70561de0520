//! Near-miss diagnostics for guarded literal searches.
//!
//! When a step's exact target is absent the run continues with a warning;
//! the usual cause is that the target file drifted since the recipe was
//! written. To make that warning actionable we scan line windows of the
//! content for the span most similar to the missed pattern and report its
//! location and similarity. Diagnostics only; patching never depends on it.

use std::fmt;

use strsim::normalized_levenshtein;

/// Minimum similarity worth reporting. Below this the "closest" span is
/// usually unrelated text.
const REPORT_THRESHOLD: f64 = 0.5;

/// Closest span found for a pattern that failed its exact-match guard.
#[derive(Debug, Clone, PartialEq)]
pub struct NearMiss {
    /// 1-based line number where the candidate span starts
    pub line: usize,
    /// Normalized Levenshtein similarity in 0.0..=1.0
    pub similarity: f64,
    /// First line of the candidate span, trimmed
    pub snippet: String,
}

impl fmt::Display for NearMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} (~{:.0}% similar): {}",
            self.line,
            self.similarity * 100.0,
            self.snippet
        )
    }
}

/// Scan line windows of `content` the same height as `pattern` and return
/// the most similar one, if any clears [`REPORT_THRESHOLD`].
pub fn nearest_span(content: &str, pattern: &str) -> Option<NearMiss> {
    let pattern_lines: Vec<&str> = pattern.lines().collect();
    if pattern_lines.is_empty() {
        return None;
    }
    let needle = pattern_lines.join("\n");

    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < pattern_lines.len() {
        return None;
    }

    let mut best: Option<NearMiss> = None;
    for (idx, window) in lines.windows(pattern_lines.len()).enumerate() {
        let candidate = window.join("\n");
        let similarity = normalized_levenshtein(&needle, &candidate);
        if similarity < REPORT_THRESHOLD {
            continue;
        }
        if best.as_ref().map_or(true, |b| similarity > b.similarity) {
            best = Some(NearMiss {
                line: idx + 1,
                similarity,
                snippet: window[0].trim().to_string(),
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_single_line_near_miss() {
        let content = "header\n  const projects = load()\nfooter\n";
        let near = nearest_span(content, "  const project = load()").unwrap();
        assert_eq!(near.line, 2);
        assert!(near.similarity > 0.9);
        assert_eq!(near.snippet, "const projects = load()");
    }

    #[test]
    fn test_finds_multi_line_near_miss() {
        let content = "\
fn main() {
    return (
      <Boundary>
      <div className=\"wrapper\">
    )
}";
        let pattern = "  return (\n    <Boundary>\n    <div className=\"wrapper\">";
        let near = nearest_span(content, pattern).unwrap();
        assert_eq!(near.line, 2);
    }

    #[test]
    fn test_unrelated_content_yields_nothing() {
        let content = "completely different text\nabout other things\n";
        assert!(nearest_span(content, "  if (!project) return (").is_none());
    }

    #[test]
    fn test_pattern_taller_than_content_yields_nothing() {
        assert!(nearest_span("one line", "a\nb\nc").is_none());
    }
}
