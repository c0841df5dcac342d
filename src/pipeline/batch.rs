// Batch pipeline: score a list of essay files one after another.
//
// Each file goes through the same guard and scorer as a single submission.
// A file that cannot be read, is rejected by the guard, or fails to score is
// kept in the results as skipped with its reason, so one bad file never
// aborts the batch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::input::Submission;
use crate::scoring::engine::EssayScorer;
use crate::scoring::report::ScoreReport;

/// Result of one file in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// Path as given on the command line
    pub source: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Scored { report: ScoreReport },
    Skipped { reason: String },
}

impl BatchEntry {
    pub fn report(&self) -> Option<&ScoreReport> {
        match &self.outcome {
            BatchOutcome::Scored { report } => Some(report),
            BatchOutcome::Skipped { .. } => None,
        }
    }
}

/// Score every file in `paths`, in order. Pass `show_progress = false` to
/// suppress the progress bar (tests, JSON output).
pub fn run(
    scorer: &EssayScorer,
    paths: &[PathBuf],
    placeholder: &str,
    show_progress: bool,
) -> Vec<BatchEntry> {
    let pb = if show_progress {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let source = path.display().to_string();
        let outcome = match score_file(scorer, path, placeholder) {
            Ok(report) => BatchOutcome::Scored { report },
            Err(e) => {
                warn!(file = %source, error = %e, "Skipping essay");
                BatchOutcome::Skipped {
                    reason: format!("{e:#}"),
                }
            }
        };
        entries.push(BatchEntry { source, outcome });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let scored = entries.iter().filter(|e| e.report().is_some()).count();
    info!(
        files = entries.len(),
        scored,
        skipped = entries.len() - scored,
        "Batch complete"
    );

    entries
}

/// Read, guard and score a single essay file.
pub fn score_file(scorer: &EssayScorer, path: &Path, placeholder: &str) -> Result<ScoreReport> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let submission = Submission::from_bytes(bytes, placeholder)?;
    scorer.evaluate(submission.text())
}

/// Order entries by total score, highest first. Skipped entries go last,
/// keeping their original order.
pub fn rank(entries: &mut [BatchEntry]) {
    entries.sort_by(|a, b| match (a.report(), b.report()) {
        (Some(ra), Some(rb)) => rb
            .total
            .partial_cmp(&ra.total)
            .unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DEFAULT_PLACEHOLDER;
    use crate::scoring::engine::ScorerConfig;

    fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_run_scores_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(
            dir.path(),
            "good.txt",
            b"Technology improves education. Students learn digitally every day.",
        );
        let empty = write(dir.path(), "empty.txt", b"   \n");
        let binary = write(dir.path(), "binary.txt", &[0xff, 0xfe, 0x00]);
        let missing = dir.path().join("missing.txt");

        let scorer = EssayScorer::new(ScorerConfig::default()).unwrap();
        let entries = run(
            &scorer,
            &[good, empty, binary, missing],
            DEFAULT_PLACEHOLDER,
            false,
        );

        assert_eq!(entries.len(), 4);
        assert!(entries[0].report().is_some());
        for entry in &entries[1..] {
            assert!(entry.report().is_none(), "{} should be skipped", entry.source);
        }
        match &entries[1].outcome {
            BatchOutcome::Skipped { reason } => assert!(reason.contains("empty"), "{reason}"),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_rank_orders_by_total_with_skipped_last() {
        let entry = |source: &str, total: Option<f64>| BatchEntry {
            source: source.to_string(),
            outcome: match total {
                Some(t) => BatchOutcome::Scored {
                    report: ScoreReport::new(t, t, t, t, 10, 1),
                },
                None => BatchOutcome::Skipped {
                    reason: "nope".to_string(),
                },
            },
        };

        let mut entries = vec![
            entry("skip", None),
            entry("low", Some(2.0)),
            entry("high", Some(9.0)),
            entry("mid", Some(5.0)),
        ];
        rank(&mut entries);

        let order: Vec<&str> = entries.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low", "skip"]);
    }
}
