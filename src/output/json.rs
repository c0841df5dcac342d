// JSON rendering of reports for scripting.

use anyhow::Result;

use crate::pipeline::batch::BatchEntry;
use crate::scoring::report::ScoreReport;

/// Pretty-printed JSON for one report, with its band.
pub fn report_to_json(report: &ScoreReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Pretty-printed JSON array for a batch, in the given order.
pub fn batch_to_json(entries: &[BatchEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::batch::BatchOutcome;

    #[test]
    fn test_report_json_has_band() {
        let report = ScoreReport::new(9.0, 10.0, 9.0, 8.0, 200, 10);
        let value: serde_json::Value =
            serde_json::from_str(&report_to_json(&report).unwrap()).unwrap();
        assert_eq!(value["band"], "Good");
        assert_eq!(value["relevance"], 9.0);
        assert_eq!(value["word_count"], 200);
    }

    #[test]
    fn test_batch_json_tags_status() {
        let entries = vec![BatchEntry {
            source: "x.txt".to_string(),
            outcome: BatchOutcome::Skipped {
                reason: "essay text is empty".to_string(),
            },
        }];
        let value: serde_json::Value =
            serde_json::from_str(&batch_to_json(&entries).unwrap()).unwrap();
        assert_eq!(value[0]["source"], "x.txt");
        assert_eq!(value[0]["status"], "skipped");
        assert_eq!(value[0]["reason"], "essay text is empty");
    }
}
