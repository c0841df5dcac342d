// Colored terminal output for score cards and batch rankings.
//
// Rendering builds strings; the display functions print them. The total is
// colored by band: green above 7, yellow above 4, red otherwise. Before any
// analysis has run (or after a rejected submission) the card shows zeroed
// readouts and a neutral "--" total.

use colored::{ColoredString, Colorize};

use super::{format_score, truncate_chars};
use crate::pipeline::batch::{BatchEntry, BatchOutcome};
use crate::scoring::report::{ScoreBand, ScoreReport, LABELS};

/// Render the score card for one essay.
pub fn render_report(report: &ScoreReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", "=== Essay Analysis ===".bold()));

    for (label, score) in report.rows() {
        out.push_str(&format!(
            "  {:<26} {}\n",
            format!("{label}:"),
            format_score(score).bright_blue().bold()
        ));
    }

    out.push_str(&format!(
        "\n  {} {}\n",
        "Total Score:".bold(),
        colorize_band(&format_score(report.total), report.band())
    ));
    out.push_str(&format!(
        "  {}\n",
        format!(
            "{} words, {} sentences",
            report.word_count, report.sentence_count
        )
        .dimmed()
    ));
    out
}

/// Render the zeroed card shown when nothing has been analyzed.
pub fn render_reset_card() -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", "=== Essay Analysis ===".bold()));
    for label in LABELS {
        out.push_str(&format!(
            "  {:<26} {}\n",
            format!("{label}:"),
            format_score(0.0).bright_blue().bold()
        ));
    }
    out.push_str(&format!("\n  {} {}\n", "Total Score:".bold(), "--".normal()));
    out
}

/// Display a scored essay.
pub fn display_report(report: &ScoreReport) {
    print!("{}", render_report(report));
}

/// Display the input warning followed by the reset card.
pub fn display_rejection(warning: &str) {
    eprintln!("{} {}", "Input Error:".yellow().bold(), warning);
    print!("{}", render_reset_card());
}

/// Render a ranked batch table.
pub fn render_batch(entries: &[BatchEntry]) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        out.push_str("No essays given.\n");
        return out;
    }

    out.push_str(&format!(
        "\n{}\n\n",
        format!("=== Essay Ranking ({} files) ===", entries.len()).bold()
    ));
    out.push_str(&format!(
        "  {:>4}  {:<32} {:>5}  {:<6}  {:>4} {:>4} {:>4} {:>4}\n",
        "Rank".dimmed(),
        "Essay".dimmed(),
        "Total".dimmed(),
        "Band".dimmed(),
        "Rel".dimmed(),
        "Gram".dimmed(),
        "Str".dimmed(),
        "Voc".dimmed(),
    ));
    out.push_str(&format!("  {}\n", "-".repeat(74).dimmed()));

    let mut rank = 0;
    for entry in entries {
        if let Some(report) = entry.report() {
            rank += 1;
            let band = report.band();
            out.push_str(&format!(
                "  {:>4}. {:<32} {:>5.1}  {:<6}  {:>4.1} {:>4.1} {:>4.1} {:>4.1}\n",
                rank,
                truncate_chars(&entry.source, 29),
                report.total,
                colorize_band(band.as_str(), band),
                report.relevance,
                report.grammar,
                report.structure,
                report.vocabulary,
            ));
        }
    }

    let skipped: Vec<(&str, &str)> = entries
        .iter()
        .filter_map(|e| match &e.outcome {
            BatchOutcome::Skipped { reason } => Some((e.source.as_str(), reason.as_str())),
            BatchOutcome::Scored { .. } => None,
        })
        .collect();

    if !skipped.is_empty() {
        out.push_str(&format!("\n  {} {} skipped:\n", "~".yellow(), skipped.len()));
        for (source, reason) in skipped {
            out.push_str(&format!("    {} {}\n", source, truncate_chars(reason, 80).dimmed()));
        }
    }

    out.push('\n');
    for band in [ScoreBand::Good, ScoreBand::Medium, ScoreBand::Poor] {
        let count = entries
            .iter()
            .filter(|e| e.report().is_some_and(|r| r.band() == band))
            .count();
        if count > 0 {
            out.push_str(&format!("  {} {}\n", colorize_band(band.as_str(), band), count));
        }
    }
    out
}

pub fn display_batch(entries: &[BatchEntry]) {
    print!("{}", render_batch(entries));
}

/// Apply the band color policy to `text`.
fn colorize_band(text: &str, band: ScoreBand) -> ColoredString {
    match band {
        ScoreBand::Good => text.bright_green().bold(),
        ScoreBand::Medium => text.bright_yellow().bold(),
        ScoreBand::Poor => text.bright_red().bold(),
    }
}
