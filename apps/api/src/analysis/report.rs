//! Report Builder — packages a `MatchReport` for the presentation layer.

use serde::Serialize;

use crate::analysis::scoring::{MatchReport, ScanWarning};

/// How many missing keywords a report lists when the caller doesn't say.
pub const DEFAULT_MISSING_LIMIT: usize = 10;

/// Display-ready scan result. Pure data; the UI owns styling and charts.
#[derive(Debug, Clone, Serialize)]
pub struct PresentableReport {
    pub score: f64,
    pub matched_count: usize,
    pub missing_count: usize,
    pub total_jd_words: usize,
    /// At most `limit` missing keywords, ascending lexicographic order.
    pub top_missing: Vec<String>,
    pub warnings: Vec<ScanWarning>,
    pub suggestion: String,
}

/// Builds a presentable report, truncating the missing list to `limit`.
pub fn build(report: &MatchReport, limit: usize) -> PresentableReport {
    // WordSet is a BTreeSet, so iteration is already ascending; truncation
    // happens after ordering.
    let top_missing: Vec<String> = report.missing.iter().take(limit).cloned().collect();

    PresentableReport {
        score: report.score,
        matched_count: report.matched.len(),
        missing_count: report.missing.len(),
        total_jd_words: report.total_jd_words,
        top_missing,
        warnings: report.warnings(),
        suggestion: build_suggestion(report),
    }
}

/// One human-readable next step, mirroring what the scan page shows
/// under the score card.
fn build_suggestion(report: &MatchReport) -> String {
    if report.total_jd_words == 0 {
        "The job description contained no scoreable keywords.".to_string()
    } else if report.missing.is_empty() {
        "Your resume covers all key skills in this job description.".to_string()
    } else {
        let top: Vec<&str> = report
            .missing
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        format!(
            "Add missing keywords such as {} to boost your ATS score.",
            top.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::normalize;
    use crate::analysis::scoring::score;

    #[test]
    fn test_top_missing_is_sorted_and_truncated() {
        let resume = normalize("");
        let jd = normalize("zeta alpha mu beta kappa");

        let report = build(&score(&resume, &jd), 3);
        assert_eq!(report.top_missing, vec!["alpha", "beta", "kappa"]);
        assert_eq!(report.missing_count, 5);
    }

    #[test]
    fn test_limit_larger_than_missing_returns_all() {
        let resume = normalize("python");
        let jd = normalize("python sql");

        let report = build(&score(&resume, &jd), DEFAULT_MISSING_LIMIT);
        assert_eq!(report.top_missing, vec!["sql"]);
    }

    #[test]
    fn test_zero_limit_hides_keywords_but_keeps_counts() {
        let resume = normalize("");
        let jd = normalize("python sql");

        let report = build(&score(&resume, &jd), 0);
        assert!(report.top_missing.is_empty());
        assert_eq!(report.missing_count, 2);
    }

    #[test]
    fn test_full_coverage_suggestion() {
        let resume = normalize("python sql");
        let jd = normalize("python sql");

        let report = build(&score(&resume, &jd), DEFAULT_MISSING_LIMIT);
        assert!(report.suggestion.contains("covers all key skills"));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_gap_suggestion_names_top_missing_keywords() {
        let resume = normalize("python");
        let jd = normalize("python kafka spark airflow");

        let report = build(&score(&resume, &jd), DEFAULT_MISSING_LIMIT);
        assert!(report.suggestion.contains("airflow"));
        assert!(report.suggestion.contains("kafka"));
        assert!(report.suggestion.contains("spark"));
    }

    #[test]
    fn test_empty_jd_reports_warning_and_degenerate_suggestion() {
        let resume = normalize("python");
        let jd = normalize("!!! ---");

        let report = build(&score(&resume, &jd), DEFAULT_MISSING_LIMIT);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.warnings, vec![ScanWarning::EmptyJobDescription]);
        assert!(report.suggestion.contains("no scoreable keywords"));
    }

    #[test]
    fn test_warning_serializes_snake_case() {
        let json = serde_json::to_string(&ScanWarning::EmptyJobDescription).unwrap();
        assert_eq!(json, "\"empty_job_description\"");
    }
}
