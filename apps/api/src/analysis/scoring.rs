//! Match Scorer — compares a résumé word set against a JD word set.
//!
//! Pure and deterministic: the score is the percentage of JD vocabulary
//! present in the résumé, rounded to two decimals. A degenerate empty JD
//! scores 0 and is flagged with a warning so callers can tell it apart
//! from a genuine zero match.

use serde::{Deserialize, Serialize};

use crate::analysis::normalize::WordSet;

/// Non-fatal conditions attached to a scan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanWarning {
    /// The JD produced no word tokens; the zero score is not a real match result.
    EmptyJobDescription,
}

/// Result of one scoring call. Immutable once built.
///
/// Invariants: `matched ∪ missing == jd_words` and `matched ∩ missing == ∅`;
/// `total_jd_words == |jd_words|`.
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// Percentage of JD words found in the résumé, in [0, 100], 2 decimals.
    pub score: f64,
    pub matched: WordSet,
    pub missing: WordSet,
    pub total_jd_words: usize,
}

impl MatchReport {
    pub fn warnings(&self) -> Vec<ScanWarning> {
        if self.total_jd_words == 0 {
            vec![ScanWarning::EmptyJobDescription]
        } else {
            Vec::new()
        }
    }
}

/// Scores a résumé word set against a JD word set.
pub fn score(resume_words: &WordSet, jd_words: &WordSet) -> MatchReport {
    let matched: WordSet = jd_words.intersection(resume_words).cloned().collect();
    let missing: WordSet = jd_words.difference(resume_words).cloned().collect();
    let total_jd_words = jd_words.len();

    let score = if total_jd_words == 0 {
        0.0
    } else {
        round2(100.0 * matched.len() as f64 / total_jd_words as f64)
    };

    MatchReport {
        score,
        matched,
        missing,
        total_jd_words,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::normalize;

    #[test]
    fn test_half_of_jd_covered_scores_fifty() {
        let resume = normalize("Python SQL Excel");
        let jd = normalize("python sql machine learning");

        let report = score(&resume, &jd);
        assert_eq!(report.score, 50.0);
        assert_eq!(report.matched, normalize("python sql"));
        assert_eq!(report.missing, normalize("machine learning"));
        assert_eq!(report.total_jd_words, 4);
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_empty_resume_scores_zero_with_all_jd_missing() {
        let resume = normalize("");
        let jd = normalize("python sql");

        let report = score(&resume, &jd);
        assert_eq!(report.score, 0.0);
        assert!(report.matched.is_empty());
        assert_eq!(report.missing, normalize("python sql"));
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_empty_jd_scores_zero_with_warning() {
        let resume = normalize("python sql");
        let jd = normalize("");

        let report = score(&resume, &jd);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.total_jd_words, 0);
        assert_eq!(report.warnings(), vec![ScanWarning::EmptyJobDescription]);
    }

    #[test]
    fn test_full_coverage_scores_one_hundred() {
        let resume = normalize("java c++ oop databases algorithms extra words");
        let jd = normalize("java oop databases");

        let report = score(&resume, &jd);
        assert_eq!(report.score, 100.0);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_partial_coverage_never_scores_one_hundred() {
        let resume = normalize("java oop");
        let jd = normalize("java oop databases");

        let report = score(&resume, &jd);
        assert!(report.score < 100.0);
        assert!(!report.missing.is_empty());
    }

    #[test]
    fn test_matched_and_missing_partition_the_jd() {
        let resume = normalize("rust tokio axum sql");
        let jd = normalize("rust sql kubernetes docker ci");

        let report = score(&resume, &jd);
        let union: WordSet = report.matched.union(&report.missing).cloned().collect();
        assert_eq!(union, jd);
        assert!(report.matched.intersection(&report.missing).next().is_none());
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let resume = normalize("a");
        let jd = normalize("a b c");

        // 1/3 → 33.333… → 33.33
        assert_eq!(score(&resume, &jd).score, 33.33);

        let resume = normalize("a b");
        // 2/3 → 66.666… → 66.67
        assert_eq!(score(&resume, &jd).score, 66.67);
    }

    #[test]
    fn test_resume_only_words_do_not_appear_in_report() {
        let resume = normalize("python sql haskell prolog");
        let jd = normalize("python");

        let report = score(&resume, &jd);
        assert!(!report.matched.contains("haskell"));
        assert!(!report.missing.contains("haskell"));
    }
}
