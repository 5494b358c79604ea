// Learning Progress
// Pure arithmetic over a caller-held analysis history. Storage of the
// history itself belongs to the persistence layer, not this crate.

use crate::models::ProgressStats;

/// Analyses per trend window.
const TREND_WINDOW: usize = 5;
/// Minimum entries per window before a trend is reported.
const TREND_MIN_ENTRIES: usize = 3;

/// Improvement trend over AI scores ordered newest first: average of the
/// preceding window minus average of the most recent window. Positive means
/// scores are falling, i.e. the writing is improving. `None` until both
/// windows hold at least 3 entries.
pub fn improvement_trend(ai_scores_newest_first: &[f64]) -> Option<f64> {
    let recent = &ai_scores_newest_first[..ai_scores_newest_first.len().min(TREND_WINDOW)];
    let older_end = ai_scores_newest_first.len().min(TREND_WINDOW * 2);
    let older = if ai_scores_newest_first.len() > TREND_WINDOW {
        &ai_scores_newest_first[TREND_WINDOW..older_end]
    } else {
        &[]
    };

    if recent.len() < TREND_MIN_ENTRIES || older.len() < TREND_MIN_ENTRIES {
        return None;
    }

    Some(mean(older) - mean(recent))
}

/// Summarize an analysis history. Both slices are ordered newest first; the
/// similarity history may be shorter than the AI history.
pub fn progress_stats(
    ai_scores_newest_first: &[f64],
    similarity_scores_newest_first: &[f64],
) -> ProgressStats {
    ProgressStats {
        total_analyses: ai_scores_newest_first.len(),
        average_ai_score: mean(ai_scores_newest_first),
        average_similarity_score: mean(similarity_scores_newest_first),
        improvement_trend: improvement_trend(ai_scores_newest_first),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_requires_three_entries_per_window() {
        assert_eq!(improvement_trend(&[]), None);
        assert_eq!(improvement_trend(&[40.0, 50.0, 60.0]), None);
        // Full recent window but only two older entries.
        assert_eq!(improvement_trend(&[40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 95.0]), None);
    }

    #[test]
    fn test_trend_positive_when_scores_fall() {
        // Newest first: recent window averages 30, older window averages 80.
        let scores = [30.0, 30.0, 30.0, 80.0, 80.0, 80.0];
        assert_eq!(improvement_trend(&scores), None); // windows are 5-wide

        let scores = [
            30.0, 30.0, 30.0, 30.0, 30.0, // recent five
            80.0, 80.0, 80.0, 80.0, 80.0, // preceding five
        ];
        assert_eq!(improvement_trend(&scores), Some(50.0));
    }

    #[test]
    fn test_trend_with_partial_older_window() {
        // Five recent at 40, three older at 70: both windows qualify.
        let scores = [40.0, 40.0, 40.0, 40.0, 40.0, 70.0, 70.0, 70.0];
        assert_eq!(improvement_trend(&scores), Some(30.0));
    }

    #[test]
    fn test_progress_stats_averages() {
        let stats = progress_stats(&[60.0, 40.0], &[10.0, 30.0]);
        assert_eq!(stats.total_analyses, 2);
        assert_eq!(stats.average_ai_score, 50.0);
        assert_eq!(stats.average_similarity_score, 20.0);
        assert_eq!(stats.improvement_trend, None);
    }
}
