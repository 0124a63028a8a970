use std::fmt;

use super::session::{QuestionScore, MAX_QUESTIONS};

/// Categories per question, i.e. the best score a question can get.
pub const POINTS_PER_QUESTION: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Completed,
    Current,
    Upcoming,
}

/// One chip of the series progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEntry {
    /// `"2/3"` style label, `"-/3"` for questions not reached yet.
    pub value: String,
    pub state: ProgressState,
    pub score: Option<u32>,
}

/// Build the `MAX_QUESTIONS` progress chips of a series.
pub fn progress_entries(scores: &[QuestionScore], current_correct: u32) -> Vec<ProgressEntry> {
    (0..MAX_QUESTIONS)
        .map(|index| {
            if let Some(score) = scores.get(index) {
                ProgressEntry {
                    value: format!("{}/{}", score.correct, score.total),
                    state: ProgressState::Completed,
                    score: Some(score.correct),
                }
            } else if index == scores.len() {
                ProgressEntry {
                    value: format!("{}/{}", current_correct, POINTS_PER_QUESTION),
                    state: ProgressState::Current,
                    score: Some(current_correct),
                }
            } else {
                ProgressEntry {
                    value: format!("-/{}", POINTS_PER_QUESTION),
                    state: ProgressState::Upcoming,
                    score: None,
                }
            }
        })
        .collect()
}

pub fn total_correct(scores: &[QuestionScore]) -> u32 {
    scores.iter().map(|score| score.correct).sum()
}

/// Share of the series maximum earned so far, rounded to a whole percent.
/// The denominator is always the full series, finished or not.
pub fn series_percentage(scores: &[QuestionScore]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    calculate_score(total_correct(scores), MAX_QUESTIONS as u32 * POINTS_PER_QUESTION)
}

/// Rounded percentage of `correct` over `total`, 0 when `total` is 0.
pub fn calculate_score(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(correct) / f64::from(total) * 100.0).round() as u32
}

/// Band of the end-of-series message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Excellent,
    Good,
    Encouraging,
    KeepPracticing,
}

impl ResultTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => ResultTier::Excellent,
            50..=79 => ResultTier::Good,
            20..=49 => ResultTier::Encouraging,
            _ => ResultTier::KeepPracticing,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Excellent => {
                "Excellent ! Tu maîtrises très bien ces vérifications, sécurité routière et gestes de secours."
            }
            ResultTier::Good => {
                "Bien joué ! Encore quelques séries et tu seras parfaitement à l'aise."
            }
            ResultTier::Encouraging => {
                "C'est un bon début. N'hésite pas à refaire une série pour renforcer tes connaissances."
            }
            ResultTier::KeepPracticing => {
                "Pas de souci, c'est justement fait pour s'entraîner. Lance une nouvelle série et progresse à ton rythme."
            }
        }
    }
}

impl fmt::Display for ResultTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Colour band of a progress chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreClass {
    Neutral,
    Tier0,
    Tier1,
    Tier2,
    Tier3,
}

impl ScoreClass {
    /// Negative scores clamp to the lowest tier.
    pub fn from_score(score: Option<i64>) -> Self {
        match score {
            None => ScoreClass::Neutral,
            Some(s) if s <= 0 => ScoreClass::Tier0,
            Some(1) => ScoreClass::Tier1,
            Some(2) => ScoreClass::Tier2,
            Some(_) => ScoreClass::Tier3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[u32]) -> Vec<QuestionScore> {
        values
            .iter()
            .map(|&correct| QuestionScore { correct, total: 3 })
            .collect()
    }

    #[test]
    fn test_progress_entries() {
        let entries = progress_entries(&scores(&[3, 1]), 2);
        assert_eq!(entries.len(), MAX_QUESTIONS);
        assert_eq!(entries[0].value, "3/3");
        assert_eq!(entries[1].state, ProgressState::Completed);
        assert_eq!(entries[2].value, "2/3");
        assert_eq!(entries[2].state, ProgressState::Current);
        assert_eq!(entries[3].value, "-/3");
        assert_eq!(entries[4].score, None);
    }

    #[test]
    fn test_full_series_has_no_current_chip() {
        let entries = progress_entries(&scores(&[1, 1, 1, 1, 1]), 0);
        assert!(entries.iter().all(|e| e.state == ProgressState::Completed));
    }

    #[test]
    fn test_series_percentage() {
        assert_eq!(series_percentage(&[]), 0);
        assert_eq!(series_percentage(&scores(&[3, 3, 3, 3, 3])), 100);
        assert_eq!(series_percentage(&scores(&[3, 3, 3, 3])), 80);
        // 1/15 rounds to 7
        assert_eq!(series_percentage(&scores(&[1])), 7);
        assert_eq!(series_percentage(&scores(&[0])), 0);
    }

    #[test]
    fn test_calculate_score() {
        assert_eq!(calculate_score(3, 5), 60);
        assert_eq!(calculate_score(1, 3), 33);
        assert_eq!(calculate_score(2, 3), 67);
        assert_eq!(calculate_score(1, 0), 0);
    }

    #[test]
    fn test_result_tier_boundaries() {
        assert_eq!(ResultTier::from_percentage(100), ResultTier::Excellent);
        assert_eq!(ResultTier::from_percentage(80), ResultTier::Excellent);
        assert_eq!(ResultTier::from_percentage(79), ResultTier::Good);
        assert_eq!(ResultTier::from_percentage(50), ResultTier::Good);
        assert_eq!(ResultTier::from_percentage(49), ResultTier::Encouraging);
        assert_eq!(ResultTier::from_percentage(20), ResultTier::Encouraging);
        assert_eq!(ResultTier::from_percentage(19), ResultTier::KeepPracticing);
        assert!(ResultTier::Excellent.message().starts_with("Excellent"));
    }

    #[test]
    fn test_score_class() {
        assert_eq!(ScoreClass::from_score(None), ScoreClass::Neutral);
        assert_eq!(ScoreClass::from_score(Some(-1)), ScoreClass::Tier0);
        assert_eq!(ScoreClass::from_score(Some(0)), ScoreClass::Tier0);
        assert_eq!(ScoreClass::from_score(Some(1)), ScoreClass::Tier1);
        assert_eq!(ScoreClass::from_score(Some(2)), ScoreClass::Tier2);
        assert_eq!(ScoreClass::from_score(Some(3)), ScoreClass::Tier3);
        assert_eq!(ScoreClass::from_score(Some(9)), ScoreClass::Tier3);
    }
}
