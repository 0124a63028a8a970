//! Flip-through browsing of the question bank with answers hidden until
//! revealed.

use std::sync::Arc;

use rand::Rng;

use crate::data::QuestionBank;
use crate::models::{Category, PerCategory, Question};

pub struct RevisionBrowser {
    bank: Arc<QuestionBank>,
    index: usize,
    revealed: PerCategory<bool>,
}

impl RevisionBrowser {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            index: 0,
            revealed: PerCategory::default(),
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.bank.get(self.index)
    }

    /// 1-based position and bank size, for the "Question n / m" counter.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.bank.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_revealed(&self, category: Category) -> bool {
        self.revealed[category]
    }

    pub fn next(&mut self) {
        if self.bank.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.bank.len();
        self.hide_all();
    }

    pub fn previous(&mut self) {
        if self.bank.is_empty() {
            return;
        }
        self.index = self.index.checked_sub(1).unwrap_or(self.bank.len() - 1);
        self.hide_all();
    }

    pub fn random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.bank.is_empty() {
            return;
        }
        self.index = rng.gen_range(0..self.bank.len());
        self.hide_all();
    }

    pub fn toggle_answer(&mut self, category: Category) {
        self.revealed[category] = !self.revealed[category];
    }

    fn hide_all(&mut self) {
        self.revealed = PerCategory::default();
    }
}

/// Short form of a theme for narrow layouts.
pub fn short_theme_label(theme: &str) -> &str {
    let normalized = theme.to_lowercase();
    if normalized.contains("intérieur") {
        "Interne"
    } else if normalized.contains("extérieur") {
        "Externe"
    } else {
        theme
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::models::{Answer, KnowledgeSection, VehicleAnswer, VehicleSection};

    fn bank(size: u32) -> Arc<QuestionBank> {
        let knowledge = |text: &str| KnowledgeSection {
            question: text.to_string(),
            answer: Answer::Single(text.to_string()),
            multiple: false,
        };
        let questions = (1..=size)
            .map(|id| Question {
                id,
                name: None,
                theme: "Vérifications extérieures".to_string(),
                vehicle: VehicleSection {
                    question: "Montrez la jauge d'huile.".to_string(),
                    answer: VehicleAnswer {
                        text: "Sous le capot".to_string(),
                        image: None,
                    },
                },
                qser: knowledge("qser"),
                secours: knowledge("secours"),
            })
            .collect();
        Arc::new(QuestionBank::new(questions))
    }

    #[test]
    fn test_navigation_wraps_around() {
        let mut browser = RevisionBrowser::new(bank(3));
        browser.previous();
        assert_eq!(browser.position(), (3, 3));
        browser.next();
        assert_eq!(browser.index(), 0);
        browser.next();
        assert_eq!(browser.current().map(|q| q.id), Some(2));
    }

    #[test]
    fn test_moving_hides_answers() {
        let mut browser = RevisionBrowser::new(bank(3));
        browser.toggle_answer(Category::Qser);
        browser.toggle_answer(Category::Vehicle);
        assert!(browser.is_revealed(Category::Qser));
        assert!(!browser.is_revealed(Category::Secours));

        browser.random(&mut StepRng::new(0, 0));
        assert_eq!(browser.index(), 0);
        assert!(!browser.is_revealed(Category::Qser));
        assert!(!browser.is_revealed(Category::Vehicle));
    }

    #[test]
    fn test_empty_bank_is_inert() {
        let mut browser = RevisionBrowser::new(Arc::new(QuestionBank::default()));
        browser.next();
        browser.previous();
        assert!(browser.current().is_none());
    }

    #[test]
    fn test_short_theme_label() {
        assert_eq!(short_theme_label("Vérifications Intérieures"), "Interne");
        assert_eq!(short_theme_label("Vérifications extérieures"), "Externe");
        assert_eq!(short_theme_label("Divers"), "Divers");
    }
}
