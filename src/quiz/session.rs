//! Quiz session state machine.
//!
//! A session walks through one question at a time, category by category
//! (vehicle check, road safety, first aid). Each validated category is
//! frozen so that coming back to it shows the same options and selection.
//! After [`MAX_QUESTIONS`] questions the series ends on a result screen;
//! cumulative per-category statistics survive series resets.

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::QuestionBank;
use crate::models::{ActiveQuestion, AnswerChoice, Category, PerCategory, Question};

use super::choices::build_choices;
use super::progress::{
    self, progress_entries, ProgressEntry, ResultTier, POINTS_PER_QUESTION,
};

/// Questions in one series.
pub const MAX_QUESTIONS: usize = 5;

/// Outcome of a validated category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
    Correct,
    Incorrect,
}

/// Running totals for one category, kept for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryStats {
    pub asked: u32,
    pub correct: u32,
}

/// Score of a finished question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionScore {
    pub correct: u32,
    pub total: u32,
}

/// The single transition offered after a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAdvance {
    Category(Category),
    Question,
    Result,
}

/// Knobs of [`QuizSession::handle_next_question`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NextQuestionOptions {
    /// Id to avoid when drawing; defaults to the current question.
    pub previous_id: Option<u32>,
    /// Stay on the active category instead of going back to the vehicle check.
    pub preserve_category: bool,
    /// Record the current question's score before moving on.
    pub finalize_current: bool,
}

#[derive(Debug, Clone)]
struct ValidatedRecord {
    choices: Vec<AnswerChoice>,
    selected: String,
    status: CategoryStatus,
}

pub struct QuizSession<R = StdRng> {
    bank: Arc<QuestionBank>,
    rng: R,
    current: usize,
    category: Category,
    stats: PerCategory<CategoryStats>,
    validated: HashMap<Category, ValidatedRecord>,
    fresh_choices: Vec<AnswerChoice>,
    selected: Option<String>,
    pending: Option<PendingAdvance>,
    question_scores: Vec<QuestionScore>,
    show_results: bool,
}

impl QuizSession<StdRng> {
    /// Session seeded from OS entropy.
    pub fn from_entropy(bank: Arc<QuestionBank>) -> Option<Self> {
        Self::new(bank, StdRng::from_entropy())
    }

    /// Reproducible session.
    pub fn with_seed(bank: Arc<QuestionBank>, seed: u64) -> Option<Self> {
        Self::new(bank, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizSession<R> {
    /// Start a session on a random question. `None` when the bank is empty.
    pub fn new(bank: Arc<QuestionBank>, mut rng: R) -> Option<Self> {
        let current = bank.pick_random(&mut rng, None)?;
        let mut session = Self {
            bank,
            rng,
            current,
            category: Category::Vehicle,
            stats: PerCategory::default(),
            validated: HashMap::new(),
            fresh_choices: Vec::new(),
            selected: None,
            pending: None,
            question_scores: Vec::new(),
            show_results: false,
        };
        session.refresh_choices();
        Some(session)
    }

    // ---- read side ----

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn current_question(&self) -> &Question {
        &self.bank.questions()[self.current]
    }

    pub fn active_category(&self) -> Category {
        self.category
    }

    pub fn is_vehicle_category(&self) -> bool {
        self.category == Category::Vehicle
    }

    pub fn active_question(&self) -> ActiveQuestion<'_> {
        self.current_question().section(self.category)
    }

    /// Options for the active category: the frozen set once validated,
    /// otherwise the set generated when the category was entered.
    pub fn answer_choices(&self) -> &[AnswerChoice] {
        match self.validated.get(&self.category) {
            Some(record) => &record.choices,
            None => &self.fresh_choices,
        }
    }

    pub fn selected_choice(&self) -> Option<&str> {
        match self.validated.get(&self.category) {
            Some(record) => Some(&record.selected),
            None => self.selected.as_deref(),
        }
    }

    pub fn is_validated(&self) -> bool {
        self.validated.contains_key(&self.category)
    }

    pub fn was_correct(&self) -> bool {
        self.category_status(self.category) == Some(CategoryStatus::Correct)
    }

    pub fn category_status(&self, category: Category) -> Option<CategoryStatus> {
        self.validated.get(&category).map(|record| record.status)
    }

    pub fn category_statuses(&self) -> PerCategory<Option<CategoryStatus>> {
        let mut statuses = PerCategory::default();
        for category in Category::ORDER {
            statuses[category] = self.category_status(category);
        }
        statuses
    }

    pub fn stats(&self) -> &PerCategory<CategoryStats> {
        &self.stats
    }

    pub fn pending_advance(&self) -> Option<PendingAdvance> {
        self.pending
    }

    pub fn question_scores(&self) -> &[QuestionScore] {
        &self.question_scores
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    pub fn correct_answer_text(&self) -> String {
        self.current_question().correct_answer_text(self.category)
    }

    /// Categories answered correctly on the question in progress.
    pub fn current_question_correct_count(&self) -> u32 {
        self.validated
            .values()
            .filter(|record| record.status == CategoryStatus::Correct)
            .count() as u32
    }

    pub fn progress_entries(&self) -> Vec<ProgressEntry> {
        progress_entries(&self.question_scores, self.current_question_correct_count())
    }

    pub fn total_correct(&self) -> u32 {
        progress::total_correct(&self.question_scores)
    }

    pub fn series_percentage(&self) -> u32 {
        progress::series_percentage(&self.question_scores)
    }

    pub fn result_tier(&self) -> ResultTier {
        ResultTier::from_percentage(self.series_percentage())
    }

    pub fn result_message(&self) -> &'static str {
        self.result_tier().message()
    }

    // ---- operations ----

    /// Select `choice_id`, or clear the selection if it is already selected.
    /// Ignored once the active category is validated.
    pub fn toggle_choice(&mut self, choice_id: &str) {
        if self.is_validated() {
            return;
        }
        if self.selected.as_deref() == Some(choice_id) {
            self.selected = None;
        } else {
            self.selected = Some(choice_id.to_string());
        }
    }

    /// Check the current selection and freeze the category.
    /// Ignored without a selection or when already validated.
    pub fn validate(&mut self) {
        if self.is_validated() {
            return;
        }
        let Some(selected) = self.selected.take() else {
            return;
        };

        let success = self
            .fresh_choices
            .iter()
            .find(|choice| choice.id == selected)
            .is_some_and(|choice| choice.is_correct);
        let status = if success {
            CategoryStatus::Correct
        } else {
            CategoryStatus::Incorrect
        };

        let stats = &mut self.stats[self.category];
        stats.asked += 1;
        if success {
            stats.correct += 1;
        }

        let choices = std::mem::take(&mut self.fresh_choices);
        self.validated.insert(
            self.category,
            ValidatedRecord {
                choices,
                selected,
                status,
            },
        );

        let pending = self.next_transition();
        self.pending = Some(pending);

        tracing::debug!(
            question = self.current_question().id,
            category = ?self.category,
            ?status,
            ?pending,
            "category validated"
        );
    }

    /// Switch to `target`, restoring it if it was already validated.
    /// Always cancels a pending advance.
    pub fn change_category(&mut self, target: Category) {
        self.category = target;
        self.selected = None;
        if !self.validated.contains_key(&target) {
            self.refresh_choices();
        }
        self.pending = None;
    }

    /// Follow the pending transition, if any.
    pub fn advance(&mut self) {
        let Some(pending) = self.pending else {
            return;
        };
        tracing::debug!(?pending, "advancing");

        match pending {
            PendingAdvance::Category(target) => self.change_category(target),
            PendingAdvance::Question => self.handle_next_question(NextQuestionOptions {
                finalize_current: true,
                ..NextQuestionOptions::default()
            }),
            PendingAdvance::Result => {
                self.finalize_current_question();
                self.show_results = true;
                self.pending = None;
                tracing::info!(
                    percentage = self.series_percentage(),
                    "series complete"
                );
            }
        }
    }

    /// Start a new series on a new random question. Cumulative stats are kept.
    pub fn reset_series(&mut self) {
        let previous_id = self.current_question().id;
        self.move_to_random_question(previous_id);
        self.question_scores.clear();
        self.show_results = false;
        self.category = Category::Vehicle;
        self.refresh_choices();
        tracing::info!(question = self.current_question().id, "new series");
    }

    /// Jump to a new random question outside the validate/advance flow.
    pub fn handle_next_question(&mut self, options: NextQuestionOptions) {
        if options.finalize_current {
            self.finalize_current_question();
        }
        let previous_id = options
            .previous_id
            .unwrap_or_else(|| self.current_question().id);
        self.move_to_random_question(previous_id);
        self.show_results = false;
        if !options.preserve_category {
            self.category = Category::Vehicle;
        }
        self.refresh_choices();
    }

    // ---- internals ----

    fn next_transition(&self) -> PendingAdvance {
        let is_last_question = self.question_scores.len() + 1 >= MAX_QUESTIONS;
        match self.category.next() {
            None if is_last_question => PendingAdvance::Result,
            Some(next) => PendingAdvance::Category(next),
            None => PendingAdvance::Question,
        }
    }

    fn finalize_current_question(&mut self) {
        if self.question_scores.len() >= MAX_QUESTIONS {
            return;
        }
        self.question_scores.push(QuestionScore {
            correct: self.current_question_correct_count(),
            total: POINTS_PER_QUESTION,
        });
    }

    /// Draw a new current question and clear all per-question state.
    /// Keeps the current question when the bank cannot provide one.
    fn move_to_random_question(&mut self, previous_id: u32) {
        if let Some(next) = self.bank.pick_random(&mut self.rng, Some(previous_id)) {
            self.current = next;
        }
        self.selected = None;
        self.pending = None;
        self.validated.clear();
    }

    fn refresh_choices(&mut self) {
        let question = &self.bank.questions()[self.current];
        self.fresh_choices = build_choices(&self.bank, question, self.category, &mut self.rng);
    }
}
