use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::QuestionBank;
use crate::models::{Category, Screen};
use crate::quiz::{NextQuestionOptions, QuizSession};
use crate::revision::RevisionBrowser;

const MENU_ENTRIES: usize = 2;

pub struct App {
    pub screen: Screen,
    session: QuizSession,
    revision: RevisionBrowser,
    rng: StdRng,
    menu_index: usize,
    highlighted: usize,
}

impl App {
    /// Build the front-end state. `None` when the bank is empty.
    pub fn new(bank: QuestionBank, seed: Option<u64>) -> Option<Self> {
        let bank = Arc::new(bank);
        let (session, rng) = match seed {
            Some(seed) => (
                QuizSession::with_seed(Arc::clone(&bank), seed)?,
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (
                QuizSession::from_entropy(Arc::clone(&bank))?,
                StdRng::from_entropy(),
            ),
        };

        Some(Self {
            screen: Screen::Home,
            session,
            revision: RevisionBrowser::new(bank),
            rng,
            menu_index: 0,
            highlighted: 0,
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn revision(&self) -> &RevisionBrowser {
        &self.revision
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Option under the cursor on the quiz screen.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    // ---- home ----

    pub fn select_next_entry(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ENTRIES;
    }

    pub fn select_previous_entry(&mut self) {
        self.menu_index = (self.menu_index + MENU_ENTRIES - 1) % MENU_ENTRIES;
    }

    pub fn open_selected_entry(&mut self) {
        let screen = if self.menu_index == 0 {
            Screen::Quiz
        } else {
            Screen::Revision
        };
        self.open(screen);
    }

    pub fn open(&mut self, screen: Screen) {
        tracing::debug!(?screen, "switching screen");
        self.screen = screen;
    }

    pub fn go_home(&mut self) {
        self.open(Screen::Home);
    }

    // ---- quiz ----

    pub fn highlight_next(&mut self) {
        let count = self.session.answer_choices().len();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous(&mut self) {
        let count = self.session.answer_choices().len();
        if count > 0 {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    pub fn toggle_highlighted(&mut self) {
        let id = self
            .session
            .answer_choices()
            .get(self.highlighted)
            .map(|choice| choice.id.clone());
        if let Some(id) = id {
            self.session.toggle_choice(&id);
        }
    }

    /// Enter key: follow a pending advance, otherwise validate.
    pub fn confirm(&mut self) {
        if self.session.pending_advance().is_some() {
            self.session.advance();
            self.highlighted = 0;
        } else {
            if self.session.selected_choice().is_none() {
                self.toggle_highlighted();
            }
            self.session.validate();
        }
    }

    pub fn show_category(&mut self, category: Category) {
        self.session.change_category(category);
        self.highlighted = 0;
    }

    pub fn next_category(&mut self) {
        if let Some(next) = self.session.active_category().next() {
            self.show_category(next);
        }
    }

    pub fn previous_category(&mut self) {
        if let Some(previous) = self.session.active_category().previous() {
            self.show_category(previous);
        }
    }

    pub fn random_question(&mut self) {
        self.session.handle_next_question(NextQuestionOptions {
            preserve_category: true,
            ..NextQuestionOptions::default()
        });
        self.highlighted = 0;
    }

    pub fn restart_series(&mut self) {
        self.session.reset_series();
        self.highlighted = 0;
    }

    // ---- revision ----

    pub fn revision_next(&mut self) {
        self.revision.next();
    }

    pub fn revision_previous(&mut self) {
        self.revision.previous();
    }

    pub fn revision_random(&mut self) {
        self.revision.random(&mut self.rng);
    }

    pub fn revision_toggle(&mut self, category: Category) {
        self.revision.toggle_answer(category);
    }
}
