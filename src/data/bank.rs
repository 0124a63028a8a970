use rand::Rng;

use crate::models::Question;

/// Number of draws attempted before giving up on avoiding a repeat.
const MAX_PICK_ATTEMPTS: usize = 10;

/// The immutable, ordered set of questions a session draws from.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Draw a random question index whose id differs from `previous_id`.
    ///
    /// Gives up after a bounded number of draws and falls back to the first
    /// question. Returns `None` only when the bank is empty.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        previous_id: Option<u32>,
    ) -> Option<usize> {
        if self.questions.is_empty() {
            return None;
        }

        for _ in 0..MAX_PICK_ATTEMPTS {
            let index = rng.gen_range(0..self.questions.len());
            if Some(self.questions[index].id) != previous_id {
                return Some(index);
            }
        }

        Some(0)
    }
}

impl From<Vec<Question>> for QuestionBank {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
