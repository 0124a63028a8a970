mod category;
mod choice;
mod question;

pub use category::{Category, PerCategory};
pub use choice::{AnswerChoice, ChoiceContent, ChoiceKind};
pub use question::{
    ActiveQuestion, Answer, KnowledgeSection, Question, VehicleAnswer, VehicleSection,
};

/// Top-level screen shown by the terminal front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Quiz,
    Revision,
}
