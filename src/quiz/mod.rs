//! The quiz core: choice generation, the session state machine and the
//! scoring helpers derived from it.

mod choices;
mod progress;
mod session;
mod shuffle;

pub use choices::{
    build_choices, build_knowledge_choices, build_vehicle_choices, MAX_OPTIONS, MIN_OPTIONS,
    NONE_OF_THE_ABOVE, VEHICLE_IMAGE_OPTIONS,
};
pub use progress::{
    calculate_score, progress_entries, series_percentage, total_correct, ProgressEntry,
    ProgressState, ResultTier, ScoreClass, POINTS_PER_QUESTION,
};
pub use session::{
    CategoryStats, CategoryStatus, NextQuestionOptions, PendingAdvance, QuestionScore,
    QuizSession, MAX_QUESTIONS,
};
pub use shuffle::shuffle;
