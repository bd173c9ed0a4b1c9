//! Quiz core: question construction, selections, scoring and the session
//! state machine

pub mod controller;
pub mod decode;
pub mod error;
pub mod question;
pub mod scorer;
pub mod selection;
pub mod shuffle;
pub mod view;

pub use controller::{FetchTicket, QUIZ_SIZE, QuizController, QuizPhase};
pub use decode::decode;
pub use error::QuizError;
pub use question::{
    AnswerOption, OptionId, Question, QuestionId, QuestionSet, RevealColor, build_question_set,
};
pub use scorer::Score;
pub use selection::{Selection, SelectionTracker};
pub use shuffle::shuffle;
pub use view::{AnswerView, QuestionView, QuizView, ViewPhase};
