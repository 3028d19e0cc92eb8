/*!
 * Vocabulary quiz sessions.
 *
 * A quiz samples words from the user's vocabulary list, asks for their
 * English translations one at a time and has the AI grader judge each
 * answer. Scores are 1 for a correct answer, 0.5 for a close one and 0
 * for a wrong one.
 */

pub mod report;
pub mod session;

pub use report::QuizReport;
pub use session::{Feedback, QuizSession, SubmitOutcome, DEFAULT_QUIZ_LENGTH};
