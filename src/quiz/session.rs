/*!
 * Quiz session state machine.
 *
 * A session samples its words once at start. Completing the quiz emits a
 * report and resets the index and scores but keeps the sampled words, so
 * answering again replays the same word set. A fresh word sample only
 * happens through a new `start` call.
 */

use log::{debug, info};
use rand::seq::index::sample;

use crate::errors::QuizError;
use crate::language::Language;
use crate::providers::{Grader, Verdict};

use super::report::QuizReport;

/// Number of words in a quiz, when the pool is large enough
pub const DEFAULT_QUIZ_LENGTH: usize = 10;

/// Verdict-specific feedback shown after each answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Short headline ("Correct!", "Almost!", ...)
    pub title: String,
    /// Explanation body
    pub body: String,
}

/// What happened after an answer was graded
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The quiz moved on to the next word
    Continue { feedback: Feedback },
    /// That was the last word; the quiz is complete
    Finished {
        feedback: Feedback,
        report: QuizReport,
    },
}

/// An in-progress vocabulary quiz
pub struct QuizSession {
    /// Words being quizzed, sampled once at start
    quiz_words: Vec<String>,
    /// Language the quiz words belong to
    language: Language,
    /// Index of the word currently being asked
    current_index: usize,
    /// Scores for answered words, in quiz order
    scores: Vec<f64>,
    /// Whether a grading call is outstanding
    answer_in_flight: bool,
}

impl QuizSession {
    /// Start a quiz by sampling `length` distinct words from the pool
    /// (fewer when the pool is smaller). Fails when the pool is empty.
    pub fn start(
        word_pool: &[String],
        language: Language,
        length: usize,
    ) -> Result<Self, QuizError> {
        if word_pool.is_empty() {
            return Err(QuizError::EmptyPool);
        }

        let amount = length.min(word_pool.len());
        let mut rng = rand::rng();
        let quiz_words: Vec<String> = sample(&mut rng, word_pool.len(), amount)
            .iter()
            .map(|i| word_pool[i].clone())
            .collect();

        info!("Starting quiz with {} words ({})", quiz_words.len(), language);

        Ok(Self {
            quiz_words,
            language,
            current_index: 0,
            scores: Vec::new(),
            answer_in_flight: false,
        })
    }

    /// The word currently being asked
    pub fn current_word(&self) -> Result<&str, QuizError> {
        self.quiz_words
            .get(self.current_index)
            .map(|w| w.as_str())
            .ok_or(QuizError::NotActive)
    }

    /// 1-based progress through the quiz, e.g. (3, 10)
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index + 1, self.quiz_words.len())
    }

    /// The sampled quiz words
    pub fn words(&self) -> &[String] {
        &self.quiz_words
    }

    /// Whether a grading call is outstanding
    pub fn is_grading(&self) -> bool {
        self.answer_in_flight
    }

    /// Grade the user's answer for the current word and advance.
    ///
    /// Only one grading call may be outstanding; a second submission while
    /// one is in flight fails with [`QuizError::AnswerInFlight`]. A grader
    /// failure leaves the session exactly where it was, so the same word
    /// stays active for retry.
    pub async fn submit_answer(
        &mut self,
        answer: &str,
        grader: &dyn Grader,
    ) -> Result<SubmitOutcome, crate::errors::AppError> {
        if self.answer_in_flight {
            return Err(QuizError::AnswerInFlight.into());
        }

        let word = self.current_word()?.to_string();

        self.answer_in_flight = true;
        let graded = grader.evaluate(&word, answer, self.language).await;
        self.answer_in_flight = false;

        let evaluation = graded?;
        debug!("'{}' graded {} for answer '{}'", word, evaluation.verdict, answer);

        self.scores.push(evaluation.verdict.score());

        let feedback = Self::feedback_for(&word, answer, evaluation.verdict, evaluation.explanation);

        if self.current_index == self.quiz_words.len() - 1 {
            let report = QuizReport::new(&self.quiz_words, &self.scores);
            info!("Quiz complete: {}/{}", report.total, report.max);

            // Keep quiz_words so the same set can be replayed immediately
            self.current_index = 0;
            self.scores.clear();

            Ok(SubmitOutcome::Finished { feedback, report })
        } else {
            self.current_index += 1;
            Ok(SubmitOutcome::Continue { feedback })
        }
    }

    fn feedback_for(
        word: &str,
        answer: &str,
        verdict: Verdict,
        explanation: Option<String>,
    ) -> Feedback {
        match verdict {
            Verdict::Correct => Feedback {
                title: "Correct!".to_string(),
                body: format!("\"{}\" is a translation for \"{}\"", answer, word),
            },
            Verdict::Partial => Feedback {
                title: "Almost!".to_string(),
                body: explanation.unwrap_or_default(),
            },
            Verdict::Wrong => Feedback {
                title: "That's not right...".to_string(),
                body: explanation.unwrap_or_default(),
            },
        }
    }
}
