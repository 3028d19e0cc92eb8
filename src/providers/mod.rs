/*!
 * Provider abstractions for AI-backed text generation.
 *
 * This module defines the interfaces the rest of the application depends
 * on for AI work:
 * - `TextGenerator`: translations, corrections and chat replies
 * - `Grader`: quiz answer evaluation
 *
 * The concrete implementation lives in the `openai` module; tests supply
 * their own mocks.
 */

use async_trait::async_trait;
use std::fmt;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::language::Language;

pub mod openai;

/// How many recent conversation messages are sent along with a chat prompt
pub const HISTORY_SIZE: usize = 15;

/// A single message in a chat exchange
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Role of the message sender (user or assistant)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Self-reported skill level of the user, passed along to the generator
/// so replies match the user's level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSkill {
    Beginner,
    Intermediate,
}

impl fmt::Display for UserSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSkill::Beginner => write!(f, "beginner"),
            UserSkill::Intermediate => write!(f, "intermediate"),
        }
    }
}

/// Gender of the user. Matters for languages with gendered grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserGender {
    Woman,
    Man,
}

impl fmt::Display for UserGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserGender::Woman => write!(f, "woman"),
            UserGender::Man => write!(f, "man"),
        }
    }
}

/// Generated translation of a word, with two example sentence pairs
#[derive(Debug, Clone, PartialEq)]
pub struct WordTranslation {
    /// English translation of the word
    pub translation: String,
    /// First example sentence using the word
    pub example_sentence1: String,
    /// English translation of the first example
    pub example_sentence1_translation: String,
    /// Second example sentence using the word
    pub example_sentence2: String,
    /// English translation of the second example
    pub example_sentence2_translation: String,
}

/// Generated translation and meaning of a song lyric line
#[derive(Debug, Clone, PartialEq)]
pub struct LyricTranslation {
    /// English translation of the lyric
    pub translation: String,
    /// Explanation of what the lyric means
    pub meaning: String,
}

/// Result of checking a user's sentence for grammar mistakes
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarCorrection {
    /// The corrected sentence (identical to the input when nothing was wrong)
    pub corrected: String,
    /// Short explanation of what was wrong, if anything
    pub info: String,
}

/// Outcome of grading a single quiz answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The answer is right
    Correct,
    /// The answer is close but not quite right
    Partial,
    /// The answer is wrong
    Wrong,
}

impl Verdict {
    /// Points awarded for this verdict
    pub fn score(self) -> f64 {
        match self {
            Verdict::Correct => 1.0,
            Verdict::Partial => 0.5,
            Verdict::Wrong => 0.0,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct"),
            Verdict::Partial => write!(f, "Partial"),
            Verdict::Wrong => write!(f, "Wrong"),
        }
    }
}

/// Graded evaluation of a quiz answer
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// How the answer was judged
    pub verdict: Verdict,
    /// Extra explanation shown to the user, when the grader offered one
    pub explanation: Option<String>,
}

/// Interface for AI text generation
///
/// Every method is a single request/response exchange; callers decide
/// what to cache and how to handle failures.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Translate a word and produce two example sentences using it
    async fn word_translation(
        &self,
        word: &str,
        language: Language,
    ) -> Result<WordTranslation, ProviderError>;

    /// Translate a full sentence to English
    async fn sentence_translation(
        &self,
        sentence: &str,
        language: Language,
    ) -> Result<String, ProviderError>;

    /// Translate a song lyric line and explain its meaning, given the
    /// title of the song it comes from
    async fn lyric_translation(
        &self,
        lyric: &str,
        language: Language,
        song_title: &str,
    ) -> Result<LyricTranslation, ProviderError>;

    /// Check a user's sentence for grammar mistakes
    async fn grammar_correction(
        &self,
        sentence: &str,
        language: Language,
    ) -> Result<GrammarCorrection, ProviderError>;

    /// Produce the next conversational reply to `message` given recent
    /// history (only the last [`HISTORY_SIZE`] entries are sent)
    async fn chat_reply(
        &self,
        message: &str,
        language: Language,
        skill: UserSkill,
        gender: UserGender,
        history: &[ChatMessage],
    ) -> Result<String, ProviderError>;
}

/// Interface for grading quiz answers
#[async_trait]
pub trait Grader: Send + Sync + Debug {
    /// Judge a user's translation of a quiz word
    async fn evaluate(
        &self,
        word: &str,
        answer: &str,
        language: Language,
    ) -> Result<Evaluation, ProviderError>;
}
