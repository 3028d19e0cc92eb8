/*!
 * Mock generator and grader implementations for testing.
 *
 * - `MockGenerator::working()` - Always succeeds with canned translations
 * - `MockGenerator::failing()` - Always fails with an error
 * - `ScriptedGrader` - Returns a fixed sequence of verdicts
 *
 * Both count their calls so tests can assert how often the external
 * generator was actually invoked.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use linguabot::errors::ProviderError;
use linguabot::language::Language;
use linguabot::providers::{
    ChatMessage, Evaluation, Grader, GrammarCorrection, LyricTranslation, TextGenerator,
    UserGender, UserSkill, Verdict, WordTranslation,
};

/// Behavior mode for the mock generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a canned result
    Working,
    /// Always fails with an error
    Failing,
}

/// Mock text generator for testing lookup and service behavior
#[derive(Debug)]
pub struct MockGenerator {
    behavior: MockBehavior,
    call_count: Arc<AtomicUsize>,
}

impl MockGenerator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock generator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock generator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// How many generation calls were made across all methods
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, usable after the generator has
    /// been moved into a service
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.call_count.clone()
    }

    fn record_call(&self) -> Result<(), ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Working => Ok(()),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock generator set to fail".to_string(),
            )),
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn word_translation(
        &self,
        word: &str,
        _language: Language,
    ) -> Result<WordTranslation, ProviderError> {
        self.record_call()?;
        Ok(WordTranslation {
            translation: format!("{}-translated", word),
            example_sentence1: format!("Prima propoziție cu {}.", word),
            example_sentence1_translation: format!("First sentence with {}.", word),
            example_sentence2: format!("A doua propoziție cu {}.", word),
            example_sentence2_translation: format!("Second sentence with {}.", word),
        })
    }

    async fn sentence_translation(
        &self,
        sentence: &str,
        _language: Language,
    ) -> Result<String, ProviderError> {
        self.record_call()?;
        Ok(format!("{} [translated]", sentence))
    }

    async fn lyric_translation(
        &self,
        lyric: &str,
        _language: Language,
        _song_title: &str,
    ) -> Result<LyricTranslation, ProviderError> {
        self.record_call()?;
        Ok(LyricTranslation {
            translation: format!("{} [translated]", lyric),
            meaning: format!("{} [meaning]", lyric),
        })
    }

    async fn grammar_correction(
        &self,
        sentence: &str,
        _language: Language,
    ) -> Result<GrammarCorrection, ProviderError> {
        self.record_call()?;
        Ok(GrammarCorrection {
            corrected: sentence.to_string(),
            info: String::new(),
        })
    }

    async fn chat_reply(
        &self,
        _message: &str,
        _language: Language,
        _skill: UserSkill,
        _gender: UserGender,
        _history: &[ChatMessage],
    ) -> Result<String, ProviderError> {
        self.record_call()?;
        Ok("Da, sigur!".to_string())
    }
}

/// Grader that returns a fixed sequence of verdicts, cycling when the
/// sequence runs out
#[derive(Debug)]
pub struct ScriptedGrader {
    verdicts: Vec<Verdict>,
    call_count: Arc<AtomicUsize>,
}

impl ScriptedGrader {
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self {
            verdicts,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Grader for ScriptedGrader {
    async fn evaluate(
        &self,
        word: &str,
        _answer: &str,
        _language: Language,
    ) -> Result<Evaluation, ProviderError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);
        let verdict = self.verdicts[call % self.verdicts.len()];
        Ok(Evaluation {
            verdict,
            explanation: Some(format!("explanation for {}", word)),
        })
    }
}
