/*!
 * AI generator backed by the OpenAI chat-completions API.
 *
 * `BotGenerator` implements both [`TextGenerator`] and [`Grader`] by
 * building prompts, sending them through the [`OpenAi`] client and
 * running the replies through the labeled-field parser.
 */

use async_trait::async_trait;
use log::debug;

use crate::errors::ProviderError;
use crate::language::Language;
use crate::parser;
use crate::providers::openai::{OpenAi, OpenAiRequest};
use crate::providers::{
    ChatMessage, Evaluation, Grader, GrammarCorrection, LyricTranslation, TextGenerator,
    UserGender, UserSkill, WordTranslation, HISTORY_SIZE,
};

/// Default model used for all generation
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Generator and grader backed by OpenAI
#[derive(Debug)]
pub struct BotGenerator {
    /// The underlying API client
    client: OpenAi,
    /// Model name to request
    model: String,
}

impl BotGenerator {
    /// Create a new generator with the given client and model
    pub fn new(client: OpenAi, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Send a single system prompt and return the raw reply text
    async fn ask(&self, prompt: String) -> Result<String, ProviderError> {
        let request = OpenAiRequest::new(&self.model).add_message("system", prompt);
        let response = self.client.complete(request).await?;
        Ok(OpenAi::extract_text_from_response(&response))
    }

    /// Render the conversation history the way the chat prompt expects it
    fn render_history(history: &[ChatMessage]) -> String {
        let window_start = history.len().saturating_sub(HISTORY_SIZE);

        history[window_start..]
            .iter()
            .map(|msg| {
                if msg.role == "assistant" {
                    format!("You said: {}\n", msg.content)
                } else {
                    format!("The user said: {}\n", msg.content)
                }
            })
            .collect()
    }
}

#[async_trait]
impl TextGenerator for BotGenerator {
    async fn word_translation(
        &self,
        word: &str,
        language: Language,
    ) -> Result<WordTranslation, ProviderError> {
        debug!("Generating word translation for '{}' ({})", word, language);

        let prompt = format!(
            "You are a {language} teacher. Translate the {language} word \"{word}\" to English \
             and give two different example sentences in {language} that use it, each with its \
             English translation.\n\
             Answer in exactly this format, one field per line:\n\
             Translation: <English translation>\n\
             Example 1: <{language} sentence>\n\
             Example 1 translation: <English translation>\n\
             Example 2: <{language} sentence>\n\
             Example 2 translation: <English translation>",
        );

        let reply = self.ask(prompt).await?;
        parser::parse_word_translation(&reply)
    }

    async fn sentence_translation(
        &self,
        sentence: &str,
        language: Language,
    ) -> Result<String, ProviderError> {
        debug!("Generating sentence translation ({})", language);

        let prompt = format!(
            "Translate the following {language} sentence to natural English. \
             Answer with the translation only, nothing else.\n{sentence}",
        );

        let reply = self.ask(prompt).await?;
        let translation = reply.trim();
        if translation.is_empty() {
            return Err(ProviderError::ParseError(
                "empty sentence translation".to_string(),
            ));
        }
        Ok(translation.to_string())
    }

    async fn lyric_translation(
        &self,
        lyric: &str,
        language: Language,
        song_title: &str,
    ) -> Result<LyricTranslation, ProviderError> {
        debug!("Generating lyric translation from '{}'", song_title);

        let prompt = format!(
            "The following line is from the {language} song \"{song_title}\":\n{lyric}\n\
             Translate it to English and explain what it means. Song lyrics are often \
             figurative, so explain the intended meaning rather than the literal words.\n\
             Answer in exactly this format, one field per line:\n\
             Translation: <English translation>\n\
             Meaning: <what the line means>",
        );

        let reply = self.ask(prompt).await?;
        parser::parse_lyric_translation(&reply)
    }

    async fn grammar_correction(
        &self,
        sentence: &str,
        language: Language,
    ) -> Result<GrammarCorrection, ProviderError> {
        debug!("Checking grammar ({})", language);

        let prompt = format!(
            "You are a {language} teacher. Check the following {language} sentence written by \
             a learner for mistakes:\n{sentence}\n\
             Answer in exactly this format, one field per line:\n\
             Correction: <the corrected sentence, or the original sentence unchanged if it \
             was already correct>\n\
             Info: <a short explanation of what was wrong, or 'none' if nothing was>",
        );

        let reply = self.ask(prompt).await?;
        parser::parse_grammar_correction(&reply)
    }

    async fn chat_reply(
        &self,
        message: &str,
        language: Language,
        skill: UserSkill,
        gender: UserGender,
        history: &[ChatMessage],
    ) -> Result<String, ProviderError> {
        debug!("Generating chat reply ({})", language);

        let conversation_history = Self::render_history(history);

        let prompt = format!(
            "You are a native human {language} speaker talking to a {skill} {gender}. \
             Do not be formal. Be chill and very brief, only speak in {language}.\n\
             Here is the conversation history: {conversation_history}\n\
             Respond to the user's last message given the context: {message}",
        );

        let reply = self.ask(prompt).await?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(ProviderError::ParseError("empty chat reply".to_string()));
        }
        Ok(reply.to_string())
    }
}

#[async_trait]
impl Grader for BotGenerator {
    async fn evaluate(
        &self,
        word: &str,
        answer: &str,
        language: Language,
    ) -> Result<Evaluation, ProviderError> {
        debug!("Grading answer for '{}'", word);

        let prompt = format!(
            "You are grading a vocabulary quiz. The {language} word is \"{word}\" and the \
             learner answered \"{answer}\" as its English translation.\n\
             Judge the answer as one of: correct (right translation), partial (close, for \
             example a related form or a near synonym), or wrong.\n\
             Answer in exactly this format, one field per line:\n\
             Correctness: <correct|partial|wrong>\n\
             Info: <a short explanation for the learner, or 'none'>",
        );

        let reply = self.ask(prompt).await?;
        parser::parse_evaluation(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderHistory_shouldLabelSpeakers() {
        let history = vec![
            ChatMessage::assistant("Bună! Ce faci?"),
            ChatMessage::user("Bine, tu?"),
        ];

        let rendered = BotGenerator::render_history(&history);
        assert_eq!(rendered, "You said: Bună! Ce faci?\nThe user said: Bine, tu?\n");
    }

    #[test]
    fn test_renderHistory_shouldCapWindowAtHistorySize() {
        let history: Vec<ChatMessage> =
            (0..HISTORY_SIZE + 5).map(|i| ChatMessage::user(format!("msg {}", i))).collect();

        let rendered = BotGenerator::render_history(&history);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), HISTORY_SIZE);
        // Oldest messages fall out of the window
        assert_eq!(lines[0], "The user said: msg 5");
    }
}
