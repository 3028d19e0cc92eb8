/*!
 * Read-through translation lookups.
 *
 * `LookupService` answers word, sentence and lyric translation requests
 * from the cache first and calls the generator only on a miss, persisting
 * the result so the same key is generated at most once. A generator
 * failure on a miss leaves the cache untouched.
 *
 * Sentence and lyric lookups can carry a minimum reveal delay so that a
 * cache hit does not come back suspiciously fast compared to a generated
 * answer.
 */

use anyhow::Result;
use log::{debug, info};
use std::time::{Duration, Instant};

use crate::database::{
    LyricTranslationRecord, Repository, SentenceTranslationRecord, WordTranslationRecord,
};
use crate::language::Language;
use crate::providers::TextGenerator;

/// Characters stripped from a word before it is used as a cache key
const WORD_KEY_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

/// Normalize a word into its cache-key form: punctuation stripped,
/// lowercased. "Casa," and "casa" share one cache entry.
pub fn normalize_word_key(word: &str) -> String {
    word.chars()
        .filter(|c| !WORD_KEY_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Cache-or-generate lookup service
pub struct LookupService<G: TextGenerator> {
    /// Persistent translation cache
    repository: Repository,
    /// Generator called on cache misses
    generator: G,
    /// Minimum time before a sentence or lyric result is returned
    min_reveal_delay: Option<Duration>,
}

impl<G: TextGenerator> LookupService<G> {
    /// Create a new lookup service with no reveal delay
    pub fn new(repository: Repository, generator: G) -> Self {
        Self {
            repository,
            generator,
            min_reveal_delay: None,
        }
    }

    /// Set a minimum reveal delay for sentence and lyric lookups
    pub fn with_min_reveal_delay(mut self, delay: Duration) -> Self {
        self.min_reveal_delay = Some(delay);
        self
    }

    /// Look up the translation and examples for a word, generating and
    /// caching them on a miss
    pub async fn word(&self, word: &str, language: Language) -> Result<WordTranslationRecord> {
        let key = normalize_word_key(word);

        if let Some(cached) = self.repository.get_word_translation(&key, language).await? {
            debug!("Cache hit for word '{}'", key);
            return Ok(cached);
        }

        info!("Cache miss for word '{}', generating", key);
        let generated = self.generator.word_translation(&key, language).await?;

        let record = WordTranslationRecord::new(
            key,
            language,
            generated.translation,
            generated.example_sentence1,
            generated.example_sentence1_translation,
            generated.example_sentence2,
            generated.example_sentence2_translation,
        );
        self.repository.insert_word_translation(&record).await?;

        Ok(record)
    }

    /// Look up the translation of a sentence within a story
    pub async fn sentence(
        &self,
        sentence: &str,
        language: Language,
        story_id: &str,
    ) -> Result<String> {
        let started = Instant::now();

        let translation = match self
            .repository
            .get_sentence_translation(sentence, language, story_id)
            .await?
        {
            Some(cached) => {
                debug!("Cache hit for sentence in story {}", story_id);
                cached
            }
            None => {
                info!("Cache miss for sentence in story {}, generating", story_id);
                let generated = self.generator.sentence_translation(sentence, language).await?;

                let record = SentenceTranslationRecord::new(
                    Repository::hash_text(sentence),
                    sentence.to_string(),
                    language,
                    story_id.to_string(),
                    generated.clone(),
                );
                self.repository.insert_sentence_translation(&record).await?;
                generated
            }
        };

        self.hold_until_min_delay(started).await;
        Ok(translation)
    }

    /// Look up the translation and meaning of a song lyric line
    pub async fn lyric(
        &self,
        lyric: &str,
        language: Language,
        song_id: &str,
        song_title: &str,
    ) -> Result<LyricTranslationRecord> {
        let started = Instant::now();

        let record = match self
            .repository
            .get_lyric_translation(lyric, language, song_id)
            .await?
        {
            Some(cached) => {
                debug!("Cache hit for lyric in song {}", song_id);
                cached
            }
            None => {
                info!("Cache miss for lyric in song {}, generating", song_id);
                let generated = self
                    .generator
                    .lyric_translation(lyric, language, song_title)
                    .await?;

                let record = LyricTranslationRecord::new(
                    Repository::hash_text(lyric),
                    lyric.to_string(),
                    language,
                    song_id.to_string(),
                    generated.translation,
                    generated.meaning,
                );
                self.repository.insert_lyric_translation(&record).await?;
                record
            }
        };

        self.hold_until_min_delay(started).await;
        Ok(record)
    }

    /// Sleep out the remainder of the minimum reveal delay, if configured
    async fn hold_until_min_delay(&self, started: Instant) {
        if let Some(min_delay) = self.min_reveal_delay {
            let elapsed = started.elapsed();
            if elapsed < min_delay {
                tokio::time::sleep(min_delay - elapsed).await;
            }
        }
    }
}
