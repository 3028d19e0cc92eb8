/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data. Translation rows are immutable
 * once written: the cache-or-generate protocol writes each key at most
 * once and never updates it.
 */

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Cached translation of a single word, with two example sentence pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordTranslationRecord {
    /// Database ID
    pub id: i64,
    /// The word, normalized (lowercased, punctuation stripped)
    pub word: String,
    /// Language the word belongs to
    pub language: Language,
    /// English translation
    pub translation: String,
    /// First example sentence in the foreign language
    pub example_sentence1: String,
    /// English translation of the first example sentence
    pub example_sentence1_translation: String,
    /// Second example sentence in the foreign language
    pub example_sentence2: String,
    /// English translation of the second example sentence
    pub example_sentence2_translation: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}

impl WordTranslationRecord {
    /// Create a new word translation record (without database ID)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        word: String,
        language: Language,
        translation: String,
        example_sentence1: String,
        example_sentence1_translation: String,
        example_sentence2: String,
        example_sentence2_translation: String,
    ) -> Self {
        Self {
            id: 0, // Will be assigned by database
            word,
            language,
            translation,
            example_sentence1,
            example_sentence1_translation,
            example_sentence2,
            example_sentence2_translation,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Cached translation of a full sentence within a story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceTranslationRecord {
    /// Database ID
    pub id: i64,
    /// SHA256 hash of the sentence text (lookup key)
    pub sentence_hash: String,
    /// Original sentence text
    pub sentence: String,
    /// Language the sentence is written in
    pub language: Language,
    /// Story the sentence belongs to
    pub story_id: String,
    /// English translation
    pub translation: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}

impl SentenceTranslationRecord {
    /// Create a new sentence translation record (without database ID)
    pub fn new(
        sentence_hash: String,
        sentence: String,
        language: Language,
        story_id: String,
        translation: String,
    ) -> Self {
        Self {
            id: 0, // Will be assigned by database
            sentence_hash,
            sentence,
            language,
            story_id,
            translation,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Cached translation and meaning of a song lyric line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricTranslationRecord {
    /// Database ID
    pub id: i64,
    /// SHA256 hash of the lyric text (lookup key)
    pub lyric_hash: String,
    /// Original lyric text
    pub lyric: String,
    /// Language the lyric is written in
    pub language: Language,
    /// Song the lyric belongs to
    pub song_id: String,
    /// English translation
    pub translation: String,
    /// Explanation of what the lyric means
    pub meaning: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}

impl LyricTranslationRecord {
    /// Create a new lyric translation record (without database ID)
    pub fn new(
        lyric_hash: String,
        lyric: String,
        language: Language,
        song_id: String,
        translation: String,
        meaning: String,
    ) -> Self {
        Self {
            id: 0, // Will be assigned by database
            lyric_hash,
            lyric,
            language,
            song_id,
            translation,
            meaning,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A word saved to a user's vocabulary list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabListItem {
    /// Database ID
    pub id: i64,
    /// Owner of the list entry
    pub user_id: String,
    /// The saved word
    pub word: String,
    /// Language the word belongs to
    pub language: Language,
    /// When the word was added (ISO 8601)
    pub when_added: String,
}

impl VocabListItem {
    /// Create a new vocabulary list item (without database ID)
    pub fn new(user_id: String, word: String, language: Language) -> Self {
        Self {
            id: 0, // Will be assigned by database
            user_id,
            word,
            language,
            when_added: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordTranslationRecord_new_shouldSetTimestamp() {
        let record = WordTranslationRecord::new(
            "casă".to_string(),
            Language::Romanian,
            "house".to_string(),
            "Casa este mare.".to_string(),
            "The house is big.".to_string(),
            "Merg acasă.".to_string(),
            "I am going home.".to_string(),
        );

        assert_eq!(record.id, 0);
        assert_eq!(record.word, "casă");
        assert!(!record.created_at.is_empty());
    }

    #[test]
    fn test_vocabListItem_new_shouldCarryLanguage() {
        let item = VocabListItem::new("user-1".to_string(), "apă".to_string(), Language::Romanian);
        assert_eq!(item.language, Language::Romanian);
        assert_eq!(item.user_id, "user-1");
    }
}
