/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for all database operations,
 * abstracting away the SQL details and providing type-safe access.
 *
 * Translation lookups are exact-match only. Inserts into the translation
 * tables use INSERT OR IGNORE: two concurrent misses on the same key may
 * both try to persist, and the second write is silently dropped. That race
 * is accepted; the worst outcome is a redundant insert attempt.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{params, OptionalExtension};
use sha2::{Digest, Sha256};

use crate::errors::StoreError;
use crate::language::Language;

use super::connection::DatabaseConnection;
use super::models::{
    LyricTranslationRecord, SentenceTranslationRecord, VocabListItem, WordTranslationRecord,
};

/// Parse a stored language column value. A value that no longer parses is
/// data corruption and fails the row instead of mislabeling it.
fn parse_language_column(value: String, column_index: usize) -> rusqlite::Result<Language> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            column_index,
            rusqlite::types::Type::Text,
            format!("unknown language '{}'", value).into(),
        )
    })
}

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Compute SHA256 hash of text, used to key sentence and lyric rows
    pub fn hash_text(text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    // =========================================================================
    // Word Translation Operations
    // =========================================================================

    /// Get a cached word translation, if one exists
    pub async fn get_word_translation(
        &self,
        word: &str,
        language: Language,
    ) -> Result<Option<WordTranslationRecord>> {
        let word = word.to_string();

        self.db
            .execute_async(move |conn| {
                let result = conn
                    .query_row(
                        r#"
                        SELECT id, word, language, translation,
                               example_sentence1, example_sentence1_translation,
                               example_sentence2, example_sentence2_translation, created_at
                        FROM word_translations
                        WHERE word = ?1 AND language = ?2
                        "#,
                        params![word, language.to_string()],
                        |row| {
                            Ok(WordTranslationRecord {
                                id: row.get(0)?,
                                word: row.get(1)?,
                                language: parse_language_column(row.get(2)?, 2)?,
                                translation: row.get(3)?,
                                example_sentence1: row.get(4)?,
                                example_sentence1_translation: row.get(5)?,
                                example_sentence2: row.get(6)?,
                                example_sentence2_translation: row.get(7)?,
                                created_at: row.get(8)?,
                            })
                        },
                    )
                    .optional()?;

                Ok(result)
            })
            .await
    }

    /// Persist a generated word translation. Written at most once per
    /// (word, language); a duplicate insert is ignored.
    pub async fn insert_word_translation(&self, record: &WordTranslationRecord) -> Result<()> {
        let record = record.clone();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT OR IGNORE INTO word_translations (
                        word, language, translation,
                        example_sentence1, example_sentence1_translation,
                        example_sentence2, example_sentence2_translation, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                    "#,
                    params![
                        record.word,
                        record.language.to_string(),
                        record.translation,
                        record.example_sentence1,
                        record.example_sentence1_translation,
                        record.example_sentence2,
                        record.example_sentence2_translation,
                        record.created_at,
                    ],
                )?;

                debug!("Cached word translation for '{}'", record.word);
                Ok(())
            })
            .await
    }

    // =========================================================================
    // Sentence Translation Operations
    // =========================================================================

    /// Get a cached sentence translation within a story, if one exists
    pub async fn get_sentence_translation(
        &self,
        sentence: &str,
        language: Language,
        story_id: &str,
    ) -> Result<Option<String>> {
        let sentence_hash = Self::hash_text(sentence);
        let story_id = story_id.to_string();

        self.db
            .execute_async(move |conn| {
                let result = conn
                    .query_row(
                        r#"
                        SELECT translation
                        FROM sentence_translations
                        WHERE sentence_hash = ?1 AND language = ?2 AND story_id = ?3
                        "#,
                        params![sentence_hash, language.to_string(), story_id],
                        |row| row.get(0),
                    )
                    .optional()?;

                Ok(result)
            })
            .await
    }

    /// Persist a generated sentence translation (write-once per key)
    pub async fn insert_sentence_translation(
        &self,
        record: &SentenceTranslationRecord,
    ) -> Result<()> {
        let record = record.clone();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT OR IGNORE INTO sentence_translations (
                        sentence_hash, sentence, language, story_id, translation, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    "#,
                    params![
                        record.sentence_hash,
                        record.sentence,
                        record.language.to_string(),
                        record.story_id,
                        record.translation,
                        record.created_at,
                    ],
                )?;

                debug!("Cached sentence translation in story {}", record.story_id);
                Ok(())
            })
            .await
    }

    // =========================================================================
    // Lyric Translation Operations
    // =========================================================================

    /// Get a cached lyric translation and meaning within a song, if one exists
    pub async fn get_lyric_translation(
        &self,
        lyric: &str,
        language: Language,
        song_id: &str,
    ) -> Result<Option<LyricTranslationRecord>> {
        let lyric_hash = Self::hash_text(lyric);
        let song_id = song_id.to_string();

        self.db
            .execute_async(move |conn| {
                let result = conn
                    .query_row(
                        r#"
                        SELECT id, lyric_hash, lyric, language, song_id,
                               translation, meaning, created_at
                        FROM lyric_translations
                        WHERE lyric_hash = ?1 AND language = ?2 AND song_id = ?3
                        "#,
                        params![lyric_hash, language.to_string(), song_id],
                        |row| {
                            Ok(LyricTranslationRecord {
                                id: row.get(0)?,
                                lyric_hash: row.get(1)?,
                                lyric: row.get(2)?,
                                language: parse_language_column(row.get(3)?, 3)?,
                                song_id: row.get(4)?,
                                translation: row.get(5)?,
                                meaning: row.get(6)?,
                                created_at: row.get(7)?,
                            })
                        },
                    )
                    .optional()?;

                Ok(result)
            })
            .await
    }

    /// Persist a generated lyric translation and meaning (write-once per key)
    pub async fn insert_lyric_translation(&self, record: &LyricTranslationRecord) -> Result<()> {
        let record = record.clone();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    r#"
                    INSERT OR IGNORE INTO lyric_translations (
                        lyric_hash, lyric, language, song_id, translation, meaning, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                    "#,
                    params![
                        record.lyric_hash,
                        record.lyric,
                        record.language.to_string(),
                        record.song_id,
                        record.translation,
                        record.meaning,
                        record.created_at,
                    ],
                )?;

                debug!("Cached lyric translation in song {}", record.song_id);
                Ok(())
            })
            .await
    }

    // =========================================================================
    // Vocabulary List Operations
    // =========================================================================

    /// Add a word to a user's vocabulary list.
    ///
    /// Fails with [`StoreError::DuplicateEntry`] when the (user_id, word)
    /// pair already exists, so the caller can present "already in your list"
    /// instead of a generic failure.
    pub async fn add_vocab_word(&self, item: &VocabListItem) -> Result<()> {
        let item = item.clone();

        self.db
            .execute_async(move |conn| {
                let result = conn.execute(
                    r#"
                    INSERT INTO vocab_list (user_id, word, language, when_added)
                    VALUES (?1, ?2, ?3, ?4)
                    "#,
                    params![
                        item.user_id,
                        item.word,
                        item.language.to_string(),
                        item.when_added,
                    ],
                );

                match result {
                    Ok(_) => Ok(()),
                    Err(rusqlite::Error::SqliteFailure(e, _))
                        if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                    {
                        Err(StoreError::DuplicateEntry(item.word.clone()).into())
                    }
                    Err(e) => Err(e.into()),
                }
            })
            .await
    }

    /// Get a user's vocabulary list for a language, oldest first
    pub async fn get_vocab_list(
        &self,
        user_id: &str,
        language: Language,
    ) -> Result<Vec<VocabListItem>> {
        let user_id = user_id.to_string();

        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(
                    r#"
                    SELECT id, user_id, word, language, when_added
                    FROM vocab_list
                    WHERE user_id = ?1 AND language = ?2
                    ORDER BY when_added
                    "#,
                )?;

                let rows = stmt.query_map(params![user_id, language.to_string()], |row| {
                    Ok(VocabListItem {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        word: row.get(2)?,
                        language: parse_language_column(row.get(3)?, 3)?,
                        when_added: row.get(4)?,
                    })
                })?;

                // A row that fails to map fails the whole query
                let items = rows.collect::<rusqlite::Result<Vec<VocabListItem>>>()?;
                Ok(items)
            })
            .await
    }

    /// Remove a word from a user's vocabulary list
    pub async fn delete_vocab_word(&self, user_id: &str, word: &str) -> Result<()> {
        let user_id = user_id.to_string();
        let word = word.to_string();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    "DELETE FROM vocab_list WHERE user_id = ?1 AND word = ?2",
                    params![user_id, word],
                )?;
                Ok(())
            })
            .await
    }
}
