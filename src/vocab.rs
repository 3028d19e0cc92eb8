/*!
 * Vocabulary list management.
 *
 * A thin service over the repository. Adding a word the user already
 * saved is not an error at this level; it comes back as
 * [`AddOutcome::AlreadyInList`] so the caller can say so.
 */

use anyhow::Result;
use log::info;

use crate::database::{Repository, VocabListItem};
use crate::errors::StoreError;
use crate::language::Language;
use crate::lookup::normalize_word_key;

/// Outcome of adding a word to the vocabulary list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The word was added
    Added,
    /// The word was already in the user's list
    AlreadyInList,
}

/// Service for managing a user's vocabulary list
pub struct VocabService {
    repository: Repository,
}

impl VocabService {
    /// Create a new vocabulary service
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a word to the user's list. The word is normalized the same way
    /// as translation cache keys so list entries match quiz lookups.
    pub async fn add_word(
        &self,
        user_id: &str,
        word: &str,
        language: Language,
    ) -> Result<AddOutcome> {
        let word = normalize_word_key(word);
        let item = VocabListItem::new(user_id.to_string(), word.clone(), language);

        match self.repository.add_vocab_word(&item).await {
            Ok(()) => {
                info!("Added '{}' to vocabulary list for {}", word, user_id);
                Ok(AddOutcome::Added)
            }
            Err(err) => match err.downcast_ref::<StoreError>() {
                Some(StoreError::DuplicateEntry(_)) => Ok(AddOutcome::AlreadyInList),
                _ => Err(err),
            },
        }
    }

    /// Get the user's vocabulary list for a language, oldest first
    pub async fn list_words(&self, user_id: &str, language: Language) -> Result<Vec<VocabListItem>> {
        self.repository.get_vocab_list(user_id, language).await
    }

    /// Remove a word from the user's list
    pub async fn remove_word(&self, user_id: &str, word: &str) -> Result<()> {
        self.repository
            .delete_vocab_word(user_id, &normalize_word_key(word))
            .await
    }
}
