/*!
 * Persistence layer backed by SQLite.
 *
 * The store is a read-through cache for generated translations plus the
 * user's vocabulary list. Rows are written once and never updated.
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::DatabaseConnection;
pub use models::{
    LyricTranslationRecord, SentenceTranslationRecord, VocabListItem, WordTranslationRecord,
};
pub use repository::Repository;
