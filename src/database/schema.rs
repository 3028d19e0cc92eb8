/*!
 * Database schema definitions and migrations.
 *
 * This module contains the SQL schema for all database tables
 * and handles schema migrations for version upgrades.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    // Check current schema version
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        // Fresh database - create all tables
        info!("Initializing database schema v{}", SCHEMA_VERSION);
        create_all_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        // Need to migrate
        info!(
            "Migrating database schema from v{} to v{}",
            current_version, SCHEMA_VERSION
        );
        migrate_schema(conn, current_version)?;
    } else {
        debug!("Database schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
    // Check if the schema_version table exists
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .context("Failed to check schema_version table existence")?;

    if !table_exists {
        return Ok(0);
    }

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version in the database
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version, updated_at) VALUES (1, ?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Create all database tables
fn create_all_tables(conn: &Connection) -> Result<()> {
    // Enable WAL mode for better concurrency and crash recovery
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Create schema version table
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    // Create word_translations table: read-through cache of word lookups
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS word_translations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            word TEXT NOT NULL,
            language TEXT NOT NULL,
            translation TEXT NOT NULL,
            example_sentence1 TEXT NOT NULL,
            example_sentence1_translation TEXT NOT NULL,
            example_sentence2 TEXT NOT NULL,
            example_sentence2_translation TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE(word, language)
        );

        CREATE INDEX IF NOT EXISTS idx_word_translations_lookup ON word_translations(word, language);
        "#,
    )?;

    // Create sentence_translations table, keyed by sentence hash per story
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sentence_translations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sentence_hash TEXT NOT NULL,
            sentence TEXT NOT NULL,
            language TEXT NOT NULL,
            story_id TEXT NOT NULL,
            translation TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE(sentence_hash, language, story_id)
        );

        CREATE INDEX IF NOT EXISTS idx_sentence_translations_lookup
            ON sentence_translations(sentence_hash, language, story_id);
        "#,
    )?;

    // Create lyric_translations table, keyed by lyric hash per song
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS lyric_translations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            lyric_hash TEXT NOT NULL,
            lyric TEXT NOT NULL,
            language TEXT NOT NULL,
            song_id TEXT NOT NULL,
            translation TEXT NOT NULL,
            meaning TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE(lyric_hash, language, song_id)
        );

        CREATE INDEX IF NOT EXISTS idx_lyric_translations_lookup
            ON lyric_translations(lyric_hash, language, song_id);
        "#,
    )?;

    // Create vocab_list table; the (user_id, word) uniqueness backs the
    // "already in your list" duplicate detection
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS vocab_list (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            word TEXT NOT NULL,
            language TEXT NOT NULL,
            when_added TEXT NOT NULL,
            UNIQUE(user_id, word)
        );

        CREATE INDEX IF NOT EXISTS idx_vocab_list_user ON vocab_list(user_id, language);
        "#,
    )?;

    info!("Database schema created successfully");
    Ok(())
}

/// Migrate the schema from one version to another
fn migrate_schema(conn: &Connection, from_version: i32) -> Result<()> {
    let mut current = from_version;

    while current < SCHEMA_VERSION {
        match current {
            // Add migration steps here as schema evolves
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown schema version: {}. Cannot migrate.",
                    current
                ));
            }
        }
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    info!("Schema migration completed to v{}", SCHEMA_VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().expect("Failed to create in-memory database")
    }

    #[test]
    fn test_initializeSchema_withFreshDatabase_shouldCreateAllTables() {
        let conn = create_test_connection();

        initialize_schema(&conn).expect("Failed to initialize schema");

        // Verify tables exist
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"word_translations".to_string()));
        assert!(tables.contains(&"sentence_translations".to_string()));
        assert!(tables.contains(&"lyric_translations".to_string()));
        assert!(tables.contains(&"vocab_list".to_string()));
        assert!(tables.contains(&"schema_version".to_string()));
    }

    #[test]
    fn test_initializeSchema_calledTwice_shouldBeIdempotent() {
        let conn = create_test_connection();

        initialize_schema(&conn).expect("First initialization failed");
        initialize_schema(&conn).expect("Second initialization failed");

        let version = get_schema_version(&conn).expect("Failed to get version");
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_getSchemaVersion_withFreshDatabase_shouldReturnZero() {
        let conn = create_test_connection();
        let version = get_schema_version(&conn).expect("Failed to get version");
        assert_eq!(version, 0);
    }

    #[test]
    fn test_vocabList_duplicateUserWord_shouldViolateConstraint() {
        let conn = create_test_connection();
        initialize_schema(&conn).expect("Failed to initialize schema");

        conn.execute(
            "INSERT INTO vocab_list (user_id, word, language, when_added)
             VALUES ('user-1', 'casă', 'Romanian', datetime('now'))",
            [],
        )
        .expect("First insert should succeed");

        let result = conn.execute(
            "INSERT INTO vocab_list (user_id, word, language, when_added)
             VALUES ('user-1', 'casă', 'Romanian', datetime('now'))",
            [],
        );

        assert!(result.is_err(), "Duplicate (user_id, word) should be rejected");
    }

    #[test]
    fn test_wordTranslations_duplicateKey_insertOrIgnore_shouldBeSilent() {
        let conn = create_test_connection();
        initialize_schema(&conn).expect("Failed to initialize schema");

        for _ in 0..2 {
            conn.execute(
                "INSERT OR IGNORE INTO word_translations
                 (word, language, translation, example_sentence1, example_sentence1_translation,
                  example_sentence2, example_sentence2_translation, created_at)
                 VALUES ('apă', 'Romanian', 'water', 'Beau apă.', 'I drink water.',
                         'Apa este rece.', 'The water is cold.', datetime('now'))",
                [],
            )
            .expect("INSERT OR IGNORE should never fail on duplicates");
        }

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM word_translations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
