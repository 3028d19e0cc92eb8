/*!
 * # LinguaBot - AI language learning companion
 *
 * A Rust library for practicing a foreign language with AI help.
 *
 * ## Features
 *
 * - Word, sentence and song-lyric translations, generated once and cached
 *   in SQLite
 * - Grammar correction with word-level mistake counting
 * - Personal vocabulary list
 * - AI-graded vocabulary quizzes with tri-state verdicts
 * - Conversational practice with a native-speaker persona
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language`: Supported languages and starting greetings
 * - `mistakes`: Word-level mistake counting between a sentence and its
 *   correction
 * - `database`: SQLite persistence (connection, schema, repository)
 * - `providers`: Generator and grader traits plus the OpenAI client
 * - `bot`: Prompt building and reply parsing on top of the client
 * - `parser`: Labeled-field reply parsing
 * - `lookup`: Cache-or-generate translation lookups
 * - `vocab`: Vocabulary list management
 * - `quiz`: Quiz session state machine and reporting
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod bot;
pub mod database;
pub mod errors;
pub mod language;
pub mod lookup;
pub mod mistakes;
pub mod parser;
pub mod providers;
pub mod quiz;
pub mod vocab;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::Repository;
pub use errors::{AppError, ProviderError, QuizError, StoreError};
pub use language::Language;
pub use lookup::LookupService;
pub use mistakes::count_mistakes;
pub use quiz::{QuizReport, QuizSession};
pub use vocab::VocabService;
