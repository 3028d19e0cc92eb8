// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::time::Duration;

use linguabot::app_config::{self, Config};
use linguabot::bot::BotGenerator;
use linguabot::database::{DatabaseConnection, Repository};
use linguabot::language::Language;
use linguabot::lookup::LookupService;
use linguabot::mistakes::count_mistakes;
use linguabot::providers::openai::OpenAi;
use linguabot::providers::{ChatMessage, Grader, TextGenerator, UserGender, UserSkill};
use linguabot::quiz::{QuizSession, SubmitOutcome};
use linguabot::vocab::{AddOutcome, VocabService};

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a word and show example sentences
    Translate {
        /// The word to translate
        word: String,
    },

    /// Translate a full sentence
    Sentence {
        /// The sentence to translate
        sentence: String,

        /// Story the sentence belongs to (scopes the cache)
        #[arg(long, default_value = "cli")]
        story_id: String,
    },

    /// Translate a song lyric line and explain its meaning
    Lyric {
        /// The lyric line to translate
        lyric: String,

        /// Song the lyric belongs to (scopes the cache)
        #[arg(long, default_value = "cli")]
        song_id: String,

        /// Title of the song, given to the generator as context
        #[arg(long, default_value = "")]
        song_title: String,
    },

    /// Check a sentence for grammar mistakes
    Check {
        /// The sentence to check
        sentence: String,
    },

    /// Manage your vocabulary list
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },

    /// Run a vocabulary quiz
    Quiz,

    /// Chat with the bot
    Chat,

    /// Print the starting greeting for the configured language
    Greeting,
}

#[derive(Subcommand, Debug)]
enum VocabAction {
    /// List saved words
    List,
    /// Add a word to the list
    Add {
        /// The word to add
        word: String,
    },
    /// Remove a word from the list
    Remove {
        /// The word to remove
        word: String,
    },
}

/// LinguaBot - practice a foreign language with AI help
#[derive(Parser, Debug)]
#[command(name = "linguabot")]
#[command(version = "1.0.0")]
#[command(about = "AI language learning companion")]
#[command(long_about = "LinguaBot translates words, sentences and song lyrics, keeps a personal
vocabulary list and quizzes you on it with AI grading.

EXAMPLES:
    linguabot translate casă                # Translate a word with examples
    linguabot sentence \"Am fost la piață.\"  # Translate a sentence
    linguabot vocab add casă                # Save a word for quizzing
    linguabot quiz                          # Quiz yourself on saved words
    linguabot chat                          # Talk with the bot

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger writing colored lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn user_skill(config: &Config) -> UserSkill {
    match config.skill.to_lowercase().as_str() {
        "intermediate" => UserSkill::Intermediate,
        _ => UserSkill::Beginner,
    }
}

fn user_gender(config: &Config) -> UserGender {
    match config.gender.to_lowercase().as_str() {
        "man" => UserGender::Man,
        _ => UserGender::Woman,
    }
}

fn build_generator(config: &Config) -> BotGenerator {
    let client = OpenAi::with_timeout(
        config.provider.api_key.clone(),
        config.provider.endpoint.clone(),
        config.provider.timeout_secs,
    );
    BotGenerator::new(client, config.provider.model.clone())
}

fn build_lookup(config: &Config, repository: Repository) -> LookupService<BotGenerator> {
    let mut lookup = LookupService::new(repository, build_generator(config));
    if config.min_reveal_delay_ms > 0 {
        lookup = lookup.with_min_reveal_delay(Duration::from_millis(config.min_reveal_delay_ms));
    }
    lookup
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default.
    // The level is updated after loading the config if needed.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let config_existed = std::path::Path::new(&cli.config_path).exists();
    let mut config = Config::load_or_create(&cli.config_path)?;
    if !config_existed {
        warn!(
            "Config file not found at '{}', created a default one. Set your API key there.",
            cli.config_path
        );
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    // The greeting works without credentials; everything else needs them
    if let Commands::Greeting = cli.command {
        let language = config.language()?;
        println!("{}", language.starting_greeting());
        return Ok(());
    }

    config.validate().context("Configuration validation failed")?;
    let language = config.language()?;

    let db = DatabaseConnection::new_default()?;
    let repository = Repository::new(db);

    match cli.command {
        Commands::Translate { word } => {
            let lookup = build_lookup(&config, repository);
            let record = lookup.word(&word, language).await?;

            println!("\"{}\" means \"{}\".", record.word, record.translation);
            println!();
            println!("{}", record.example_sentence1);
            println!("({})", record.example_sentence1_translation);
            println!();
            println!("{}", record.example_sentence2);
            println!("({})", record.example_sentence2_translation);
        }

        Commands::Sentence { sentence, story_id } => {
            let lookup = build_lookup(&config, repository);
            let translation = lookup.sentence(&sentence, language, &story_id).await?;

            println!("{}", sentence);
            println!();
            println!("{}", translation);
        }

        Commands::Lyric {
            lyric,
            song_id,
            song_title,
        } => {
            let lookup = build_lookup(&config, repository);
            let record = lookup.lyric(&lyric, language, &song_id, &song_title).await?;

            println!("{}", record.lyric);
            println!();
            println!("{}", record.translation);
            println!();
            println!("{}", record.meaning);
        }

        Commands::Check { sentence } => {
            let generator = build_generator(&config);
            let correction = generator.grammar_correction(&sentence, language).await?;
            let mistakes = count_mistakes(&sentence, &correction.corrected);

            if mistakes == 0 {
                println!("No mistakes!");
            } else {
                println!("{} mistake(s).", mistakes);
                println!("Corrected: {}", correction.corrected);
                if !correction.info.is_empty() {
                    println!("{}", correction.info);
                }
            }
        }

        Commands::Vocab { action } => {
            let vocab = VocabService::new(repository);
            match action {
                VocabAction::List => {
                    let items = vocab.list_words(&config.user_id, language).await?;
                    if items.is_empty() {
                        println!("Your vocabulary list is empty.");
                    } else {
                        for item in items {
                            println!("{}  ({})", item.word, item.when_added);
                        }
                    }
                }
                VocabAction::Add { word } => match vocab
                    .add_word(&config.user_id, &word, language)
                    .await?
                {
                    AddOutcome::Added => println!("Added \"{}\" to your list.", word),
                    AddOutcome::AlreadyInList => {
                        println!("\"{}\" is already in your list.", word)
                    }
                },
                VocabAction::Remove { word } => {
                    vocab.remove_word(&config.user_id, &word).await?;
                    println!("Removed \"{}\" from your list.", word);
                }
            }
        }

        Commands::Quiz => {
            let vocab = VocabService::new(repository);
            let items = vocab.list_words(&config.user_id, language).await?;
            let pool: Vec<String> = items.into_iter().map(|i| i.word).collect();

            let grader = build_generator(&config);
            run_quiz(&pool, language, config.quiz_length, &grader).await?;
        }

        Commands::Chat => {
            let generator = build_generator(&config);
            run_chat(&generator, &config, language).await?;
        }

        Commands::Greeting => unreachable!("handled above"),
    }

    Ok(())
}

/// Interactive quiz loop over stdin
async fn run_quiz(
    pool: &[String],
    language: Language,
    quiz_length: usize,
    grader: &dyn Grader,
) -> Result<()> {
    let mut session = QuizSession::start(pool, language, quiz_length)
        .map_err(|e| anyhow!(e.to_string()))?;

    info!("Quiz started with {} words", session.words().len());

    loop {
        let (position, total) = session.progress();
        let word = session.current_word().map_err(|e| anyhow!(e.to_string()))?.to_string();

        println!();
        println!("[{}/{}] Translate to English: {}", position, total, word);
        let answer = read_line("> ")?;

        match session.submit_answer(&answer, grader).await {
            Ok(SubmitOutcome::Continue { feedback }) => {
                println!("{} {}", feedback.title, feedback.body);
            }
            Ok(SubmitOutcome::Finished { feedback, report }) => {
                println!("{} {}", feedback.title, feedback.body);
                println!();
                println!("{}", report);
                return Ok(());
            }
            Err(e) => {
                // Grading failed; the same word stays active
                warn!("Grading failed: {}. Try again.", e);
            }
        }
    }
}

/// Interactive chat loop over stdin. An empty line ends the conversation.
async fn run_chat(
    generator: &BotGenerator,
    config: &Config,
    language: Language,
) -> Result<()> {
    let greeting = language.starting_greeting();
    println!("{}", greeting);

    let mut history: Vec<ChatMessage> = vec![ChatMessage::assistant(greeting)];

    loop {
        let message = read_line("> ")?;
        if message.is_empty() {
            return Ok(());
        }

        let reply = generator
            .chat_reply(
                &message,
                language,
                user_skill(config),
                user_gender(config),
                &history,
            )
            .await?;

        println!("{}", reply);

        history.push(ChatMessage::user(&message));
        history.push(ChatMessage::assistant(&reply));
    }
}
