use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the tutor can teach.
///
/// The set is fixed: prompts, greetings, and the mistake counter's
/// normalization rules are tuned for these six Latin-script languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Romanian,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
}

impl Language {
    /// All supported languages, in display order
    pub fn all() -> &'static [Language] {
        &[
            Language::Romanian,
            Language::Spanish,
            Language::French,
            Language::German,
            Language::Italian,
            Language::Portuguese,
        ]
    }

    /// The greeting the bot opens a new conversation with
    pub fn starting_greeting(&self) -> &'static str {
        match self {
            Language::Romanian => "Bună! Ce faci?",
            Language::Spanish => "Hola! ¿Cómo estás?",
            Language::French => "Salut! Comment ça va?",
            Language::German => "Hallo! Wie geht es dir?",
            Language::Italian => "Ciao! Come stai?",
            Language::Portuguese => "Olá! Como você está?",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Romanian => "Romanian",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "romanian" => Ok(Language::Romanian),
            "spanish" => Ok(Language::Spanish),
            "french" => Ok(Language::French),
            "german" => Ok(Language::German),
            "italian" => Ok(Language::Italian),
            "portuguese" => Ok(Language::Portuguese),
            _ => Err(anyhow!("Invalid language: {}", s)),
        }
    }
}
