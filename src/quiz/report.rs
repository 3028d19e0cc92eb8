/*!
 * Quiz result reporting.
 */

use std::fmt;

/// Final results of a completed quiz
#[derive(Debug, Clone, PartialEq)]
pub struct QuizReport {
    /// Total points earned
    pub total: f64,
    /// Maximum points possible (one per word)
    pub max: usize,
    /// Per-word scores, in quiz order
    pub breakdown: Vec<(String, f64)>,
}

impl QuizReport {
    /// Build a report from the quiz words and their scores.
    /// Both slices have the same length when the quiz completed normally.
    pub fn new(words: &[String], scores: &[f64]) -> Self {
        let total = scores.iter().sum();
        let breakdown = words
            .iter()
            .cloned()
            .zip(scores.iter().copied())
            .collect();

        Self {
            total,
            max: words.len(),
            breakdown,
        }
    }
}

impl fmt::Display for QuizReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "You got {}/{} points. Here's the breakdown:",
            self.total, self.max
        )?;
        writeln!(f)?;
        for (word, score) in &self.breakdown {
            writeln!(f, "{}: {}", word, score)?;
        }
        Ok(())
    }
}
