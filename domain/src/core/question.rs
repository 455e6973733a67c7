//! Question value object

use super::error::DomainError;
use super::labels::option_letter;
use serde::Serialize;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// A multiple-choice question (Value Object)
///
/// Built once when the question bank is loaded and shared read-only
/// across every round that draws it. Option order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Create a validated question.
    ///
    /// Fails when the text is blank, fewer than [`MIN_OPTIONS`] options are
    /// given, an option is blank, or `correct_index` is out of range.
    pub fn try_new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text cannot be empty".to_string(),
            ));
        }
        if options.len() < MIN_OPTIONS {
            return Err(DomainError::InvalidQuestion(format!(
                "expected at least {} options, got {}",
                MIN_OPTIONS,
                options.len()
            )));
        }
        if let Some(pos) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(DomainError::InvalidQuestion(format!(
                "option {} is empty",
                option_letter(pos)
            )));
        }
        if correct_index >= options.len() {
            return Err(DomainError::InvalidQuestion(format!(
                "correct index {} out of range for {} options",
                correct_index,
                options.len()
            )));
        }

        Ok(Self {
            text,
            options,
            correct_index,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Check whether `index` is the correct answer
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// Options paired with their display labels (`A`, `B`, ...)
    pub fn labelled_options(&self) -> impl Iterator<Item = (char, &str)> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, o)| (option_letter(i), o.as_str()))
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("Capital of France?", opts(&["Berlin", "Paris"]), 1).unwrap();
        assert_eq!(q.text(), "Capital of France?");
        assert_eq!(q.option_count(), 2);
        assert_eq!(q.correct_option(), "Paris");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn test_empty_text_rejected() {
        let err = Question::try_new("   ", opts(&["a", "b"]), 0).unwrap_err();
        assert!(err.to_string().contains("text cannot be empty"));
    }

    #[test]
    fn test_single_option_rejected() {
        assert!(Question::try_new("Q?", opts(&["only"]), 0).is_err());
    }

    #[test]
    fn test_blank_option_rejected() {
        let err = Question::try_new("Q?", opts(&["a", " "]), 0).unwrap_err();
        assert!(err.to_string().contains("option B is empty"));
    }

    #[test]
    fn test_correct_index_out_of_range() {
        let err = Question::try_new("Q?", opts(&["a", "b", "c"]), 3).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_labelled_options() {
        let q = Question::try_new("Q?", opts(&["x", "y", "z"]), 2).unwrap();
        let labels: Vec<_> = q.labelled_options().collect();
        assert_eq!(labels, vec![('A', "x"), ('B', "y"), ('C', "z")]);
    }
}
