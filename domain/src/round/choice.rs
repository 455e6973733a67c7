//! Parsing of a typed answer into an option index

use crate::core::labels::{letter_index, option_letter};
use thiserror::Error;

/// Why a typed line is not a usable choice.
///
/// These are recovered locally by re-prompting; they never end a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("no choice entered")]
    Empty,

    #[error("'{0}' is not a valid choice")]
    Unparseable(String),

    #[error("choice '{input}' is out of range (valid: A-{last})")]
    OutOfRange { input: String, last: char },
}

/// Parse one input line into a zero-based option index.
///
/// Accepts a single letter (`b`, ` B `) or a 1-based number (`2`).
/// Surrounding whitespace is ignored.
pub fn parse_choice(line: &str, option_count: usize) -> Result<usize, ChoiceError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ChoiceError::Empty);
    }

    let index = if let Ok(number) = trimmed.parse::<usize>() {
        // 0 is out of range for a 1-based answer
        number.checked_sub(1).ok_or_else(|| out_of_range(trimmed, option_count))?
    } else {
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                letter_index(c).ok_or_else(|| ChoiceError::Unparseable(trimmed.to_string()))?
            }
            _ => return Err(ChoiceError::Unparseable(trimmed.to_string())),
        }
    };

    if index >= option_count {
        return Err(out_of_range(trimmed, option_count));
    }
    Ok(index)
}

fn out_of_range(input: &str, option_count: usize) -> ChoiceError {
    ChoiceError::OutOfRange {
        input: input.to_string(),
        last: option_letter(option_count.saturating_sub(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert_eq!(parse_choice("A", 4), Ok(0));
        assert_eq!(parse_choice("b", 4), Ok(1));
        assert_eq!(parse_choice("  D \n", 4), Ok(3));
    }

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(parse_choice("1", 4), Ok(0));
        assert_eq!(parse_choice("4", 4), Ok(3));
        assert!(matches!(
            parse_choice("0", 4),
            Err(ChoiceError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_out_of_range_letter() {
        assert_eq!(
            parse_choice("E", 4),
            Err(ChoiceError::OutOfRange {
                input: "E".to_string(),
                last: 'D'
            })
        );
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(parse_choice("", 4), Err(ChoiceError::Empty));
        assert_eq!(parse_choice("   ", 4), Err(ChoiceError::Empty));
        assert!(matches!(
            parse_choice("banana", 4),
            Err(ChoiceError::Unparseable(_))
        ));
        assert!(matches!(parse_choice("?", 4), Err(ChoiceError::Unparseable(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = parse_choice("z", 3).unwrap_err();
        assert_eq!(err.to_string(), "choice 'z' is out of range (valid: A-C)");
    }
}
