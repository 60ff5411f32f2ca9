//! Menu input handling.
//!
//! Maps the text typed at the menu prompt to an [`Action`]:
//! - `1`: load a sequence
//! - `2`: analyze the loaded sequence
//! - `3`: reverse complement of the loaded sequence
//! - `4`: save a report
//! - `5`: exit

/// Actions that can be triggered from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Prompt for and validate a new sequence
    Load,
    /// Compute and show statistics
    Analyze,
    /// Compute and show the reverse complement
    ReverseComplement,
    /// Compute statistics and save them as JSON
    Save,
    /// End the session
    Quit,
    /// Input that matches no menu entry
    Unknown(String),
}

/// Parses a menu choice. Surrounding whitespace is ignored.
pub fn parse_choice(input: &str) -> Action {
    match input.trim() {
        "1" => Action::Load,
        "2" => Action::Analyze,
        "3" => Action::ReverseComplement,
        "4" => Action::Save,
        "5" => Action::Quit,
        other => Action::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices() {
        assert_eq!(parse_choice("1"), Action::Load);
        assert_eq!(parse_choice("2"), Action::Analyze);
        assert_eq!(parse_choice("3"), Action::ReverseComplement);
        assert_eq!(parse_choice("4"), Action::Save);
        assert_eq!(parse_choice("5"), Action::Quit);
    }

    #[test]
    fn test_choice_is_trimmed() {
        assert_eq!(parse_choice("  3 \n"), Action::ReverseComplement);
    }

    #[test]
    fn test_unknown_choice() {
        assert_eq!(parse_choice("6"), Action::Unknown("6".to_string()));
        assert_eq!(parse_choice(" q "), Action::Unknown("q".to_string()));
        assert_eq!(parse_choice(""), Action::Unknown(String::new()));
    }
}
