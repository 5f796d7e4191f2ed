//! Word tokenization and title detection for corpus lines.
//!
//! Token boundaries and the title-case test are done by explicit character
//! classification so their behavior does not drift with a regex engine's
//! Unicode tables.

/// Returns true for characters that belong inside a word token.
///
/// Apostrophes count so contractions ("I'm", "there'd") stay whole.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Split a line into word tokens, in order of occurrence.
///
/// A token is a maximal run of letters, digits, underscores, and apostrophes;
/// everything else is a separator. Case is preserved.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.push(&text[s..i]);
        }
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }

    tokens
}

/// Heuristic test for whether a line is probably a title rather than verse.
///
/// Short words (four characters or fewer) are capitalized before testing,
/// since real titles often leave function words like "the" and "of" in lower
/// case. The adjusted line is then checked for strict title case.
pub fn looks_like_title(text: &str) -> bool {
    let adjusted = text
        .split_whitespace()
        .map(|word| {
            if word.chars().count() <= 4 {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    is_title_case(&adjusted)
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Strict title-case test over maximal alphabetic runs.
///
/// True when the string has at least one letter and every run of letters
/// starts uppercase with all following letters lowercase.
fn is_title_case(s: &str) -> bool {
    let mut any_letters = false;
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            any_letters = true;
            if in_word {
                if !c.is_lowercase() {
                    return false;
                }
            } else {
                if !c.is_uppercase() {
                    return false;
                }
                in_word = true;
            }
        } else {
            in_word = false;
        }
    }

    any_letters
}

/// Return a copy of `s` with its first letter converted to upper case.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Return a copy of `s` with its first letter converted to lower case.
pub fn decapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn tokenize_keeps_contractions() {
        assert_eq!(
            tokenize("I'm fine, how are you?"),
            vec!["I'm", "fine", "how", "are", "you"]
        );
    }

    #[test]
    fn tokenize_keeps_digits_and_underscores() {
        assert_eq!(tokenize("it_was the year 1999"), vec!["it_was", "the", "year", "1999"]);
    }

    #[test]
    fn tokenize_empty_and_punctuation() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("-- ... !!").is_empty());
    }

    #[test]
    fn tokenize_token_at_string_edges() {
        assert_eq!(tokenize("end."), vec!["end"]);
        assert_eq!(tokenize("...begin"), vec!["begin"]);
    }

    #[test]
    fn title_detection_allows_lowercase_short_words() {
        assert!(looks_like_title("The Day The Earth Stood Still"));
        assert!(looks_like_title("The Day the Earth Stood Still"));
        assert!(!looks_like_title("the day the earth stood still"));
    }

    #[test]
    fn title_detection_normalizes_all_caps_short_words() {
        assert!(looks_like_title("THE END"));
    }

    #[test]
    fn title_detection_rejects_ordinary_verse() {
        assert!(!looks_like_title("mother said there'd be days like these"));
        assert!(!looks_like_title("By the alders in the Summer,"));
    }

    #[test]
    fn title_detection_needs_letters() {
        assert!(!looks_like_title("1234 5678"));
        assert!(!looks_like_title(""));
    }

    #[test]
    fn capitalize_first_basic() {
        assert_eq!(capitalize_first("this is a test"), "This is a test");
        assert_eq!(capitalize_first("come on, Eileen"), "Come on, Eileen");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn decapitalize_first_basic() {
        assert_eq!(
            decapitalize_first("Mother said there'd be days like these"),
            "mother said there'd be days like these"
        );
        assert_eq!(decapitalize_first("Come on, Eileen"), "come on, Eileen");
    }
}
