//! Selectable answers and their rendered form.
//!
//! A [`Choice`] is one answer a prompt offers: a display name plus a single
//! character key the operator can type instead of the full name. When shown
//! in a prompt line the key is emphasized inside the name, or in front of it
//! when the name doesn't contain the key.

use std::fmt::{Display, Formatter};

use crossterm::style::{Attribute, SetAttribute};

/// An answer that can be selected by its key or by its full name.
///
/// Keys should be unique within the set of choices given to one prompt.
/// This is not enforced: with duplicate keys the earliest choice wins.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Choice {
    pub name: String,
    pub key: char,
}

impl Choice {
    /// Creates a choice.
    ///
    /// `name` must not be empty: an empty name would match an empty reply.
    /// Debug builds assert this.
    pub fn new(name: impl Into<String>, key: char) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "Choice name may not be empty");
        Self { name, key }
    }

    /// Renders the name with its key emphasized.
    ///
    /// The first occurrence of the key in the name (case-sensitive) is
    /// emphasized in place. If the name doesn't contain the key, the
    /// emphasized key and a space are put in front of the name.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyprompt_core::choice::Choice;
    ///
    /// assert_eq!(Choice::new("good", 'g').display(), "\x1b[1mg\x1b[22mood");
    /// assert_eq!(Choice::new("alright", 'K').display(), "\x1b[1mK\x1b[22m alright");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        match self.name.find(self.key) {
            Some(start) => {
                let end = start + self.key.len_utf8();
                format!(
                    "{}{}{}",
                    &self.name[..start],
                    emphasize(self.key),
                    &self.name[end..]
                )
            }
            None => format!("{} {}", emphasize(self.key), self.name),
        }
    }

    /// Whether a reply selects this choice.
    ///
    /// The reply must equal either the key or the full name, ignoring case.
    #[must_use]
    pub fn is_match(&self, reply: &str) -> bool {
        let reply = reply.to_lowercase();
        reply == self.key.to_lowercase().collect::<String>() || reply == self.name.to_lowercase()
    }
}

impl Display for Choice {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.display())
    }
}

/// Finds the first choice whose name equals `name`, ignoring case.
#[must_use]
pub fn find_by_name<'a>(choices: &'a [Choice], name: &str) -> Option<&'a Choice> {
    let name = name.to_lowercase();
    choices
        .iter()
        .find(|choice| choice.name.to_lowercase() == name)
}

/// Wraps a key in bold-on / normal-intensity escape sequences.
#[must_use]
pub fn emphasize(key: char) -> String {
    format!(
        "{}{key}{}",
        SetAttribute(Attribute::Bold),
        SetAttribute(Attribute::NormalIntensity)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOLD: &str = "\x1b[1m";
    const NORMAL: &str = "\x1b[22m";

    #[test]
    fn test_emphasize_markers() {
        assert_eq!(emphasize('y'), format!("{BOLD}y{NORMAL}"));
    }

    #[test]
    fn test_display_key_at_start() {
        let choice = Choice::new("good", 'g');
        assert_eq!(choice.display(), format!("{BOLD}g{NORMAL}ood"));
    }

    #[test]
    fn test_display_emphasizes_first_occurrence_only() {
        let choice = Choice::new("I don't know", 'w');
        assert_eq!(choice.display(), format!("I don't kno{BOLD}w{NORMAL}"));

        let choice = Choice::new("banana", 'a');
        assert_eq!(choice.display(), format!("b{BOLD}a{NORMAL}nana"));
    }

    #[test]
    fn test_display_prepends_missing_key() {
        let choice = Choice::new("alright", 'K');
        assert_eq!(choice.display(), format!("{BOLD}K{NORMAL} alright"));
    }

    #[test]
    fn test_display_key_search_is_case_sensitive() {
        // `k` appears in the name, but only `K` is the key
        let choice = Choice::new("okay", 'K');
        assert_eq!(choice.display(), format!("{BOLD}K{NORMAL} okay"));
    }

    #[test]
    fn test_display_multibyte_name() {
        let choice = Choice::new("né", 'é');
        assert_eq!(choice.display(), format!("n{BOLD}é{NORMAL}"));
    }

    #[test]
    fn test_display_trait_matches_display() {
        let choice = Choice::new("fine", 'f');
        assert_eq!(format!("{choice}"), choice.display());
    }

    #[test]
    fn test_is_match_key_ignores_case() {
        let choice = Choice::new("yes", 'y');
        assert!(choice.is_match("y"));
        assert!(choice.is_match("Y"));

        let choice = Choice::new("alright", 'K');
        assert!(choice.is_match("k"));
    }

    #[test]
    fn test_is_match_name_ignores_case() {
        let choice = Choice::new("yes", 'y');
        assert!(choice.is_match("yes"));
        assert!(choice.is_match("YeS"));
    }

    #[test]
    fn test_is_match_rejects_other_replies() {
        let choice = Choice::new("yes", 'y');
        assert!(!choice.is_match(""));
        assert!(!choice.is_match("ye"));
        assert!(!choice.is_match(" y"));
        assert!(!choice.is_match("n"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Choice name may not be empty")]
    fn test_new_rejects_empty_name() {
        let _ = Choice::new("", 'e');
    }

    #[test]
    fn test_find_by_name() {
        let choices = vec![Choice::new("Yes", 'y'), Choice::new("no", 'n')];
        assert_eq!(find_by_name(&choices, "yes"), Some(&choices[0]));
        assert_eq!(find_by_name(&choices, "NO"), Some(&choices[1]));
        assert_eq!(find_by_name(&choices, "n"), None);
    }
}
