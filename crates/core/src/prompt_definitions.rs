use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::choice::{find_by_name, Choice};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: String,
    pub key: Option<char>,
}

impl OptionDefinition {
    /// The explicit key, or the first character of the name.
    #[must_use]
    pub fn key(&self) -> Option<char> {
        self.key.or_else(|| self.name.chars().next())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PromptDefinition {
    pub id: String,
    pub question: String,
    pub options: Vec<OptionDefinition>,
    pub default: Option<String>,
}

impl PromptDefinition {
    /// Converts the options to choices, in order.
    ///
    /// Options without a usable key are skipped; definitions loaded through
    /// [`crate::file_handling`] never have any.
    #[must_use]
    pub fn choices(&self) -> Vec<Choice> {
        self.options
            .iter()
            .filter_map(|option| option.key().map(|key| Choice::new(option.name.clone(), key)))
            .collect()
    }

    /// Looks up the default among `choices` by name.
    #[must_use]
    pub fn default_choice<'a>(&self, choices: &'a [Choice]) -> Option<&'a Choice> {
        self.default
            .as_ref()
            .and_then(|default| find_by_name(choices, default))
    }
}

impl Display for PromptDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.id, self.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_prompt() -> PromptDefinition {
        PromptDefinition {
            id: "deploy".to_string(),
            question: "Deploy now?".to_string(),
            options: vec![
                OptionDefinition {
                    name: "yes".to_string(),
                    key: Some('y'),
                },
                OptionDefinition {
                    name: "later".to_string(),
                    key: None,
                },
            ],
            default: Some("Later".to_string()),
        }
    }

    #[test]
    fn test_option_key_falls_back_to_first_char() {
        let option = OptionDefinition {
            name: "retry".to_string(),
            key: None,
        };
        assert_eq!(option.key(), Some('r'));

        let option = OptionDefinition {
            name: "abort".to_string(),
            key: Some('x'),
        };
        assert_eq!(option.key(), Some('x'));

        let option = OptionDefinition {
            name: String::new(),
            key: None,
        };
        assert_eq!(option.key(), None);
    }

    #[test]
    fn test_choices_keep_order() {
        let choices = create_test_prompt().choices();
        assert_eq!(
            choices,
            vec![Choice::new("yes", 'y'), Choice::new("later", 'l')]
        );
    }

    #[test]
    fn test_default_choice_by_name() {
        let prompt = create_test_prompt();
        let choices = prompt.choices();
        assert_eq!(prompt.default_choice(&choices), Some(&choices[1]));
    }

    #[test]
    fn test_default_choice_none() {
        let mut prompt = create_test_prompt();
        prompt.default = None;
        let choices = prompt.choices();
        assert_eq!(prompt.default_choice(&choices), None);
    }

    #[test]
    fn test_prompt_definition_display() {
        assert_eq!(format!("{}", create_test_prompt()), "deploy (Deploy now?)");
    }
}
