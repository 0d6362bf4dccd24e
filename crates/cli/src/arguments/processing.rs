use crate::arguments::style::Source;
use crate::cli_args::PrintFormat;
use itertools::Itertools;
use keyprompt_core::choice::{find_by_name, Choice};
use keyprompt_core::error::Error::{NonUniqueKey, OptionFormat, UnknownDefault};
use keyprompt_core::error::Result;
use keyprompt_core::file_handling::{find_prompt, get_prompt_definitions};
use log::debug;

/// A prompt ready to be asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrompt {
    pub question: String,
    pub choices: Vec<Choice>,
    pub default: Option<Choice>,
}

/// Parses an inline option in the format `NAME` or `NAME=KEY`.
///
/// Without a key, the first character of the name is the key.
///
/// # Errors
///
/// Returns [`OptionFormat`] if the name is empty, the key is not exactly one
/// character, or there is more than one `=`.
///
/// # Examples
///
/// ```rust
/// use keyprompt_cli::arguments::parse_option;
/// use keyprompt_core::choice::Choice;
///
/// assert_eq!(parse_option("yes").unwrap(), Choice::new("yes", 'y'));
/// assert_eq!(parse_option("alright=K").unwrap(), Choice::new("alright", 'K'));
/// ```
pub fn parse_option(option: &str) -> Result<Choice> {
    let parts: Vec<&str> = option.split('=').collect();

    let (name, key) = match parts.as_slice() {
        [name] => (*name, name.chars().next()),
        [name, key] => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) => (*name, Some(key)),
                _ => return Err(OptionFormat(option.to_string())),
            }
        }
        _ => return Err(OptionFormat(option.to_string())),
    };

    match key {
        Some(key) if !name.is_empty() => Ok(Choice::new(name, key)),
        _ => Err(OptionFormat(option.to_string())),
    }
}

/// Parses all inline options, rejecting keys that would collide.
fn parse_options(question: &str, options: &[String]) -> Result<Vec<Choice>> {
    let choices = options
        .iter()
        .map(|option| parse_option(option))
        .collect::<Result<Vec<Choice>>>()?;

    if let Some(duplicate) = choices
        .iter()
        .duplicates_by(|choice| choice.key.to_lowercase().collect::<String>())
        .next()
    {
        return Err(NonUniqueKey(question.to_string(), duplicate.key));
    }

    Ok(choices)
}

/// Picks the default choice.
///
/// `first_is_default` wins over a named default.
fn resolve_default(
    label: &str,
    choices: &[Choice],
    default_name: Option<&str>,
    first_is_default: bool,
) -> Result<Option<Choice>> {
    if first_is_default {
        return Ok(choices.first().cloned());
    }

    match default_name {
        None => Ok(None),
        Some(name) => find_by_name(choices, name)
            .cloned()
            .map(Some)
            .ok_or_else(|| UnknownDefault(label.to_string(), name.to_string())),
    }
}

/// Builds the prompt to ask from its source and the default overrides.
///
/// A defined prompt's own default is used unless `default_name` or
/// `first_is_default` override it. The definitions file is only read for
/// [`Source::Definition`].
///
/// # Errors
///
/// Returns an error if:
/// - The definitions file cannot be loaded or has no prompt with the ID
/// - An inline option is malformed, or two options share a key
/// - The default doesn't name one of the options
pub fn resolve_prompt(
    source: Source,
    config_path: &str,
    default_name: Option<&str>,
    first_is_default: bool,
) -> Result<ResolvedPrompt> {
    match source {
        Source::Definition(prompt_id) => {
            debug!("Loading prompt `{prompt_id}` from `{config_path}`");
            let prompts = get_prompt_definitions(config_path)?;
            let definition = find_prompt(&prompts, &prompt_id)?;
            let choices = definition.choices();
            let default = if first_is_default || default_name.is_some() {
                resolve_default(&definition.id, &choices, default_name, first_is_default)?
            } else {
                definition.default_choice(&choices).cloned()
            };

            Ok(ResolvedPrompt {
                question: definition.question.clone(),
                choices,
                default,
            })
        }
        Source::Inline { question, options } => {
            let choices = parse_options(&question, &options)?;
            let default = resolve_default(&question, &choices, default_name, first_is_default)?;

            Ok(ResolvedPrompt {
                question,
                choices,
                default,
            })
        }
    }
}

/// Formats the chosen option for stdout.
#[must_use]
pub fn format_answer(answer: &Choice, choices: &[Choice], format: PrintFormat) -> String {
    match format {
        PrintFormat::Name => answer.name.clone(),
        PrintFormat::Key => answer.key.to_string(),
        PrintFormat::Index => choices
            .iter()
            .position(|choice| choice == answer)
            .map_or_else(String::new, |index| index.to_string()),
    }
}
