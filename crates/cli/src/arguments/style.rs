//! Prompt source determination and validation.
//!
//! A prompt is either read from the prompt definitions file or built from
//! inline arguments. The two cannot be mixed in one invocation.

use keyprompt_core::error::Error::{MissingQuestion, NoOptions};
use keyprompt_core::error::Result;

/// Where the prompt to ask comes from.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Source {
    /// A prompt from the definitions file, by ID
    Definition(String),
    /// A question and `NAME[=KEY]` options given on the command line
    Inline {
        question: String,
        options: Vec<String>,
    },
}

/// Trait for objects that can determine their prompt source.
pub trait Provider {
    /// Validates the prompt arguments and returns the [`Source`] they describe.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments don't describe a complete prompt.
    fn get_source(&self) -> Result<Source>;
}

/// Determines the prompt source from the raw arguments.
///
/// A prompt ID wins; clap already rejects it alongside inline arguments.
///
/// # Errors
///
/// Returns [`MissingQuestion`] if there is no prompt ID and no question, and
/// [`NoOptions`] if an inline question has no options.
///
/// # Examples
///
/// ```rust
/// use keyprompt_cli::arguments::{determine, Source};
///
/// let source = determine(Some("deploy"), None, &[]).unwrap();
/// assert_eq!(source, Source::Definition("deploy".to_string()));
///
/// let source = determine(None, Some("ok?"), &["yes".to_string()]).unwrap();
/// assert!(matches!(source, Source::Inline { .. }));
/// ```
pub fn determine(
    prompt_id: Option<&str>,
    question: Option<&str>,
    options: &[String],
) -> Result<Source> {
    if let Some(prompt_id) = prompt_id {
        return Ok(Source::Definition(prompt_id.to_string()));
    }

    let Some(question) = question else {
        return Err(MissingQuestion);
    };

    if options.is_empty() {
        return Err(NoOptions(question.to_string()));
    }

    Ok(Source::Inline {
        question: question.to_string(),
        options: options.to_vec(),
    })
}
