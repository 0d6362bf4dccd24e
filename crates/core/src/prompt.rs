//! The prompt engine.
//!
//! A prompt writes its question line once, then reads replies one line at a
//! time until a reply selects one of its choices. Replies that select
//! nothing are answered with [`NO_MATCH_MESSAGE`] and another read. Any read
//! or write failure ends the prompt and is returned to the caller as is.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::choice::Choice;
use crate::error::{Error, Result};

/// Written after every reply that doesn't select a choice.
pub const NO_MATCH_MESSAGE: &str = "Sorry, that didn't match any of the prompt options.";

/// A question with the choices it accepts and an optional default.
#[derive(Clone, Debug)]
pub struct Prompt<'a> {
    question: &'a str,
    choices: &'a [Choice],
    default: Option<&'a Choice>,
}

impl<'a> Prompt<'a> {
    /// Creates a prompt without a default.
    ///
    /// # Panics
    ///
    /// Panics if `choices` is empty. A prompt nobody can answer is a
    /// programming error, not an input problem.
    pub fn new(question: &'a str, choices: &'a [Choice]) -> Self {
        assert!(
            !choices.is_empty(),
            "Cannot create prompt without any options."
        );

        if let Some(key) = choices
            .iter()
            .map(|choice| choice.key.to_lowercase().collect::<String>())
            .duplicates()
            .next()
        {
            warn!(
                "Prompt `{question}` has more than one option with key `{key}`, the first one listed wins"
            );
        }

        Self {
            question,
            choices,
            default: None,
        }
    }

    /// Sets the choice returned for an empty reply.
    #[must_use]
    pub fn with_default(mut self, default: Option<&'a Choice>) -> Self {
        self.default = default;
        self
    }

    /// Builds the line written before the first read, newline included.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyprompt_core::choice::Choice;
    /// use keyprompt_core::prompt::Prompt;
    ///
    /// let choices = [Choice::new("yes", 'y'), Choice::new("no", 'n')];
    /// let prompt = Prompt::new("Continue?", &choices).with_default(Some(&choices[1]));
    /// assert_eq!(
    ///     prompt.render(),
    ///     "Continue? (\x1b[1my\x1b[22mes, \x1b[1mn\x1b[22mo) [no]\n"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let displays = self.choices.iter().map(Choice::display).join(", ");

        match self.default {
            Some(default) => format!("{} ({displays}) [{}]\n", self.question, default.name),
            None => format!("{} ({displays})\n", self.question),
        }
    }

    /// Finds the choice a reply selects, if any.
    ///
    /// `reply` must already have its line terminator removed. An empty reply
    /// selects the default. Otherwise choices are checked in order and the
    /// first one whose key or name equals the reply (ignoring case) wins.
    #[must_use]
    pub fn resolve(&self, reply: &str) -> Option<&'a Choice> {
        if reply.is_empty() {
            if let Some(default) = self.default {
                return Some(default);
            }
        }

        self.choices.iter().find(|choice| choice.is_match(reply))
    }

    /// Asks the question and blocks until a reply selects a choice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] with the original error if writing the prompt
    /// line, writing a retry message or reading a reply fails, and
    /// [`Error::EndOfInput`] if the input ends before a choice is selected.
    /// A reply that isn't valid UTF-8 is not an error: it is decoded lossily
    /// and, matching nothing, gets the retry message.
    pub fn interact<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Choice> {
        output.write_all(self.render().as_bytes())?;
        output.flush()?;

        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("Input ended while waiting for a reply to `{}`", self.question);
                return Err(Error::EndOfInput);
            }

            let line = String::from_utf8_lossy(&buffer);
            let reply = strip_line_terminator(&line);
            trace!("Received reply `{reply}`");

            if let Some(choice) = self.resolve(reply) {
                debug!("Reply `{reply}` selected `{}`", choice.name);
                return Ok(choice.clone());
            }

            debug!("Reply `{reply}` did not match any prompt option, asking again");
            writeln!(output, "{NO_MATCH_MESSAGE}")?;
            output.flush()?;
        }
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Asks `question` on the given transport and returns the selected choice.
///
/// See [`Prompt::interact`] for the reply rules.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the input ends
/// before a choice is selected.
///
/// # Panics
///
/// Panics if `choices` is empty.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use keyprompt_core::choice::Choice;
/// use keyprompt_core::prompt::prompt;
///
/// let choices = [Choice::new("good", 'g'), Choice::new("fine", 'f')];
/// let mut input = Cursor::new("f\n");
/// let mut output = Vec::new();
///
/// let answer = prompt(&mut input, &mut output, "how are you?", &choices, None)?;
/// assert_eq!(answer, Choice::new("fine", 'f'));
/// # Ok::<(), keyprompt_core::error::Error>(())
/// ```
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    choices: &[Choice],
    default: Option<&Choice>,
) -> Result<Choice> {
    Prompt::new(question, choices)
        .with_default(default)
        .interact(input, output)
}

/// Like [`prompt`], with the first choice as the default.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the input ends
/// before a choice is selected.
///
/// # Panics
///
/// Panics if `choices` is empty.
pub fn prompt_with_first_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    choices: &[Choice],
) -> Result<Choice> {
    prompt(input, output, question, choices, choices.first())
}
