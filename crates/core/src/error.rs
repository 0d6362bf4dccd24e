use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Failure reading a reply or writing a prompt line, forwarded unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Reached end of input before a prompt option was chosen.")]
    EndOfInput,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    ConfigIo {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No prompts were found in the prompt definition YAML. Is `{}` empty?", .path)]
    EmptyPromptDefinition { path: String },

    #[error("Found a non-unique prompt ID: `{}`", .0)]
    NonUniquePromptId(String),

    #[error("No prompt with ID `{}` was found.", .0)]
    PromptNotFound(String),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Invalid ID `{}`: ID may not contain a colon (reserved for future use)", .0)]
    IdWithColon(String),

    #[error("Invalid ID `{}`: ID cannot be purely numeric", .0)]
    NumericId(String),

    #[error("Prompt `{}` has no options to choose from.", .0)]
    NoOptions(String),

    #[error("Prompt `{}` has an option with an empty name.", .0)]
    EmptyOptionName(String),

    #[error("Prompt `{}` uses the key `{}` for more than one option.", .0, .1)]
    NonUniqueKey(String, char),

    #[error("Prompt `{}` has default `{}`, which is not one of its options.", .0, .1)]
    UnknownDefault(String, String),

    #[error("Invalid option `{}`: expected NAME or NAME=KEY with a single character KEY", .0)]
    OptionFormat(String),

    #[error("A question is required when prompting with inline options.")]
    MissingQuestion,
}

impl Error {
    pub fn empty_prompt_definition(path: String) -> Self {
        Self::EmptyPromptDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn config_io_error(
        file_description: String,
        path: String,
        original: std::io::Error,
    ) -> Self {
        Self::ConfigIo {
            file_description,
            path,
            original,
        }
    }
}
