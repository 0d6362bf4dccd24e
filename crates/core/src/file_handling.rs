//! File handling and validation for keyprompt prompt definitions.
//!
//! This module reads prompt definitions from YAML and validates prompt IDs,
//! options and defaults before any of them are shown to an operator.

use std::collections::HashSet;
use std::fs::File;

use crate::choice::find_by_name;
use crate::error::Error::{
    EmptyId, EmptyOptionName, IdWithColon, IdWithSpace, NoOptions, NonUniqueKey,
    NonUniquePromptId, NumericId, PromptNotFound, UnknownDefault,
};
use crate::error::{Error, Result};
use crate::prompt_definitions::PromptDefinition;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::config_io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(' ') {
        return Err(IdWithSpace(id.to_string()));
    }

    if id.contains(':') {
        return Err(IdWithColon(id.to_string()));
    }

    if id.chars().all(|c| c.is_numeric()) {
        return Err(NumericId(id.to_string()));
    }

    Ok(())
}

fn validate_options(prompt: &PromptDefinition) -> Result<()> {
    if prompt.options.is_empty() {
        return Err(NoOptions(prompt.id.clone()));
    }

    // Matching ignores case, so `y` and `Y` would collide
    let mut keys = HashSet::new();
    for option in &prompt.options {
        let Some(key) = option.key().filter(|_| !option.name.is_empty()) else {
            return Err(EmptyOptionName(prompt.id.clone()));
        };

        if !keys.insert(key.to_lowercase().collect::<String>()) {
            return Err(NonUniqueKey(prompt.id.clone(), key));
        }
    }

    if let Some(default) = &prompt.default {
        if find_by_name(&prompt.choices(), default).is_none() {
            return Err(UnknownDefault(prompt.id.clone(), default.clone()));
        }
    }

    Ok(())
}

fn validate_prompts(prompts: &[PromptDefinition]) -> Result<()> {
    let mut ids = HashSet::new();

    for prompt in prompts {
        validate_id(&prompt.id)?;

        if !ids.insert(prompt.id.clone()) {
            // Found a duplicate ID
            return Err(NonUniquePromptId(prompt.id.clone()));
        }

        validate_options(prompt)?;
    }

    Ok(())
}

/// Loads and validates prompt definitions from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file contains no prompts
/// - A prompt ID is invalid or non-unique
/// - A prompt has no options, an option with an empty name, or two options
///   whose keys collide
/// - A default doesn't name one of the prompt's options
///
/// # Examples
///
/// ```no_run
/// use keyprompt_core::file_handling::get_prompt_definitions;
///
/// let prompts = get_prompt_definitions("/home/me/.keyprompt/prompts.yml")?;
/// println!("Loaded {} prompts", prompts.len());
/// # Ok::<(), keyprompt_core::error::Error>(())
/// ```
pub fn get_prompt_definitions(path: &str) -> Result<Vec<PromptDefinition>> {
    let reader = get_reader("prompts", path)?;

    let prompts: Vec<PromptDefinition> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "prompts".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if prompts.is_empty() {
        return Err(Error::empty_prompt_definition(path.to_string()));
    }

    validate_prompts(&prompts)?;

    Ok(prompts)
}

/// Finds a prompt definition by ID.
///
/// # Errors
///
/// Returns [`PromptNotFound`] if no prompt has that ID.
pub fn find_prompt<'a>(prompts: &'a [PromptDefinition], id: &str) -> Result<&'a PromptDefinition> {
    prompts
        .iter()
        .find(|prompt| prompt.id == id)
        .ok_or_else(|| PromptNotFound(id.to_string()))
}
