//! Configuration path utilities for keyprompt.
//!
//! This module resolves the prompt definitions file path and expands shell
//! variables like `~` in it.

/// Default path for the prompt definitions file
const DEFAULT_PROMPTS_PATH: &str = "~/.keyprompt/prompts.yml";

/// Resolves the prompt definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// prompts path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use keyprompt_core::config::get_prompts_path;
///
/// let custom_path = get_prompts_path(&Some("/path/to/prompts.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/prompts.yml");
/// ```
pub fn get_prompts_path(prompts_path_arg: &Option<String>) -> String {
    let prompts_path = match prompts_path_arg {
        Some(prompts_path) => prompts_path,
        None => DEFAULT_PROMPTS_PATH,
    };

    shellexpand::tilde(prompts_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_prompts_path_with_custom_path() {
        let custom_path = Some("/custom/path/prompts.yml".to_string());
        let result = get_prompts_path(&custom_path);
        assert_eq!(result, "/custom/path/prompts.yml");
    }

    #[test]
    fn test_get_prompts_path_with_none() {
        let result = get_prompts_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".keyprompt/prompts.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_prompts_path_with_tilde() {
        let tilde_path = Some("~/my-prompts.yml".to_string());
        let result = get_prompts_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-prompts.yml"));
    }
}
