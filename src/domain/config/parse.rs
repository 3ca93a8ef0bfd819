//! Pure parse/validate for `.fawkes.json`.

use super::Configuration;
use crate::domain::AppError;

/// Parse and validate configuration from JSON content read from `source`.
pub fn parse_config_content(content: &str, source: &str) -> Result<Configuration, AppError> {
    let config: Configuration = serde_json::from_str(content).map_err(|err| {
        AppError::ConfigParse { path: source.to_string(), details: err.to_string() }
    })?;

    if let Some((key, _)) = config.required_values().into_iter().find(|(_, value)| value.is_empty())
    {
        return Err(AppError::ConfigParse {
            path: source.to_string(),
            details: format!("{} must not be empty", key),
        });
    }
    if config.editor.as_ref().is_some_and(|editor| editor.command.trim().is_empty()) {
        return Err(AppError::ConfigParse {
            path: source.to_string(),
            details: "editor.command must not be empty".to_string(),
        });
    }

    Ok(config)
}
