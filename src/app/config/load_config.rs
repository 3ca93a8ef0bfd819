use std::path::Path;

use tracing::{debug, warn};

use crate::domain::config::{self, Configuration};
use crate::ports::ProjectFilesystem;

/// Load the first readable config among the standard locations.
///
/// Unreadable or malformed files are logged and skipped; with nothing
/// usable the defaults apply.
pub fn load_config<F: ProjectFilesystem>(
    filesystem: &F,
    cwd: &Path,
    home: Option<&Path>,
) -> Configuration {
    for candidate in config::paths::candidates(cwd, home) {
        let Some(path) = candidate.to_str() else {
            warn!(path = %candidate.display(), "skipping config path with invalid unicode");
            continue;
        };
        if !filesystem.file_exists(path) {
            continue;
        }

        let content = match filesystem.read_file(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path, error = %err, "skipping unreadable config file");
                continue;
            }
        };
        match config::parse_config_content(&content, path) {
            Ok(config) => {
                debug!(path, "loaded configuration");
                return config;
            }
            Err(err) => warn!(path, error = %err, "skipping invalid config file"),
        }
    }

    debug!("no configuration file found, using defaults");
    Configuration::default()
}
