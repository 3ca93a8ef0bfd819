//! Directory and extension vocabulary of a Phoenix project.

/// Filename suffixes that mark a file's kind, in stripping priority order.
pub const KNOWN_SUFFIXES: [&str; 8] =
    ["_controller", "_view", "_component", "_channel", "_live", "_html", "_json", "_test"];

/// Directory names and extensions the path rules rely on.
///
/// Values are plain strings so the caller can feed them from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub lib: String,
    pub test: String,
    pub web_suffix: String,
    pub controllers: String,
    pub views: String,
    pub live: String,
    pub templates: String,
    pub components: String,
    pub channels: String,
    pub features: String,
    pub source_extension: String,
    pub test_extension: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            lib: "lib".to_string(),
            test: "test".to_string(),
            web_suffix: "_web".to_string(),
            controllers: "controllers".to_string(),
            views: "views".to_string(),
            live: "live".to_string(),
            templates: "templates".to_string(),
            components: "components".to_string(),
            channels: "channels".to_string(),
            features: "features".to_string(),
            source_extension: "ex".to_string(),
            test_extension: "exs".to_string(),
        }
    }
}

impl ProjectLayout {
    /// The special directories a web kind may occupy.
    pub fn special_directories(&self) -> [&str; 6] {
        [
            self.controllers.as_str(),
            self.views.as_str(),
            self.live.as_str(),
            self.components.as_str(),
            self.channels.as_str(),
            self.templates.as_str(),
        ]
    }

    pub fn is_special_directory(&self, segment: &str) -> bool {
        self.special_directories().contains(&segment)
    }
}

/// Application identity read from the segment after the root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub base_name: String,
    pub is_web: bool,
}

impl AppIdentity {
    pub fn from_segment(segment: &str, web_suffix: &str) -> Self {
        match segment.strip_suffix(web_suffix) {
            Some(base) if !web_suffix.is_empty() => {
                Self { base_name: base.to_string(), is_web: true }
            }
            _ => Self { base_name: segment.to_string(), is_web: false },
        }
    }

    /// Directory name of the web module for this application.
    pub fn web_segment(&self, web_suffix: &str) -> String {
        format!("{}{}", self.base_name, web_suffix)
    }
}
