use serde::Deserialize;

use crate::domain::layout::ProjectLayout;
use crate::domain::stub::StubOptions;

/// Contents of a `.fawkes.json` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub file_extensions: FileExtensions,
    pub path_formats: PathFormats,
    pub editor: Option<EditorSettings>,
    pub templates: StubOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileExtensions {
    pub source: String,
    pub test: String,
}

impl Default for FileExtensions {
    fn default() -> Self {
        Self { source: "ex".to_string(), test: "exs".to_string() }
    }
}

/// Directory names the path rules look for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathFormats {
    pub lib: String,
    pub test: String,
    /// Suffix marking the web module, `_web` by default.
    pub web: String,
    pub controllers: String,
    pub views: String,
    pub live: String,
    pub templates: String,
    pub components: String,
    pub channels: String,
    pub features: String,
}

impl Default for PathFormats {
    fn default() -> Self {
        let layout = ProjectLayout::default();
        Self {
            lib: layout.lib,
            test: layout.test,
            web: layout.web_suffix,
            controllers: layout.controllers,
            views: layout.views,
            live: layout.live,
            templates: layout.templates,
            components: layout.components,
            channels: layout.channels,
            features: layout.features,
        }
    }
}

/// Editor command and the arguments placed before the file path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorSettings {
    pub command: String,
    #[serde(default)]
    pub arguments: Vec<String>,
}

impl EditorSettings {
    /// Split a shell-style command line such as `code --wait` on whitespace.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let command = words.next()?;
        Some(Self { command, arguments: words.collect() })
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self { command: "zed".to_string(), arguments: vec!["-g".to_string()] }
    }
}

impl Configuration {
    /// Layout handed to the path resolver.
    pub fn layout(&self) -> ProjectLayout {
        let formats = &self.path_formats;
        ProjectLayout {
            lib: formats.lib.clone(),
            test: formats.test.clone(),
            web_suffix: formats.web.clone(),
            controllers: formats.controllers.clone(),
            views: formats.views.clone(),
            live: formats.live.clone(),
            templates: formats.templates.clone(),
            components: formats.components.clone(),
            channels: formats.channels.clone(),
            features: formats.features.clone(),
            source_extension: self.file_extensions.source.clone(),
            test_extension: self.file_extensions.test.clone(),
        }
    }

    pub fn stub_options(&self) -> StubOptions {
        self.templates.clone()
    }

    /// Names that must not be empty, paired with their key.
    pub(super) fn required_values(&self) -> [(&'static str, &str); 12] {
        let formats = &self.path_formats;
        [
            ("fileExtensions.source", self.file_extensions.source.as_str()),
            ("fileExtensions.test", self.file_extensions.test.as_str()),
            ("pathFormats.lib", formats.lib.as_str()),
            ("pathFormats.test", formats.test.as_str()),
            ("pathFormats.web", formats.web.as_str()),
            ("pathFormats.controllers", formats.controllers.as_str()),
            ("pathFormats.views", formats.views.as_str()),
            ("pathFormats.live", formats.live.as_str()),
            ("pathFormats.templates", formats.templates.as_str()),
            ("pathFormats.components", formats.components.as_str()),
            ("pathFormats.channels", formats.channels.as_str()),
            ("pathFormats.features", formats.features.as_str()),
        ]
    }
}
