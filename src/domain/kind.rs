use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// The alternate-file categories a path can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    /// ExUnit test for an implementation file (and back).
    Test,
    /// Phoenix controller under `<app>_web/controllers`.
    Controller,
    /// Plain application module (schema, context).
    Model,
    /// Legacy Phoenix view under `<app>_web/views`.
    View,
    /// HEEx template or HTML module.
    Html,
    /// LiveView module under `<app>_web/live`.
    Live,
    /// Function component under `<app>_web/components`.
    Component,
    /// Stateful live component under `<app>_web/live`.
    LiveComponent,
    /// Channel under `<app>_web/channels`.
    Channel,
    /// JSON rendering module next to its controller.
    Json,
    /// Mix task under `lib/mix/tasks`.
    Task,
    /// Feature (browser) test under `test/features`.
    Feature,
}

impl TargetKind {
    /// All kinds in menu order.
    pub const ALL: [TargetKind; 12] = [
        TargetKind::Test,
        TargetKind::Controller,
        TargetKind::Model,
        TargetKind::View,
        TargetKind::Html,
        TargetKind::Live,
        TargetKind::Component,
        TargetKind::LiveComponent,
        TargetKind::Channel,
        TargetKind::Json,
        TargetKind::Task,
        TargetKind::Feature,
    ];

    /// Stable name used on the command line and in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            TargetKind::Test => "test",
            TargetKind::Controller => "controller",
            TargetKind::Model => "model",
            TargetKind::View => "view",
            TargetKind::Html => "html",
            TargetKind::Live => "live",
            TargetKind::Component => "component",
            TargetKind::LiveComponent => "liveComponent",
            TargetKind::Channel => "channel",
            TargetKind::Json => "json",
            TargetKind::Task => "task",
            TargetKind::Feature => "feature",
        }
    }

    /// One-line description shown in the interactive picker.
    pub fn description(&self) -> &'static str {
        match self {
            TargetKind::Test => "Toggle between implementation and test",
            TargetKind::Controller => "Controller in the web module",
            TargetKind::Model => "Module in the core application",
            TargetKind::View => "View module",
            TargetKind::Html => "HEEx template",
            TargetKind::Live => "LiveView",
            TargetKind::Component => "Function component",
            TargetKind::LiveComponent => "Live component",
            TargetKind::Channel => "Channel",
            TargetKind::Json => "JSON view",
            TargetKind::Task => "Mix task",
            TargetKind::Feature => "Feature test",
        }
    }

    /// Parse a kind from its name. Case-insensitive; `live_component` and
    /// `live-component` are accepted as spellings of `liveComponent`.
    pub fn from_name(name: &str) -> Option<TargetKind> {
        match name.to_lowercase().as_str() {
            "test" => Some(TargetKind::Test),
            "controller" => Some(TargetKind::Controller),
            "model" => Some(TargetKind::Model),
            "view" => Some(TargetKind::View),
            "html" => Some(TargetKind::Html),
            "live" => Some(TargetKind::Live),
            "component" => Some(TargetKind::Component),
            "livecomponent" | "live_component" | "live-component" => {
                Some(TargetKind::LiveComponent)
            }
            "channel" => Some(TargetKind::Channel),
            "json" => Some(TargetKind::Json),
            "task" => Some(TargetKind::Task),
            "feature" => Some(TargetKind::Feature),
            _ => None,
        }
    }

    /// Whether the kind lives in the test tree.
    pub fn is_test(&self) -> bool {
        matches!(self, TargetKind::Test | TargetKind::Feature)
    }
}

impl FromStr for TargetKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetKind::from_name(s).ok_or_else(|| AppError::InvalidTarget(s.to_string()))
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
