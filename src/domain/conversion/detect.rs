use super::components::FileName;
use super::directory::{app_index, find_directory};
use crate::domain::TargetKind;
use crate::domain::layout::ProjectLayout;

/// Stem suffixes and the kind they mark. `_test` and `_component` are
/// handled separately because their kind depends on the directory.
const SUFFIX_KINDS: [(&str, TargetKind); 6] = [
    ("_controller", TargetKind::Controller),
    ("_view", TargetKind::View),
    ("_channel", TargetKind::Channel),
    ("_live", TargetKind::Live),
    ("_html", TargetKind::Html),
    ("_json", TargetKind::Json),
];

pub(super) fn detect(segments: &[String], layout: &ProjectLayout) -> Option<TargetKind> {
    let file = FileName::parse(segments.last()?);
    let has_directory = |name: &str| find_directory(segments, 0, name).is_some() || segments[0] == name;

    if file.extension.ends_with("heex") {
        return Some(TargetKind::Html);
    }
    if file.stem.ends_with("_test") {
        return Some(if has_directory(layout.features.as_str()) {
            TargetKind::Feature
        } else {
            TargetKind::Test
        });
    }
    if is_task(segments, layout) {
        return Some(TargetKind::Task);
    }
    if file.stem.ends_with("_component") {
        return Some(if has_directory(layout.live.as_str()) {
            TargetKind::LiveComponent
        } else {
            TargetKind::Component
        });
    }
    if let Some((_, kind)) = SUFFIX_KINDS.iter().find(|(suffix, _)| file.stem.ends_with(suffix)) {
        return Some(*kind);
    }

    let parent = segments.len().checked_sub(2).map(|index| segments[index].as_str());
    if parent == Some(layout.components.as_str()) {
        return Some(TargetKind::Component);
    }
    app_index(segments, layout).map(|_| TargetKind::Model)
}

fn is_task(segments: &[String], layout: &ProjectLayout) -> bool {
    segments
        .windows(3)
        .any(|window| window[0] == layout.lib && window[1] == "mix" && window[2] == "tasks")
}
