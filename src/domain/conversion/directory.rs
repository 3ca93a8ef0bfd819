//! Shared segment operations used by the web-kind rules.

use crate::domain::layout::{AppIdentity, ProjectLayout};

/// Index of the application segment under the first `lib` root.
///
/// `None` when there is no `lib` root or the segment after it is the file.
pub(super) fn app_index(segments: &[String], layout: &ProjectLayout) -> Option<usize> {
    let lib = segments.iter().position(|segment| *segment == layout.lib)?;
    let app = lib + 1;
    (app < segments.len() - 1).then_some(app)
}

/// Position of directory `name` among the directories after `anchor`.
pub(super) fn find_directory(segments: &[String], anchor: usize, name: &str) -> Option<usize> {
    let end = segments.len().saturating_sub(1);
    (anchor + 1..end).find(|&index| segments[index] == name)
}

/// Copy of `segments` whose application segment carries the web suffix.
pub(super) fn ensure_web_module(
    segments: &[String],
    app: usize,
    layout: &ProjectLayout,
) -> Vec<String> {
    let mut result = segments.to_vec();
    let identity = AppIdentity::from_segment(&segments[app], &layout.web_suffix);
    if !identity.is_web {
        result[app] = identity.web_segment(&layout.web_suffix);
    }
    result
}

/// Copy of `segments` with `target` present after `anchor`.
///
/// An existing `target` wins. Otherwise the first of `rename_from` found is
/// renamed in place, keeping path length and order. Only when none exists is
/// `target` inserted directly after `anchor`.
pub(super) fn ensure_directory(
    segments: &[String],
    anchor: usize,
    target: &str,
    rename_from: &[&str],
) -> Vec<String> {
    let mut result = segments.to_vec();
    if find_directory(segments, anchor, target).is_some() {
        return result;
    }

    match rename_from.iter().find_map(|name| find_directory(segments, anchor, name)) {
        Some(index) => result[index] = target.to_string(),
        None => result.insert(anchor + 1, target.to_string()),
    }
    result
}
