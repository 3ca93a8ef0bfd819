//! One rewrite rule per target kind.
//!
//! Every rule takes the segments of a validated path and returns a new
//! sequence. Rules that cannot find their anchor (`lib`, the application
//! directory, `test`) return the input unchanged.

use super::components::FileName;
use super::directory::{app_index, ensure_directory, ensure_web_module, find_directory};
use crate::domain::TargetKind;
use crate::domain::layout::{AppIdentity, KNOWN_SUFFIXES, ProjectLayout};

const CONTROLLER_SUFFIX: &str = "_controller";
const VIEW_SUFFIX: &str = "_view";
const LIVE_SUFFIX: &str = "_live";
const COMPONENT_SUFFIX: &str = "_component";
const CHANNEL_SUFFIX: &str = "_channel";
const HTML_SUFFIX: &str = "_html";
const JSON_SUFFIX: &str = "_json";
const TEST_SUFFIX: &str = "_test";

pub(super) const HEEX_EXTENSION: &str = "html.heex";
const INDEX_TEMPLATE: &str = "index.html.heex";
const MIX_DIR: &str = "mix";
const TASKS_DIR: &str = "tasks";

pub(super) fn apply(segments: &[String], kind: TargetKind, layout: &ProjectLayout) -> Vec<String> {
    match kind {
        TargetKind::Test => test(segments, layout),
        TargetKind::Controller => controller(segments, layout),
        TargetKind::Model => model(segments, layout),
        TargetKind::View => view(segments, layout),
        TargetKind::Html => html(segments, layout),
        TargetKind::Live => live(segments, layout),
        TargetKind::Component => component(segments, layout),
        TargetKind::LiveComponent => live_component(segments, layout),
        TargetKind::Channel => channel(segments, layout),
        TargetKind::Json => json(segments, layout),
        TargetKind::Task => task(segments, layout),
        TargetKind::Feature => feature(segments, layout),
    }
}

fn file_name(segments: &[String]) -> FileName {
    FileName::parse(segments.last().map(String::as_str).unwrap_or_default())
}

fn rewrite_file(mut segments: Vec<String>, rewrite: impl FnOnce(FileName) -> FileName) -> Vec<String> {
    let file = rewrite(file_name(&segments));
    if let Some(last) = segments.last_mut() {
        *last = file.render();
    }
    segments
}

/// Toggle between `lib` and `test`, whichever root comes first.
fn test(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(root) =
        segments.iter().position(|segment| *segment == layout.lib || *segment == layout.test)
    else {
        return segments.to_vec();
    };

    let mut result = segments.to_vec();
    if segments[root] == layout.lib {
        result[root] = layout.test.clone();
        rewrite_file(result, |file| {
            file.with_suffix(TEST_SUFFIX).with_extension(&layout.test_extension)
        })
    } else {
        result[root] = layout.lib.clone();
        rewrite_file(result, |file| {
            file.without_suffix(TEST_SUFFIX).with_extension(&layout.source_extension)
        })
    }
}

fn controller(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };
    let web = ensure_web_module(segments, app, layout);
    let placed = ensure_directory(&web, app, &layout.controllers, &[]);
    rewrite_file(placed, |file| file.without_any_suffix(&KNOWN_SUFFIXES).with_suffix(CONTROLLER_SUFFIX))
}

/// Move back from the web module into the core application.
fn model(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };

    let mut result = segments.to_vec();
    let identity = AppIdentity::from_segment(&segments[app], &layout.web_suffix);
    if identity.is_web {
        result[app] = identity.base_name;
        if let Some(index) = find_directory(&result, app, &layout.controllers) {
            result.remove(index);
        }
    }
    rewrite_file(result, |file| file.without_suffix(CONTROLLER_SUFFIX))
}

fn view(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };
    let web = ensure_web_module(segments, app, layout);
    let placed = ensure_directory(&web, app, &layout.views, &[layout.controllers.as_str()]);
    rewrite_file(placed, |file| file.without_suffix(CONTROLLER_SUFFIX).with_suffix(VIEW_SUFFIX))
}

/// Controllers get a `<name>_html/index.html.heex` template; anything else
/// becomes a `.html.heex` file under `templates`.
fn html(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };
    let web = ensure_web_module(segments, app, layout);

    let file = file_name(&web);
    let parent = &web[web.len() - 2];
    if parent.ends_with(HTML_SUFFIX) && file.extension.ends_with("heex") {
        return web;
    }

    if find_directory(&web, app, &layout.controllers).is_some() {
        let name = file.without_any_suffix(&KNOWN_SUFFIXES).stem;
        let mut result = web;
        result.pop();
        result.push(format!("{}{}", name, HTML_SUFFIX));
        result.push(INDEX_TEMPLATE.to_string());
        return result;
    }

    let placed = ensure_directory(&web, app, &layout.templates, &[layout.views.as_str()]);
    rewrite_file(placed, |file| file.without_suffix(VIEW_SUFFIX).with_extension(HEEX_EXTENSION))
}

fn live(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };
    let web = ensure_web_module(segments, app, layout);
    let placed = ensure_directory(
        &web,
        app,
        &layout.live,
        &[layout.views.as_str(), layout.controllers.as_str()],
    );
    rewrite_file(placed, |file| {
        file.without_any_suffix(&[CONTROLLER_SUFFIX, VIEW_SUFFIX]).with_suffix(LIVE_SUFFIX)
    })
}

/// Function components carry no filename marker.
fn component(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };
    let web = ensure_web_module(segments, app, layout);
    let placed = ensure_directory(
        &web,
        app,
        &layout.components,
        &[layout.controllers.as_str(), layout.views.as_str()],
    );
    rewrite_file(placed, |file| {
        file.without_any_suffix(&[CONTROLLER_SUFFIX, VIEW_SUFFIX, COMPONENT_SUFFIX])
    })
}

fn live_component(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };
    let web = ensure_web_module(segments, app, layout);
    let placed = ensure_directory(
        &web,
        app,
        &layout.live,
        &[layout.views.as_str(), layout.controllers.as_str(), layout.components.as_str()],
    );
    rewrite_file(placed, |file| {
        file.without_any_suffix(&[CONTROLLER_SUFFIX, VIEW_SUFFIX]).with_suffix(COMPONENT_SUFFIX)
    })
}

fn channel(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };
    let web = ensure_web_module(segments, app, layout);
    let placed = ensure_directory(
        &web,
        app,
        &layout.channels,
        &[layout.controllers.as_str(), layout.views.as_str(), layout.live.as_str()],
    );
    rewrite_file(placed, |file| {
        file.without_any_suffix(&[CONTROLLER_SUFFIX, VIEW_SUFFIX, LIVE_SUFFIX])
            .with_suffix(CHANNEL_SUFFIX)
    })
}

/// JSON modules sit next to their controller; other directories are left alone.
fn json(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(app) = app_index(segments, layout) else {
        return segments.to_vec();
    };
    let web = ensure_web_module(segments, app, layout);
    let placed = ensure_directory(&web, app, &layout.controllers, &[]);
    rewrite_file(placed, |file| {
        file.without_any_suffix(&[CONTROLLER_SUFFIX, HTML_SUFFIX]).with_suffix(JSON_SUFFIX)
    })
}

/// Re-root the path under `lib/mix/tasks`, keeping the rest as namespace.
fn task(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let Some(lib) = segments.iter().position(|segment| *segment == layout.lib) else {
        return segments.to_vec();
    };

    let already_task = lib + 2 < segments.len() - 1
        && segments[lib + 1] == MIX_DIR
        && segments[lib + 2] == TASKS_DIR;
    if already_task {
        return segments.to_vec();
    }

    let mut result = segments[..=lib].to_vec();
    result.push(MIX_DIR.to_string());
    result.push(TASKS_DIR.to_string());
    result.extend_from_slice(&segments[lib + 1..]);
    result
}

fn feature(segments: &[String], layout: &ProjectLayout) -> Vec<String> {
    let mut result = segments.to_vec();
    match segments.iter().position(|segment| *segment == layout.test) {
        Some(test) => {
            let has_features =
                test + 1 < segments.len() - 1 && segments[test + 1] == layout.features;
            if !has_features {
                result.insert(test + 1, layout.features.clone());
            }
        }
        // The first segment stands in for the missing root.
        None if segments.len() > 1 => {
            result[0] = layout.test.clone();
            result.insert(1, layout.features.clone());
        }
        None => {
            result.splice(0..0, [layout.test.clone(), layout.features.clone()]);
        }
    }
    rewrite_file(result, |file| {
        file.with_suffix(TEST_SUFFIX).with_extension(&layout.test_extension)
    })
}
