//! Stub source text for newly created alternate files.

mod parts;

use minijinja::{Environment, context};
use serde::Deserialize;

use super::TargetKind;
use super::layout::ProjectLayout;
use super::naming::to_pascal_case;
use parts::{ModuleParts, Root};

const MODULE_TEMPLATE_NAME: &str = "module.ex";
const MODULE_TEMPLATE: &str = include_str!("module.ex.j2");

/// Knobs for stub generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StubOptions {
    /// Emit the kind's `use` lines.
    pub include_use: bool,
    /// Emit a `@moduledoc` block.
    pub include_module_doc: bool,
    /// Application name used when the path does not name one.
    pub app_name: Option<String>,
}

impl Default for StubOptions {
    fn default() -> Self {
        Self { include_use: true, include_module_doc: false, app_name: None }
    }
}

/// What gets fed into the module template.
struct StubShape {
    module: String,
    doc_label: &'static str,
    body: Vec<String>,
    allow_doc: bool,
}

impl StubShape {
    fn new(module: String, doc_label: &'static str, body: Vec<String>) -> Self {
        Self { module, doc_label, body, allow_doc: true }
    }

    fn test(module: String, body: Vec<String>) -> Self {
        Self { module, doc_label: "", body, allow_doc: false }
    }
}

/// Turns a resolved path and its kind into Elixir source.
#[derive(Debug, Clone)]
pub struct TemplateSynthesizer {
    layout: ProjectLayout,
    options: StubOptions,
    env: Environment<'static>,
}

impl Default for TemplateSynthesizer {
    fn default() -> Self {
        Self::new(ProjectLayout::default(), StubOptions::default())
    }
}

impl TemplateSynthesizer {
    pub fn new(layout: ProjectLayout, options: StubOptions) -> Self {
        Self::with_template(layout, options, MODULE_TEMPLATE)
    }

    /// A template that fails to parse is only noticed at render time, where
    /// it degrades to the bare module shell.
    fn with_template(layout: ProjectLayout, options: StubOptions, source: &'static str) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        let _ = env.add_template(MODULE_TEMPLATE_NAME, source);
        Self { layout, options, env }
    }

    /// Render the stub for `path` as a file of kind `kind`.
    ///
    /// Never fails. HEEx templates are markup and get an empty stub.
    pub fn generate(&self, path: &str, kind: TargetKind) -> String {
        let parts = ModuleParts::from_path(path, &self.layout, self.options.app_name.as_deref());
        if kind == TargetKind::Html && parts.extension.ends_with("heex") {
            return String::new();
        }

        let shape = self.shape(path, kind, &parts);
        self.render(&shape, &parts)
    }

    fn shape(&self, path: &str, kind: TargetKind, parts: &ModuleParts) -> StubShape {
        let web = parts.web();
        let uses = |lines: Vec<String>| if self.options.include_use { lines } else { Vec::new() };

        match kind {
            TargetKind::Test => self.test_shape(parts),
            TargetKind::Feature => feature_shape(parts),
            TargetKind::Controller => StubShape::new(
                parts.module(&web, "Controller"),
                "Controller",
                uses(vec![format!("use {}, :controller", web)]),
            ),
            TargetKind::Model => StubShape::new(
                parts.module(&parts.app, ""),
                "Schema",
                uses(vec!["use Ecto.Schema".to_string(), "import Ecto.Changeset".to_string()]),
            ),
            TargetKind::View => StubShape::new(
                parts.module(&web, "View"),
                "View",
                uses(vec![format!("use {}, :view", web)]),
            ),
            TargetKind::Html => StubShape::new(
                parts.module(&web, "HTML"),
                "HTML",
                uses(vec![
                    format!("use {}, :html", web),
                    String::new(),
                    format!("embed_templates \"{}_html/*\"", html_base(&parts.stem)),
                ]),
            ),
            TargetKind::Live => StubShape::new(
                parts.module(&web, "Live"),
                "LiveView",
                uses(vec![format!("use {}, :live_view", web)]),
            ),
            TargetKind::Component => StubShape::new(
                parts.module(&web, ""),
                "Component",
                uses(vec!["use Phoenix.Component".to_string()]),
            ),
            TargetKind::LiveComponent => StubShape::new(
                parts.module(&web, "Component"),
                "LiveComponent",
                uses(vec![format!("use {}, :live_component", web)]),
            ),
            TargetKind::Channel => StubShape::new(
                parts.module(&web, "Channel"),
                "Channel",
                uses(vec![format!("use {}, :channel", web)]),
            ),
            TargetKind::Json => StubShape::new(parts.module(&web, "JSON"), "JSON", Vec::new()),
            TargetKind::Task => {
                let namespace = ModuleParts::task_namespace(path, &self.layout)
                    .unwrap_or_else(|| parts.namespace.clone());
                let task = ModuleParts { namespace, ..parts.clone() };
                let mut body = uses(vec!["use Mix.Task".to_string(), String::new()]);
                body.extend([
                    format!("@shortdoc \"{} task\"", parts.name),
                    String::new(),
                    "@impl true".to_string(),
                    "def run(argv) do".to_string(),
                    "end".to_string(),
                ]);
                StubShape::new(task.module("Mix.Tasks", ""), "Mix task", body)
            }
        }
    }

    fn test_shape(&self, parts: &ModuleParts) -> StubShape {
        if parts.root == Some(Root::Lib) {
            return StubShape::test(parts.module(&parts.app, ""), Vec::new());
        }

        let web = parts.web();
        let layout = &self.layout;
        let conn_case = format!("use {}.ConnCase, async: true", web);

        if parts.has_directory(&layout.features) {
            return feature_shape(parts);
        }

        let (subject, mut body) = if parts.has_directory(&layout.controllers) {
            (parts.module(&web, "Controller"), vec![conn_case])
        } else if parts.has_directory(&layout.channels) {
            (
                parts.module(&web, "Channel"),
                vec![format!("use {}.ChannelCase, async: true", web)],
            )
        } else if parts.has_directory(&layout.live) {
            let suffix = if parts.stem.ends_with("_component") { "Component" } else { "Live" };
            (
                parts.module(&web, suffix),
                vec![conn_case, String::new(), "import Phoenix.LiveViewTest".to_string()],
            )
        } else if parts.has_directory(&layout.components) {
            (parts.module(&web, ""), vec![conn_case])
        } else {
            (parts.module(&parts.app, ""), vec!["use ExUnit.Case, async: true".to_string()])
        };

        if body.len() == 1 {
            body.push(String::new());
        }
        body.push(format!("alias {}", subject));
        StubShape::test(format!("{}Test", subject), body)
    }

    fn render(&self, shape: &StubShape, parts: &ModuleParts) -> String {
        self.env
            .get_template(MODULE_TEMPLATE_NAME)
            .and_then(|template| {
                template.render(context! {
                    module => &shape.module,
                    module_doc => shape.allow_doc && self.options.include_module_doc,
                    doc_label => shape.doc_label,
                    subject => &parts.name,
                    body => &shape.body,
                })
            })
            .unwrap_or_else(|_| bare_module(&shape.module))
    }
}

fn bare_module(module: &str) -> String {
    format!("defmodule {} do\nend\n", module)
}

fn feature_shape(parts: &ModuleParts) -> StubShape {
    let web = parts.web();
    let name = to_pascal_case(&parts.stem);
    StubShape::test(
        format!("{}.{}Test", web, name),
        vec![format!("use {}.FeatureCase, async: true", web)],
    )
}

/// `page_html` and `page` both embed `page_html/*`.
fn html_base(stem: &str) -> &str {
    stem.strip_suffix("_html").unwrap_or(stem)
}
