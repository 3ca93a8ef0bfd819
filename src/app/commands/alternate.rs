//! Resolve an alternate file and optionally create or open it.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, ConversionResult, EditorSettings, TargetKind};
use crate::ports::{EditorLauncher, ProjectFilesystem};

/// Options for the `alternate` command.
#[derive(Debug, Clone)]
pub struct AlternateOptions {
    pub path: String,
    pub target: TargetKind,
    /// Fail when no rule applies instead of echoing the input.
    pub strict: bool,
    /// Create the target file when absent.
    pub create: bool,
    /// Create the file empty instead of with a stub.
    pub skip_template: bool,
    /// Render the stub without touching the filesystem.
    pub show_template: bool,
    /// Editor to open the result with.
    pub open: Option<EditorSettings>,
}

impl AlternateOptions {
    pub fn new(path: impl Into<String>, target: TargetKind) -> Self {
        Self {
            path: path.into(),
            target,
            strict: false,
            create: false,
            skip_template: false,
            show_template: false,
            open: None,
        }
    }
}

/// What happened to the target file on `--create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Created(String),
    CreatedEmpty(String),
    AlreadyExists(String),
}

impl FileOutcome {
    pub fn message(&self) -> String {
        match self {
            FileOutcome::Created(path) => format!("Created file: {}", path),
            FileOutcome::CreatedEmpty(path) => format!("Created empty file: {}", path),
            FileOutcome::AlreadyExists(path) => format!("File already exists: {}", path),
        }
    }
}

/// Result of launching the editor. Failure is reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(String),
    Failed(String),
}

/// Everything the `alternate` command produced.
#[derive(Debug, Clone)]
pub struct AlternateOutcome {
    pub result: ConversionResult,
    /// Kind detected for the input path.
    pub detected: Option<TargetKind>,
    /// Stub text, when it was requested for display.
    pub template: Option<String>,
    pub file: Option<FileOutcome>,
    pub open: Option<OpenOutcome>,
}

pub fn execute<F, E>(ctx: &AppContext<F, E>, options: AlternateOptions) -> Result<AlternateOutcome, AppError>
where
    F: ProjectFilesystem,
    E: EditorLauncher,
{
    let resolver = ctx.resolver();
    let result = if options.strict {
        resolver.convert_checked(&options.path, options.target)?
    } else {
        resolver.convert(&options.path, options.target)?
    };
    let detected = resolver.detect_kind(&options.path);
    debug!(
        input = %options.path,
        detected = detected.map_or("unknown", |kind| kind.name()),
        target = %options.target,
        output = %result.path,
        "converted path"
    );

    let mut template = None;
    let mut file = None;
    if options.show_template {
        template = Some(ctx.synthesizer().generate(&result.path, result.kind));
    } else if options.create {
        file = Some(create_file(ctx, &result, options.skip_template)?);
    }

    let open = options.open.as_ref().map(|editor| match ctx.editor().open(editor, &result.path) {
        Ok(()) => OpenOutcome::Opened(result.path.clone()),
        Err(err) => OpenOutcome::Failed(err.to_string()),
    });

    Ok(AlternateOutcome { result, detected, template, file, open })
}

fn create_file<F, E>(
    ctx: &AppContext<F, E>,
    result: &ConversionResult,
    skip_template: bool,
) -> Result<FileOutcome, AppError>
where
    F: ProjectFilesystem,
    E: EditorLauncher,
{
    let path = &result.path;
    if ctx.filesystem().file_exists(path) {
        return Ok(FileOutcome::AlreadyExists(path.clone()));
    }

    if skip_template {
        ctx.filesystem().write_file(path, "")?;
        info!(path = %path, "created empty file");
        return Ok(FileOutcome::CreatedEmpty(path.clone()));
    }

    let content = ctx.synthesizer().generate(path, result.kind);
    ctx.filesystem().write_file(path, &content)?;
    info!(path = %path, kind = %result.kind, "created file from stub");
    Ok(FileOutcome::Created(path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Configuration, ConversionError};
    use crate::testing::{FakeEditorLauncher, MemoryFilesystem};

    const CONTROLLER: &str = "lib/sneffels_web/controllers/page_controller.ex";

    fn context(fs: MemoryFilesystem, editor: FakeEditorLauncher) -> AppContext<MemoryFilesystem, FakeEditorLauncher> {
        AppContext::new(fs, editor, &Configuration::default())
    }

    #[test]
    fn converts_without_side_effects_by_default() {
        let ctx = context(MemoryFilesystem::new(), FakeEditorLauncher::new());
        let outcome = execute(&ctx, AlternateOptions::new(CONTROLLER, TargetKind::Test)).unwrap();

        assert_eq!(outcome.result.path, "test/sneffels_web/controllers/page_controller_test.exs");
        assert_eq!(outcome.detected, Some(TargetKind::Controller));
        assert_eq!(outcome.file, None);
        assert_eq!(outcome.template, None);
        assert!(ctx.filesystem().paths().is_empty());
    }

    #[test]
    fn create_writes_stub() {
        let ctx = context(MemoryFilesystem::new(), FakeEditorLauncher::new());
        let options = AlternateOptions { create: true, ..AlternateOptions::new(CONTROLLER, TargetKind::Test) };
        let outcome = execute(&ctx, options).unwrap();

        let path = "test/sneffels_web/controllers/page_controller_test.exs";
        assert_eq!(outcome.file, Some(FileOutcome::Created(path.to_string())));
        assert_eq!(
            ctx.filesystem().content(path).unwrap(),
            "defmodule SneffelsWeb.PageControllerTest do\n  use SneffelsWeb.ConnCase, async: true\n\n  alias SneffelsWeb.PageController\nend\n"
        );
    }

    #[test]
    fn create_with_skip_template_writes_empty_file() {
        let ctx = context(MemoryFilesystem::new(), FakeEditorLauncher::new());
        let options = AlternateOptions {
            create: true,
            skip_template: true,
            ..AlternateOptions::new(CONTROLLER, TargetKind::View)
        };
        let outcome = execute(&ctx, options).unwrap();

        let path = "lib/sneffels_web/views/page_view.ex";
        assert_eq!(outcome.file, Some(FileOutcome::CreatedEmpty(path.to_string())));
        assert_eq!(ctx.filesystem().content(path).as_deref(), Some(""));
    }

    #[test]
    fn create_leaves_existing_file_alone() {
        let path = "lib/sneffels/page.ex";
        let fs = MemoryFilesystem::new().with_file(path, "keep me");
        let ctx = context(fs, FakeEditorLauncher::new());
        let options = AlternateOptions { create: true, ..AlternateOptions::new(CONTROLLER, TargetKind::Model) };
        let outcome = execute(&ctx, options).unwrap();

        assert_eq!(outcome.file, Some(FileOutcome::AlreadyExists(path.to_string())));
        assert_eq!(ctx.filesystem().content(path).as_deref(), Some("keep me"));
    }

    #[test]
    fn show_template_suppresses_creation() {
        let ctx = context(MemoryFilesystem::new(), FakeEditorLauncher::new());
        let options = AlternateOptions {
            create: true,
            show_template: true,
            ..AlternateOptions::new(CONTROLLER, TargetKind::Live)
        };
        let outcome = execute(&ctx, options).unwrap();

        assert_eq!(
            outcome.template.as_deref(),
            Some("defmodule SneffelsWeb.PageLive do\n  use SneffelsWeb, :live_view\nend\n")
        );
        assert_eq!(outcome.file, None);
        assert!(ctx.filesystem().paths().is_empty());
    }

    #[test]
    fn open_hands_result_to_editor() {
        let ctx = context(MemoryFilesystem::new(), FakeEditorLauncher::new());
        let editor = EditorSettings::from_command_line("zed -g").unwrap();
        let options = AlternateOptions {
            open: Some(editor.clone()),
            ..AlternateOptions::new(CONTROLLER, TargetKind::Model)
        };
        let outcome = execute(&ctx, options).unwrap();

        assert_eq!(outcome.open, Some(OpenOutcome::Opened("lib/sneffels/page.ex".to_string())));
        assert_eq!(
            *ctx.editor().launches.borrow(),
            vec![(editor, "lib/sneffels/page.ex".to_string())]
        );
    }

    #[test]
    fn failed_open_is_not_fatal() {
        let ctx = context(MemoryFilesystem::new(), FakeEditorLauncher::failing());
        let options = AlternateOptions {
            open: Some(EditorSettings::default()),
            ..AlternateOptions::new(CONTROLLER, TargetKind::Model)
        };
        let outcome = execute(&ctx, options).unwrap();

        assert!(matches!(outcome.open, Some(OpenOutcome::Failed(ref reason)) if reason.contains("zed")));
    }

    #[test]
    fn strict_mode_rejects_passthrough() {
        let ctx = context(MemoryFilesystem::new(), FakeEditorLauncher::new());
        let options = AlternateOptions { strict: true, ..AlternateOptions::new("priv/repo/seeds.exs", TargetKind::Controller) };
        let err = execute(&ctx, options).unwrap_err();

        assert!(matches!(err, AppError::Conversion(ConversionError::UnsupportedConversion { .. })));
    }

    #[test]
    fn invalid_path_propagates() {
        let ctx = context(MemoryFilesystem::new(), FakeEditorLauncher::new());
        let err = execute(&ctx, AlternateOptions::new("lib/sneffels/", TargetKind::Test)).unwrap_err();
        assert!(err.is_invalid_path());
    }

    #[test]
    fn file_outcome_messages() {
        assert_eq!(FileOutcome::Created("a.ex".into()).message(), "Created file: a.ex");
        assert_eq!(FileOutcome::CreatedEmpty("a.ex".into()).message(), "Created empty file: a.ex");
        assert_eq!(FileOutcome::AlreadyExists("a.ex".into()).message(), "File already exists: a.ex");
    }
}
