//! CLI Adapter.

mod logging;

use std::fmt::Write as _;
use std::io::IsTerminal;
use std::str::FromStr;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::adapters::dialoguer_picker::DialoguerKindPicker;
use crate::app::api::{self, AlternateOptions, AlternateOutcome, OpenOutcome};
use crate::domain::{AppError, TargetKind};
use crate::ports::KindPicker;

pub use logging::LOG_ENV;

#[derive(Parser)]
#[command(name = "fawkes")]
#[command(version)]
#[command(about = "Jump between alternate files of a Phoenix project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a path to one of its alternate files
    #[command(visible_alias = "alt")]
    Alternate(AlternateArgs),
    /// Print the Elixir module name for a file path
    ModuleName {
        /// File path, e.g. lib/my_app_web/controllers/user_controller.ex
        path: String,
    },
    /// Print the file path for an Elixir module name
    ModulePath {
        /// Module name, e.g. MyAppWeb.UserController
        module: String,
        /// Root directory the path starts with [default: configured lib directory]
        #[arg(long)]
        root: Option<String>,
        /// File extension [default: configured source extension]
        #[arg(long)]
        ext: Option<String>,
    },
    /// Print a shell completion script
    Completions {
        /// Shell to generate the script for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct AlternateArgs {
    /// The input file path to convert
    input_path: String,
    /// Type of target to visit; prompted for on a terminal, otherwise test
    #[arg(short, long, value_parser = TargetKind::from_str)]
    target: Option<TargetKind>,
    /// Show details about the conversion
    #[arg(long, conflicts_with = "json")]
    verbose: bool,
    /// Print the conversion result as JSON
    #[arg(long)]
    json: bool,
    /// Fail when no conversion rule applies to the path
    #[arg(long)]
    strict: bool,
    /// Create the target file if it doesn't exist
    #[arg(long)]
    create: bool,
    /// Create the file empty instead of from a template
    #[arg(long)]
    skip_template: bool,
    /// Print the template that would be used instead of creating the file
    #[arg(long)]
    show_template: bool,
    /// Open the resulting file in an editor
    #[arg(long)]
    open: bool,
    /// Editor command (overrides config, $EDITOR and $VISUAL)
    #[arg(long)]
    editor: Option<String>,
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Alternate(args) => run_alternate(args).map(|_| 0),
        Commands::ModuleName { path } => api::load_configuration().map(|config| {
            println!("{}", api::module_name(&config, &path));
            0
        }),
        Commands::ModulePath { module, root, ext } => api::load_configuration().map(|config| {
            println!("{}", api::module_path(&config, &module, root.as_deref(), ext.as_deref()));
            0
        }),
        Commands::Completions { shell } => {
            write_completions(shell, &mut std::io::stdout());
            Ok(0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn write_completions(shell: Shell, out: &mut dyn std::io::Write) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, out);
}

fn run_alternate(args: AlternateArgs) -> Result<(), AppError> {
    let interactive = std::io::stdin().is_terminal();
    let picker = DialoguerKindPicker::new();
    let Some(target) = resolve_target(args.target, interactive, &picker, &args.input_path)? else {
        return Ok(());
    };

    let config = api::load_configuration()?;
    let open = args.open.then(|| api::editor_for(args.editor.as_deref(), &config));
    let options = AlternateOptions {
        path: args.input_path,
        target,
        strict: args.strict,
        create: args.create,
        skip_template: args.skip_template,
        show_template: args.show_template,
        open,
    };

    let outcome = api::alternate(&config, options)?;
    let report = render_report(&outcome, args.verbose, args.json)?;
    print!("{}", report.stdout);
    eprint!("{}", report.stderr);
    Ok(())
}

/// Target from the flag, the picker on a terminal, or `test`.
///
/// `Ok(None)` means the user cancelled the picker.
fn resolve_target<P: KindPicker>(
    target: Option<TargetKind>,
    interactive: bool,
    picker: &P,
    path: &str,
) -> Result<Option<TargetKind>, AppError> {
    match target {
        Some(kind) => Ok(Some(kind)),
        None if interactive => picker.pick(path),
        None => Ok(Some(TargetKind::Test)),
    }
}

/// Text destined for stdout and stderr.
#[derive(Debug, Default, PartialEq, Eq)]
struct Report {
    stdout: String,
    stderr: String,
}

fn render_report(outcome: &AlternateOutcome, verbose: bool, json: bool) -> Result<Report, AppError> {
    let mut report = Report::default();
    let result = &outcome.result;

    if json {
        report.stdout.push_str(&serde_json::to_string_pretty(result)?);
        report.stdout.push('\n');
    } else if verbose {
        let detected = outcome.detected.map_or("unknown", |kind| kind.name());
        let _ = writeln!(
            report.stdout,
            "Converting {} ({}) to {} type",
            result.original_path, detected, result.kind
        );
        let _ = writeln!(report.stdout, "Result: {}", result.path);
    } else {
        let _ = writeln!(report.stdout, "{}", result.path);
    }

    if let Some(template) = &outcome.template {
        let _ = write!(report.stdout, "\nTemplate:\n{}", template);
    }

    // JSON output stays parseable; status lines move to stderr.
    if let Some(file) = &outcome.file {
        let target = if json { &mut report.stderr } else { &mut report.stdout };
        let _ = writeln!(target, "{}", file.message());
    }

    match &outcome.open {
        Some(OpenOutcome::Opened(path)) if verbose => {
            let _ = writeln!(report.stdout, "Opened file in editor: {}", path);
        }
        Some(OpenOutcome::Failed(reason)) => {
            let _ = writeln!(report.stderr, "Failed to open file: {}", reason);
        }
        _ => {}
    }

    Ok(report)
}
