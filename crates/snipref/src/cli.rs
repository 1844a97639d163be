//! Command-line interface.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::app::copy::{CopyHandler, CopyStatus, CopyStyle};
use crate::app::language::LanguageResolver;
use crate::app::selection::SelectionLoader;
use crate::domain::model::{LineRange, Locator, SelectionSnapshot};
use crate::infra::clipboard::{ClipboardSink, StdoutSink, SystemClipboard};
use crate::infra::config::Config;
use crate::infra::notify::TermNotifier;
use crate::infra::workspace;

#[derive(Parser)]
#[command(
    name = "snipref",
    version,
    about = "Copy code references, optionally with fenced snippets, to the clipboard"
)]
pub struct Cli {
    /// Workspace root for relative paths (default: nearest ancestor with
    /// .git, else the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Print the output to stdout instead of writing the clipboard.
    #[arg(long, global = true)]
    stdout: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy `path:lineRange` for the selection.
    Path {
        /// Selection target, `FILE[:START[-END]]`.
        #[arg(value_name = "FILE[:RANGE]")]
        target: Locator,

        /// Line range `START[-END]`, overriding any range in the target.
        #[arg(long, value_name = "RANGE")]
        lines: Option<LineRange>,
    },
    /// Copy `path:lineRange` plus a fenced code block of the selected text.
    Code {
        /// Selection target, `FILE[:START[-END]]`.
        #[arg(value_name = "FILE[:RANGE]")]
        target: Locator,

        /// Line range `START[-END]`, overriding any range in the target.
        #[arg(long, value_name = "RANGE")]
        lines: Option<LineRange>,
    },
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse arguments and dispatch. Precondition failures (no target, empty
/// selection) exit with status 1 after a single warning.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "snipref", &mut io::stdout());
            Ok(())
        }
        Commands::Path { target, lines } => {
            execute(CopyStyle::PathOnly, target, lines, cli.root, cli.stdout)
        }
        Commands::Code { target, lines } => {
            execute(CopyStyle::WithCode, target, lines, cli.root, cli.stdout)
        }
    }
}

fn execute(
    style: CopyStyle,
    mut locator: Locator,
    lines: Option<LineRange>,
    root: Option<PathBuf>,
    force_stdout: bool,
) -> Result<()> {
    let root = workspace::resolve_root(root)?;
    let config = Config::load(&root)?;

    if let Some(lines) = lines {
        locator.range = Some(lines);
    }

    let resolver = LanguageResolver::from_config(&config);
    let loader = SelectionLoader::new(root, resolver);
    let selection = loader.load(&locator)?;

    let mut notifier = TermNotifier;
    let status = if force_stdout || config.stdout_by_default() {
        let mut sink = StdoutSink;
        run_copy(&mut sink, &mut notifier, style, selection.as_ref())?
    } else {
        let mut sink = SystemClipboard::new();
        run_copy(&mut sink, &mut notifier, style, selection.as_ref())?
    };

    if !status.succeeded() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_copy<C: ClipboardSink>(
    sink: &mut C,
    notifier: &mut TermNotifier,
    style: CopyStyle,
    selection: Option<&SelectionSnapshot>,
) -> Result<CopyStatus> {
    CopyHandler::new(sink, notifier).run(style, selection)
}
