use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docwatch::commands::{hook, rules, template};

#[derive(Parser)]
#[command(name = "docwatch")]
#[command(about = "Flags documentation made stale by Claude Code edits", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    hook: HookArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the tool event on stdin (default when no subcommand is given)
    Hook,

    /// Show the effective path and keyword rules
    Rules,

    /// Print a documentation template (api, component, feature, architecture, or a doc path)
    Template {
        /// Template kind or doc path such as api/endpoints.md
        name: String,
    },
}

/// Accepted before or after the subcommand
#[derive(Args)]
struct HookArgs {
    /// Project root [default: $CLAUDE_PROJECT_DIR, then the current directory]
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    /// Documentation directory, relative to the project root
    #[arg(long, global = true)]
    docs_dir: Option<PathBuf>,

    /// Don't append to .claude/logs/doc_updates.jsonl
    #[arg(long, global = true)]
    no_log: bool,
}

impl From<HookArgs> for hook::HookOptions {
    fn from(args: HookArgs) -> Self {
        hook::HookOptions {
            project_dir: args.project_dir,
            docs_dir: args.docs_dir,
            no_log: args.no_log,
        }
    }
}

/// Initialize tracing on stderr; stdout carries the hook report
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("DOCWATCH_LOG").unwrap_or_else(|_| "docwatch=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    // Argument errors in hook mode must not fail the tool call either
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => e.exit(),
    };

    let result = match cli.command {
        None | Some(Commands::Hook) => {
            let options: hook::HookOptions = cli.hook.into();
            hook::execute(&options);
            return ExitCode::SUCCESS;
        }
        Some(Commands::Rules) => rules::list(cli.hook.project_dir),
        Some(Commands::Template { name }) => template::show(&name),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
