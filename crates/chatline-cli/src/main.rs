//! chatline - terminal chat client for a JSON chat endpoint

mod config;
mod line;
mod ui;

use chatline_client::{ChatSession, DEFAULT_ENDPOINT, HttpTransport};
use chatline_tui::Theme;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// chatline - chat with a remote endpoint from the terminal
#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Chat endpoint URL (default: http://localhost:5001/chat)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Send a single message, print the replies and exit
    #[arg(short, long)]
    message: Option<String>,

    /// Disable TUI mode (use simple stdin/stdout)
    #[arg(long)]
    no_tui: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file (TUI mode)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Initialize config file
    #[arg(long)]
    init_config: bool,
}

/// Where logs are written; `None` means stderr.
///
/// The TUI owns the terminal, so its logs always go to a file.
fn log_destination(use_tui: bool, log_file: Option<PathBuf>) -> Option<PathBuf> {
    use_tui.then(|| log_file.unwrap_or_else(config::Config::default_log_path))
}

/// Install the tracing subscriber: errors by default, everything with `--verbose`
fn init_logging(verbose: bool, use_tui: bool, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let default_filter = if verbose { "chatline=debug" } else { "chatline=error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let Some(path) = log_destination(use_tui, log_file) else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn parse_theme(name: Option<&str>) -> Theme {
    match name {
        None => Theme::default(),
        Some(name) => Theme::by_name(name).unwrap_or_else(|| {
            eprintln!("Warning: Unknown theme '{}', using dark", name);
            Theme::dark()
        }),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize config and exit
    if args.init_config {
        match config::Config::init() {
            Ok(path) => {
                println!("Config file at: {}", path.display());
                println!("\nExample config:\n{}", config::example_config());
            }
            Err(e) => {
                eprintln!("Error creating config: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let cfg = config::Config::load();

    // Merge config with CLI args (CLI takes precedence)
    let endpoint = args
        .endpoint
        .or(cfg.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    let use_tui =
        args.message.is_none() && !args.no_tui && cfg.tui.unwrap_or(true) && interactive;

    let log_file = args.log_file.or(cfg.log_file.as_ref().map(PathBuf::from));
    init_logging(args.verbose, use_tui, log_file)?;

    let transport = HttpTransport::new(&endpoint)?;
    tracing::debug!(%endpoint, use_tui, "starting chatline");
    let mut session = ChatSession::new(Arc::new(transport));

    let mut stdout = std::io::stdout();

    // Non-interactive mode
    if let Some(message) = args.message {
        return line::run_once(&mut session, &message, &mut stdout).await;
    }

    if use_tui {
        chatline_tui::terminal::install_panic_hook();
        return ui::run_tui(session, parse_theme(cfg.theme.as_deref())).await;
    }

    // Interactive mode (simple stdin/stdout)
    if interactive {
        eprintln!("chatline ({}) - Ctrl+D to exit", endpoint);
    }
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    line::run_lines(&mut session, stdin, &mut stdout, interactive).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "chatline",
            "-e",
            "http://example.test/chat",
            "-m",
            "hello",
            "--no-tui",
        ]);
        assert_eq!(args.endpoint.as_deref(), Some("http://example.test/chat"));
        assert_eq!(args.message.as_deref(), Some("hello"));
        assert!(args.no_tui);
        assert!(!args.verbose);
    }

    #[test]
    fn test_tui_always_logs_to_file() {
        assert_eq!(
            log_destination(true, None),
            Some(config::Config::default_log_path())
        );
        let custom = PathBuf::from("/tmp/chatline-test.log");
        assert_eq!(log_destination(true, Some(custom.clone())), Some(custom.clone()));
        assert_eq!(log_destination(false, Some(custom)), None);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!(parse_theme(Some("neon")).accent, Theme::dark().accent);
        assert_eq!(parse_theme(Some("Light")).accent, Theme::light().accent);
        assert_eq!(parse_theme(None).accent, Theme::dark().accent);
    }
}
