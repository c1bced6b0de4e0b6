use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::eval::{Evaluator, HttpEvaluator};
use connect_four::game::GameEngine;
use connect_four::ui::App;

/// Play Connect Four in the terminal, with optional best-move evaluation
/// from an external solver.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the solver endpoint URL
    #[arg(long)]
    solver_url: Option<String>,

    /// Disable the solver evaluation panel
    #[arg(long)]
    no_eval: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(url) = cli.solver_url {
        config.solver.url = url;
    }
    if cli.no_eval {
        config.solver.enabled = false;
    }
    config.validate().context("validating configuration")?;

    let evaluator: Option<Box<dyn Evaluator>> = if config.solver.enabled {
        let http = HttpEvaluator::new(
            config.solver.url.clone(),
            config.solver.query_param.clone(),
            Duration::from_secs(config.solver.timeout_secs),
        )
        .context("building solver client")?;
        Some(Box::new(http))
    } else {
        None
    };

    let engine = GameEngine::with_first_player(config.game.first_player);
    run_tui(App::new(engine, evaluator)).context("running terminal UI")?;
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
