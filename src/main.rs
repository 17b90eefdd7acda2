mod app;
mod favorites;
mod format;
mod listing;
mod nav;
mod table;
mod ui;

use std::fs::File;
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use favorites::FavoritesRegistry;
use ui::{handle_key, ColorScheme};

#[derive(Parser, Debug)]
#[command(name = "favdir")]
#[command(version)]
#[command(about = "Browse favorite directories in a two-pane terminal view", long_about = None)]
struct Args {
    /// Base directory for the built-in favorites (default: $HOME)
    #[arg(long)]
    home: Option<PathBuf>,

    /// Open confirmed items with the system's default application
    #[arg(long)]
    open: bool,

    /// Write log records to this file (level from RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_deref())?;

    let home = args
        .home
        .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("/"));
    log::info!("favorites rooted at {}", home.display());

    let registry = FavoritesRegistry::with_defaults(&home);
    run_tui_mode(registry, args.open)
}

/// Route `log` records to `path`. Without a path logging stays off, since the
/// terminal belongs to the UI.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

fn run_tui_mode(registry: FavoritesRegistry, open_items: bool) -> Result<()> {
    // Set up panic handler to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(registry, ColorScheme::default(), open_items);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    let cleanup_result = cleanup_terminal(&mut terminal);
    result.and(cleanup_result)
}

/// Clean up terminal state.
fn cleanup_terminal<B: ratatui::backend::Backend + Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, then block for the next input event. Each event is handled to
/// completion before the next one is read.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render_ui(frame, app))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press, not release
            if key.kind == KeyEventKind::Press {
                let command = handle_key(key, app.input_mode);
                app.handle_command(command);
            }
        }

        if app.should_quit {
            break;
        }
    }

    log::info!("exiting");
    Ok(())
}
