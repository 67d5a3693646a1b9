//! Terminal entry point for the address form

use address_form::app::App;
use address_form::config::TuiConfig;
use address_form::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    init_logging();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Using default config: {err}");
        TuiConfig::default()
    });
    tracing::debug!(?config, "Loaded config");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("{err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data dir so output does not tear the screen;
/// fall back to stderr when no data dir is available.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "address_form=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init(),
        None => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
}

fn open_log_file() -> Option<File> {
    let dir = TuiConfig::project_dirs()?.data_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("address-form.log"))
        .ok()
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Block until the next input; nothing on screen changes without one
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
            Event::Resize(_width, _height) => {
                // Layout is recomputed on the next draw
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
