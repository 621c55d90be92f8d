//! TETRS Reserve - A Rusty Tetris piece queue
//!
//! A queue of upcoming pieces, a reserve stack to hold some back, and swaps
//! between the two, driven from a numbered menu.

mod bag;
mod error;
mod game;
mod menu;
mod piece;
mod queue;
mod session;
mod settings;
mod stack;
mod swap;
mod tetromino;
mod ui;

use bag::PieceFactory;
use game::Controller;
use settings::Settings;
use std::io;
use tracing_subscriber::EnvFilter;

/// Get the log directory, creating it if needed
fn log_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("tetrs-reserve");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    let log_dir = log_dir();
    let log_file = format!("{:08x}.log", session_id);

    // Setup tracing to log file so it never mixes with the menu
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tetrs_reserve=debug")),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "TETRS Reserve starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = Settings::load();
    if let Some(path) = Settings::settings_path() {
        tracing::debug!("Settings path: {}", path.display());
    }
    let seed = settings.seed();
    tracing::info!("Piece seed {}", seed);

    let mut controller = Controller::start(PieceFactory::with_seed(seed));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = session::run(stdin.lock(), stdout.lock(), &mut controller, &settings.visual);

    match &result {
        Ok(()) => tracing::info!("Session ended after {} pieces", controller.next_id()),
        Err(e) => tracing::error!("Terminal I/O failed: {}", e),
    }
    result
}
