//! Reservation form TUI.
//!
//! Event loop: terminal events arrive through the async poller, the root
//! view maps them to actions, the store runs them through the reducer, and
//! a changed state triggers a re-render. On exit after a successful
//! submission the accepted reservation is handed off as JSON.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use reservation_tui::action::Action;
use reservation_tui::app::App;
use reservation_tui::dispatch::{
    process_raw_event, spawn_event_poller, EventKind, RawEvent, Store,
};
use reservation_tui::reducer::reducer;
use reservation_tui::state::AppState;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reservation form TUI
#[derive(Parser, Debug)]
#[command(name = "reservation")]
#[command(about = "Collect and submit a reservation from the terminal")]
struct Args {
    /// Pre-select the check-in date (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Pre-select the check-out date (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Write the accepted reservation as JSON to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // ===== Submission hand-off =====
    let state = result?;
    if let Some(reservation) = state.reservation() {
        let json = serde_json::to_string_pretty(&reservation)?;
        match &args.output {
            Some(path) => std::fs::write(path, json)?,
            None => println!("{json}"),
        }
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: &Args,
) -> io::Result<AppState> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut initial = AppState::new(Local::now().date_naive());
    if let Some(date) = args.start_date {
        initial.selection.selected_start_date = date.format(DATE_FORMAT).to_string();
    }
    if let Some(date) = args.end_date {
        initial.selection.selected_end_date = date.format(DATE_FORMAT).to_string();
    }
    let mut store = Store::new(initial, reducer);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _poller = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut app = App::new();
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                let area = frame.area();
                app.render(frame, area, store.state());
            })?;
            should_render = false;
        }

        tokio::select! {
            Some(raw) = event_rx.recv() => {
                match process_raw_event(raw) {
                    EventKind::Resize(_, _) => should_render = true,
                    event => {
                        for action in app.map_event(&event, store.state()) {
                            let _ = action_tx.send(action);
                        }
                    }
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                if store.dispatch(action) {
                    should_render = true;
                }
            }
        }
    }

    cancel_token.cancel();
    Ok(store.state().clone())
}
