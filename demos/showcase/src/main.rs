//! Showcase - tui-parts demo app
//!
//! A small user admin screen wiring both components together:
//! - State: what the app knows
//! - Actions: what can happen
//! - Reducer: how state changes
//! - Main loop: Event -> Actions -> Reduce -> Render
//!
//! Data loads after a simulated delay so the table's loading state is
//! visible on startup.
//!
//! Keys: tab cycles focus, j/k move the table cursor, space selects,
//! a selects all, 1-4 toggle sort, q (table) or esc quits.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_parts_core::{process_raw_event, spawn_event_poller, RawEvent};

use showcase_demo::action::Action;
use showcase_demo::data;
use showcase_demo::reducer::update;
use showcase_demo::state::AppState;
use showcase_demo::ui::ShowcaseUi;

/// User admin TUI built from tui-parts components
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Demo app for the tui-parts data table and input field")]
struct Args {
    /// Simulated data loading delay in milliseconds
    #[arg(long, default_value = "2000")]
    loading_ms: u64,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args.loading_ms).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    loading_ms: u64,
) -> io::Result<()> {
    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut state = AppState::new();
    let mut ui = ShowcaseUi::new();

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    // Simulated data load
    let data_tx = action_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(loading_ms)).await;
        let action = match data::load_users() {
            Ok(users) => Action::DataDidLoad(users),
            Err(e) => Action::DataDidError(e.to_string()),
        };
        let _ = data_tx.send(action);
    });

    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                ui.render(frame, frame.area(), &state);
            })?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                for action in ui.map_event(&event, &state) {
                    let _ = action_tx.send(action);
                }
                // Component-local state (cursor, sort, reveal) moves
                // without producing actions, so every event re-renders
                should_render = true;
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                should_render |= update(&mut state, action);
            }
        }
    }

    cancel_token.cancel();
    Ok(())
}
