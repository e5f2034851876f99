//! headlines, top news headlines for one country, in the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐  NewsResult  ┌──────────┐ watch  ┌──────────┐  draw()  ┌──────────┐
//! │ source/   │ ───────────► │ store.rs │ ─────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (NewsAPI) │   (task)     │ (state)  │        │ (view)   │          │ (render) │
//! └───────────┘              └──────────┘        └──────────┘          └──────────┘
//!                                 ▲                   ▲
//!                                 │ fetch()           │ handle_key_event()
//!                                 └───────────── ┌──────────┐
//!                                                │ input.rs │
//!                                                └──────────┘
//! ```
//!
//! * **`source/`**: the `HeadlineSource` trait, the response types and the
//!   NewsAPI client.
//! * **`store`**: the fetch state machine; publishes every transition.
//! * **`app`**: the on-screen snapshot, selection and status line.
//! * **`ui`**: pure rendering: reads `App` state and draws widgets.
//! * **`input`**: maps key events to `App` mutations and commands.
//! * **`link`**: hands article URLs to the platform opener.
//! * **`config`** / **`logging`**: CLI parsing and tracing setup.

mod app;
mod config;
mod input;
mod link;
mod logging;
mod source;
mod store;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use app::App;
use config::{Cli, Config};
use input::Command;
use link::SystemOpener;
use logging::LogTarget;
use source::NewsApiClient;
use store::NewsStore;

// ---------------------------------------------------------------------------
// RAII terminal guard
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    logging::init(LogTarget::choose(config.log_file.as_deref(), !config.raw))?;

    let client = NewsApiClient::new(&config.base_url)?;

    if config.raw {
        let body = client
            .top_headlines_raw(&config.country, &config.api_key)
            .await?;
        println!("{body}");
        return Ok(());
    }

    run_tui(&config, client)
}

/// Run the interactive screen until the user quits.
///
/// Dropping the store on return abandons any fetch still in flight.
fn run_tui(config: &Config, client: NewsApiClient) -> Result<()> {
    install_panic_hook();
    info!(endpoint = %client.endpoint(), "starting headlines");

    let mut store = NewsStore::new(Arc::new(client), &config.country, &config.api_key);
    info!(source = store.source_name(), country = store.country(), "store ready");
    let mut rx = store.subscribe();
    let opener = SystemOpener;

    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(store.country());
    app.apply(store.current());

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Pick up the latest state published by the store.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        if rx.has_changed().unwrap_or(false) {
            let state = rx.borrow_and_update().clone();
            app.apply(state);
        }

        guard.terminal.draw(|f| ui::draw(&mut app, f))?;
        app.tick = app.tick.wrapping_add(1);

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match input::handle_key_event(&mut app, key) {
                    Some(Command::Fetch) => store.fetch(),
                    Some(Command::OpenLink) => app.open_selected(&opener),
                    None => {}
                }
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
