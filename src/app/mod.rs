//! Application loop and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::quiz::{FetchTicket, QUIZ_SIZE};
use crate::trivia::{RawQuestion, TriviaClient, TriviaError};
use crate::ui;
use input::key_with_modifier_to_action;
use state::{AppState, Effect, FetchRequest, Screen};

/// Result of a background fetch, tagged with its session
#[derive(Debug)]
struct FetchOutcome {
    ticket: FetchTicket,
    result: Result<Vec<RawQuestion>, TriviaError>,
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Trivia API client shared by all fetches
    client: TriviaClient,

    /// Channel carrying fetch results back to the loop
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, client: TriviaClient) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let state = AppState::new(config.animation_speed);

        Ok(Self { config, state, client, fetch_tx, fetch_rx, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        let theme = self.config.active_theme();

        loop {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &theme);
            })?;

            // Apply finished fetches
            while let Ok(outcome) = self.fetch_rx.try_recv() {
                self.state.apply_fetch(outcome.ticket, outcome.result);
            }

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        break;
                    }
                }
            }

            // Update animations
            if matches!(self.state.screen, Screen::Landing) {
                self.state.landing_animation.tick();
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = key_with_modifier_to_action(key.code, key.modifiers) else {
            return false;
        };

        match self.state.handle_action(action) {
            Effect::None => false,
            Effect::Fetch(request) => {
                self.spawn_fetch(request);
                false
            }
            Effect::Quit => true,
        }
    }

    /// Fetch questions in the background for one quiz session
    ///
    /// The task stops early if the session is cancelled, and its result is
    /// only applied if the ticket still matches the session on screen.
    fn spawn_fetch(&self, request: FetchRequest) {
        let client = self.client.clone();
        let tx = self.fetch_tx.clone();
        let FetchRequest { ticket, cancel } = request;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Question fetch cancelled");
                }
                result = client.fetch_questions(QUIZ_SIZE) => {
                    // Receiver gone means the app is shutting down
                    let _ = tx.send(FetchOutcome { ticket, result });
                }
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
