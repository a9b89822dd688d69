//! TUI application state and logic
//!
//! Network calls run on the tokio runtime while the UI keeps drawing; their
//! results come back over a channel and are applied between frames.

use crate::core::MAX_ATTEMPTS;
use crate::game::{
    Activity, GameStatus, PendingGuess, PendingReset, ResetOutcome, Session, SubmitOutcome,
};
use crate::remote::{ServiceError, Services};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// How long to wait for a key before checking for network results
const FRAME_POLL: Duration = Duration::from_millis(50);

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Finished network work, delivered back to the UI thread
#[derive(Debug)]
pub enum Completion {
    Validated {
        pending: PendingGuess,
        valid: bool,
    },
    Fetched {
        pending: PendingReset,
        result: Result<String, ServiceError>,
    },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    fn record(&mut self, status: GameStatus, guesses: usize) {
        match status {
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                    *slot += 1;
                }
            }
            GameStatus::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            GameStatus::Playing => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    /// Persistent error from the last failed word fetch
    pub source_error: Option<String>,
    pub stats: Statistics,
    pub should_quit: bool,
    services: Services,
    runtime: Handle,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl App {
    #[must_use]
    pub fn new(services: Services, runtime: Handle) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            session: Session::new(),
            messages: vec![Message {
                text: "Guess the word in 6 tries. Each guess must be a valid 5-letter word."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            source_error: None,
            stats: Statistics::default(),
            should_quit: false,
            services,
            runtime,
            completions_tx,
            completions_rx,
        }
    }

    /// Request a new target word; supersedes anything in flight
    pub fn new_game(&mut self) {
        let pending = self.session.begin_reset();
        let source = self.services.source.clone();
        let tx = self.completions_tx.clone();

        self.runtime.spawn(async move {
            let result = source.fetch().await;
            // Receiver gone means the app has quit
            let _ = tx.send(Completion::Fetched { pending, result });
        });
    }

    /// Submit the current row for validation
    pub fn submit(&mut self) {
        let Some(pending) = self.session.begin_submit() else {
            if self.session.status() == GameStatus::Playing
                && self.session.target().is_some()
                && !self.session.is_busy()
            {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            return;
        };

        let validator = self.services.validator.clone();
        let tx = self.completions_tx.clone();
        let word = pending.word().text().to_string();

        self.runtime.spawn(async move {
            let valid = validator.validate(&word).await;
            let _ = tx.send(Completion::Validated { pending, valid });
        });
    }

    /// Apply every network result that has arrived, without blocking
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply(completion);
        }
    }

    /// Block until the session has no network work outstanding
    pub fn settle(&mut self) {
        while self.session.is_busy() {
            match self.runtime.block_on(self.completions_rx.recv()) {
                Some(completion) => self.apply(completion),
                None => break,
            }
        }
    }

    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Validated { pending, valid } => {
                let outcome = self.session.complete_submit(pending, valid);
                self.on_submit(outcome);
            }
            Completion::Fetched { pending, result } => {
                match self.session.complete_reset(pending, result) {
                    Ok(ResetOutcome::Started) => {
                        self.source_error = None;
                        self.messages.clear();
                        self.add_message("New game started! Good luck.", MessageStyle::Info);
                    }
                    Ok(ResetOutcome::Stale) => {
                        debug!("ignoring superseded word fetch");
                    }
                    Err(err) => {
                        let text = err.to_string();
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message("Press Ctrl-N to try again.", MessageStyle::Info);
                        self.source_error = Some(text);
                    }
                }
            }
        }
    }

    fn on_submit(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::NotAWord(word) => {
                self.add_message(&format!("{word} is not in the word list"), MessageStyle::Error);
            }
            SubmitOutcome::Scored { status, .. } => {
                let guesses = self.session.history().len();
                self.stats.record(status, guesses);
                match status {
                    GameStatus::Won => {
                        let celebration = match guesses {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        let target = self.session.target().map(ToString::to_string);
                        self.add_message(
                            &format!("The word was {}", target.unwrap_or_default()),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Playing => {}
                }
            }
            SubmitOutcome::Ignored | SubmitOutcome::Stale => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if self.session.status().is_terminal() => match c {
                'q' | 'Q' => self.should_quit = true,
                'n' | 'N' => self.new_game(),
                // Board is frozen; ignore other keys
                _ => {}
            },
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace | KeyCode::Delete => {
                self.session.delete();
            }
            KeyCode::Char(c) if !ctrl => {
                self.session.letter(c);
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Short description of what the session is doing, for the status bar
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        match (self.session.activity(), self.session.status()) {
            (Activity::Fetching, _) => "Loading...",
            (Activity::Validating, _) => "Checking...",
            (Activity::Idle, _) if self.session.target().is_none() => "No game",
            (Activity::Idle, GameStatus::Playing) => "Playing",
            (Activity::Idle, GameStatus::Won) => "Won",
            (Activity::Idle, GameStatus::Lost) => "Lost",
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        app.poll_completions();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(FRAME_POLL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
