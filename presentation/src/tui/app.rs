//! TUI application: main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 subscription_task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ cmd_rx.recv()
//!   ├─ event_rx (TuiEvent from task)      └─ SubscribeUseCase::send()
//!   ├─ tick_interval
//!   └─ next timer deadline
//!        └── cmd_tx ──────────────────>──┘
//! ```
//!
//! Quote transitions and status resets are instant-based; the loop wakes on
//! the nearest deadline and on every tick to expire them.

use super::app_render;
use super::event::{TuiCommand, TuiEvent};
use super::mode::{self, Focus, KeyAction};
use super::state::TuiState;
use crate::config::TuiConfig;
use crossterm::{
    event::{EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use epic_quotes_application::{GenerateQuoteUseCase, SubscribeUseCase};
use epic_quotes_domain::SubscriptionOutcome;
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Main TUI application
pub struct TuiApp {
    quotes: GenerateQuoteUseCase,
    subscribe: SubscribeUseCase,
    config: TuiConfig,

    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<TuiCommand>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,

    cancel: CancellationToken,
    _subscription_handle: tokio::task::JoinHandle<()>,
}

impl TuiApp {
    /// Create a new TUI application and spawn its subscription task.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(
        quotes: GenerateQuoteUseCase,
        subscribe: SubscribeUseCase,
        config: TuiConfig,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<TuiEvent>();
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(subscription_task(
            subscribe.clone(),
            cmd_rx,
            event_tx,
            cancel.clone(),
        ));

        Self {
            quotes,
            subscribe,
            config,
            cmd_tx,
            event_rx,
            cancel,
            _subscription_handle: handle,
        }
    }

    /// Cancelling this token stops the loop and abandons any in-flight request
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Fresh state with the startup transition already running
    fn initial_state(&mut self, now: Instant) -> TuiState {
        let mut state = TuiState::new(self.quotes.new_deck(), self.subscribe.new_form());
        self.quotes.request(&mut state.deck, now);
        state
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal even if the loop failed
        self.cancel.cancel();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = self.initial_state(Instant::now());
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick);
        let cancel = self.cancel.clone();

        info!("TUI started");

        loop {
            terminal.draw(|frame| app_render::render(frame, &state))?;

            if state.should_quit {
                break;
            }

            let deadline = state.next_deadline();

            tokio::select! {
                // Terminal events (keyboard, resize)
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(term_event)) => {
                        self.handle_terminal_event(&mut state, term_event, Instant::now());
                    }
                    Some(Err(e)) => return Err(e),
                    None => break,
                },

                // Results from the subscription task
                Some(tui_event) = self.event_rx.recv() => {
                    self.apply_tui_event(&mut state, tui_event, Instant::now());
                }

                // Nearest pending timer
                _ = sleep_until(deadline) => {
                    self.on_tick(&mut state, Instant::now());
                }

                _ = tick.tick() => {
                    self.on_tick(&mut state, Instant::now());
                }

                _ = cancel.cancelled() => break,
            }
        }

        info!("TUI stopped");
        Ok(())
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(
        &mut self,
        state: &mut TuiState,
        event: crossterm::event::Event,
        now: Instant,
    ) {
        match event {
            crossterm::event::Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return;
                }

                // If help is showing, Esc or ? closes it and other keys are swallowed
                if state.show_help {
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                        state.show_help = false;
                    } else if mode::handle_key_event(state.focus, key) == KeyAction::Quit {
                        state.should_quit = true;
                    }
                    return;
                }

                let action = mode::handle_key_event(state.focus, key);
                self.handle_action(state, action, now);
            }
            crossterm::event::Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Handle a semantic key action
    fn handle_action(&mut self, state: &mut TuiState, action: KeyAction, now: Instant) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => state.should_quit = true,
            KeyAction::ToggleFocus => state.focus = state.focus.toggle(),
            KeyAction::FocusQuote => state.focus = Focus::Quote,
            KeyAction::ToggleHelp => state.show_help = !state.show_help,

            KeyAction::GenerateQuote => {
                self.quotes.request(&mut state.deck, now);
            }

            // Text editing
            KeyAction::InsertChar(c) => state.form.insert_char(c),
            KeyAction::DeleteChar => state.form.delete_char(),
            KeyAction::CursorLeft => state.form.cursor_left(),
            KeyAction::CursorRight => state.form.cursor_right(),
            KeyAction::CursorHome => state.form.cursor_home(),
            KeyAction::CursorEnd => state.form.cursor_end(),

            KeyAction::Submit => self.submit(state, now),
        }
    }

    fn submit(&mut self, state: &mut TuiState, now: Instant) {
        match state.form.submit(now) {
            Ok(email) => {
                if self.cmd_tx.send(TuiCommand::Subscribe(email)).is_err() {
                    warn!("Subscription task is gone; failing the attempt");
                    state.form.complete(
                        &SubscriptionOutcome::NetworkFailure("subscription task stopped".into()),
                        now,
                    );
                }
            }
            Err(e) => debug!("Submit ignored: {}", e),
        }
    }

    fn apply_tui_event(&mut self, state: &mut TuiState, event: TuiEvent, now: Instant) {
        match event {
            TuiEvent::SubscriptionFinished(outcome) => {
                if !state.form.complete(&outcome, now) {
                    debug!("Dropping subscription result with no request in flight");
                }
            }
        }
    }

    /// Expire due timers
    fn on_tick(&mut self, state: &mut TuiState, now: Instant) {
        self.quotes.poll(&mut state.deck, now);
        if state.form.expire(now) {
            debug!("Subscription status reset to idle");
        }
    }
}

/// Sleep until `deadline`, or forever if there is none
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at.into()).await,
        None => std::future::pending().await,
    }
}

/// Runs subscription requests one at a time and reports each outcome
async fn subscription_task(
    use_case: SubscribeUseCase,
    mut cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    cancel: CancellationToken,
) {
    loop {
        let cmd = tokio::select! {
            _ = cancel.cancelled() => break,
            cmd = cmd_rx.recv() => cmd,
        };

        match cmd {
            Some(TuiCommand::Subscribe(email)) => {
                let outcome = tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("Abandoning in-flight subscription");
                        break;
                    }
                    outcome = use_case.send(email) => outcome,
                };
                if event_tx
                    .send(TuiEvent::SubscriptionFinished(outcome))
                    .is_err()
                {
                    break;
                }
            }
            None => break,
        }
    }
}
