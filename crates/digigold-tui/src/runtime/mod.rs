//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send `UiEvent`s directly to `inbox_tx`; the runtime
//! drains `inbox_rx` each frame. This keeps event collection uniform with
//! no per-operation receivers.

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use digigold_core::auth::Authenticator;
use digigold_core::config::Config;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, router, terminal, update};

/// Target frame rate while animating (60fps = ~16ms per frame).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle (login screen, nothing in flight). Longer
/// timeout reduces CPU usage when nothing is animating.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    /// Submission capability; `None` selects the demo path.
    authenticator: Option<Arc<dyn Authenticator>>,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - the runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a terminal event arrived (for fast polling while typing).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime showing the configured initial screen.
    pub fn new(config: Config, authenticator: Option<Arc<dyn Authenticator>>) -> Result<Self> {
        // Panic hook must be installed BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let initial_screen = config.initial_screen;
        let mut state = AppState::new(config);
        router::activate(&mut state.tui, initial_screen, Instant::now());

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            authenticator,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let result = self.event_loop();

        let _ = terminal::disable_input_features();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers render - this caps the frame rate at
                // tick cadence while key events batch to the next frame.
                let marks_dirty = matches!(&event, UiEvent::Tick { .. });

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the terminal and the inbox, plus the tick clock.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while the onboarding choreography runs, while a
        // submission is in flight, or right after input. Otherwise poll
        // slowly to save CPU.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.screen == digigold_core::config::Screen::Onboard
            || self.state.tui.tasks.is_any_running()
            || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here.
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events:
        // - with pending events, non-blocking (don't delay processing)
        // - otherwise block until the next tick is due
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking).
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick {
                now: Instant::now(),
            });
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted
    /// lifecycle around the handler's result event.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let started = TaskStarted { id };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::SubmitLogin { task, credentials } => {
                let authenticator = self.authenticator.clone();
                let demo_delay = self.state.tui.config.login.demo_delay();
                self.spawn_task(TaskKind::LoginSubmit, task, move || {
                    handlers::submit_login(authenticator, credentials, demo_delay)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
