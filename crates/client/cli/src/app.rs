//! CLI application: owns the session and runs the input/render loop.
//!
//! The loop is synchronous. Each key press is decoded, applied to the
//! session, and the resulting runtime events are drained into the message
//! log before the next frame is drawn.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::Action;
use runtime::{EventReceiver, GameSession, Topic, drain};

use crate::{
    config::CliConfig,
    input::{InputHandler, KeyAction},
    messages::{MessageEntry, MessageLog},
    presentation::{terminal::Screen, ui},
    state::AppState,
};

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const MESSAGE_CAPACITY: usize = 64;

pub struct CliApp {
    session: GameSession,
    config: CliConfig,
    input: InputHandler,
    app_state: AppState,
    messages: MessageLog,
    subscriptions: Vec<(Topic, EventReceiver)>,
}

impl CliApp {
    pub fn new(session: GameSession, config: CliConfig) -> Self {
        let subscriptions = session
            .event_bus()
            .subscribe_multiple(&[Topic::Game, Topic::Action]);

        let mut messages = MessageLog::new(MESSAGE_CAPACITY);
        messages.push_text("Defeat the enemies. Walls block shots; + tiles heal.");

        Self {
            session,
            config,
            input: InputHandler::new(),
            app_state: AppState::new(),
            messages,
            subscriptions,
        }
    }

    /// Takes over the terminal until the player quits.
    pub fn run(mut self) -> Result<()> {
        let mut screen = Screen::open()?;
        self.render(&mut screen)?;

        loop {
            if !term_event::poll(POLL_INTERVAL)? {
                continue;
            }

            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key)? {
                        break;
                    }
                    self.collect_messages();
                    self.render(&mut screen)?;
                }
                TermEvent::Resize(_, _) => self.render(&mut screen)?,
                _ => {}
            }
        }

        tracing::info!(
            turn = self.session.state().turn.number,
            over = self.session.is_over(),
            "client exiting"
        );
        Ok(())
    }

    /// Returns `true` when the application should exit.
    fn handle_key_press(&mut self, key: KeyEvent) -> Result<bool> {
        match self.input.handle_key(key, self.app_state.mode) {
            KeyAction::Quit => return Ok(true),
            KeyAction::Submit(action) => self.submit(action),
            KeyAction::ToggleCursor => {
                let hero = self.session.state().hero().position;
                self.app_state.toggle_cursor(hero);
            }
            KeyAction::MoveCursor { dx, dy } => self.app_state.move_cursor(dx, dy),
            KeyAction::ConfirmCursor => {
                let target = self.app_state.cursor;
                self.app_state.exit_cursor();
                self.submit(Action::move_to(target.x, target.y));
            }
            KeyAction::Restart => {
                self.session.restart()?;
                self.app_state.exit_cursor();
                self.messages.push_text("A new battle begins.");
            }
            KeyAction::None => {}
        }
        Ok(false)
    }

    fn submit(&mut self, action: Action) {
        // Rejections reach the log through the action topic.
        let _ = self.session.execute(action);
    }

    fn collect_messages(&mut self) {
        for (_, receiver) in &mut self.subscriptions {
            for event in drain(receiver) {
                if let Some(entry) = MessageEntry::from_event(&event) {
                    self.messages.push(entry);
                }
            }
        }
    }

    fn render(&self, screen: &mut Screen) -> Result<()> {
        let reachable = self.session.reachable_destinations();
        ui::render(
            screen,
            &ui::UiFrame {
                state: self.session.state(),
                config: self.session.config(),
                app_state: &self.app_state,
                reachable: &reachable,
                messages: &self.messages,
                message_panel_height: self.config.ui.message_panel_height,
            },
        )
    }
}
