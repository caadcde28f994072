//! Synchronous game loop: draw, wait for a key, resolve the intent.
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use delve_core::{GameError, PcgRng, Session, TurnIntent, TurnOutcome};

use crate::config::CliConfig;
use crate::input::InputHandler;
use crate::message::MessageLog;
use crate::presentation::{TerminalRenderer, TerminalSession, Theme};

const MESSAGE_CAPACITY: usize = 64;

pub struct App {
    session: Session,
    input: InputHandler,
    messages: MessageLog,
    theme: Theme,
    message_panel_height: u16,
    fullscreen: bool,
}

impl App {
    /// Generates the level for `config.seed`.
    pub fn new(config: &CliConfig) -> Result<Self> {
        let mut rng = PcgRng::new(config.seed);
        let session = Session::new(config.dungeon.clone(), &mut rng)
            .with_context(|| format!("Failed to build a level from seed {}", config.seed))?;
        tracing::info!(seed = config.seed, "level generated");

        Ok(Self {
            session,
            input: InputHandler::new(),
            messages: MessageLog::new(MESSAGE_CAPACITY),
            theme: Theme::new(),
            message_panel_height: config.ui.message_panel_height,
            fullscreen: false,
        })
    }

    pub fn run(mut self) -> Result<()> {
        let mut terminal = TerminalSession::enter()?;

        loop {
            let mut renderer = TerminalRenderer::new(
                terminal.tui(),
                &self.messages,
                &self.theme,
                self.message_panel_height,
            );
            self.session.render_with(&mut renderer)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            let intent = self.input.handle_key(key);
            if intent == TurnIntent::ToggleFullscreen {
                self.fullscreen = !self.fullscreen;
                tracing::info!(fullscreen = self.fullscreen, "fullscreen toggled");
            }

            match self.session.process(intent, &mut self.messages) {
                Ok(TurnOutcome::Exit) => break,
                Ok(outcome) => {
                    tracing::debug!(%intent, ?outcome, position = %self.session.viewer_position());
                }
                Err(error) => {
                    tracing::warn!(code = error.error_code(), "Intent rejected: {error}");
                }
            }
        }

        terminal.leave()?;
        tracing::info!("Player left the dungeon");
        Ok(())
    }
}
