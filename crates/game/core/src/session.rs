//! The level context: owns the grid, entities, visibility and turn state.
//!
//! All state mutation flows through [`Session::process`]; renderers read it via
//! [`Session::view`] or [`Session::render_with`].
use crate::config::{ConfigError, DungeonConfig};
use crate::entity::{Entities, EntityId, EntitySpec};
use crate::error::{ErrorSeverity, GameError};
use crate::event::{EventSink, TurnEvent};
use crate::fov::{FovEngine, VisibilityMap};
use crate::generation::{Dungeon, DungeonGenerator, GenerationError};
use crate::map::{Position, TileGrid, TileStatus};
use crate::movement::{MoveError, attempt_move};
use crate::render::{LevelView, Renderer};
use crate::rng::Rng;
use crate::turn::{TurnIntent, TurnOutcome, TurnPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(error) => error.severity(),
            Self::Generation(error) => error.severity(),
            Self::Move(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(error) => error.error_code(),
            Self::Generation(error) => error.error_code(),
            Self::Move(error) => error.error_code(),
        }
    }
}

/// One playable level and the turn loop around it.
#[derive(Clone, Debug)]
pub struct Session {
    config: DungeonConfig,
    grid: TileGrid,
    entities: Entities,
    viewer: EntityId,
    fov: FovEngine,
    phase: TurnPhase,
}

impl Session {
    /// Validates `config`, generates a level and places the player and monsters.
    ///
    /// The player is inserted first, at the first room's center, and is the
    /// viewer. Monsters follow in generation order.
    pub fn new<R>(config: DungeonConfig, rng: &mut R) -> Result<Self, SessionError>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;
        let dungeon = DungeonGenerator::new(&config).generate(rng);
        Self::from_dungeon(config, dungeon)
    }

    /// Builds a session from an already generated dungeon.
    pub fn from_dungeon(config: DungeonConfig, dungeon: Dungeon) -> Result<Self, SessionError> {
        let spawn = dungeon.player_spawn()?;
        let mut entities = Entities::new();
        let viewer = entities.spawn(EntitySpec::player(spawn));
        for monster in &dungeon.monsters {
            entities.spawn(EntitySpec::monster(monster.kind, monster.position));
        }

        tracing::info!(
            rooms = dungeon.rooms.len(),
            entities = entities.len(),
            %spawn,
            "session ready"
        );
        Ok(Self::from_parts(config, dungeon.grid, entities, viewer))
    }

    /// Assembles a session around a hand-built grid and entity set.
    ///
    /// # Panics
    ///
    /// Panics when `viewer` is not in `entities` or stands outside `grid`.
    pub fn from_parts(
        config: DungeonConfig,
        grid: TileGrid,
        entities: Entities,
        viewer: EntityId,
    ) -> Self {
        let viewer_position = entities
            .get(viewer)
            .map(|entity| entity.position)
            .unwrap_or_else(|| panic!("viewer {viewer} is not in the entity set"));
        assert!(
            grid.contains(viewer_position),
            "viewer {viewer} stands outside the grid at {viewer_position}"
        );

        let fov = FovEngine::new(
            grid.width(),
            grid.height(),
            config.fov_radius,
            config.light_walls,
        );
        Self {
            config,
            grid,
            entities,
            viewer,
            fov,
            phase: TurnPhase::AwaitingInput,
        }
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    pub fn viewer(&self) -> EntityId {
        self.viewer
    }

    pub fn viewer_position(&self) -> Position {
        self.entities
            .get(self.viewer)
            .map(|entity| entity.position)
            .unwrap_or_default()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn visibility(&self) -> &VisibilityMap {
        self.fov.visible()
    }

    pub fn fov_is_dirty(&self) -> bool {
        self.fov.is_dirty()
    }

    pub fn tile_status(&self, position: Position) -> TileStatus {
        self.view().status(position)
    }

    /// Handles one intent.
    ///
    /// Non-movement intents and rejected moves leave the session in
    /// [`TurnPhase::AwaitingInput`] without running per-turn logic. An attack or
    /// a relocation passes through [`TurnPhase::ResolvingTurn`], lets every
    /// monster act, and returns to `AwaitingInput`.
    pub fn process<S>(
        &mut self,
        intent: TurnIntent,
        sink: &mut S,
    ) -> Result<TurnOutcome, SessionError>
    where
        S: EventSink + ?Sized,
    {
        let direction = match intent {
            TurnIntent::Exit => return Ok(TurnOutcome::Exit),
            TurnIntent::ToggleFullscreen | TurnIntent::None => {
                return Ok(TurnOutcome::DidntTakeTurn);
            }
            _ => match intent.direction() {
                Some(direction) => direction,
                None => return Ok(TurnOutcome::DidntTakeTurn),
            },
        };

        self.phase = TurnPhase::ResolvingTurn;
        let resolved = attempt_move(&self.grid, &mut self.entities, self.viewer, direction.delta());
        let event = match resolved {
            Ok(Some(event)) => event,
            Ok(None) => {
                self.phase = TurnPhase::AwaitingInput;
                return Ok(TurnOutcome::DidntTakeTurn);
            }
            Err(error) => {
                self.phase = TurnPhase::AwaitingInput;
                return Err(error.into());
            }
        };

        if let TurnEvent::MoverRelocated { mover } = event {
            if mover == self.viewer {
                self.fov.invalidate();
            }
        }
        tracing::debug!(%intent, ?event, "turn resolved");
        sink.publish(event, &self.entities);

        self.run_monster_turns(sink);
        self.phase = TurnPhase::AwaitingInput;
        Ok(TurnOutcome::TookTurn)
    }

    /// Recomputes the field of view if the viewer moved since the last refresh.
    pub fn refresh_visibility(&mut self) -> bool {
        let origin = self.viewer_position();
        self.fov.refresh(&mut self.grid, origin)
    }

    /// Read-only snapshot for renderers. Call [`Session::refresh_visibility`]
    /// first, or use [`Session::render_with`].
    pub fn view(&self) -> LevelView<'_> {
        LevelView::new(&self.grid, self.fov.visible(), &self.entities, self.viewer)
    }

    /// Refreshes visibility and hands the resulting view to `renderer`.
    pub fn render_with<T>(&mut self, renderer: &mut T) -> Result<(), T::Error>
    where
        T: Renderer + ?Sized,
    {
        self.refresh_visibility();
        renderer.render(&self.view())
    }

    fn run_monster_turns<S>(&self, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        for entity in self.entities.iter() {
            if entity.id != self.viewer {
                sink.publish(TurnEvent::Growled { monster: entity.id }, &self.entities);
            }
        }
    }
}
