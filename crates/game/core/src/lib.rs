//! Deterministic dungeon rules shared by every frontend.
//!
//! `delve-core` owns level generation, the tile grid, field of view and the
//! move-or-attack turn loop. It never touches a terminal or reads input: clients
//! hand [`TurnIntent`]s to a [`Session`], observe [`TurnEvent`]s through an
//! [`EventSink`], and draw from a read-only [`LevelView`].
//!
//! Randomness is injected through the [`Rng`] trait, so a seed fully
//! determines a level.
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod fov;
pub mod generation;
pub mod map;
pub mod movement;
pub mod render;
pub mod rng;
pub mod session;
pub mod turn;

pub use config::{ConfigError, DungeonConfig};
pub use entity::{Entities, Entity, EntityId, EntitySpec, MonsterKind, Rgb};
pub use error::{ErrorSeverity, GameError};
pub use event::{DiscardEvents, EventSink, TurnEvent};
pub use fov::{FovEngine, VisibilityMap, compute_fov};
pub use generation::{Dungeon, DungeonGenerator, GenerationError, MonsterSpawn};
pub use map::{Position, Room, Tile, TileFlags, TileGrid, TileStatus};
pub use movement::{CardinalDirection, MoveError, attempt_move};
pub use render::{LevelView, Renderer};
pub use rng::{PcgRng, Rng};
pub use session::{Session, SessionError};
pub use turn::{TurnIntent, TurnOutcome, TurnPhase};
