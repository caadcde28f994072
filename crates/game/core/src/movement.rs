//! Collision-aware movement with the move-or-attack decision.
use crate::entity::{Entities, EntityId};
use crate::error::{ErrorSeverity, GameError};
use crate::event::TurnEvent;
use crate::map::{Position, TileGrid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "MOVE_ACTOR_NOT_FOUND",
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
        }
    }
}

/// The four grid directions, with `y` growing downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }
}

/// Tries to move `mover` by `delta`.
///
/// Resolution order:
/// 1. a movement-blocking entity (other than the mover) on the destination turns
///    the move into an attack, and nobody moves;
/// 2. terrain-blocked destinations reject the move silently (`Ok(None)`);
/// 3. otherwise the mover relocates.
///
/// Destinations outside the grid are a caller error, never clamped.
pub fn attempt_move(
    grid: &TileGrid,
    entities: &mut Entities,
    mover: EntityId,
    delta: (i32, i32),
) -> Result<Option<TurnEvent>, MoveError> {
    let origin = entities
        .get(mover)
        .ok_or(MoveError::ActorNotFound(mover))?
        .position;
    let destination = origin.offset(delta);
    if !grid.contains(destination) {
        return Err(MoveError::OutOfBounds { destination });
    }

    let target = entities
        .blocking_occupant(destination, mover)
        .map(|entity| entity.id);
    if let Some(target) = target {
        tracing::debug!(%mover, %target, %destination, "move resolved as attack");
        return Ok(Some(TurnEvent::AttackResolved {
            attacker: mover,
            target,
        }));
    }

    if grid.is_blocked(destination) {
        tracing::trace!(%mover, %destination, "move into blocked terrain rejected");
        return Ok(None);
    }

    entities
        .get_mut(mover)
        .ok_or(MoveError::ActorNotFound(mover))?
        .position = destination;
    Ok(Some(TurnEvent::MoverRelocated { mover }))
}
