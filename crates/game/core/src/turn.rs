//! Input intents and the two-state turn machine.
use crate::movement::CardinalDirection;

/// Closed set of intents an input collaborator can produce from a key event.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnIntent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Shell concern; the core ignores it.
    ToggleFullscreen,
    Exit,
    None,
}

impl TurnIntent {
    /// Direction for movement intents, `None` for everything else.
    pub fn direction(self) -> Option<CardinalDirection> {
        match self {
            Self::MoveUp => Some(CardinalDirection::North),
            Self::MoveDown => Some(CardinalDirection::South),
            Self::MoveLeft => Some(CardinalDirection::West),
            Self::MoveRight => Some(CardinalDirection::East),
            Self::ToggleFullscreen | Self::Exit | Self::None => None,
        }
    }
}

/// Where the session is in its turn loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    AwaitingInput,
    ResolvingTurn,
}

/// Result of handing one intent to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    /// The viewer attacked or moved; per-turn logic ran.
    TookTurn,
    /// Nothing happened: a non-movement intent or a rejected move.
    DidntTakeTurn,
    /// The player asked to leave.
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_move_intents_have_directions() {
        let with_direction: Vec<TurnIntent> = TurnIntent::iter()
            .filter(|intent| intent.direction().is_some())
            .collect();
        assert_eq!(
            with_direction,
            vec![
                TurnIntent::MoveUp,
                TurnIntent::MoveDown,
                TurnIntent::MoveLeft,
                TurnIntent::MoveRight,
            ]
        );
        assert_eq!(TurnIntent::MoveUp.direction().map(|d| d.delta()), Some((0, -1)));
    }

    #[test]
    fn intents_display_in_snake_case() {
        assert_eq!(TurnIntent::ToggleFullscreen.to_string(), "toggle_fullscreen");
        assert_eq!(TurnPhase::default(), TurnPhase::AwaitingInput);
    }
}
