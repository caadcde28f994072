//! Turn events and the notification sink that observes them.
use crate::entity::{Entities, EntityId};

/// Something that happened while resolving a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    /// The mover bumped into a blocking entity. No damage model exists; nobody moves.
    AttackResolved { attacker: EntityId, target: EntityId },

    /// The mover now stands on its destination.
    MoverRelocated { mover: EntityId },

    /// A monster spent its turn idling after the viewer acted.
    Growled { monster: EntityId },
}

impl TurnEvent {
    /// User-facing text for the message log.
    pub fn describe(&self, entities: &Entities) -> Option<String> {
        let name = |id: EntityId| {
            entities
                .get(id)
                .map(|entity| entity.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        match *self {
            Self::AttackResolved { target, .. } => {
                Some(format!("The {} laughs at your puny attack!", name(target)))
            }
            Self::MoverRelocated { .. } => None,
            Self::Growled { monster } => Some(format!("The {} growls!", name(monster))),
        }
    }
}

/// Notification collaborator. Purely observational: it receives events and the
/// entity collection for naming, and cannot mutate either.
pub trait EventSink {
    fn publish(&mut self, event: TurnEvent, entities: &Entities);
}

impl EventSink for Vec<TurnEvent> {
    fn publish(&mut self, event: TurnEvent, _entities: &Entities) {
        self.push(event);
    }
}

/// Sink that drops everything, for callers that only care about state.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardEvents;

impl EventSink for DiscardEvents {
    fn publish(&mut self, _event: TurnEvent, _entities: &Entities) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntitySpec, MonsterKind};
    use crate::map::Position;

    #[test]
    fn describes_attack_and_growl_by_name() {
        let mut entities = Entities::new();
        let player = entities.spawn(EntitySpec::player(Position::new(1, 1)));
        let troll = entities.spawn(EntitySpec::monster(MonsterKind::Troll, Position::new(2, 1)));

        let attack = TurnEvent::AttackResolved {
            attacker: player,
            target: troll,
        };
        assert_eq!(
            attack.describe(&entities).as_deref(),
            Some("The troll laughs at your puny attack!")
        );
        assert_eq!(
            TurnEvent::Growled { monster: troll }.describe(&entities).as_deref(),
            Some("The troll growls!")
        );
        assert_eq!(
            TurnEvent::MoverRelocated { mover: player }.describe(&entities),
            None
        );
    }

    #[test]
    fn vec_sink_records_in_order() {
        let entities = Entities::new();
        let mut sink: Vec<TurnEvent> = Vec::new();
        sink.publish(TurnEvent::MoverRelocated { mover: EntityId(0) }, &entities);
        sink.publish(TurnEvent::Growled { monster: EntityId(1) }, &entities);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1], TurnEvent::Growled { monster: EntityId(1) });
    }
}
