//! Message log shown under the map.
use std::collections::VecDeque;

use delve_core::{Entities, EventSink, TurnEvent};

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message.into());
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().take(limit).map(String::as_str)
    }
}

impl EventSink for MessageLog {
    fn publish(&mut self, event: TurnEvent, entities: &Entities) {
        if let Some(text) = event.describe(entities) {
            self.push_text(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::{EntitySpec, MonsterKind, Position};

    #[test]
    fn drops_oldest_past_capacity() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");
        assert_eq!(log.recent(5).collect::<Vec<_>>(), vec!["three", "two"]);
    }

    #[test]
    fn records_only_describable_events() {
        let mut entities = Entities::new();
        let player = entities.spawn(EntitySpec::player(Position::new(1, 1)));
        let goblin = entities.spawn(EntitySpec::monster(MonsterKind::Goblin, Position::new(2, 1)));

        let mut log = MessageLog::new(8);
        log.publish(TurnEvent::MoverRelocated { mover: player }, &entities);
        assert_eq!(log.recent(usize::MAX).count(), 0);

        log.publish(
            TurnEvent::AttackResolved {
                attacker: player,
                target: goblin,
            },
            &entities,
        );
        assert_eq!(
            log.recent(1).collect::<Vec<_>>(),
            vec!["The goblin laughs at your puny attack!"]
        );
    }
}
