//! Grid-positioned actors and the insertion-ordered collection that owns them.
use std::fmt;

use crate::map::Position;

/// Unique identifier for an entity: its insertion index in [`Entities`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the player, always the first entity inserted.
    pub const PLAYER: Self = Self(0);

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 24-bit display color. The core never draws; renderers map it to their palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(255, 255, 255);
    pub const DARKER_GREEN: Self = Self(0, 127, 0);
    pub const DARK_AMBER: Self = Self(191, 143, 0);
    pub const DESATURATED_GREEN: Self = Self(63, 127, 63);
    pub const DESATURATED_CRIMSON: Self = Self(127, 63, 79);
}

/// Closed set of monsters the generator can spawn.
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
pub enum MonsterKind {
    Troll,
    Gnoll,
    Orc,
    Goblin,
}

impl MonsterKind {
    /// Maps a d100 roll in `[0, 100]` to a kind: 10% troll, 20% gnoll, 30% orc,
    /// the rest goblin.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            r if r < 10 => Self::Troll,
            r if r < 30 => Self::Gnoll,
            r if r < 60 => Self::Orc,
            _ => Self::Goblin,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Troll => 'T',
            Self::Gnoll => 'G',
            Self::Orc => 'o',
            Self::Goblin => 'g',
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Troll => Rgb::DARKER_GREEN,
            Self::Gnoll => Rgb::DARK_AMBER,
            Self::Orc => Rgb::DESATURATED_GREEN,
            Self::Goblin => Rgb::DESATURATED_CRIMSON,
        }
    }
}

/// A grid-positioned actor: the player or a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub position: Position,
    pub glyph: char,
    pub color: Rgb,
    pub blocks_movement: bool,
    pub name: String,
}

/// Blueprint for an entity; the id is assigned on insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntitySpec {
    pub position: Position,
    pub glyph: char,
    pub color: Rgb,
    pub blocks_movement: bool,
    pub name: String,
}

impl EntitySpec {
    pub fn player(position: Position) -> Self {
        Self {
            position,
            glyph: '@',
            color: Rgb::WHITE,
            blocks_movement: true,
            name: "player".to_string(),
        }
    }

    pub fn monster(kind: MonsterKind, position: Position) -> Self {
        Self {
            position,
            glyph: kind.glyph(),
            color: kind.color(),
            blocks_movement: true,
            name: kind.to_string(),
        }
    }
}

/// Flat, insertion-ordered entity collection. Entities are never removed, so an
/// [`EntityId`] stays a valid index for the collection's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entities {
    items: Vec<Entity>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entity and returns its id.
    pub fn spawn(&mut self, spec: EntitySpec) -> EntityId {
        let id = EntityId(self.items.len() as u32);
        self.items.push(Entity {
            id,
            position: spec.position,
            glyph: spec.glyph,
            color: spec.color,
            blocks_movement: spec.blocks_movement,
            name: spec.name,
        });
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.items.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.items.iter()
    }

    /// First movement-blocking entity on `position`, in insertion order,
    /// skipping `except`.
    pub fn blocking_occupant(&self, position: Position, except: EntityId) -> Option<&Entity> {
        self.items.iter().find(|entity| {
            entity.id != except && entity.blocks_movement && entity.position == position
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_follow_insertion_order() {
        let mut entities = Entities::new();
        let player = entities.spawn(EntitySpec::player(Position::new(1, 1)));
        let orc = entities.spawn(EntitySpec::monster(MonsterKind::Orc, Position::new(2, 1)));
        assert_eq!(player, EntityId::PLAYER);
        assert_eq!(orc, EntityId(1));
        assert_eq!(entities.get(orc).map(|e| e.name.as_str()), Some("orc"));
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn roll_table_boundaries() {
        assert_eq!(MonsterKind::from_roll(0), MonsterKind::Troll);
        assert_eq!(MonsterKind::from_roll(9), MonsterKind::Troll);
        assert_eq!(MonsterKind::from_roll(10), MonsterKind::Gnoll);
        assert_eq!(MonsterKind::from_roll(29), MonsterKind::Gnoll);
        assert_eq!(MonsterKind::from_roll(30), MonsterKind::Orc);
        assert_eq!(MonsterKind::from_roll(59), MonsterKind::Orc);
        assert_eq!(MonsterKind::from_roll(60), MonsterKind::Goblin);
        assert_eq!(MonsterKind::from_roll(100), MonsterKind::Goblin);
    }

    #[test]
    fn monster_glyphs_are_distinct() {
        let glyphs: Vec<char> = MonsterKind::iter().map(MonsterKind::glyph).collect();
        for (i, glyph) in glyphs.iter().enumerate() {
            assert!(!glyphs[i + 1..].contains(glyph));
        }
    }

    #[test]
    fn blocking_lookup_ignores_non_blockers() {
        let mut entities = Entities::new();
        let mut marker = EntitySpec::player(Position::new(3, 3));
        marker.blocks_movement = false;
        let marker = entities.spawn(marker);
        let troll = entities.spawn(EntitySpec::monster(MonsterKind::Troll, Position::new(4, 3)));

        let at_marker = Position::new(3, 3);
        assert!(entities.blocking_occupant(at_marker, EntityId(99)).is_none());
        assert_eq!(entities.get(marker).map(|e| e.position), Some(at_marker));

        let at_troll = Position::new(4, 3);
        assert_eq!(
            entities.blocking_occupant(at_troll, marker).map(|e| e.id),
            Some(troll)
        );
        assert!(entities.blocking_occupant(at_troll, troll).is_none());
    }
}
