//! Room-and-corridor level generation.
//!
//! # Draw order
//!
//! Every value comes from the injected [`Rng`] in this order, so a seed fully
//! determines the dungeon:
//!
//! 1. per room candidate: width, height, x, y
//! 2. per accepted room after the first: the corridor coin flip
//! 3. per accepted room: the monster count, then for each monster its x, y and,
//!    only when the placement is kept, the kind roll
//!
//! # Policies
//!
//! - The first accepted room hosts the player spawn at its center.
//! - Each later room is joined to the previously accepted one by an L-shaped
//!   corridor, so rooms are connected in acceptance order.
//! - Monster placement is attempted once; a roll that lands on a wall, the
//!   spawn point or another monster is dropped.
//! - No minimum room count is enforced. An empty result is reported through
//!   [`Dungeon::player_spawn`].
use crate::config::DungeonConfig;
use crate::entity::MonsterKind;
use crate::error::{ErrorSeverity, GameError};
use crate::map::{Position, Room, TileGrid};
use crate::rng::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationError {
    #[error("generation accepted no rooms, nowhere to place the player")]
    NoRoomsGenerated,
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRoomsGenerated => "GENERATION_NO_ROOMS",
        }
    }
}

/// Monster placement recorded during generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSpawn {
    pub kind: MonsterKind,
    pub position: Position,
}

/// Output of one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    pub grid: TileGrid,
    /// Accepted rooms in acceptance order. Only kept for inspection; a session
    /// drops them once the level is built.
    pub rooms: Vec<Room>,
    pub monsters: Vec<MonsterSpawn>,
    spawn: Option<Position>,
}

impl Dungeon {
    /// Centers of the accepted rooms in acceptance order.
    pub fn room_centers(&self) -> Vec<Position> {
        self.rooms.iter().map(Room::center).collect()
    }

    /// Player spawn: the center of the first accepted room.
    pub fn player_spawn(&self) -> Result<Position, GenerationError> {
        self.spawn.ok_or(GenerationError::NoRoomsGenerated)
    }
}

/// Rejection-sampling room placer and corridor carver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DungeonGenerator {
    width: u32,
    height: u32,
    room_min_size: i32,
    room_max_size: i32,
    max_rooms: u32,
    max_room_monsters: i32,
}

impl DungeonGenerator {
    /// Builds a generator from a config the caller has already validated.
    pub fn new(config: &DungeonConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            room_min_size: config.room_min_size as i32,
            room_max_size: config.room_max_size as i32,
            max_rooms: config.max_rooms,
            max_room_monsters: config.max_room_monsters as i32,
        }
    }

    pub fn generate<R>(&self, rng: &mut R) -> Dungeon
    where
        R: Rng + ?Sized,
    {
        let mut dungeon = Dungeon {
            grid: TileGrid::new(self.width, self.height),
            rooms: Vec::new(),
            monsters: Vec::new(),
            spawn: None,
        };

        for attempt in 0..self.max_rooms {
            let candidate = self.sample_room(rng);
            if dungeon.rooms.iter().any(|room| candidate.intersects(room)) {
                tracing::trace!(attempt, ?candidate, "room candidate overlaps, rejected");
                continue;
            }

            carve_room(&mut dungeon.grid, &candidate);
            let center = candidate.center();
            match dungeon.rooms.last() {
                None => dungeon.spawn = Some(center),
                Some(previous) => {
                    let horizontal_first = rng.coin_flip();
                    carve_corridor(&mut dungeon.grid, previous.center(), center, horizontal_first);
                }
            }

            self.populate_room(&candidate, &mut dungeon, rng);
            dungeon.rooms.push(candidate);
            tracing::debug!(
                attempt,
                room = dungeon.rooms.len(),
                %center,
                "room accepted"
            );
        }

        tracing::debug!(
            rooms = dungeon.rooms.len(),
            monsters = dungeon.monsters.len(),
            "dungeon generated"
        );
        dungeon
    }

    fn sample_room<R>(&self, rng: &mut R) -> Room
    where
        R: Rng + ?Sized,
    {
        let w = rng.range(self.room_min_size, self.room_max_size);
        let h = rng.range(self.room_min_size, self.room_max_size);
        let x = rng.range(0, self.width as i32 - w - 1);
        let y = rng.range(0, self.height as i32 - h - 1);
        Room::new(x, y, w, h)
    }

    fn populate_room<R>(&self, room: &Room, dungeon: &mut Dungeon, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let count = rng.range(0, self.max_room_monsters);
        for _ in 0..count {
            let position = Position::new(rng.range(room.x1, room.x2), rng.range(room.y1, room.y2));
            let occupied = dungeon.spawn == Some(position)
                || dungeon.monsters.iter().any(|m| m.position == position);
            if dungeon.grid.is_blocked(position) || occupied {
                tracing::trace!(%position, "monster placement dropped");
                continue;
            }

            let kind = MonsterKind::from_roll(rng.range(0, 100));
            dungeon.monsters.push(MonsterSpawn { kind, position });
        }
    }
}

fn carve_room(grid: &mut TileGrid, room: &Room) {
    grid.carve_rect(room.x1 + 1, room.y1 + 1, room.x2 - 1, room.y2 - 1);
}

/// Joins `from` and `to` with two straight legs meeting at a corner.
fn carve_corridor(grid: &mut TileGrid, from: Position, to: Position, horizontal_first: bool) {
    if horizontal_first {
        grid.carve_h_line(from.x, to.x, from.y);
        grid.carve_v_line(from.y, to.y, to.x);
    } else {
        grid.carve_v_line(from.y, to.y, from.x);
        grid.carve_h_line(from.x, to.x, to.y);
    }
}
