use std::collections::{HashSet, VecDeque};

use delve_core::{Dungeon, DungeonConfig, DungeonGenerator, PcgRng, Position, TileGrid};

fn generate(config: &DungeonConfig, seed: u64) -> Dungeon {
    DungeonGenerator::new(config).generate(&mut PcgRng::new(seed))
}

/// Every passable cell reachable from `start` through 4-connected steps.
fn reachable_from(grid: &TileGrid, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for delta in [(0, -1), (0, 1), (1, 0), (-1, 0)] {
            let next = current.offset(delta);
            if grid.contains(next) && !grid.is_blocked(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn assert_well_formed(dungeon: &Dungeon, config: &DungeonConfig) {
    let spawn = dungeon.player_spawn().expect("at least one room");
    assert_eq!(spawn, dungeon.rooms[0].center());
    assert!(!dungeon.grid.is_blocked(spawn));

    for (i, a) in dungeon.rooms.iter().enumerate() {
        for b in &dungeon.rooms[i + 1..] {
            assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
        }
        assert!(a.x1 >= 0 && a.y1 >= 0);
        assert!(a.x2 < config.width as i32 && a.y2 < config.height as i32);
    }

    for position in dungeon.grid.positions() {
        if dungeon.grid.is_blocked(position) {
            assert!(dungeon.grid.blocks_sight(position), "at {position}");
        }
    }

    let reachable = reachable_from(&dungeon.grid, spawn);
    for center in dungeon.room_centers() {
        assert!(reachable.contains(&center), "room center {center} unreachable");
    }

    let mut occupied = HashSet::from([spawn]);
    for monster in &dungeon.monsters {
        assert!(!dungeon.grid.is_blocked(monster.position));
        assert!(occupied.insert(monster.position), "two spawns at {}", monster.position);
    }
}

#[test]
fn seed_42_on_default_layout() {
    let config = DungeonConfig::default();
    assert_eq!((config.width, config.height), (80, 45));
    assert_eq!((config.room_min_size, config.room_max_size), (6, 10));
    assert_eq!(config.max_rooms, 30);

    let dungeon = generate(&config, 42);
    assert!(!dungeon.rooms.is_empty());
    assert_well_formed(&dungeon, &config);
}

#[test]
fn same_seed_reproduces_the_dungeon() {
    let config = DungeonConfig::default();
    let first = generate(&config, 7);
    let second = generate(&config, 7);
    assert_eq!(first, second);
    assert_eq!(first.grid.tiles(), second.grid.tiles());
}

#[test]
fn different_seeds_diverge() {
    let config = DungeonConfig::default();
    assert_ne!(generate(&config, 1).grid, generate(&config, 2).grid);
}

#[test]
fn invariants_hold_across_seeds() {
    let config = DungeonConfig::default();
    for seed in 0..64 {
        let dungeon = generate(&config, seed);
        assert_well_formed(&dungeon, &config);
    }
}

#[test]
fn monsters_stay_inside_their_room_bounds() {
    let config = DungeonConfig::default();
    for seed in 0..32 {
        let dungeon = generate(&config, seed);
        for monster in &dungeon.monsters {
            let inside_some_room = dungeon.rooms.iter().any(|room| {
                (room.x1..=room.x2).contains(&monster.position.x)
                    && (room.y1..=room.y2).contains(&monster.position.y)
            });
            assert!(inside_some_room, "seed {seed}: {} outside rooms", monster.position);
        }
    }
}

#[test]
fn tight_grid_still_produces_a_playable_level() {
    let config = DungeonConfig::new()
        .with_dimensions(12, 10)
        .with_room_size(3, 5)
        .with_max_rooms(50);
    config.validate().expect("valid config");
    for seed in 0..16 {
        let dungeon = generate(&config, seed);
        assert_well_formed(&dungeon, &config);
    }
}

#[test]
fn monster_free_config_spawns_nothing() {
    let config = DungeonConfig::default().with_max_room_monsters(0);
    assert!(generate(&config, 9).monsters.is_empty());
}
