use super::Position;

/// Rectangular room candidate used during generation.
///
/// The bounds include the one-tile wall ring: only
/// `x1 + 1 ..= x2 - 1` by `y1 + 1 ..= y2 - 1` is carved, while overlap tests use
/// the full bounds so neighbouring rooms never share a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Room {
    /// Builds a room from its top-left corner and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Integer-truncated midpoint of the bounds.
    pub const fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Inclusive overlap test: rooms touching at an edge intersect.
    pub const fn intersects(&self, other: &Room) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Whether `position` lies in the carved interior.
    pub const fn interior_contains(&self, position: Position) -> bool {
        position.x > self.x1 && position.x < self.x2 && position.y > self.y1 && position.y < self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_truncates() {
        let room = Room::new(3, 4, 7, 6);
        assert_eq!(room.center(), Position::new(6, 7));
        assert!(room.interior_contains(room.center()));
    }

    #[test]
    fn shared_edge_counts_as_intersection() {
        let left = Room::new(0, 0, 5, 5);
        let touching = Room::new(5, 0, 5, 5);
        let apart = Room::new(6, 0, 5, 5);
        assert!(left.intersects(&touching));
        assert!(touching.intersects(&left));
        assert!(!left.intersects(&apart));
    }

    #[test]
    fn interior_excludes_wall_ring() {
        let room = Room::new(0, 0, 4, 4);
        assert!(!room.interior_contains(Position::new(0, 2)));
        assert!(!room.interior_contains(Position::new(4, 2)));
        assert!(room.interior_contains(Position::new(1, 1)));
        assert!(room.interior_contains(Position::new(3, 3)));
    }
}
