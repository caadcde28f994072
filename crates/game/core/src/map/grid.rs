use super::{Position, Tile};

/// Fixed-size row-major grid of [`Tile`]s.
///
/// Coordinates handed to the asserting accessors (`tile`, `is_blocked`,
/// `set_passable`, ...) must lie inside the grid; anything else is a caller bug
/// and panics. Renderers that clip use [`TileGrid::get`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Allocates a grid where every tile is a wall.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            tiles: vec![Tile::wall(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Returns the tile at `position`, or `None` outside the grid.
    pub fn get(&self, position: Position) -> Option<&Tile> {
        if self.contains(position) {
            Some(&self.tiles[self.index_unchecked(position)])
        } else {
            None
        }
    }

    /// Returns the tile at `position`.
    ///
    /// # Panics
    ///
    /// Panics when `position` is outside the grid.
    pub fn tile(&self, position: Position) -> &Tile {
        &self.tiles[self.index(position)]
    }

    pub fn is_blocked(&self, position: Position) -> bool {
        self.tile(position).is_blocked()
    }

    pub fn blocks_sight(&self, position: Position) -> bool {
        self.tile(position).blocks_sight()
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.tile(position).is_explored()
    }

    /// Clears `blocked` and `blocks_sight` on one cell. Idempotent.
    pub fn set_passable(&mut self, position: Position) {
        let index = self.index(position);
        self.tiles[index].carve();
    }

    /// Sets the explored bit. It is never cleared.
    pub fn mark_explored(&mut self, position: Position) {
        let index = self.index(position);
        self.tiles[index].mark_explored();
    }

    /// Carves every cell with `x1 <= x <= x2` and `y1 <= y <= y2`.
    pub fn carve_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.set_passable(Position::new(x, y));
            }
        }
    }

    /// Carves a horizontal line on row `y`, both endpoints included.
    pub fn carve_h_line(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set_passable(Position::new(x, y));
        }
    }

    /// Carves a vertical line on column `x`, both endpoints included.
    pub fn carve_v_line(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set_passable(Position::new(x, y));
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn index(&self, position: Position) -> usize {
        assert!(
            self.contains(position),
            "position {position} is outside the {}x{} grid",
            self.width,
            self.height
        );
        self.index_unchecked(position)
    }

    fn index_unchecked(&self, position: Position) -> usize {
        position.y as usize * self.width as usize + position.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_solid_and_unexplored() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.tiles().len(), 12);
        for position in grid.positions() {
            assert!(grid.is_blocked(position));
            assert!(grid.blocks_sight(position));
            assert!(!grid.is_explored(position));
        }
    }

    #[test]
    fn set_passable_is_idempotent() {
        let mut grid = TileGrid::new(3, 3);
        let cell = Position::new(1, 2);
        grid.set_passable(cell);
        let once = grid.clone();
        grid.set_passable(cell);
        assert_eq!(grid, once);
        assert!(!grid.is_blocked(cell));
        assert!(!grid.blocks_sight(cell));
        assert!(grid.is_blocked(Position::new(1, 1)));
    }

    #[test]
    fn lines_include_both_endpoints_in_either_order() {
        let mut grid = TileGrid::new(6, 6);
        grid.carve_h_line(4, 1, 2);
        grid.carve_v_line(5, 3, 0);
        for x in 1..=4 {
            assert!(!grid.is_blocked(Position::new(x, 2)));
        }
        assert!(grid.is_blocked(Position::new(0, 2)));
        assert!(grid.is_blocked(Position::new(5, 2)));
        for y in 3..=5 {
            assert!(!grid.is_blocked(Position::new(0, y)));
        }
        assert!(grid.is_blocked(Position::new(0, 2)));
    }

    #[test]
    fn get_clips_outside_positions() {
        let grid = TileGrid::new(2, 2);
        assert!(grid.get(Position::new(1, 1)).is_some());
        assert!(grid.get(Position::new(2, 0)).is_none());
        assert!(grid.get(Position::new(0, -1)).is_none());
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn out_of_range_access_panics() {
        let grid = TileGrid::new(2, 2);
        grid.is_blocked(Position::new(2, 1));
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn zero_dimension_panics() {
        TileGrid::new(0, 5);
    }
}
