//! Field of view and explored memory.
//!
//! Visibility is computed with recursive shadow casting over eight octants,
//! using integer slopes so results are exact and deterministic. Sight-blocking
//! cells stop light; whether they are themselves reported visible is the
//! `light_walls` toggle. Cells outside the grid behave like walls and are never
//! reported.
use crate::map::{Position, TileGrid};

/// Per-cell visible-now layer for one recomputation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityMap {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl VisibilityMap {
    /// A layer with nothing visible.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Whether `position` is visible. Positions outside the layer are not.
    pub fn is_visible(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.cells[index])
    }

    /// Visible positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(move |(index, _)| Position::new((index % width) as i32, (index / width) as i32))
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|visible| **visible).count()
    }

    fn set_visible(&mut self, position: Position) {
        if let Some(index) = self.index(position) {
            self.cells[index] = true;
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        let inside = position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32;
        inside.then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

/// Computes the cells visible from `origin` within Euclidean `radius`.
///
/// The origin is always visible, including for `radius == 0`.
pub fn compute_fov(
    grid: &TileGrid,
    origin: Position,
    radius: u32,
    light_walls: bool,
) -> VisibilityMap {
    // No cell of the grid lies farther than width + height from any origin.
    let reach = radius.min(grid.width().saturating_add(grid.height()));
    let mut caster = ShadowCaster {
        grid,
        origin,
        radius: i32::try_from(reach).unwrap_or(i32::MAX),
        light_walls,
        visible: VisibilityMap::empty(grid.width(), grid.height()),
    };
    caster.visible.set_visible(origin);
    for octant in 0..8 {
        caster.scan(octant, 1, Slope::new(1, 1), Slope::new(0, 1));
    }
    caster.visible
}

/// Rational slope `y / x`, compared by cross-multiplication.
#[derive(Clone, Copy, Debug)]
struct Slope {
    y: i32,
    x: i32,
}

impl Slope {
    const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    fn greater_or_equal(self, other: Slope) -> bool {
        self.y * other.x >= other.y * self.x
    }

    fn greater_than(self, other: Slope) -> bool {
        self.y * other.x > other.y * self.x
    }
}

struct ShadowCaster<'a> {
    grid: &'a TileGrid,
    origin: Position,
    radius: i32,
    light_walls: bool,
    visible: VisibilityMap,
}

impl ShadowCaster<'_> {
    /// Scans row `dist` of `octant` between slopes `start` (high) and `end` (low).
    fn scan(&mut self, octant: u8, dist: i32, start: Slope, end: Slope) {
        if dist > self.radius || end.greater_than(start) {
            return;
        }

        let radius_squared = self.radius as i64 * self.radius as i64;
        let mut blocked = false;
        let mut current_start = start;
        for y in (0..=dist).rev() {
            let top = Slope::new(2 * y + 1, 2 * dist - 1);
            let bottom = Slope::new(2 * y - 1, 2 * dist + 1);
            if !(current_start.greater_or_equal(bottom) && top.greater_than(end)) {
                continue;
            }

            let position = transform_octant(self.origin, dist, y, octant);
            let opaque = self
                .grid
                .get(position)
                .is_none_or(|tile| tile.blocks_sight());
            let in_range = (dist as i64 * dist as i64 + y as i64 * y as i64) <= radius_squared;
            if in_range && (!opaque || self.light_walls) {
                self.visible.set_visible(position);
            }

            if opaque {
                if !blocked {
                    self.scan(octant, dist + 1, current_start, top);
                    blocked = true;
                }
                current_start = bottom;
            } else {
                blocked = false;
            }
        }

        if !blocked {
            self.scan(octant, dist + 1, current_start, end);
        }
    }
}

/// Maps octant-local `(x, y)` (x along the major axis) to grid coordinates.
fn transform_octant(origin: Position, x: i32, y: i32, octant: u8) -> Position {
    match octant {
        0 => Position::new(origin.x + x, origin.y - y),
        1 => Position::new(origin.x + y, origin.y - x),
        2 => Position::new(origin.x - y, origin.y - x),
        3 => Position::new(origin.x - x, origin.y - y),
        4 => Position::new(origin.x - x, origin.y + y),
        5 => Position::new(origin.x - y, origin.y + x),
        6 => Position::new(origin.x + y, origin.y + x),
        _ => Position::new(origin.x + x, origin.y + y),
    }
}

/// Lazily recomputed field of view for the viewer.
///
/// Starts dirty so the first refresh produces the initial view. Only a viewer
/// relocation should call [`FovEngine::invalidate`].
#[derive(Clone, Debug)]
pub struct FovEngine {
    radius: u32,
    light_walls: bool,
    dirty: bool,
    visible: VisibilityMap,
}

impl FovEngine {
    pub fn new(width: u32, height: u32, radius: u32, light_walls: bool) -> Self {
        Self {
            radius,
            light_walls,
            dirty: true,
            visible: VisibilityMap::empty(width, height),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Current visible-now layer, as of the last refresh.
    pub fn visible(&self) -> &VisibilityMap {
        &self.visible
    }

    /// Recomputes from `origin` when dirty and merges the result into the grid's
    /// explored memory. Returns whether a recomputation happened.
    pub fn refresh(&mut self, grid: &mut TileGrid, origin: Position) -> bool {
        if !self.dirty {
            return false;
        }

        self.visible = compute_fov(grid, origin, self.radius, self.light_walls);
        for position in self.visible.positions() {
            grid.mark_explored(position);
        }
        self.dirty = false;

        tracing::trace!(
            %origin,
            radius = self.radius,
            visible = self.visible.count(),
            "field of view recomputed"
        );
        true
    }
}
