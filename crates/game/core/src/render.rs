//! Read-only boundary between the core and a renderer.
use crate::entity::{Entities, Entity, EntityId};
use crate::fov::VisibilityMap;
use crate::map::{Position, TileGrid, TileStatus};

/// Everything a renderer may read to produce one frame.
///
/// Holding the view borrows the session immutably, so the state cannot change
/// while a frame is being drawn.
#[derive(Clone, Copy, Debug)]
pub struct LevelView<'a> {
    grid: &'a TileGrid,
    visible: &'a VisibilityMap,
    entities: &'a Entities,
    viewer: EntityId,
}

impl<'a> LevelView<'a> {
    pub fn new(
        grid: &'a TileGrid,
        visible: &'a VisibilityMap,
        entities: &'a Entities,
        viewer: EntityId,
    ) -> Self {
        Self {
            grid,
            visible,
            entities,
            viewer,
        }
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn grid(&self) -> &'a TileGrid {
        self.grid
    }

    pub fn viewer(&self) -> Option<&'a Entity> {
        self.entities.get(self.viewer)
    }

    /// Knowledge state of a cell; positions outside the grid are `Unseen`.
    pub fn status(&self, position: Position) -> TileStatus {
        match self.grid.get(position) {
            Some(tile) => {
                TileStatus::from_parts(self.visible.is_visible(position), tile.is_explored())
            }
            None => TileStatus::Unseen,
        }
    }

    /// Whether the cell should be drawn as wall rather than floor.
    pub fn is_wall(&self, position: Position) -> bool {
        self.grid.get(position).is_some_and(|tile| tile.blocks_sight())
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.visible.is_visible(position)
    }

    /// Entities standing on currently visible cells, in insertion order.
    pub fn visible_entities(&self) -> impl Iterator<Item = &'a Entity> + use<'a> {
        let visible = self.visible;
        self.entities
            .iter()
            .filter(move |entity| visible.is_visible(entity.position))
    }
}

/// Renderer collaborator. Consumes a [`LevelView`]; never mutates core state.
pub trait Renderer {
    type Error;

    fn render(&mut self, view: &LevelView<'_>) -> Result<(), Self::Error>;
}
