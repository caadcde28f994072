//! Static layout: grid positions, tiles, the tile grid and room rectangles.
mod grid;
mod position;
mod room;
mod tile;

pub use grid::TileGrid;
pub use position::Position;
pub use room::Room;
pub use tile::{Tile, TileFlags, TileStatus};
