use bitflags::bitflags;

bitflags! {
    /// Per-cell terrain and memory bits.
    ///
    /// `BLOCKED` and `BLOCKS_SIGHT` are only ever cleared together (carving), so a
    /// blocked cell always blocks sight.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        const BLOCKED      = 1 << 0;
        const BLOCKS_SIGHT = 1 << 1;
        const EXPLORED     = 1 << 2;
    }
}

/// One grid cell's terrain state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    flags: TileFlags,
}

impl Tile {
    /// Solid rock: blocks movement and sight, never seen.
    pub const fn wall() -> Self {
        Self {
            flags: TileFlags::BLOCKED.union(TileFlags::BLOCKS_SIGHT),
        }
    }

    pub fn flags(self) -> TileFlags {
        self.flags
    }

    pub fn is_blocked(self) -> bool {
        self.flags.contains(TileFlags::BLOCKED)
    }

    pub fn blocks_sight(self) -> bool {
        self.flags.contains(TileFlags::BLOCKS_SIGHT)
    }

    pub fn is_explored(self) -> bool {
        self.flags.contains(TileFlags::EXPLORED)
    }

    /// Clears both movement and sight blocking. Explored memory is untouched.
    pub(crate) fn carve(&mut self) {
        self.flags.remove(TileFlags::BLOCKED | TileFlags::BLOCKS_SIGHT);
    }

    pub(crate) fn mark_explored(&mut self) {
        self.flags.insert(TileFlags::EXPLORED);
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}

/// What an observer knows about a cell.
///
/// Transitions form the lattice `Unseen → Visible → Explored → Visible → ...`;
/// a cell never returns to `Unseen`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileStatus {
    /// Never seen; renderers omit it.
    Unseen,
    /// Seen before but not visible now; renderers dim it.
    Explored,
    /// Within the viewer's current field of view.
    Visible,
}

impl TileStatus {
    pub fn from_parts(visible: bool, explored: bool) -> Self {
        if visible {
            Self::Visible
        } else if explored {
            Self::Explored
        } else {
            Self::Unseen
        }
    }
}
