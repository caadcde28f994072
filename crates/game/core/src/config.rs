use crate::error::{ErrorSeverity, GameError};

/// Level generation and field-of-view parameters.
///
/// Supplied once when a [`Session`](crate::Session) is built and immutable
/// afterwards. [`DungeonConfig::validate`] rejects parameter combinations the
/// generator cannot honour instead of clamping them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonConfig {
    pub width: u32,
    pub height: u32,
    pub room_min_size: u32,
    pub room_max_size: u32,
    /// Number of room candidates drawn, not a count of accepted rooms.
    pub max_rooms: u32,
    pub max_room_monsters: u32,
    pub fov_radius: u32,
    /// Whether sight-blocking cells are reported visible when lit.
    pub light_walls: bool,
}

impl DungeonConfig {
    pub const DEFAULT_WIDTH: u32 = 80;
    pub const DEFAULT_HEIGHT: u32 = 45;
    pub const DEFAULT_ROOM_MIN_SIZE: u32 = 6;
    pub const DEFAULT_ROOM_MAX_SIZE: u32 = 10;
    pub const DEFAULT_MAX_ROOMS: u32 = 30;
    pub const DEFAULT_MAX_ROOM_MONSTERS: u32 = 3;
    pub const DEFAULT_FOV_RADIUS: u32 = 10;
    pub const DEFAULT_LIGHT_WALLS: bool = true;

    /// Smallest room edge that still leaves an interior around the center.
    pub const MIN_ROOM_SIZE: u32 = 3;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            room_min_size: Self::DEFAULT_ROOM_MIN_SIZE,
            room_max_size: Self::DEFAULT_ROOM_MAX_SIZE,
            max_rooms: Self::DEFAULT_MAX_ROOMS,
            max_room_monsters: Self::DEFAULT_MAX_ROOM_MONSTERS,
            fov_radius: Self::DEFAULT_FOV_RADIUS,
            light_walls: Self::DEFAULT_LIGHT_WALLS,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_room_size(mut self, min: u32, max: u32) -> Self {
        self.room_min_size = min;
        self.room_max_size = max;
        self
    }

    pub fn with_max_rooms(mut self, max_rooms: u32) -> Self {
        self.max_rooms = max_rooms;
        self
    }

    pub fn with_max_room_monsters(mut self, max_room_monsters: u32) -> Self {
        self.max_room_monsters = max_room_monsters;
        self
    }

    pub fn with_fov(mut self, radius: u32, light_walls: bool) -> Self {
        self.fov_radius = radius;
        self.light_walls = light_walls;
        self
    }

    /// Checks the caller contract of the generator and visibility engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.room_min_size < Self::MIN_ROOM_SIZE {
            return Err(ConfigError::RoomTooSmall {
                size: self.room_min_size,
            });
        }
        if self.room_min_size > self.room_max_size {
            return Err(ConfigError::InvertedRoomSize {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        // Placement draws x in [0, width - w - 1], so the widest room needs a spare column.
        if self.room_max_size >= self.width || self.room_max_size >= self.height {
            return Err(ConfigError::RoomExceedsGrid {
                size: self.room_max_size,
                width: self.width,
                height: self.height,
            });
        }
        if self.fov_radius == 0 {
            return Err(ConfigError::ZeroFovRadius);
        }
        Ok(())
    }
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-contract violations detected before generation starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("room size {size} is below the minimum of {}", DungeonConfig::MIN_ROOM_SIZE)]
    RoomTooSmall { size: u32 },

    #[error("room size range {min}..={max} is inverted")]
    InvertedRoomSize { min: u32, max: u32 },

    #[error("room size {size} does not fit a {width}x{height} grid")]
    RoomExceedsGrid { size: u32, width: u32, height: u32 },

    #[error("field-of-view radius must be positive")]
    ZeroFovRadius,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroDimension { .. } => "CONFIG_ZERO_DIMENSION",
            Self::RoomTooSmall { .. } => "CONFIG_ROOM_TOO_SMALL",
            Self::InvertedRoomSize { .. } => "CONFIG_INVERTED_ROOM_SIZE",
            Self::RoomExceedsGrid { .. } => "CONFIG_ROOM_EXCEEDS_GRID",
            Self::ZeroFovRadius => "CONFIG_ZERO_FOV_RADIUS",
        }
    }
}
