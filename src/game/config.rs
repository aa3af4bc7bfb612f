use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: i32,
    /// Height of the game grid in cells
    pub grid_height: i32,
    /// Side length of one cell in world units
    pub cell_size: i32,
    /// Score required per level; level-up fires at `level * level_score`
    pub level_score: u32,
    /// How much each level-up shortens the tick interval, in milliseconds
    pub speedup_ms: u64,
    /// Lower bound on the tick interval, in milliseconds
    pub min_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            cell_size: 20,
            level_score: 5,
            speedup_ms: 10,
            min_interval_ms: 30,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.level_score, 5);
        assert_eq!(config.min_interval_ms, 30);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.cell_size, 20);
    }
}
