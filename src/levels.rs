//! The level catalog: a fixed, ordered set of obstacle courses.
//!
//! Courses are static data baked in at startup. The only field that changes
//! after construction is each level's best progress, recorded at the end of
//! every attempt.

use crate::constants::OBSTACLE_SPACING;

/// One cell of a level's obstacle map, spaced 12 world-units apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleType {
    Empty,
    Spike,
    Block,
    Wall,
}

impl ObstacleType {
    /// Rows of clearance above the ground needed to pass this obstacle.
    pub fn clearance(&self) -> f32 {
        match self {
            Self::Empty => 0.0,
            Self::Spike => 1.0,
            Self::Block => 2.0,
            Self::Wall => 3.0,
        }
    }

    pub fn is_hazard(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// A single obstacle course.
#[derive(Debug, Clone)]
pub struct Level {
    pub name: &'static str,
    pub difficulty: &'static str,
    pub map: Vec<ObstacleType>,
    /// Best completion percentage reached this process run (0-100).
    pub best_progress: i32,
    /// Palette id used by the UI layer.
    pub color_id: u8,
}

impl Level {
    pub fn new(
        name: &'static str,
        difficulty: &'static str,
        map: Vec<ObstacleType>,
        color_id: u8,
    ) -> Self {
        Self {
            name,
            difficulty,
            map,
            best_progress: 0,
            color_id,
        }
    }

    /// Course length in world units.
    pub fn length(&self) -> f32 {
        (self.map.len() * OBSTACLE_SPACING) as f32
    }

    /// Record an attempt's progress; best progress never decreases.
    pub fn record_progress(&mut self, progress: i32) {
        if progress > self.best_progress {
            self.best_progress = progress;
        }
    }
}

/// Ordered, indexable set of levels.
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Build a catalog from explicit levels. An empty obstacle map would
    /// break the progress calculation, so it is a fatal configuration error.
    pub fn from_levels(levels: Vec<Level>) -> Self {
        for level in &levels {
            assert!(
                !level.map.is_empty(),
                "level {:?} has an empty obstacle map",
                level.name
            );
        }
        Self { levels }
    }

    /// The five built-in courses.
    pub fn builtin() -> Self {
        use ObstacleType::{Block as B, Empty as O, Spike as S, Wall as W};

        Self::from_levels(vec![
            Level::new(
                "STEREO MADNESS",
                "EASY",
                vec![
                    O, O, O, S, O, O, S, O, O, B, B, O, O, S, S, O, O, O, B, O, S, S, S, O, O, B,
                    B, B, O, O, S, O, S, O, S,
                ],
                5,
            ),
            Level::new(
                "BACK ON TRACK",
                "EASY",
                vec![
                    O, S, O, B, O, S, O, B, B, O, S, S, O, O, B, O, B, O, S, S, O, B, B, B, O, S,
                    O, S, O, B, S, B, O, S,
                ],
                5,
            ),
            Level::new(
                "POLARGEIST",
                "NORMAL",
                vec![
                    O, S, S, O, B, B, S, O, W, O, S, S, B, B, S, S, W, O, O, S, B, S, B, S, W, W,
                    O, S, S, S, B, O, S, W,
                ],
                6,
            ),
            Level::new(
                "DRY OUT",
                "HARD",
                vec![
                    O, W, O, S, S, W, O, B, B, W, S, S, S, W, O, W, W, S, O, S, W, S, W, S, W, O,
                    B, B, B, W, S, S, W, S,
                ],
                6,
            ),
            Level::new(
                "BASE AFTER BASE",
                "INSANE",
                vec![
                    S, S, W, S, S, W, B, B, W, S, W, S, W, W, S, S, S, W, B, W, S, W, S, W, S, W,
                    W, W, S, S, W, S, W, W,
                ],
                7,
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, idx: usize) -> &Level {
        &self.levels[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut Level {
        &mut self.levels[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());

        assert_eq!(catalog.get(0).name, "STEREO MADNESS");
        assert_eq!(catalog.get(1).name, "BACK ON TRACK");
        assert_eq!(catalog.get(2).name, "POLARGEIST");
        assert_eq!(catalog.get(3).name, "DRY OUT");
        assert_eq!(catalog.get(4).name, "BASE AFTER BASE");

        assert_eq!(catalog.get(0).difficulty, "EASY");
        assert_eq!(catalog.get(2).difficulty, "NORMAL");
        assert_eq!(catalog.get(3).difficulty, "HARD");
        assert_eq!(catalog.get(4).difficulty, "INSANE");
    }

    #[test]
    fn test_builtin_maps_are_non_empty() {
        let catalog = LevelCatalog::builtin();
        for idx in 0..catalog.len() {
            let level = catalog.get(idx);
            assert!(!level.map.is_empty(), "{} has no obstacles", level.name);
            assert!(level.length() > 0.0);
        }
    }

    #[test]
    fn test_builtin_best_progress_starts_at_zero() {
        let catalog = LevelCatalog::builtin();
        for idx in 0..catalog.len() {
            assert_eq!(catalog.get(idx).best_progress, 0);
        }
    }

    #[test]
    fn test_clearance_heights() {
        assert_eq!(ObstacleType::Empty.clearance(), 0.0);
        assert_eq!(ObstacleType::Spike.clearance(), 1.0);
        assert_eq!(ObstacleType::Block.clearance(), 2.0);
        assert_eq!(ObstacleType::Wall.clearance(), 3.0);

        assert!(!ObstacleType::Empty.is_hazard());
        assert!(ObstacleType::Spike.is_hazard());
        assert!(ObstacleType::Block.is_hazard());
        assert!(ObstacleType::Wall.is_hazard());
    }

    #[test]
    fn test_level_length_uses_spacing() {
        let level = Level::new("T", "EASY", vec![ObstacleType::Empty; 10], 5);
        assert_eq!(level.length(), 120.0);
    }

    #[test]
    fn test_record_progress_is_monotonic() {
        let mut level = Level::new("T", "EASY", vec![ObstacleType::Empty], 5);

        level.record_progress(40);
        assert_eq!(level.best_progress, 40);

        // A worse attempt never lowers the best
        level.record_progress(12);
        assert_eq!(level.best_progress, 40);

        level.record_progress(100);
        assert_eq!(level.best_progress, 100);
    }

    #[test]
    #[should_panic(expected = "empty obstacle map")]
    fn test_empty_map_is_a_fatal_config_error() {
        LevelCatalog::from_levels(vec![Level::new("BROKEN", "EASY", vec![], 5)]);
    }
}
