//! World domain: level layout definitions loaded from RON.

use ron::Options;
use serde::Deserialize;

/// Error type for level data failures.
#[derive(Debug)]
pub struct LevelLoadError {
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load level: {}", self.message)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDef {
    /// Center x of the platform.
    pub x: f32,
    /// Center y of the platform, y-up world coordinates.
    pub y: f32,
    pub width: f32,
    /// Marks the level's single origin/ground surface.
    #[serde(default)]
    pub origin: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    pub spawn_point: PointDef,
    pub goal: PointDef,
    pub platforms: Vec<PlatformDef>,
}

impl LevelDef {
    /// Validate the single-origin invariant.
    pub fn origin_count(&self) -> usize {
        self.platforms.iter().filter(|p| p.origin).count()
    }
}

const PARKOUR_LEVEL: &str = include_str!("../../assets/levels/parkour.ron");

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse the built-in parkour level.
pub fn load_parkour_level() -> Result<LevelDef, LevelLoadError> {
    let level: LevelDef = ron_options()
        .from_str(PARKOUR_LEVEL)
        .map_err(|e| LevelLoadError {
            message: format!("Parse error: {}", e),
        })?;

    if level.origin_count() != 1 {
        return Err(LevelLoadError {
            message: format!(
                "Level must have exactly one origin platform, found {}",
                level.origin_count()
            ),
        });
    }

    Ok(level)
}
