use crate::error::ConfigError;
use crate::fairy::FairyConfig;
use crate::gesture::GestureThresholds;
use crate::layout::TreeShape;
use crate::snow::SnowConfig;

/// Everything tunable about a scene, fixed at construction.
///
/// The two presets differ only in density and brightness; behavior is the
/// same. `default()` is the lighter one that holds frame rate on laptops and
/// phones.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub ornament_count: usize,
    pub tree: TreeShape,
    pub snow: SnowConfig,
    pub fairy: FairyConfig,
    pub gesture: GestureThresholds,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ornament_count: 1000,
            tree: TreeShape::default(),
            snow: SnowConfig::default(),
            fairy: FairyConfig::default(),
            gesture: GestureThresholds::default(),
            seed: 42,
        }
    }
}

impl SceneConfig {
    /// Denser preset for desktop GPUs.
    pub fn full() -> Self {
        let mut config = Self {
            ornament_count: 1600,
            ..Self::default()
        };
        config.snow.count = 3000;
        config.fairy.count = 180;
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tree.validate()?;
        self.snow.validate()?;
        self.fairy.validate()?;
        self.gesture.validate()?;
        Ok(())
    }
}
