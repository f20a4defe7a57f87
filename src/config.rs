//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CGL_SECTION__KEY`)

use cgalerp_anim::{Pose, Quat, Vec3};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Multivector pool configuration
    #[serde(default)]
    pub pool: PoolConfig,
    /// Blend configuration
    #[serde(default)]
    pub blend: BlendConfig,
    /// Demo start/end poses
    #[serde(default)]
    pub demo: DemoConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pool: PoolConfig::default(),
            blend: BlendConfig::default(),
            demo: DemoConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CGL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // CGL_BLEND__FRAMES=30 -> blend.frames = 30
        figment = figment.merge(Env::prefixed("CGL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Multivector pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Pre-warmed slot capacity
    pub capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { capacity: 5000 }
    }
}

/// Blend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Renormalize the blended rotor before decomposing it
    pub renormalize: bool,
    /// Number of frames the demo steps through
    pub frames: u32,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            renormalize: false,
            frames: 120,
        }
    }
}

/// One serializable pose
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseConfig {
    /// Position [x, y, z]
    pub position: [f32; 3],
    /// Rotation quaternion [x, y, z, w]
    pub rotation: [f32; 4],
    /// Uniform scale
    pub scale: f32,
}

impl PoseConfig {
    /// Convert to the engine pose type
    pub fn to_pose(&self) -> Pose {
        Pose::new(
            Vec3::new(self.position[0], self.position[1], self.position[2]),
            Quat::new(
                self.rotation[0],
                self.rotation[1],
                self.rotation[2],
                self.rotation[3],
            ),
            self.scale,
        )
    }
}

/// Demo start/end poses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Pose at factor 0
    pub start: PoseConfig,
    /// Pose at factor 1
    pub end: PoseConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start: PoseConfig {
                position: [0.0, 0.0, 0.0],
                rotation: [0.0, 0.0, 0.0, 1.0],
                scale: 1.0,
            },
            end: PoseConfig {
                position: [10.0, 0.0, 0.0],
                rotation: [0.0, 0.0, 0.0, 1.0],
                scale: 2.0,
            },
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
