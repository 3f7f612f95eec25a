use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ConfigError;
use crate::host::LayerStyle;

pub const DEFAULT_LAYER_NAME: &str = "Drawn Features";

/// Draw control configuration, usually loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawControlConfig {
    #[serde(default)]
    pub layer: LayerOptions,
}

/// How the representation layer is added to the host map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerOptions {
    pub name: String,
    pub style: LayerStyle,
    pub visible: bool,
    pub opacity: f64,
}

impl Default for LayerOptions {
    fn default() -> Self {
        LayerOptions {
            name: DEFAULT_LAYER_NAME.to_string(),
            style: default_style(),
            visible: false,
            opacity: 0.5,
        }
    }
}

fn default_style() -> LayerStyle {
    match json!({"color": "blue"}) {
        Value::Object(style) => style,
        _ => LayerStyle::new(),
    }
}

impl DrawControlConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: DrawControlConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layer.name.trim().is_empty() {
            return Err(ConfigError::EmptyLayerName);
        }
        if !(0.0..=1.0).contains(&self.layer.opacity) {
            return Err(ConfigError::InvalidOpacity(self.layer.opacity));
        }
        Ok(())
    }
}
