use std::fmt;

use crate::host::LayerHandle;

/// A widget shape that could not be turned into a [`crate::Geometry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    NotAnObject,
    MissingField(&'static str),
    UnsupportedType(String),
    InvalidCoordinates(String),
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::NotAnObject => write!(f, "shape is not a JSON object"),
            TranslationError::MissingField(field) => {
                write!(f, "shape is missing the \"{}\" field", field)
            }
            TranslationError::UnsupportedType(kind) => {
                write!(f, "unsupported geometry type: {}", kind)
            }
            TranslationError::InvalidCoordinates(message) => {
                write!(f, "invalid coordinates: {}", message)
            }
        }
    }
}

impl std::error::Error for TranslationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMapError {
    LayerRejected(String),
    UnknownLayer(LayerHandle),
}

impl fmt::Display for HostMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostMapError::LayerRejected(message) => {
                write!(f, "host map rejected layer: {}", message)
            }
            HostMapError::UnknownLayer(handle) => {
                write!(f, "host map has no layer {}", handle)
            }
        }
    }
}

impl std::error::Error for HostMapError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawControlError {
    Translation(TranslationError),
    HostMap(HostMapError),
}

impl fmt::Display for DrawControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawControlError::Translation(err) => write!(f, "translation error: {}", err),
            DrawControlError::HostMap(err) => write!(f, "host map error: {}", err),
        }
    }
}

impl std::error::Error for DrawControlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DrawControlError::Translation(err) => Some(err),
            DrawControlError::HostMap(err) => Some(err),
        }
    }
}

impl From<TranslationError> for DrawControlError {
    fn from(err: TranslationError) -> Self {
        DrawControlError::Translation(err)
    }
}

impl From<HostMapError> for DrawControlError {
    fn from(err: HostMapError) -> Self {
        DrawControlError::HostMap(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    InvalidOpacity(f64),
    EmptyLayerName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(message) => write!(f, "failed to read config: {}", message),
            ConfigError::Parse(message) => write!(f, "failed to parse config: {}", message),
            ConfigError::InvalidOpacity(opacity) => {
                write!(f, "layer opacity {} is outside 0.0..=1.0", opacity)
            }
            ConfigError::EmptyLayerName => write!(f, "layer name must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
