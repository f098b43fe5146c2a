// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Layout(ConfigurationError),
}

/// Layout-time misconfiguration of the viewfinder.
///
/// Raised by [`crate::viewfinder::ViewfinderOverlay::measure`] and never
/// recovered locally: the caller supplied a margin/finder combination that
/// cannot fit inside the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// `margin_bottom` pushes the finder rectangle outside the parent's
    /// vertical bounds.
    MarginOutOfBounds {
        parent_height: u32,
        finder_size: u32,
        margin_bottom: i32,
    },
}

impl ConfigurationError {
    /// Stable identifier for this error, suitable for lookups and logs.
    pub fn key(&self) -> &'static str {
        match self {
            ConfigurationError::MarginOutOfBounds { .. } => "viewfinder-margin-out-of-bounds",
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MarginOutOfBounds {
                parent_height,
                finder_size,
                margin_bottom,
            } => write!(
                f,
                "Margin bottom {} is out of view (finder {}px, parent height {}px)",
                margin_bottom, finder_size, parent_height
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Layout(e) => write!(f, "Layout Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Error::Layout(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn configuration_error_wraps_into_layout_variant() {
        let err: Error = ConfigurationError::MarginOutOfBounds {
            parent_height: 200,
            finder_size: 285,
            margin_bottom: 0,
        }
        .into();
        assert!(matches!(err, Error::Layout(_)));
        let message = format!("{}", err);
        assert!(message.starts_with("Layout Error: Margin bottom 0 is out of view"));
        assert!(message.contains("285px"));
    }

    #[test]
    fn configuration_error_key_is_stable() {
        let err = ConfigurationError::MarginOutOfBounds {
            parent_height: 10,
            finder_size: 20,
            margin_bottom: 3,
        };
        assert_eq!(err.key(), "viewfinder-margin-out-of-bounds");
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
