use std::env::VarError;
use std::path::Path;
use std::str::FromStr;

use cell_kernel::{Backend, Palette};
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable that overrides the configured backend.
pub const BACKEND_ENV: &str = "TERMCELL_BACKEND";

/// Kernel configuration loaded from a YAML file such as:
///
/// ```yaml
/// backend: batched
/// palette: custom
/// colors: ["#000000", "#FFFFFF", "#FF0000"]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct KernelConfig {
    /// Kernel implementation to run
    pub backend: BackendName,

    /// Palette to quantize onto
    pub palette: PaletteName,

    /// Hex colors for `palette: custom`, in priority order
    pub colors: Vec<String>,
}

/// Backend as spelled in configuration.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendName {
    /// Per-pixel reference loops
    Scalar,
    /// Four pixels per step
    #[default]
    Batched,
}

/// Palette selection.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    /// xterm's 16 ANSI colors
    Ansi16,
    /// xterm 256-color palette
    #[default]
    Xterm256,
    /// Colors listed under `colors`
    Custom,
}

impl From<BackendName> for Backend {
    fn from(name: BackendName) -> Self {
        match name {
            BackendName::Scalar => Backend::Scalar,
            BackendName::Batched => Backend::Batched,
        }
    }
}

impl FromStr for BackendName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" => Ok(BackendName::Scalar),
            "batched" => Ok(BackendName::Batched),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

impl KernelConfig {
    /// Parse configuration from YAML text. Empty text yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            backend = ?config.backend,
            palette = ?config.palette,
            colors = config.colors.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    /// or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply `TERMCELL_BACKEND` if it is set.
    ///
    /// A value that is not valid Unicode is rejected like any other unknown
    /// backend name.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        match std::env::var(BACKEND_ENV) {
            Ok(value) => self.with_backend_override(Some(value.as_str())),
            Err(VarError::NotPresent) => Ok(self),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::UnknownBackend(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }

    /// Replace the backend with `value` when present.
    pub fn with_backend_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = value {
            let backend = value.parse::<BackendName>()?;
            tracing::debug!(?backend, "Backend overridden");
            self.backend = backend;
        }
        Ok(self)
    }

    /// The configured kernel backend.
    pub fn backend(&self) -> Backend {
        self.backend.into()
    }

    /// Build the configured palette.
    ///
    /// `colors` is only consulted for `palette: custom`.
    pub fn build_palette(&self) -> Result<Palette, ConfigError> {
        match self.palette {
            PaletteName::Ansi16 => Ok(Palette::ansi16()),
            PaletteName::Xterm256 => Ok(Palette::xterm256()),
            PaletteName::Custom => Ok(Palette::from_hex(self.colors.as_slice())?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cell_kernel::{Color, PaletteError};

    #[test]
    fn test_default_config() {
        let config = KernelConfig::default();

        assert_eq!(config.backend, BackendName::Batched);
        assert_eq!(config.palette, PaletteName::Xterm256);
        assert!(config.colors.is_empty());
        assert_eq!(config.backend(), Backend::Batched);
        assert_eq!(config.build_palette().unwrap().len(), 256);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(KernelConfig::from_yaml_str("").unwrap(), KernelConfig::default());
        assert_eq!(
            KernelConfig::from_yaml_str("  \n").unwrap(),
            KernelConfig::default()
        );
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
backend: scalar
palette: custom
colors:
  - "#000000"
  - "#FFF"
"##;
        let config = KernelConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.backend(), Backend::Scalar);
        assert_eq!(config.palette, PaletteName::Custom);

        let palette = config.build_palette().unwrap();
        assert_eq!(palette.colors(), &[Color::rgb(0, 0, 0), Color::rgb(255, 255, 255)]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = KernelConfig::from_yaml_str("palette: ansi16\n").unwrap();
        assert_eq!(config.backend, BackendName::Batched);
        assert_eq!(config.build_palette().unwrap().len(), 16);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result = KernelConfig::from_yaml_str("backend: gpu\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_custom_palette_without_colors() {
        let config = KernelConfig::from_yaml_str("palette: custom\n").unwrap();
        assert!(matches!(
            config.build_palette(),
            Err(ConfigError::Palette(PaletteError::EmptyPalette))
        ));
    }

    #[test]
    fn test_backend_override() {
        let config = KernelConfig::default()
            .with_backend_override(Some(" Scalar "))
            .unwrap();
        assert_eq!(config.backend(), Backend::Scalar);

        let unchanged = KernelConfig::default().with_backend_override(None).unwrap();
        assert_eq!(unchanged.backend(), Backend::Batched);

        let result = KernelConfig::default().with_backend_override(Some("neon"));
        assert!(matches!(result, Err(ConfigError::UnknownBackend(name)) if name == "neon"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = KernelConfig::load_or_default(Path::new("/nonexistent/termcell.yaml"));
        assert_eq!(config, KernelConfig::default());
    }

    // The only test that touches the process environment.
    #[test]
    fn test_env_override() {
        std::env::remove_var(BACKEND_ENV);
        let unset = KernelConfig::default().with_env_overrides().unwrap();
        assert_eq!(unset.backend(), Backend::Batched);

        std::env::set_var(BACKEND_ENV, "scalar");
        let set = KernelConfig::default().with_env_overrides().unwrap();
        assert_eq!(set.backend(), Backend::Scalar);

        std::env::set_var(BACKEND_ENV, "gpu");
        let unknown = KernelConfig::default().with_env_overrides();
        assert!(matches!(unknown, Err(ConfigError::UnknownBackend(name)) if name == "gpu"));

        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            std::env::set_var(BACKEND_ENV, OsStr::from_bytes(&[0x66, 0xff]));
            let garbled = KernelConfig::default().with_env_overrides();
            assert!(
                matches!(garbled, Err(ConfigError::UnknownBackend(ref name)) if name.starts_with('f')),
                "{garbled:?}"
            );
        }

        std::env::remove_var(BACKEND_ENV);
    }
}
