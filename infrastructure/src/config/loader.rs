//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `JOKEHUB_*` (nested keys split on `__`), plus
    ///    `ANTHROPIC_API_KEY` for the combiner key
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./jokehub.toml` or `./.jokehub.toml`
    /// 4. XDG config: `~/.config/jokehub/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["jokehub.toml", ".jokehub.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("JOKEHUB_").split("__"));

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;

        // The conventional variable for the combiner key wins over nothing,
        // but explicit config always wins over it.
        if config.combiner.api_key.is_none() {
            config.combiner.api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        }

        Ok(config)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("jokehub").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_any_files() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn global_config_path_ends_with_expected_suffix() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.ends_with("jokehub/config.toml"));
        }
    }
}
