//! 設定ファイル（TOML）
//!
//! ```toml
//! [svg]
//! cell_size = 24.0
//! scale = 1.0
//! ```
//!
//! 書かれていない項目は既定値になる。

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tourney_core::SvgOptions;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub svg: SvgOptions,
}

impl CliConfig {
    /// 設定ファイルを読み込む（パスがなければ既定値）
    pub fn load(path: Option<&Path>) -> Result<CliConfig> {
        let Some(path) = path else {
            return Ok(CliConfig::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = CliConfig::parse(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<CliConfig> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourney_core::export::svg::DEFAULT_CELL_SIZE;

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_parse_partial_svg_table() {
        let config = CliConfig::parse("[svg]\nscale = 0.25\n").unwrap();
        assert_eq!(config.svg.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(config.svg.scale, Some(0.25));

        let config = CliConfig::parse("[svg]\ncell_size = 10.0\n").unwrap();
        assert_eq!(config.svg.cell_size, 10.0);
        assert_eq!(config.svg.scale, None);
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        assert!(CliConfig::parse("[svg]\ncell_size = \"big\"\n").is_err());
    }
}
