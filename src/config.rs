//! Engine configuration.
//!
//! Defaults can be overridden from `similarity.toml` in the working directory
//! and then from `GAP_SIMILARITY_*` environment variables, merged with Figment.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};

pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// minimum similarity, as a fraction, a candidate needs to be returned
    pub threshold: f64,
    /// cap on the number of returned candidates
    pub max_results: usize,
    /// tokens shorter than this (in chars) are dropped
    pub min_term_len: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
            min_term_len: DEFAULT_MIN_TERM_LEN,
        }
    }
}

impl SimilarityConfig {
    pub const FILE: &'static str = "similarity.toml";
    pub const ENV_PREFIX: &'static str = "GAP_SIMILARITY_";

    /// Provider chain: defaults < `similarity.toml` < environment
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(Self::FILE))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Load and validate the configuration
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| SimilarityError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(SimilarityError::InvalidThreshold(self.threshold));
        }
        if self.max_results == 0 {
            return Err(SimilarityError::InvalidConfig(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_match_reference_policy() {
        let config = SimilarityConfig::default();
        assert_eq!(config.threshold, 0.6);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.min_term_len, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_without_sources_yields_defaults() {
        Jail::expect_with(|_jail| {
            let config = SimilarityConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, SimilarityConfig::default());
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                SimilarityConfig::FILE,
                r#"
                threshold = 0.25
                max_results = 10
                "#,
            )?;
            jail.set_env("GAP_SIMILARITY_MAX_RESULTS", 3);

            let config = SimilarityConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.threshold, 0.25);
            assert_eq!(config.max_results, 3);
            assert_eq!(config.min_term_len, DEFAULT_MIN_TERM_LEN);
            Ok(())
        });
    }

    #[test]
    fn zero_max_results_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("GAP_SIMILARITY_MAX_RESULTS", 0);
            let err = SimilarityConfig::load().unwrap_err();
            assert!(matches!(err, SimilarityError::InvalidConfig(_)));
            Ok(())
        });
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let config = SimilarityConfig {
            threshold: f64::NAN,
            ..SimilarityConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimilarityError::InvalidThreshold(t)) if t.is_nan()
        ));
    }
}
