//! Registry configuration
//!
//! Settings are read from `REGISTRY_*` environment variables layered over
//! the defaults below.

use serde::Deserialize;

use crate::error::CoreError;

/// Tunable registration policy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryConfig {
    /// Minimum number of interests a person must select
    pub min_interests: usize,
    /// Oldest plausible age, in whole years, for a registered person
    pub max_age_years: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            min_interests: 1,
            max_age_years: 150,
        }
    }
}

impl RegistryConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, CoreError> {
        let defaults = Self::default();

        let loaded: Self = config::Config::builder()
            .set_default("min_interests", defaults.min_interests as u64)?
            .set_default("max_age_years", u64::from(defaults.max_age_years))?
            .add_source(config::Environment::with_prefix("REGISTRY"))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<(), CoreError> {
        if self.max_age_years == 0 {
            return Err(CoreError::configuration("max_age_years must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.min_interests, 1);
        assert_eq!(config.max_age_years, 150);
    }

    #[test]
    fn test_zero_max_age_is_rejected() {
        let config = RegistryConfig { min_interests: 1, max_age_years: 0 };
        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));
    }
}
