//! Tests for loading RegistryConfig from the environment
//!
//! Kept in a single test so the environment is not mutated concurrently.

use core_kernel::{CoreError, RegistryConfig};

#[test]
fn test_from_env_layers_over_defaults() {
    std::env::remove_var("REGISTRY_MIN_INTERESTS");
    std::env::remove_var("REGISTRY_MAX_AGE_YEARS");
    assert_eq!(RegistryConfig::from_env().unwrap(), RegistryConfig::default());

    std::env::set_var("REGISTRY_MIN_INTERESTS", "3");
    let config = RegistryConfig::from_env().unwrap();
    assert_eq!(config.min_interests, 3);
    assert_eq!(config.max_age_years, 150);

    std::env::set_var("REGISTRY_MAX_AGE_YEARS", "0");
    assert!(matches!(RegistryConfig::from_env(), Err(CoreError::Configuration(_))));

    std::env::set_var("REGISTRY_MAX_AGE_YEARS", "ancient");
    assert!(matches!(RegistryConfig::from_env(), Err(CoreError::ConfigSource(_))));

    std::env::remove_var("REGISTRY_MIN_INTERESTS");
    std::env::remove_var("REGISTRY_MAX_AGE_YEARS");
}
