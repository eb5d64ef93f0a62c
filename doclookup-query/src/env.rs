//! Environment variable sources.
//!
//! Settings are read through [`EnvSource`] so that tests can supply a fixed
//! environment instead of mutating the process environment.

use std::collections::HashMap;

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Check if a variable exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get a variable with surrounding whitespace removed.
    ///
    /// Returns `None` when the variable is unset or blank.
    fn get_trimmed(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create a new map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source() {
        let env = MapEnvSource::new().set("DB_NAME", "school");
        assert_eq!(env.get("DB_NAME"), Some("school".to_string()));
        assert!(env.contains("DB_NAME"));
        assert!(!env.contains("MONGO_URI"));
    }

    #[test]
    fn test_get_trimmed_drops_blank() {
        let env = MapEnvSource::new()
            .set("A", "  value ")
            .set("B", "   ");

        assert_eq!(env.get_trimmed("A"), Some("value".to_string()));
        assert_eq!(env.get_trimmed("B"), None);
        assert_eq!(env.get_trimmed("C"), None);
    }
}
