use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use hocon::{Hocon, HoconLoader};

/// Loads settings from a HOCON file with environment variable overrides.
///
/// Lookup order: environment variable, the scoped section of the file, then
/// the file's top level.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();

        let env = std::env::vars().collect::<HashMap<_, _>>();

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        Ok(Self { hocon, env, scope })
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(name) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        T::load(self)
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(val) => Some(Value::Float(*val as f32)),
            Hocon::Integer(val) => Some(Value::Integer(*val)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(val) => Some(Value::Boolean(*val)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => val.parse::<bool>().ok(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => usize::try_from(*val).ok(),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(val) => u64::try_from(*val).ok(),
            Value::String(val) => val.parse::<u64>().ok(),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(val) => Some(*val),
            Value::Integer(val) => Some(*val as f32),
            Value::String(val) => val.parse::<f32>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(val) => Some(val.to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}.conf", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_scoped_value_overrides_top_level() {
        let path = write_config("scoped", "depth = 3\nplayer { depth = 5 }");
        let config = ConfigLoader::new(&path, "player".to_string()).unwrap();

        assert_eq!(config.get("depth").and_then(|v| v.as_usize()), Some(5));
    }

    #[test]
    fn test_missing_scope_falls_back_to_top_level() {
        let path = write_config("fallback", "depth = 3\nplayer { depth = 5 }");
        let config = ConfigLoader::new(&path, "tournament".to_string()).unwrap();

        assert_eq!(config.get("depth").and_then(|v| v.as_usize()), Some(3));
        assert!(config.get("iterations").is_none());
    }

    #[test]
    fn test_environment_variable_wins() {
        let path = write_config("env", "config_test_exploration = 1.0");
        std::env::set_var("config_test_exploration", "2.5");
        let config = ConfigLoader::new(&path, "player".to_string()).unwrap();

        assert_eq!(
            config.get("config_test_exploration").and_then(|v| v.as_f32()),
            Some(2.5)
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ConfigLoader::new("/nonexistent/path.conf", "player".to_string()).is_err());
    }
}
