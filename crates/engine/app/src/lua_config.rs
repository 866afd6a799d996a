//! Base Lua configuration for scene setup
//!
//! Provides Lua 5.4 scripting with the vector helpers every scene needs.
//! Application-specific functions (camera targets, hotspots, ...) are
//! registered by the application on top of this.
//!
//! # Example Lua Configuration
//!
//! ```lua
//! spawn = vec3(0, 0.5, 0)
//! ```

use glam::Vec3;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Re-export mlua crate for use by dependent crates
pub use mlua;
use mlua::prelude::*;

/// Errors raised while loading or reading a Lua configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lua errors are kept as text; `mlua::Error` is not `Send + Sync`
    #[error("Failed to evaluate config: {0}")]
    Lua(String),

    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl From<LuaError> for ConfigError {
    fn from(e: LuaError) -> Self {
        Self::Lua(e.to_string())
    }
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Convert a Lua value to f64, handling both integers and numbers
pub fn lua_val_to_f64(val: &LuaValue) -> LuaResult<f64> {
    match val {
        LuaValue::Number(n) => Ok(*n),
        LuaValue::Integer(i) => Ok(*i as f64),
        _ => Err(LuaError::FromLuaConversionError {
            from: val.type_name(),
            to: "f64".to_string(),
            message: Some("expected number or integer".to_string()),
        }),
    }
}

/// Extract f32 from a Lua table at given index (1-indexed)
pub fn extract_f32(table: &LuaTable, index: i32) -> LuaResult<f32> {
    let val: LuaValue = table.get(index)?;
    lua_val_to_f64(&val)
        .map(|n| n as f32)
        .map_err(|_| LuaError::FromLuaConversionError {
            from: val.type_name(),
            to: "f32".to_string(),
            message: Some(format!("expected number at index {}", index)),
        })
}

/// Parse a Lua table as Vec3 (expects 3 elements: x, y, z)
pub fn parse_vec3(table: &LuaTable) -> LuaResult<Vec3> {
    // Lua tables are 1-indexed
    let x = extract_f32(table, 1)?;
    let y = extract_f32(table, 2)?;
    let z = extract_f32(table, 3)?;
    Ok(Vec3::new(x, y, z))
}

/// Read an optional numeric field from a table
pub fn opt_f32(table: &LuaTable, field: &str) -> Result<Option<f32>, ConfigError> {
    match table.get::<LuaValue>(field)? {
        LuaValue::Nil => Ok(None),
        value => lua_val_to_f64(&value)
            .map(|n| Some(n as f32))
            .map_err(|e| ConfigError::invalid(field, e.to_string())),
    }
}

/// Read an optional `vec3(...)` field from a table
pub fn opt_vec3(table: &LuaTable, field: &str) -> Result<Option<Vec3>, ConfigError> {
    match table.get::<LuaValue>(field)? {
        LuaValue::Nil => Ok(None),
        LuaValue::Table(t) => parse_vec3(&t)
            .map(Some)
            .map_err(|e| ConfigError::invalid(field, e.to_string())),
        other => Err(ConfigError::invalid(
            field,
            format!("expected vec3, got {}", other.type_name()),
        )),
    }
}

/// Lua configuration engine wrapper
///
/// Applications extend it by registering functions through [`LuaConfig::lua`].
pub struct LuaConfig {
    lua: Lua,
}

impl LuaConfig {
    /// Create a new Lua configuration engine with `vec3` registered
    pub fn new() -> Result<Self, ConfigError> {
        let lua = Lua::new();

        // Register vec3 constructor - accepts any numeric type
        let vec3_fn = lua.create_function(|_, (x, y, z): (LuaValue, LuaValue, LuaValue)| {
            let x_num = lua_val_to_f64(&x)?;
            let y_num = lua_val_to_f64(&y)?;
            let z_num = lua_val_to_f64(&z)?;
            Ok(vec![x_num, y_num, z_num])
        })?;
        lua.globals().set("vec3", vec3_fn)?;

        Ok(Self { lua })
    }

    /// Get access to the underlying Lua state
    pub fn lua(&self) -> &Lua {
        &self.lua
    }

    /// Load and evaluate a Lua configuration file
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "evaluating config");
        self.lua
            .load(&content)
            .set_name(path.display().to_string())
            .exec()?;
        Ok(())
    }

    /// Load configuration from a string
    pub fn load_string(&mut self, content: &str) -> Result<(), ConfigError> {
        self.lua.load(content).exec()?;
        Ok(())
    }

    /// Extract a value by name from the Lua global table
    pub fn extract_value<T: FromLua>(&self, name: &str) -> Result<T, ConfigError> {
        self.lua
            .globals()
            .get::<T>(name)
            .map_err(|e| ConfigError::invalid(name, e.to_string()))
    }
}
