//! Literal inputs for the demonstration run.
//!
//! The `solid-demo` binary always runs with [`DemoConfig::default`]. The TOML
//! parser is for embedders that call [`crate::demo::run`] with their own
//! inputs; the binary reads no files, flags or environment variables.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub username: String,
    pub password: String,
    pub circle_radius: f64,
    pub rectangle_length: f64,
    pub rectangle_width: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            username: "user1".to_string(),
            password: "password1".to_string(),
            circle_radius: 5.0,
            rectangle_length: 4.0,
            rectangle_width: 6.0,
        }
    }
}

impl DemoConfig {
    /// Parses a TOML table. Keys left out keep their default values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
