/// Terminal front-end options, stored next to the viewer options in one TOML file
use meshview_core::options::require_positive;
use meshview_core::{OptionsError, ViewerOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppOptions {
    #[serde(flatten)]
    pub viewer: ViewerOptions,
    pub terminal: TerminalOptions,
}

impl AppOptions {
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(content)?;
        options.viewer.validate()?;
        require_positive("terminal.cell_aspect", options.terminal.cell_aspect)?;
        Ok(options)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerminalOptions {
    pub target_fps: u32,
    /// Height of a terminal cell divided by its width
    pub cell_aspect: f64,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            target_fps: 30,
            cell_aspect: 2.0,
        }
    }
}
