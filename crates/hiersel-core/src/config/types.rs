//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::resolve::SelectionState;

/// Selection configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Unselect-all-by-default mode
    #[serde(default)]
    pub unselect_all: UnselectAllConfig,

    /// Hierarchy columns targeted by emitted filters
    #[serde(default)]
    pub target: TargetConfig,

    /// Display colours per resolved state
    #[serde(default)]
    pub palette: PaletteConfig,
}

/// Treat an empty selection as "unselect everything"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnselectAllConfig {
    /// Enable/disable the basic fallback filter
    #[serde(default)]
    pub enabled: bool,

    /// Value the fallback filter matches on the first hierarchy column
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

/// Hierarchy columns, outermost level first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Query names in `Table.Column` form
    #[serde(default)]
    pub columns: Vec<String>,
}

/// Colour for each resolved selection state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_selected_color")]
    pub selected: String,

    #[serde(default = "default_unselected_color")]
    pub unselected: String,

    #[serde(default = "default_partial_color")]
    pub partial: String,

    #[serde(default = "default_default_color")]
    pub default: String,
}

impl PaletteConfig {
    /// Colour used to paint a row in `state`
    pub fn color_for(&self, state: SelectionState) -> &str {
        match state {
            SelectionState::Selected => &self.selected,
            SelectionState::Unselected => &self.unselected,
            SelectionState::Partial => &self.partial,
            SelectionState::Default => &self.default,
        }
    }
}

pub const DEFAULT_PLACEHOLDER: &str = "No Data";

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_selected_color() -> String {
    "green".to_string()
}

fn default_unselected_color() -> String {
    "white".to_string()
}

fn default_partial_color() -> String {
    "lightGreen".to_string()
}

fn default_default_color() -> String {
    "white".to_string()
}

impl Default for UnselectAllConfig {
    fn default() -> Self {
        UnselectAllConfig {
            enabled: false,
            placeholder: default_placeholder(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig {
            selected: default_selected_color(),
            unselected: default_unselected_color(),
            partial: default_partial_color(),
            default: default_default_color(),
        }
    }
}
