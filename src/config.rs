//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Vertex limit used when no configuration is supplied.
pub const DEFAULT_MAX_VERTICES: usize = 100;

/// Marker printed in place of a distance when no route exists.
pub const DEFAULT_NO_PATH_MARKER: &str = "----";

/// Tunables for graph construction and reporting.
///
/// Every field has a default, so a partial JSON document is accepted:
///
/// ```rust
/// use routegraph::GraphConfig;
///
/// let config = GraphConfig::from_json_str(r#"{ "max_vertices": null }"#).unwrap();
/// assert_eq!(config.max_vertices, None);
/// assert_eq!(config.no_path_marker, "----");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Largest vertex count the matrix engine accepts. `None` removes the cap.
    pub max_vertices: Option<usize>,
    /// Text shown for pairs with no path.
    pub no_path_marker: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_vertices: Some(DEFAULT_MAX_VERTICES),
            no_path_marker: DEFAULT_NO_PATH_MARKER.to_owned(),
        }
    }
}

impl GraphConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Returns a configuration without a vertex cap.
    pub fn unbounded() -> Self {
        Self {
            max_vertices: None,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GraphConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GraphConfig::default());
    }

    #[test]
    fn marker_override() {
        let config = GraphConfig::from_json_str(r#"{ "no_path_marker": "n/a" }"#).unwrap();
        assert_eq!(config.no_path_marker, "n/a");
        assert_eq!(config.max_vertices, Some(DEFAULT_MAX_VERTICES));
    }
}
