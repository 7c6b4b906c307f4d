use contracts::shared::widgets::{BigGraphWidgetParams, WidgetInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::demo;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    #[error("failed to read data file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse data file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of the data file: payloads keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub graphs: HashMap<String, BigGraphWidgetParams>,
    #[serde(default)]
    pub widgets: HashMap<String, WidgetInfo>,
}

/// Read-only payload store shared by all request handlers.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    data: DashboardData,
}

impl DashboardStore {
    pub fn new(data: DashboardData) -> Self {
        Self { data }
    }

    /// Store seeded with the built-in demo dashboard
    pub fn demo() -> Self {
        Self::new(demo::demo_data())
    }

    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| StoreError::Parse {
            path: display,
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<DashboardData>(json).map(Self::new)
    }

    /// Data file when configured, demo data otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, StoreError> {
        match path {
            Some(path) => {
                let store = Self::from_file(path)?;
                tracing::info!(
                    "Loaded {} graphs and {} widgets from {}",
                    store.data.graphs.len(),
                    store.data.widgets.len(),
                    path.display()
                );
                Ok(store)
            }
            None => {
                tracing::info!("No data file configured, serving demo dashboard");
                Ok(Self::demo())
            }
        }
    }

    pub fn graph(&self, id: &str) -> Result<&BigGraphWidgetParams, StoreError> {
        self.data.graphs.get(id).ok_or_else(|| StoreError::NotFound {
            kind: "graph",
            id: id.to_string(),
        })
    }

    pub fn widget(&self, id: &str) -> Result<&WidgetInfo, StoreError> {
        self.data.widgets.get(id).ok_or_else(|| StoreError::NotFound {
            kind: "widget",
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_json() {
        let store = DashboardStore::from_json(
            r#"{
                "graphs": {"g1": {"series": [{"name": "A", "points": [{"label": "x", "value": 1.0}]}]}},
                "widgets": {"w1": {"type": "insight", "title": "Note", "text": "hello"}}
            }"#,
        )
        .unwrap();

        assert_eq!(store.graph("g1").unwrap().series.len(), 1);
        assert_eq!(store.widget("w1").unwrap().type_name(), "insight");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let store = DashboardStore::from_json("{}").unwrap();
        assert!(matches!(
            store.graph("g1"),
            Err(StoreError::NotFound { kind: "graph", .. })
        ));
    }

    #[test]
    fn test_not_found_message() {
        let store = DashboardStore::default();
        let err = store.widget("nope").unwrap_err();
        assert_eq!(err.to_string(), "widget 'nope' not found");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let path = PathBuf::from("definitely/not/here/dashboard.json");
        let err = DashboardStore::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("d404_invalid_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let err = DashboardStore::from_file(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_without_path_serves_demo() {
        let store = DashboardStore::load(None).unwrap();
        assert!(store.widget(demo::MAIN_WIDGET_ID).is_ok());
    }
}
