use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Fixed category labels the cross-tab and insights look for. Matching is exact
/// and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryLabels {
    pub resolved: String,
    pub pending: String,
    pub high_urgency: [String; 2],
    pub satisfaction_good: String,
    pub satisfaction_medium: String,
    pub satisfaction_regular: String,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self {
            resolved: "Resolvido/Fechado".into(),
            pending: "Pendente".into(),
            high_urgency: ["Urgente".into(), "Alta".into()],
            satisfaction_good: "Bom".into(),
            satisfaction_medium: "Médio".into(),
            satisfaction_regular: "Regular".into(),
        }
    }
}

impl CategoryLabels {
    /// Loads label overrides from a JSON file; keys left out keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[derive(Debug, Clone)]
pub struct AggregateOpts {
    pub top_reasons: usize,
    pub max_anomaly_samples: usize,
    pub labels: CategoryLabels,
}

impl Default for AggregateOpts {
    fn default() -> Self {
        Self { top_reasons: 10, max_anomaly_samples: 20, labels: CategoryLabels::default() }
    }
}
