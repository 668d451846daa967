use crate::error::ClassifyError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// One `"<index>": ["<wordnet id>", "<name>"]` entry of the class index file.
#[derive(Debug, Deserialize)]
struct LabelEntry(#[allow(dead_code)] String, String);

#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: HashMap<usize, String>,
}

impl LabelTable {
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let json = std::fs::read_to_string(path).map_err(|e| ClassifyError::Load {
            what: "labels",
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&json).map_err(|message| ClassifyError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let entries: BTreeMap<String, LabelEntry> =
            serde_json::from_str(json).map_err(|e| e.to_string())?;

        let mut labels = HashMap::with_capacity(entries.len());
        for (key, LabelEntry(_, name)) in entries {
            if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("class index {:?} is not a non-negative integer", key));
            }
            let index = key
                .parse::<usize>()
                .map_err(|e| format!("class index {:?}: {}", key, e))?;
            if labels.insert(index, name).is_some() {
                return Err(format!("class index {} appears more than once", index));
            }
        }

        Ok(Self { labels })
    }

    /// Human-readable name for `index`, or `class_<index>` when the table has
    /// no entry for it.
    pub fn label(&self, index: usize) -> String {
        match self.labels.get(&index) {
            Some(name) => name.clone(),
            None => format!("class_{}", index),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}
