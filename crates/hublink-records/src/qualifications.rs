//! The authoritative qualification-code table.
//!
//! Maintained outside this service and loaded at startup from a JSON object
//! of `degree code → title`. It takes precedence over the static
//! [`degrees`](crate::degrees) table.

use std::{collections::HashMap, path::Path};

use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct QualificationTable {
  titles: HashMap<String, String>,
}

impl QualificationTable {
  pub fn from_json(raw: &str) -> Result<Self> {
    let titles: HashMap<String, String> = serde_json::from_str(raw)?;
    Ok(Self::from_iter(titles))
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Read {
      path: path.display().to_string(),
      source,
    })?;
    let table = Self::from_json(&raw)?;
    tracing::info!(path = %path.display(), entries = table.len(), "loaded qualification table");
    Ok(table)
  }

  /// Title for a degree code. Codes match exactly after trimming.
  pub fn title(&self, code: &str) -> Option<&str> {
    self.titles.get(code.trim()).map(String::as_str)
  }

  pub fn len(&self) -> usize { self.titles.len() }

  pub fn is_empty(&self) -> bool { self.titles.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QualificationTable {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      titles: iter
        .into_iter()
        .map(|(code, title)| (code.into().trim().to_string(), title.into()))
        .filter(|(code, title): &(String, String)| !code.is_empty() && !title.is_empty())
        .collect(),
    }
  }
}
