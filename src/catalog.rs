use std::{fs, path::{Path, PathBuf}};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

/// The resource compiled into the binary
const BUNDLED: &str = include_str!("../assets/sandwiches.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
  #[error("failed to read catalog {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("catalog is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("detail entry {0} must be a JSON string or object")]
  Detail(usize)
}

/// Resource file layout. Details may be given as JSON text or inline objects.
#[derive(Debug, Deserialize)]
struct CatalogFile {
  names: Vec<String>,
  details: Vec<Value>
}

/// Read-only, index-aligned sandwich names and detail JSON.
///
/// Handed to both screens at construction; nothing else reads resources.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  names: Vec<String>,
  details: Vec<String>
}

impl Catalog {
  pub fn new(names: Vec<String>, details: Vec<String>) -> Self {
    if names.len() != details.len() {
      warn!(names = names.len(), details = details.len(), "catalog sequences are not aligned");
    }

    Catalog { names, details }
  }

  pub fn bundled() -> Result<Self, CatalogError> {
    Self::from_json(BUNDLED)
  }

  pub fn load(path: &Path) -> Result<Self, CatalogError> {
    let contents = fs::read_to_string(path)
      .map_err(|source| CatalogError::Read { path: path.to_owned(), source })?;

    let catalog = Self::from_json(&contents)?;
    info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Ok(catalog)
  }

  pub fn from_json(json: &str) -> Result<Self, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let details = file.details
      .into_iter()
      .enumerate()
      .map(|(i, detail)| match detail {
        Value::String(s) => Ok(s),
        object @ Value::Object(_) => Ok(object.to_string()),
        _ => Err(CatalogError::Detail(i))
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(file.names, details))
  }

  pub fn names(&self) -> &[String] { &self.names }

  pub fn len(&self) -> usize { self.names.len() }

  pub fn is_empty(&self) -> bool { self.names.is_empty() }

  /// Detail JSON for the sandwich at `index`, if there is one
  pub fn detail_json(&self, index: usize) -> Option<&str> {
    self.details.get(index).map(String::as_str)
  }
}
