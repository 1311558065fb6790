use std::path::PathBuf;

use crate::error::{ProviderError, RecordError};

use super::loader;
use super::model::{RecipeCatalog, RecipeDetail, RecipeId};

/// Source of recipe records. Calls may block; the view model runs them on a
/// worker thread.
pub trait RecipeProvider: Send + Sync {
    /// Retrieve the whole catalog.
    fn search(&self) -> Result<RecipeCatalog, ProviderError>;

    /// Retrieve the full record for one recipe.
    fn detail(&self, id: RecipeId) -> Result<RecipeDetail, ProviderError>;
}

/// Provider backed by an exported catalog file (JSON or CSV).
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecipeProvider for FileProvider {
    fn search(&self) -> Result<RecipeCatalog, ProviderError> {
        loader::load_file(&self.path).map_err(ProviderError::from)
    }

    fn detail(&self, id: RecipeId) -> Result<RecipeDetail, ProviderError> {
        match loader::load_detail(&self.path, id) {
            Ok(Some(detail)) => Ok(detail),
            Ok(None) => Err(ProviderError::NotFound(id.0)),
            // Only a record that exists but is malformed is a detail failure;
            // an unreadable source is the same load failure `search` reports.
            Err(e) => match e.downcast_ref::<RecordError>() {
                Some(record) => Err(ProviderError::Detail {
                    id: id.0,
                    reason: record.to_string(),
                }),
                None => Err(ProviderError::from(e)),
            },
        }
    }
}
