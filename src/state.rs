use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::CUISINE_OPTIONS;
use crate::data::filter::FilterCriteria;
use crate::data::model::{Recipe, RecipeCatalog, RecipeDetail, RecipeId, same_tag};
use crate::data::pipeline::{self, PipelineOutput};
use crate::data::provider::RecipeProvider;
use crate::data::retrieval::{
    Completed, Generation, GenerationTracker, Payload, Request, Retriever,
};

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail(RecipeId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(RecipeDetail),
    Failed(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    provider: Option<Arc<dyn RecipeProvider>>,

    /// Retrieved catalog (None until a load succeeds, and after a failed one).
    pub catalog: Option<RecipeCatalog>,

    /// Active search query and cuisine.
    pub criteria: FilterCriteria,

    /// Filtered view and aggregates for the current catalog + criteria.
    pub output: PipelineOutput,

    /// Diet tag colours for the distribution chart.
    pub color_map: ColorMap,

    pub view: View,
    pub detail: Option<DetailState>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a catalog retrieval is in flight.
    pub loading: bool,

    catalog_generation: GenerationTracker,
    detail_generation: GenerationTracker,
    retriever: Retriever,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Retriever::default())
    }
}

impl AppState {
    pub fn new(retriever: Retriever) -> Self {
        Self {
            provider: None,
            catalog: None,
            criteria: FilterCriteria::default(),
            output: PipelineOutput::default(),
            color_map: ColorMap::default(),
            view: View::List,
            detail: None,
            status_message: None,
            loading: false,
            catalog_generation: GenerationTracker::default(),
            detail_generation: GenerationTracker::default(),
            retriever,
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Switch to a new record source and start loading it.
    pub fn set_provider(&mut self, provider: Arc<dyn RecipeProvider>) -> Option<Generation> {
        self.provider = Some(provider);
        self.reload()
    }

    /// Start a catalog retrieval. Anything still in flight becomes stale.
    pub fn reload(&mut self) -> Option<Generation> {
        let Some(provider) = self.provider.clone() else {
            self.status_message = Some(crate::error::ProviderError::NoSource.to_string());
            return None;
        };
        self.back_to_list();
        let generation = self.catalog_generation.begin();
        self.loading = true;
        self.status_message = None;
        self.retriever.spawn(provider, Request::Catalog, generation);
        Some(generation)
    }

    /// Route to the detail view and fetch the full record.
    pub fn open_detail(&mut self, id: RecipeId) -> Option<Generation> {
        let provider = self.provider.clone()?;
        let generation = self.detail_generation.begin();
        self.view = View::Detail(id);
        self.detail = Some(DetailState::Loading);
        self.retriever.spawn(provider, Request::Detail(id), generation);
        Some(generation)
    }

    pub fn back_to_list(&mut self) {
        self.view = View::List;
        self.detail = None;
        self.detail_generation.invalidate();
    }

    /// Apply every retrieval result that has arrived since the last frame.
    pub fn poll(&mut self) {
        for completed in self.retriever.poll() {
            self.apply(completed);
        }
    }

    /// Apply one retrieval result. Returns false when it was stale.
    pub fn apply(&mut self, completed: Completed) -> bool {
        let Completed {
            generation,
            payload,
        } = completed;
        match payload {
            Payload::Catalog(result) => {
                if !self.catalog_generation.is_current(generation) {
                    log::debug!("Discarding stale catalog result {generation:?}");
                    return false;
                }
                self.loading = false;
                match result {
                    Ok(catalog) => {
                        log::info!(
                            "Loaded {} recipes ({} excluded)",
                            catalog.len(),
                            catalog.excluded()
                        );
                        self.set_catalog(catalog);
                    }
                    Err(e) => {
                        log::error!("Catalog retrieval failed: {e}");
                        self.catalog = None;
                        self.color_map = ColorMap::default();
                        self.recompute();
                        self.status_message = Some(format!("Error: {e}"));
                    }
                }
            }
            Payload::Detail(id, result) => {
                if !self.detail_generation.is_current(generation) || self.view != View::Detail(id)
                {
                    log::debug!("Discarding stale detail result for {id} {generation:?}");
                    return false;
                }
                self.detail = Some(match result {
                    Ok(detail) => DetailState::Loaded(detail),
                    Err(e) => {
                        log::error!("Detail retrieval for {id} failed: {e}");
                        DetailState::Failed(e.to_string())
                    }
                });
            }
        }
        true
    }

    /// Ingest a newly retrieved catalog, rebuild colours and the derived view.
    pub fn set_catalog(&mut self, catalog: RecipeCatalog) {
        self.color_map = ColorMap::new(
            catalog
                .recipes()
                .iter()
                .flat_map(|r| r.diets.iter().map(String::as_str)),
        );
        self.catalog = Some(catalog);
        self.status_message = None;
        self.recompute();
    }

    /// Rebuild the filtered view and aggregates from catalog + criteria.
    pub fn recompute(&mut self) {
        self.output = match &self.catalog {
            Some(catalog) => pipeline::run(catalog, &self.criteria),
            None => PipelineOutput::default(),
        };
    }

    pub fn set_query(&mut self, query: &str) {
        if self.criteria.query != query {
            self.criteria.query = query.to_string();
            self.recompute();
        }
    }

    pub fn set_cuisine(&mut self, cuisine: &str) {
        if self.criteria.cuisine != cuisine {
            self.criteria.cuisine = cuisine.to_string();
            self.recompute();
        }
    }

    /// Recipes passing the current criteria, in catalog order.
    pub fn visible_recipes(&self) -> impl Iterator<Item = &Recipe> {
        let recipes = self.catalog.as_ref().map(|c| c.recipes()).unwrap_or(&[]);
        self.output
            .visible
            .iter()
            .filter_map(move |&i| recipes.get(i))
    }

    /// Fixed cuisine options followed by any extra cuisines in the catalog.
    pub fn cuisine_options(&self) -> Vec<String> {
        let mut options: Vec<String> = CUISINE_OPTIONS.iter().map(|c| c.to_string()).collect();
        if let Some(catalog) = &self.catalog {
            for cuisine in catalog.cuisines() {
                if !options.iter().any(|o| same_tag(o, cuisine)) {
                    options.push(cuisine.clone());
                }
            }
        }
        options
    }
}
