/// Data layer: core types, retrieval, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .json / .csv export
///        │
///        ▼
///   ┌──────────────┐
///   │ provider      │  RecipeProvider → loader (worker thread, generation-tagged)
///   └──────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ RecipeCatalog │  Vec<Recipe>, cuisine index
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  title query + cuisine → visible indices
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌─────────┐   ┌─────────┐
///   │  stats   │   │  chart   │  summary / histogram + diet distribution
///   └─────────┘   └─────────┘
/// ```

pub mod chart;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod retrieval;
pub mod stats;
