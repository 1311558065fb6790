use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::RecordError;

use super::model::{RawRecipe, Recipe, RecipeCatalog, RecipeDetail, RecipeId};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a recipe catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – a `complexSearch` response `{ "results": [...] }` or a bare array
/// * `.csv`  – one recipe per row; `cuisines` and `diets` semicolon-separated
pub fn load_file(path: &Path) -> Result<RecipeCatalog> {
    match extension(path).as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json_catalog(&text)
        }
        "csv" => {
            let reader = csv::Reader::from_path(path).context("opening CSV")?;
            parse_csv_catalog(reader)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Look up the full record for `id` in the same source. `Ok(None)` when the
/// source has no such recipe. A record that exists but cannot be read as a
/// detail fails with a [`RecordError`] inside the `anyhow::Error`; read and
/// parse failures of the source itself carry no such cause.
pub fn load_detail(path: &Path, id: RecipeId) -> Result<Option<RecipeDetail>> {
    match extension(path).as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json_detail(&text, id)
        }
        // CSV rows carry no detail fields; promote the summary record.
        "csv" => Ok(load_file(path)?.get(id).map(RecipeDetail::from)),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// Validation shared by all formats
// ---------------------------------------------------------------------------

/// Accumulates validated recipes; malformed or duplicate records are logged
/// and counted rather than failing the whole load.
#[derive(Default)]
struct Ingest {
    recipes: Vec<Recipe>,
    seen: BTreeSet<RecipeId>,
    excluded: usize,
}

impl Ingest {
    fn push(&mut self, row: usize, raw: std::result::Result<RawRecipe, RecordError>) {
        match raw.and_then(Recipe::try_from) {
            Ok(recipe) if !self.seen.insert(recipe.id) => {
                log::warn!("Row {row}: duplicate recipe {}, skipped", recipe.id);
                self.excluded += 1;
            }
            Ok(recipe) => self.recipes.push(recipe),
            Err(e) => {
                log::warn!("Row {row}: {e}, skipped");
                self.excluded += 1;
            }
        }
    }

    fn finish(self) -> RecipeCatalog {
        log::info!(
            "Ingested {} recipes ({} excluded)",
            self.recipes.len(),
            self.excluded
        );
        RecipeCatalog::from_recipes(self.recipes, self.excluded)
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (the shape of a `complexSearch` response with
/// `addRecipeInformation=true`):
///
/// ```json
/// {
///   "results": [
///     {
///       "id": 715538,
///       "title": "Bruschetta",
///       "readyInMinutes": 35,
///       "cuisines": ["Italian"],
///       "diets": ["vegetarian"]
///     }
///   ]
/// }
/// ```
pub fn parse_json_catalog(text: &str) -> Result<RecipeCatalog> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = json_records(&root)?;

    let mut ingest = Ingest::default();
    for (i, rec) in records.iter().enumerate() {
        let raw = RawRecipe::deserialize(rec).map_err(|e| RecordError::Shape(e.to_string()));
        ingest.push(i, raw);
    }
    Ok(ingest.finish())
}

fn parse_json_detail(text: &str, id: RecipeId) -> Result<Option<RecipeDetail>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let Some(rec) = json_records(&root)?
        .iter()
        .find(|rec| rec.get("id").and_then(JsonValue::as_u64) == Some(id.0))
    else {
        return Ok(None);
    };
    let detail = RecipeDetail::deserialize(rec).map_err(|e| RecordError::Shape(e.to_string()))?;
    Ok(Some(detail))
}

fn json_records(root: &JsonValue) -> Result<&Vec<JsonValue>> {
    match root {
        JsonValue::Array(records) => Ok(records),
        JsonValue::Object(obj) => obj
            .get("results")
            .and_then(JsonValue::as_array)
            .context("Expected a 'results' array"),
        _ => bail!("Expected top-level JSON array or object"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with camelCase column names matching the JSON
/// fields. `cuisines` and `diets` hold semicolon-separated tags:
///   `"Italian;European"`, `"vegetarian;lacto ovo vegetarian"`
///
/// Unparseable numeric cells in optional columns read as empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    id: Option<u64>,
    title: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    ready_in_minutes: Option<i64>,
    cuisines: Option<String>,
    diets: Option<String>,
    image: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    servings: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    health_score: Option<f64>,
}

impl From<CsvRow> for RawRecipe {
    fn from(row: CsvRow) -> Self {
        RawRecipe {
            id: row.id,
            title: row.title,
            ready_in_minutes: row.ready_in_minutes.map(JsonValue::from),
            cuisines: row.cuisines.as_deref().map(|s| JsonValue::from(split_tags(s))),
            diets: row.diets.as_deref().map(|s| JsonValue::from(split_tags(s))),
            image: row.image.map(JsonValue::from),
            servings: row.servings.map(JsonValue::from),
            health_score: row.health_score.map(JsonValue::from),
        }
    }
}

fn split_tags(s: &str) -> Vec<String> {
    s.split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_csv_catalog<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<RecipeCatalog> {
    let headers = reader.headers().context("reading CSV headers")?;
    if !headers.iter().any(|h| h == "title") {
        bail!("CSV missing 'title' column");
    }

    let mut ingest = Ingest::default();
    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let raw = result
            .map(RawRecipe::from)
            .map_err(|e| RecordError::Shape(e.to_string()));
        ingest.push(row_no, raw);
    }
    Ok(ingest.finish())
}
