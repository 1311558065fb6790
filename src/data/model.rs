use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::RecordError;

// ---------------------------------------------------------------------------
// RecipeId – stable lookup key
// ---------------------------------------------------------------------------

/// Provider-assigned recipe identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Recipe – one record of the catalog
// ---------------------------------------------------------------------------

/// A validated catalog record. Only `id` and `title` are mandatory.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Absent when the provider did not report a cooking time.
    pub ready_in_minutes: Option<u32>,
    pub cuisines: Vec<String>,
    pub diets: Vec<String>,
    pub image: Option<String>,
    pub servings: Option<u32>,
    pub health_score: Option<f64>,
}

impl Recipe {
    /// Cooking time used for aggregation: absent counts as zero.
    pub fn minutes(&self) -> u32 {
        self.ready_in_minutes.unwrap_or(0)
    }

    /// Case-insensitive exact membership test on `cuisines`.
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| same_tag(c, cuisine))
    }
}

/// Tag equality used for cuisine matching and option de-duplication.
/// Full Unicode lower-casing, so "Éthiopian" equals "éTHIOPIAN".
pub fn same_tag(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

// ---------------------------------------------------------------------------
// RawRecipe – wire shape before validation
// ---------------------------------------------------------------------------

/// Record as the provider sends it. Only `id` and `title` are typed strictly;
/// the optional fields are kept as raw JSON and coerced during validation so
/// that a badly typed optional field degrades to absent/empty instead of
/// dropping the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipe {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub ready_in_minutes: Option<JsonValue>,
    pub cuisines: Option<JsonValue>,
    pub diets: Option<JsonValue>,
    pub image: Option<JsonValue>,
    pub servings: Option<JsonValue>,
    pub health_score: Option<JsonValue>,
}

impl TryFrom<RawRecipe> for Recipe {
    type Error = RecordError;

    fn try_from(raw: RawRecipe) -> Result<Self, Self::Error> {
        let id = raw.id.ok_or(RecordError::MissingId)?;
        let title = raw.title.ok_or(RecordError::MissingTitle { id })?;

        Ok(Recipe {
            id: RecipeId(id),
            title,
            ready_in_minutes: lenient_count(id, "readyInMinutes", raw.ready_in_minutes),
            cuisines: lenient_tags(id, "cuisines", raw.cuisines),
            diets: lenient_tags(id, "diets", raw.diets),
            image: lenient_string(id, "image", raw.image),
            servings: lenient_count(id, "servings", raw.servings),
            health_score: match raw.health_score {
                None => None,
                Some(v) => v.as_f64().or_else(|| {
                    log::warn!("Recipe #{id}: healthScore {v} is not a number, ignored");
                    None
                }),
            },
        })
    }
}

/// Non-negative whole number; whole-valued floats such as `20.0` are accepted.
fn lenient_count(id: u64, field: &str, value: Option<JsonValue>) -> Option<u32> {
    let value = value?;
    let count = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)
    });
    match count.and_then(|c| u32::try_from(c).ok()) {
        Some(c) => Some(c),
        None => {
            log::warn!("Recipe #{id}: {field} {value} is not a valid count, treating as absent");
            None
        }
    }
}

/// List of string tags. Non-string entries are dropped; anything other than
/// an array becomes an empty list.
fn lenient_tags(id: u64, field: &str, value: Option<JsonValue>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(JsonValue::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                JsonValue::String(tag) => Some(tag),
                other => {
                    log::warn!("Recipe #{id}: dropping non-string {field} entry {other}");
                    None
                }
            })
            .collect(),
        Some(other) => {
            log::warn!("Recipe #{id}: {field} {other} is not a list, treating as empty");
            Vec::new()
        }
    }
}

fn lenient_string(id: u64, field: &str, value: Option<JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) => Some(s),
        other => {
            log::warn!("Recipe #{id}: {field} {other} is not a string, ignored");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// RecipeDetail – full record for the detail view
// ---------------------------------------------------------------------------

/// One entry of `extendedIngredients`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub original: String,
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

/// Full recipe as returned by an id lookup.
///
/// `summary` and `instructions` are provider HTML and must go through
/// [`crate::sanitize::html_to_text`] before display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub health_score: Option<f64>,
    pub source_url: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
}

impl From<&Recipe> for RecipeDetail {
    fn from(r: &Recipe) -> Self {
        RecipeDetail {
            id: r.id.0,
            title: r.title.clone(),
            image: r.image.clone(),
            ready_in_minutes: r.ready_in_minutes,
            servings: r.servings,
            health_score: r.health_score,
            cuisines: r.cuisines.clone(),
            diets: r.diets.clone(),
            ..Default::default()
        }
    }
}

impl RecipeDetail {
    /// Labels of the boolean diet flags that are set.
    pub fn diet_flags(&self) -> Vec<&'static str> {
        [
            (self.vegetarian, "Vegetarian"),
            (self.vegan, "Vegan"),
            (self.gluten_free, "Gluten free"),
            (self.dairy_free, "Dairy free"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// RecipeCatalog – the record store
// ---------------------------------------------------------------------------

/// The retrieved catalog with a pre-computed cuisine index.
/// Immutable once built; a new retrieval builds a new catalog.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    /// Every cuisine spelling seen in the catalog, sorted.
    cuisines: BTreeSet<String>,
    /// Number of records dropped during validation.
    excluded: usize,
}

impl RecipeCatalog {
    /// Build the cuisine index from validated recipes.
    pub fn from_recipes(recipes: Vec<Recipe>, excluded: usize) -> Self {
        let cuisines = recipes
            .iter()
            .flat_map(|r| r.cuisines.iter().cloned())
            .collect();
        RecipeCatalog {
            recipes,
            cuisines,
            excluded,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn cuisines(&self) -> &BTreeSet<String> {
        &self.cuisines
    }

    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes at all.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(id: Option<u64>, title: Option<&str>) -> RawRecipe {
        RawRecipe {
            id,
            title: title.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let recipe = Recipe::try_from(raw(Some(7), Some("Toast"))).unwrap();
        assert_eq!(recipe.id, RecipeId(7));
        assert_eq!(recipe.ready_in_minutes, None);
        assert_eq!(recipe.minutes(), 0);
        assert!(recipe.cuisines.is_empty());
        assert!(recipe.diets.is_empty());
    }

    #[test]
    fn missing_id_or_title_is_rejected() {
        assert!(matches!(
            Recipe::try_from(raw(None, Some("Toast"))),
            Err(RecordError::MissingId)
        ));
        assert!(matches!(
            Recipe::try_from(raw(Some(3), None)),
            Err(RecordError::MissingTitle { id: 3 })
        ));
    }

    #[test]
    fn blank_title_is_kept_as_given() {
        let recipe = Recipe::try_from(raw(Some(3), Some("   "))).unwrap();
        assert_eq!(recipe.title, "   ");
    }

    #[test]
    fn negative_minutes_are_treated_as_absent() {
        let mut r = raw(Some(1), Some("Soup"));
        r.ready_in_minutes = Some(json!(-5));
        let recipe = Recipe::try_from(r).unwrap();
        assert_eq!(recipe.ready_in_minutes, None);
    }

    #[test]
    fn badly_typed_optional_fields_degrade_instead_of_failing() {
        let mut r = raw(Some(1), Some("Soup"));
        r.ready_in_minutes = Some(json!(20.0));
        r.cuisines = Some(json!("Italian"));
        r.diets = Some(json!(["vegan", null, 3]));
        r.image = Some(json!(false));
        r.servings = Some(json!(2.5));
        r.health_score = Some(json!("high"));
        let recipe = Recipe::try_from(r).unwrap();
        assert_eq!(recipe.ready_in_minutes, Some(20));
        assert!(recipe.cuisines.is_empty());
        assert_eq!(recipe.diets, vec!["vegan"]);
        assert_eq!(recipe.image, None);
        assert_eq!(recipe.servings, None);
        assert_eq!(recipe.health_score, None);

        let mut r = raw(Some(2), Some("Stew"));
        r.ready_in_minutes = Some(json!("45"));
        assert_eq!(Recipe::try_from(r).unwrap().ready_in_minutes, None);
    }

    #[test]
    fn cuisine_membership_ignores_case() {
        let mut r = raw(Some(1), Some("Pasta"));
        r.cuisines = Some(json!(["Italian", "European"]));
        let recipe = Recipe::try_from(r).unwrap();
        assert!(recipe.has_cuisine("italian"));
        assert!(recipe.has_cuisine("EUROPEAN"));
        assert!(!recipe.has_cuisine("ital"));
    }

    #[test]
    fn tag_comparison_folds_non_ascii_case() {
        assert!(same_tag("Éthiopian", "éTHIOPIAN"));
        assert!(same_tag("ΕΛΛΗΝΙΚΉ", "ελληνική"));
        assert!(!same_tag("Éthiopian", "Ethiopian"));
    }

    #[test]
    fn catalog_indexes_cuisines() {
        let mut a = raw(Some(1), Some("A"));
        a.cuisines = Some(json!(["Thai"]));
        let mut b = raw(Some(2), Some("B"));
        b.cuisines = Some(json!(["Indian", "Thai"]));
        let catalog = RecipeCatalog::from_recipes(
            vec![a.try_into().unwrap(), b.try_into().unwrap()],
            1,
        );
        let cuisines: Vec<_> = catalog.cuisines().iter().cloned().collect();
        assert_eq!(cuisines, vec!["Indian", "Thai"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.excluded(), 1);
        assert_eq!(catalog.get(RecipeId(2)).map(|r| r.title.as_str()), Some("B"));
    }

    #[test]
    fn summary_record_promotes_to_detail_with_image() {
        let mut r = raw(Some(9), Some("Curry"));
        r.image = Some(json!("https://img.example.com/9.jpg"));
        r.diets = Some(json!(["vegan"]));
        let recipe = Recipe::try_from(r).unwrap();
        let detail = RecipeDetail::from(&recipe);
        assert_eq!(detail.id, 9);
        assert_eq!(detail.image.as_deref(), Some("https://img.example.com/9.jpg"));
        assert_eq!(detail.diets, vec!["vegan"]);
        assert!(detail.summary.is_none());
    }

    #[test]
    fn detail_lists_set_diet_flags() {
        let detail = RecipeDetail {
            vegan: true,
            gluten_free: true,
            ..Default::default()
        };
        assert_eq!(detail.diet_flags(), vec!["Vegan", "Gluten free"]);
    }
}
