use super::chart::{ChartData, bucketize};
use super::filter::{FilterCriteria, filter, view_indices};
use super::model::RecipeCatalog;
use super::stats::{StatsSummary, summarize};

/// Everything the presentation layer reads, rebuilt from scratch on each run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Catalog positions of recipes passing the criteria, in catalog order.
    pub visible: Vec<usize>,
    /// Summary of the visible recipes.
    pub stats: StatsSummary,
    /// Chart series for the visible recipes.
    pub chart: ChartData,
    /// Summary of the whole catalog, independent of the criteria.
    pub catalog_stats: StatsSummary,
}

/// Run filter → {summarize, bucketize} over a catalog.
pub fn run(catalog: &RecipeCatalog, criteria: &FilterCriteria) -> PipelineOutput {
    let recipes = catalog.recipes();
    let view = filter(recipes, criteria);

    let output = PipelineOutput {
        visible: view_indices(recipes, &view),
        stats: summarize(view.iter().copied()),
        chart: bucketize(view.iter().copied()),
        catalog_stats: summarize(recipes),
    };
    log::debug!(
        "Recomputed view: {}/{} recipes visible for {criteria:?}",
        output.visible.len(),
        catalog.len()
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Recipe, RecipeId};

    fn recipe(id: u64, title: &str, minutes: u32, cuisines: &[&str], diets: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId(id),
            title: title.to_string(),
            ready_in_minutes: Some(minutes),
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
            diets: diets.iter().map(|d| d.to_string()).collect(),
            image: None,
            servings: None,
            health_score: None,
        }
    }

    fn catalog() -> RecipeCatalog {
        RecipeCatalog::from_recipes(
            vec![
                recipe(1, "Pasta Bake", 20, &["Italian"], &["vegetarian"]),
                recipe(2, "Beef Tacos", 35, &["Mexican"], &[]),
                recipe(3, "Risotto", 50, &["Italian"], &["vegetarian", "gluten free"]),
            ],
            0,
        )
    }

    #[test]
    fn aggregates_follow_the_filtered_view() {
        let catalog = catalog();
        let out = run(&catalog, &FilterCriteria::new("", "italian"));
        assert_eq!(out.visible, vec![0, 2]);
        assert_eq!(out.stats.total_records, 2);
        assert_eq!(out.stats.average_ready_time, Some(35));
        assert_eq!(out.stats.diet_counts.get("vegetarian"), Some(2));
        assert_eq!(out.chart.time_histogram[1], ("16-30 mins", 1));
        assert_eq!(out.chart.time_histogram[3], ("46-60 mins", 1));
        assert_eq!(out.catalog_stats.total_records, 3);
    }

    #[test]
    fn no_match_yields_empty_but_well_formed_output() {
        let catalog = catalog();
        let out = run(&catalog, &FilterCriteria::new("sushi", ""));
        assert!(out.visible.is_empty());
        assert_eq!(out.stats.total_records, 0);
        assert_eq!(out.stats.average_ready_time, None);
        assert_eq!(out.chart.time_histogram.len(), 5);
        assert_eq!(out.catalog_stats.total_records, 3);
    }

    #[test]
    fn same_inputs_give_same_output() {
        let catalog = catalog();
        let criteria = FilterCriteria::new("a", "");
        assert_eq!(run(&catalog, &criteria), run(&catalog, &criteria));
    }

    #[test]
    fn empty_catalog() {
        let out = run(&RecipeCatalog::default(), &FilterCriteria::default());
        assert_eq!(out, PipelineOutput::default());
    }
}
