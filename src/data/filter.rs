use super::model::Recipe;

// ---------------------------------------------------------------------------
// Filter predicate: title search + cuisine
// ---------------------------------------------------------------------------

/// Active filter state. An empty field means "no constraint" on that
/// dimension; both constraints must hold for a recipe to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub cuisine: String,
}

impl FilterCriteria {
    /// True when neither dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.cuisine.is_empty()
    }

    /// Whether a single recipe passes all active constraints.
    ///
    /// * non-empty `query` → lower-cased title must contain the lower-cased query
    /// * non-empty `cuisine` → recipe must list that cuisine (any case);
    ///   a recipe without cuisines never passes
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.query.is_empty()
            && !recipe
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase())
        {
            return false;
        }
        if !self.cuisine.is_empty() && !recipe.has_cuisine(&self.cuisine) {
            return false;
        }
        true
    }
}

/// Stable filter: returns borrowed recipes in input order.
pub fn filter<'a>(records: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    if criteria.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Positions in `records` of the recipes in `view`.
///
/// `view` must be an in-order sub-sequence of `records` borrowed from it, as
/// [`filter`] produces; elements are matched by identity, not by value.
pub fn view_indices(records: &[Recipe], view: &[&Recipe]) -> Vec<usize> {
    let mut pending = view.iter().peekable();
    records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| {
            let hit = pending.next_if(|v| std::ptr::eq(**v, r)).is_some();
            hit.then_some(i)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RecipeId;

    impl FilterCriteria {
        pub(crate) fn new(query: &str, cuisine: &str) -> Self {
            Self {
                query: query.to_string(),
                cuisine: cuisine.to_string(),
            }
        }
    }

    fn recipe(id: u64, title: &str, cuisines: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId(id),
            title: title.to_string(),
            ready_in_minutes: None,
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
            diets: Vec::new(),
            image: None,
            servings: None,
            health_score: None,
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe(1, "Pasta Bake", &["Italian"]),
            recipe(2, "Beef Tacos", &["Mexican"]),
            recipe(3, "Pasta Primavera", &["Italian", "Mediterranean"]),
            recipe(4, "Plain Toast", &[]),
        ]
    }

    fn ids(view: &[&Recipe]) -> Vec<u64> {
        view.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let records = sample();
        let view = filter(&records, &FilterCriteria::default());
        assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let view = filter(&[], &FilterCriteria::new("pasta", "Italian"));
        assert!(view.is_empty());
    }

    #[test]
    fn cuisine_match_ignores_case() {
        let records = vec![
            recipe(1, "Pasta Bake", &["Italian"]),
            recipe(2, "Beef Tacos", &["Mexican"]),
        ];
        let view = filter(&records, &FilterCriteria::new("", "italian"));
        assert_eq!(ids(&view), vec![1]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let records = sample();
        assert_eq!(ids(&filter(&records, &FilterCriteria::new("PASTA", ""))), vec![1, 3]);
        assert_eq!(ids(&filter(&records, &FilterCriteria::new("ta b", ""))), vec![1]);
        assert!(filter(&records, &FilterCriteria::new("pasta tacos", "")).is_empty());
    }

    #[test]
    fn cuisine_requires_exact_tag() {
        let records = sample();
        assert!(filter(&records, &FilterCriteria::new("", "Ital")).is_empty());
    }

    #[test]
    fn recipes_without_cuisines_fail_cuisine_constraint() {
        let records = sample();
        let view = filter(&records, &FilterCriteria::new("toast", "Italian"));
        assert!(view.is_empty());
        let view = filter(&records, &FilterCriteria::new("toast", ""));
        assert_eq!(ids(&view), vec![4]);
    }

    #[test]
    fn constraints_are_conjunctive() {
        let records = sample();
        let view = filter(&records, &FilterCriteria::new("primavera", "mediterranean"));
        assert_eq!(ids(&view), vec![3]);
        let view = filter(&records, &FilterCriteria::new("tacos", "italian"));
        assert!(view.is_empty());
    }

    #[test]
    fn output_is_subset_and_idempotent() {
        let records = sample();
        let criteria = FilterCriteria::new("a", "italian");
        let once = filter(&records, &criteria);
        for r in &once {
            assert!(records.iter().any(|orig| std::ptr::eq(orig, *r)));
        }
        let owned: Vec<Recipe> = once.iter().map(|r| (*r).clone()).collect();
        let twice = filter(&owned, &criteria);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn indices_follow_input_order() {
        let records = sample();
        let view = filter(&records, &FilterCriteria::new("", "ITALIAN"));
        assert_eq!(view_indices(&records, &view), vec![0, 2]);
        let view = filter(&records, &FilterCriteria::default());
        assert_eq!(view_indices(&records, &view), vec![0, 1, 2, 3]);
        assert!(view_indices(&records, &[]).is_empty());
    }

    #[test]
    fn indices_match_by_identity_not_value() {
        let records = vec![recipe(1, "Soup", &[]), recipe(1, "Soup", &[])];
        let view = vec![&records[1]];
        assert_eq!(view_indices(&records, &view), vec![1]);
    }
}
