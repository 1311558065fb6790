use super::model::Recipe;

// ---------------------------------------------------------------------------
// DietCounts – diet tag → number of recipes listing it
// ---------------------------------------------------------------------------

/// Diet tag counts in order of first occurrence.
///
/// Tags are compared by exact spelling. Only tags seen at least once are
/// present, so no entry ever has a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DietCounts {
    entries: Vec<(String, usize)>,
}

impl DietCounts {
    fn increment(&mut self, diet: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == diet) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((diet.to_string(), 1)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, c)| (name.as_str(), *c))
    }

    /// The diet with the highest count. Ties go to the lexicographically
    /// smallest tag so the answer does not depend on input order.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.iter()
            .max_by(|(a_name, a_count), (b_name, b_count)| {
                a_count.cmp(b_count).then_with(|| b_name.cmp(a_name))
            })
    }
}

// ---------------------------------------------------------------------------
// StatsSummary
// ---------------------------------------------------------------------------

/// Scalar and categorical summary of a recipe collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_records: usize,
    /// Rounded mean cooking time; `None` when there are no records.
    pub average_ready_time: Option<u32>,
    pub diet_counts: DietCounts,
}

impl StatsSummary {
    /// Label for the "most common diet" card.
    pub fn most_common_diet(&self) -> &str {
        self.diet_counts
            .most_common()
            .map(|(name, _)| name)
            .unwrap_or("None")
    }

    /// Label for the "average cooking time" card.
    pub fn average_label(&self) -> String {
        match self.average_ready_time {
            Some(m) => format!("{m} minutes"),
            None => "N/A".to_string(),
        }
    }
}

/// Summarise any recipe collection (full catalog or a filtered view).
pub fn summarize<'a, I>(records: I) -> StatsSummary
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut total_records = 0usize;
    let mut total_minutes = 0u64;
    let mut diet_counts = DietCounts::default();

    for recipe in records {
        total_records += 1;
        total_minutes += u64::from(recipe.minutes());
        for diet in &recipe.diets {
            diet_counts.increment(diet);
        }
    }

    StatsSummary {
        total_records,
        average_ready_time: rounded_mean(total_minutes, total_records),
        diet_counts,
    }
}

/// Integer mean rounded half up; `None` for an empty collection.
fn rounded_mean(sum: u64, count: usize) -> Option<u32> {
    if count == 0 {
        return None;
    }
    let count = count as u64;
    let mean = (sum + count / 2) / count;
    Some(u32::try_from(mean).unwrap_or(u32::MAX))
}
