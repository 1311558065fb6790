use std::fmt;

use super::model::Recipe;
use super::stats::summarize;

// ---------------------------------------------------------------------------
// TimeBucket – fixed cooking-time ranges
// ---------------------------------------------------------------------------

/// One of the five histogram bins. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeBucket {
    UpTo15,
    UpTo30,
    UpTo45,
    UpTo60,
    Over60,
}

impl TimeBucket {
    /// All buckets in display order.
    pub const ALL: [TimeBucket; 5] = [
        TimeBucket::UpTo15,
        TimeBucket::UpTo30,
        TimeBucket::UpTo45,
        TimeBucket::UpTo60,
        TimeBucket::Over60,
    ];

    pub fn for_minutes(minutes: u32) -> Self {
        match minutes {
            0..=15 => TimeBucket::UpTo15,
            16..=30 => TimeBucket::UpTo30,
            31..=45 => TimeBucket::UpTo45,
            46..=60 => TimeBucket::UpTo60,
            _ => TimeBucket::Over60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeBucket::UpTo15 => "0-15 mins",
            TimeBucket::UpTo30 => "16-30 mins",
            TimeBucket::UpTo45 => "31-45 mins",
            TimeBucket::UpTo60 => "46-60 mins",
            TimeBucket::Over60 => "60+ mins",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ChartData
// ---------------------------------------------------------------------------

/// Chart-ready series derived from a recipe collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    /// Diet tag counts, in order of first occurrence.
    pub category_distribution: Vec<(String, usize)>,
    /// Always exactly five entries, in [`TimeBucket::ALL`] order.
    pub time_histogram: Vec<(&'static str, usize)>,
}

impl Default for ChartData {
    fn default() -> Self {
        bucketize(std::iter::empty::<&Recipe>())
    }
}

impl ChartData {
    /// Largest bar in either series; used to size plot axes.
    pub fn max_count(&self) -> usize {
        self.category_distribution
            .iter()
            .map(|(_, c)| *c)
            .chain(self.time_histogram.iter().map(|(_, c)| *c))
            .max()
            .unwrap_or(0)
    }
}

/// Count recipes per cooking-time bucket (absent time counts as zero).
pub fn time_histogram<'a, I>(records: I) -> [usize; 5]
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut counts = [0usize; 5];
    for recipe in records {
        counts[TimeBucket::for_minutes(recipe.minutes()).index()] += 1;
    }
    counts
}

/// Build both chart series from a recipe collection.
pub fn bucketize<'a, I>(records: I) -> ChartData
where
    I: IntoIterator<Item = &'a Recipe>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();
    let counts = time_histogram(records.clone());
    let diets = summarize(records).diet_counts;

    ChartData {
        category_distribution: diets.iter().map(|(name, c)| (name.to_string(), c)).collect(),
        time_histogram: TimeBucket::ALL
            .iter()
            .map(|b| (b.label(), counts[b.index()]))
            .collect(),
    }
}
