use salvage_core::models::input::AssessmentInput;
use salvage_core::models::result::CategoryScore;

use crate::all_categories;

/// Per-category scores, in breakdown order, each clamped to its maximum.
pub fn score_breakdown(input: &AssessmentInput) -> Vec<CategoryScore> {
    all_categories()
        .iter()
        .map(|category| category.breakdown_entry(input))
        .collect()
}

/// Sum of a breakdown. Every category appears exactly once.
pub fn total_score(breakdown: &[CategoryScore]) -> u32 {
    breakdown.iter().map(|entry| entry.score).sum()
}
