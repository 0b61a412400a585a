//! salvage-rules
//!
//! The canonical limb-salvage rules. Pure functions only, with no I/O or shared
//! state. Every weight table and threshold lives in [`tables`] so that the
//! display layer and the scorer read the same numbers.

pub mod categories;
pub mod categorizer;
pub mod classification;
pub mod composite;
pub mod engine;
pub mod monitoring;
pub mod recommendations;
pub mod subscores;
pub mod tables;

use salvage_core::models::input::AssessmentInput;
use salvage_core::models::result::CategoryScore;

pub use engine::{compute_assessment, compute_from_json};

/// Version of the weight tables in this crate. Bump whenever any table,
/// threshold or rule text changes; stored results carry the version that
/// produced them.
pub const RULE_VERSION: &str = "1.0.0";

/// One summand of the composite risk score.
pub trait ScoreCategory: Send + Sync {
    /// Stable identifier (e.g., "renal", "sepsis").
    fn id(&self) -> &str;

    /// Display name used in the score breakdown.
    fn name(&self) -> &str;

    /// Upper bound of [`ScoreCategory::score`].
    fn max_score(&self) -> u32;

    /// Points before clamping.
    fn raw_score(&self, input: &AssessmentInput) -> u32;

    /// Points clamped to `[0, max_score]`.
    fn score(&self, input: &AssessmentInput) -> u32 {
        self.raw_score(input).min(self.max_score())
    }

    fn breakdown_entry(&self, input: &AssessmentInput) -> CategoryScore {
        CategoryScore {
            category: self.name().to_string(),
            score: self.score(input),
            max_score: self.max_score(),
        }
    }
}

/// All score categories, in breakdown order.
pub fn all_categories() -> Vec<Box<dyn ScoreCategory>> {
    vec![
        Box::new(categories::demographics::DemographicsHistory),
        Box::new(categories::wagner::WagnerContribution),
        Box::new(categories::wifi::WifiContribution),
        Box::new(categories::comorbidities::ComorbidityBurden),
        Box::new(categories::renal::RenalFunction),
        Box::new(categories::sepsis::SepsisIndicators),
        Box::new(categories::arterial::ArterialStatus),
        Box::new(categories::osteomyelitis::OsteomyelitisContribution),
    ]
}

/// Look up a score category by ID.
pub fn get_category(id: &str) -> Option<Box<dyn ScoreCategory>> {
    all_categories().into_iter().find(|c| c.id() == id)
}
