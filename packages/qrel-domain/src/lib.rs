pub mod edit_distance;
pub mod features;
pub mod formula;
pub mod gate;
pub mod item;
pub mod keywords;
pub mod normalize;
pub mod relevance;
pub mod scorers;
pub mod select;
pub mod weights;

pub use item::{Item, QuestionType};
pub use relevance::{ContentBreakdown, RelevanceBreakdown, score, score_breakdown};
pub use select::{HIGH_QUALITY_THRESHOLD, MIN_QUALITY_THRESHOLD, ScoredCandidate, select};
