#![allow(clippy::multiple_crate_versions)]

pub mod category;
pub mod counts;
pub mod normalize;
pub mod tally;
pub mod targets;

pub use category::Category;
pub use counts::TallyCounts;
pub use normalize::{normalize_into, normalize_token, raw_tokens};
pub use tally::tally_line;
pub use targets::TargetWordSet;
