//! cribbage Discard - Discard option enumeration and ranking
//!
//! This crate takes an initial hand, splits it into every kept/discarded
//! partition, and uses the engine to build exhaustive hand and crib score
//! distributions for each one. The resulting evaluations can then be ranked
//! by any scalar key.

pub mod config;
pub mod error;
pub mod evaluate;
pub mod partition;
pub mod ranking;

pub use config::{EvaluationConfig, DEFAULT_DISCARD_SIZE};
pub use error::EvaluationError;
pub use evaluate::{evaluate, evaluate_with, DiscardEvaluation};
pub use partition::{partitions, DiscardOption};
pub use ranking::{sort_by_key, top_with_ties, RankingKey};
