//! Episode pipeline abstractions
//!
//! This module provides:
//! - An episode loop that trains a learner and then evaluates it frozen
//! - Observers that record what happens along the way

pub mod episodes;
pub mod observers;

pub use episodes::{EpisodeConfig, EpisodeResult, EpisodeRunner};
pub use observers::{
    EpisodeRecord, JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver,
};

pub use crate::ports::{Environment, Learner, Observer};
