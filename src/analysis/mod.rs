//! Analysis module for input arrays
//!
//! This module provides tools that look at an array before it is sorted:
//! - Shape classification (sorted, reverse, nearly sorted, random)
//! - A fixed recommendation table by size, profile and priority

pub mod classifier;
pub mod recommend;

pub use classifier::{
    classify, Classification, Classifier, ClassifierConfig, DisplacementMetric,
};
pub use recommend::{recommend, DataProfile, Priority, Recommendation};
