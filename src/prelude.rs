//! To ease access to most frequently items
//!


pub use crate::error::ClusterCmpError;

pub use crate::contingency::*;
pub use crate::jaccard::*;

pub use crate::io::csv::*;
