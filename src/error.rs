//! Errors returned by the similarity computation.
//!
//! The computation fails typed, never through a diagnostic print : the caller
//! decides what an undefined similarity means for him.


use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterCmpError {
    /// the two membership vectors do not describe the same number of items
    #[error("membership vectors have different sizes : {nb_a} and {nb_b}")]
    LengthMismatch { nb_a : usize, nb_b : usize },

    /// no pair of items is co-clustered in either clustering, the ratio N11/(N11+N10+N01) is 0/0.
    /// Happens for less than 2 items or when both clusterings are all singletons
    #[error("jaccard similarity undefined : no item pair co-clustered in either clustering")]
    UndefinedSimilarity,
}
