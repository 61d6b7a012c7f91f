//! Jaccard similarity between two clusterings of the same items.
//!
//! Each clustering is a membership vector giving one cluster label per item.
//! The similarity is the ratio of item pairs co-clustered under both clusterings
//! to item pairs co-clustered under at least one of them,
//! see Ben-Hur, Elisseeff, Guyon *A stability based method for discovering structure in clustered data*
//! Pacific Symposium on Biocomputing 2002.
//!
//! The computation is pure and symmetric in its two arguments. It fails typed on
//! membership vectors of different sizes and on degenerate inputs where no pair is
//! co-clustered anywhere (less than 2 items, or two all-singleton clusterings).


use std::hash::Hash;

use crate::contingency::{from_histograms, from_pairwise, from_pairwise_parallel};
use crate::error::ClusterCmpError;


/// jaccard similarity between the two clusterings described by the membership vectors.
/// Labels are opaque, only label equality inside one vector matters.
/// Runs in O(n) via the histogram derivation of the contingency counts
pub fn jaccard_similarity<T:Eq + Hash>(membership1 : &[T], membership2 : &[T]) -> Result<f64, ClusterCmpError> {
    from_histograms(membership1, membership2)?.jaccard()
} // end of jaccard_similarity


/// same result as [jaccard_similarity] by the O(n²) enumeration of all unordered pairs.
/// Needs only label equality, no hashing
pub fn jaccard_similarity_pairwise<T:Eq>(membership1 : &[T], membership2 : &[T]) -> Result<f64, ClusterCmpError> {
    from_pairwise(membership1, membership2)?.jaccard()
} // end of jaccard_similarity_pairwise


/// the pair enumeration distributed on threads, for large n when the exact
/// pairwise evaluation is wanted. Same result as [jaccard_similarity_pairwise]
pub fn jaccard_similarity_parallel<T:Eq + Sync>(membership1 : &[T], membership2 : &[T]) -> Result<f64, ClusterCmpError> {
    from_pairwise_parallel(membership1, membership2)?.jaccard()
} // end of jaccard_similarity_parallel



//========================================================================================


// end of mod tests
