//! Co-membership contingency counts over all unordered item pairs.
//!
//! Two clusterings of the same n items are compared pair by pair : a pair of distinct items
//! is co-clustered under a clustering if both items carry the same label.
//! The counts n11 (pairs co-clustered under both clusterings), n10 (under the first only) and
//! n01 (under the second only) determine the jaccard coefficient n11/(n11+n10+n01).
//! The pairs split under both clusterings (n00) do not contribute and are not counted.


use std::collections::HashMap;
use std::hash::Hash;

use rayon::prelude::*;

use crate::error::ClusterCmpError;


/// Counts of unordered item pairs by co-membership agreement between two clusterings.
/// Counters are u64 : n items generate n(n-1)/2 pairs which overflows u32 for n around 93000.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairCounts {
    /// pairs co-clustered under both clusterings
    pub n11 : u64,
    /// pairs co-clustered under the first clustering only
    pub n10 : u64,
    /// pairs co-clustered under the second clustering only
    pub n01 : u64,
}  // end of PairCounts


impl PairCounts {

    /// number of pairs co-clustered under at least one of the two clusterings
    pub fn nb_coclustered_pairs(&self) -> u64 {
        self.n11 + self.n10 + self.n01
    }

    /// derives the jaccard coefficient n11/(n11+n10+n01), in \[0., 1.\].
    /// When no pair is co-clustered under either clustering the ratio is 0/0 and the
    /// function fails with [ClusterCmpError::UndefinedSimilarity] instead of returning a NaN
    pub fn jaccard(&self) -> Result<f64, ClusterCmpError> {
        let denominator = self.nb_coclustered_pairs();
        if denominator == 0 {
            log::debug!("PairCounts::jaccard n11, n10, n01 all null, similarity undefined");
            return Err(ClusterCmpError::UndefinedSimilarity);
        }
        Ok(self.n11 as f64 / denominator as f64)
    } // end of jaccard

    // counters combine by addition, enumeration order is not observable
    fn merge(self, other : Self) -> Self {
        PairCounts{ n11 : self.n11 + other.n11, n10 : self.n10 + other.n10, n01 : self.n01 + other.n01}
    } // end of merge

}  // end of impl PairCounts


// the two vectors must assign a label to the same items. Checked before any pair enumeration
fn check_lengths<T>(membership1 : &[T], membership2 : &[T]) -> Result<usize, ClusterCmpError> {
    let n = membership1.len();
    if membership2.len() != n {
        log::error!("membership vectors have different sizes : {} and {}", n, membership2.len());
        return Err(ClusterCmpError::LengthMismatch{ nb_a : n, nb_b : membership2.len() });
    }
    Ok(n)
} // end of check_lengths


/// builds the counts by direct enumeration of every unordered pair (i,j) with j \< i.
/// This is the auditable reference : O(n²) time, no storage beyond the 3 counters
pub fn from_pairwise<T:Eq>(membership1 : &[T], membership2 : &[T]) -> Result<PairCounts, ClusterCmpError> {
    let n = check_lengths(membership1, membership2)?;
    let mut counts = PairCounts::default();
    for i in 0..n {
        for j in 0..i {
            let same_1 = membership1[i] == membership1[j];
            let same_2 = membership2[i] == membership2[j];
            if same_1 && same_2 {
                counts.n11 += 1;
            }
            else if same_1 {
                counts.n10 += 1;
            }
            else if same_2 {
                counts.n01 += 1;
            }
        }
    }
    log::debug!("from_pairwise n : {}, counts : {:?}", n, counts);
    Ok(counts)
} // end of from_pairwise


/// the same enumeration with rows i distributed on threads.
/// Each pair is still visited exactly once, each thread accumulates local counts which
/// are reduced by addition, so the result is identical to [from_pairwise]
pub fn from_pairwise_parallel<T:Eq + Sync>(membership1 : &[T], membership2 : &[T]) -> Result<PairCounts, ClusterCmpError> {
    let n = check_lengths(membership1, membership2)?;
    let counts = (0..n).into_par_iter().map(|i| {
        let mut local = PairCounts::default();
        for j in 0..i {
            let same_1 = membership1[i] == membership1[j];
            let same_2 = membership2[i] == membership2[j];
            if same_1 && same_2 {
                local.n11 += 1;
            }
            else if same_1 {
                local.n10 += 1;
            }
            else if same_2 {
                local.n01 += 1;
            }
        }
        local
    })
    .reduce(PairCounts::default, |a, b| a.merge(b));
    //
    log::debug!("from_pairwise_parallel n : {}, counts : {:?}", n, counts);
    Ok(counts)
} // end of from_pairwise_parallel


// number of co-clustered pairs of a clustering from its cluster sizes : sum of c(c-1)/2
fn coclustered_pairs<'a>(cluster_sizes : impl Iterator<Item = &'a u64>) -> u64 {
    cluster_sizes.fold(0u64, |acc, &c| acc + c * (c - 1) / 2)
} // end of coclustered_pairs


/// builds the counts in O(n) from label frequency histograms.
/// The number of pairs co-clustered under a clustering is Σ c(c-1)/2 over its cluster sizes.
/// n11 is that quantity for the joint clustering whose labels are the couples
/// (label under 1, label under 2), and the marginal quantities give n10 and n01 by difference.
/// Must give exactly the counts of [from_pairwise] (checked in tests on random labelings)
pub fn from_histograms<T:Eq + Hash>(membership1 : &[T], membership2 : &[T]) -> Result<PairCounts, ClusterCmpError> {
    let n = check_lengths(membership1, membership2)?;
    //
    let mut h_1 = HashMap::<&T, u64, ahash::RandomState>::default();
    let mut h_2 = HashMap::<&T, u64, ahash::RandomState>::default();
    let mut h_joint = HashMap::<(&T, &T), u64, ahash::RandomState>::default();
    for i in 0..n {
        *h_1.entry(&membership1[i]).or_insert(0) += 1;
        *h_2.entry(&membership2[i]).or_insert(0) += 1;
        *h_joint.entry((&membership1[i], &membership2[i])).or_insert(0) += 1;
    }
    // the joint partition refines both marginals so n11 cannot exceed either pair count
    let pairs_1 = coclustered_pairs(h_1.values());
    let pairs_2 = coclustered_pairs(h_2.values());
    let n11 = coclustered_pairs(h_joint.values());
    let counts = PairCounts{ n11, n10 : pairs_1 - n11, n01 : pairs_2 - n11 };
    log::debug!("from_histograms n : {}, nb clusters : {} and {}, counts : {:?}", n, h_1.len(), h_2.len(), counts);
    Ok(counts)
} // end of from_histograms



//========================================================================================


#[cfg(test)]
mod tests {

//    cargo test contingency  -- --nocapture
//    RUST_LOG=clustercmp::contingency=TRACE cargo test contingency -- --nocapture

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_pairwise_known_counts() {
        //
        log_init_test();
        //
        // pairs : (0,1) together under 1 only, (0,2) under 2 only, (0,3) and (1,2) under neither,
        // (1,3) under 2 only, (2,3) under 1 only
        let membership1 = vec![1i64, 1, 2, 2];
        let membership2 = vec![1i64, 2, 1, 2];
        let counts = from_pairwise(&membership1, &membership2).unwrap();
        log::debug!("counts : {:?}", counts);
        assert_eq!(counts, PairCounts{ n11 : 0, n10 : 2, n01 : 2});
        assert_eq!(counts.nb_coclustered_pairs(), 4);
        let j = counts.jaccard().unwrap();
        assert_eq!(j, 0.);
    } // end of test_pairwise_known_counts


    #[test]
    fn test_histograms_match_pairwise_known() {
        //
        log_init_test();
        //
        let membership1 = vec![1i64, 1, 2, 2];
        let membership2 = vec![1i64, 2, 1, 2];
        let by_pairs = from_pairwise(&membership1, &membership2).unwrap();
        let by_histo = from_histograms(&membership1, &membership2).unwrap();
        assert_eq!(by_pairs, by_histo);
    } // end of test_histograms_match_pairwise_known


    #[test]
    fn test_length_check_before_enumeration() {
        //
        log_init_test();
        //
        let membership1 = vec![1i64, 2, 3];
        let membership2 = vec![1i64, 2];
        let res = from_pairwise(&membership1, &membership2);
        assert_eq!(res, Err(ClusterCmpError::LengthMismatch{ nb_a : 3, nb_b : 2}));
        let res = from_histograms(&membership1, &membership2);
        assert_eq!(res, Err(ClusterCmpError::LengthMismatch{ nb_a : 3, nb_b : 2}));
        let res = from_pairwise_parallel(&membership1, &membership2);
        assert_eq!(res, Err(ClusterCmpError::LengthMismatch{ nb_a : 3, nb_b : 2}));
    } // end of test_length_check_before_enumeration


    #[test]
    fn test_null_denominator_is_an_error() {
        //
        log_init_test();
        //
        // all labels distinct in both clusterings, no pair co-clustered anywhere
        let membership1 = vec![1i64, 2, 3];
        let membership2 = vec![4i64, 5, 6];
        let counts = from_pairwise(&membership1, &membership2).unwrap();
        assert_eq!(counts.nb_coclustered_pairs(), 0);
        assert_eq!(counts.jaccard(), Err(ClusterCmpError::UndefinedSimilarity));
        // no item at all, no pair enumerated
        let empty : Vec<i64> = Vec::new();
        let counts = from_pairwise(&empty, &empty).unwrap();
        assert_eq!(counts.jaccard(), Err(ClusterCmpError::UndefinedSimilarity));
        // a single item has no pair either
        let counts = from_histograms(&vec![7i64], &vec![9i64]).unwrap();
        assert_eq!(counts.jaccard(), Err(ClusterCmpError::UndefinedSimilarity));
    } // end of test_null_denominator_is_an_error


    #[test]
    fn test_merge_is_addition() {
        //
        log_init_test();
        //
        let a = PairCounts{ n11 : 1, n10 : 2, n01 : 3};
        let b = PairCounts{ n11 : 10, n10 : 20, n01 : 30};
        assert_eq!(a.merge(b), PairCounts{ n11 : 11, n10 : 22, n01 : 33});
    } // end of test_merge_is_addition

}  // end of mod tests
