//! Loading membership vectors from csv files.
//! The similarity computation itself does no io, this module serves callers
//! such as the jaccard executable.

pub mod csv;
