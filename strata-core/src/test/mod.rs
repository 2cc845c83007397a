//! Property-based tests for the decomposition pipeline.
//!
//! Uses proptest to check the structural invariants over random graphs.
