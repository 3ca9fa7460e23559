//! # CsimLib
//!
//! Csimlib models the hit/miss/eviction behaviour of a set-associative,
//! least-recently-used hardware cache.
//!
//! It provides the cache model itself plus a replayer which drives the model
//! from valgrind-style memory traces, and collects the hit/miss/eviction
//! summary that real hardware with the same geometry would produce
//!
//! The model is a plain value owned by its caller, so several independent
//! simulation runs can coexist (e.g. in parallel tests) without shared state

/// Contains the implementation of the cache: address decomposition and the
/// per-set recency-ordered line storage
pub mod cache;

/// Contains the cache geometry parameters and their validation
pub mod config;

/// Contains the reader used to consume trace files efficiently
pub mod io;

/// Contains the replayer which feeds parsed trace records into the cache
pub mod simulator;

/// Contains the summary counters exposed at the end of a run
pub mod stats;

/// Contains the parser for individual trace records
pub mod trace;


/// Contains utilities for running tests and benchmarks against the shipped
/// trace fixtures
pub mod util;
