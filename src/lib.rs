//! # d2d-routing
//!
//! Computational kernel for a two-echelon delivery route optimizer that
//! plans joint truck (technician) and drone routes serving customers from a
//! single depot.
//!
//! The crate provides the three algorithmic building blocks an outer search
//! loop composes into a full optimizer: a TSP solver for ordering stops, a
//! segment-swap neighborhood generator for perturbing multi-vehicle
//! solutions, and a timing evaluator that turns routes into arrival
//! timestamps and waiting-time penalties under physically distinct vehicle
//! models.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Customer, vehicle physics configs, Solution)
//! - [`distance`] — Symmetric Euclidean distance matrix
//! - [`context`] — Immutable per-problem configuration context
//! - [`tsp`] — Exact (Held-Karp) and genetic TSP solver
//! - [`neighborhood`] — Segment-swap move generation over full solutions
//! - [`evaluation`] — Arrival timestamps and waiting-time metrics
//! - [`error`] — Crate error type

pub mod context;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod neighborhood;
pub mod tsp;
