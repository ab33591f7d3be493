//! Traveling-salesman solver used to order stops within a route.
//!
//! [`solve`] dispatches on instance size: closed-form enumeration for up to
//! three cities, an exact Held-Karp dynamic program up to
//! [`HELD_KARP_LIMIT`] cities, and a generational genetic search beyond
//! that. The returned tour is always rotated to begin at a caller-chosen
//! anchor city.

mod exact;
mod genetic;
mod solver;

pub use solver::{rotate_to_anchor, solve, solve_with_rng, HELD_KARP_LIMIT};
