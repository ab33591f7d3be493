//! Segment-swap neighborhood generation over full solutions.
//!
//! - [`swap`] — Union of all segment-swap move families
//! - [`truck_truck_swap`] — Exchanges within and between technician routes
//! - [`drone_drone_swap`] — Exchanges within and between drone trips
//! - [`truck_drone_swap`] — Cross-echelon exchange (unimplemented stub)

mod swap;

pub use swap::{drone_drone_swap, swap, truck_drone_swap, truck_truck_swap};
