//! Domain model types for two-echelon truck and drone routing.
//!
//! Provides the core abstractions: customers with per-vehicle service
//! times, physics configurations for trucks and the three drone energy
//! models, and the nested solution representation shared by the
//! neighborhood generator.

mod config;
mod customer;
mod solution;

pub use config::{
    DroneEnduranceConfig, DroneEnergyModel, DroneFlightProfile, DroneLinearConfig,
    DroneNonlinearConfig, RangeClass, SpeedClass, TruckConfig,
};
pub use customer::Customer;
pub use solution::Solution;
