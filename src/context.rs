//! Immutable per-problem configuration context.

use crate::distance::DistanceMatrix;
use crate::error::RoutingResult;
use crate::models::{
    Customer, DroneEnduranceConfig, DroneLinearConfig, DroneNonlinearConfig, TruckConfig,
};

/// The read-only configuration shared by every solver and evaluator call.
///
/// Bundles the customer set, the distance matrix derived from it, the truck
/// physics, and whichever drone energy models the problem instance defines.
/// Constructing the context up front makes initialization order a
/// type-level precondition: a call cannot observe a half-loaded
/// configuration, and concurrent readers need no synchronization.
///
/// # Examples
///
/// ```
/// use d2d_routing::context::RoutingContext;
/// use d2d_routing::models::{Customer, TruckConfig};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(100.0, 0.0, 5.0, true, 30.0, 60.0),
/// ];
/// let truck = TruckConfig::new(15.0, 1.0, vec![1.0]).unwrap();
/// let ctx = RoutingContext::new(customers, truck).unwrap();
/// assert_eq!(ctx.num_customers(), 2);
/// assert!((ctx.distances().get(0, 1) - 100.0).abs() < 1e-10);
/// assert!(ctx.linear_drone().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RoutingContext {
    customers: Vec<Customer>,
    distances: DistanceMatrix,
    truck: TruckConfig,
    linear_drone: Option<DroneLinearConfig>,
    nonlinear_drone: Option<DroneNonlinearConfig>,
    endurance_drone: Option<DroneEnduranceConfig>,
}

impl RoutingContext {
    /// Creates a context from a customer set and truck configuration,
    /// computing the distance matrix from the customer coordinates.
    pub fn new(customers: Vec<Customer>, truck: TruckConfig) -> RoutingResult<Self> {
        let distances = DistanceMatrix::from_customers(&customers)?;
        Ok(Self {
            customers,
            distances,
            truck,
            linear_drone: None,
            nonlinear_drone: None,
            endurance_drone: None,
        })
    }

    /// Adds a linear-power drone configuration.
    pub fn with_linear_drone(mut self, config: DroneLinearConfig) -> Self {
        self.linear_drone = Some(config);
        self
    }

    /// Adds a nonlinear-power drone configuration.
    pub fn with_nonlinear_drone(mut self, config: DroneNonlinearConfig) -> Self {
        self.nonlinear_drone = Some(config);
        self
    }

    /// Adds an endurance drone configuration.
    pub fn with_endurance_drone(mut self, config: DroneEnduranceConfig) -> Self {
        self.endurance_drone = Some(config);
        self
    }

    /// The customer set; index 0 is the depot.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of customers, depot included.
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// The distance matrix over the customer set.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// The truck physics configuration.
    pub fn truck(&self) -> &TruckConfig {
        &self.truck
    }

    /// The linear drone configuration, if the instance defines one.
    pub fn linear_drone(&self) -> Option<&DroneLinearConfig> {
        self.linear_drone.as_ref()
    }

    /// The nonlinear drone configuration, if the instance defines one.
    pub fn nonlinear_drone(&self) -> Option<&DroneNonlinearConfig> {
        self.nonlinear_drone.as_ref()
    }

    /// The endurance drone configuration, if the instance defines one.
    pub fn endurance_drone(&self) -> Option<&DroneEnduranceConfig> {
        self.endurance_drone.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DroneEnduranceConfig, RangeClass, SpeedClass};

    fn context() -> RoutingContext {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(3.0, 4.0, 5.0, true, 30.0, 60.0),
        ];
        let truck = TruckConfig::new(15.0, 1.0, vec![1.0]).expect("valid truck");
        RoutingContext::new(customers, truck).expect("valid context")
    }

    #[test]
    fn test_context_distances() {
        let ctx = context();
        assert_eq!(ctx.num_customers(), 2);
        assert!((ctx.distances().get(0, 1) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_drone_configs_absent_by_default() {
        let ctx = context();
        assert!(ctx.linear_drone().is_none());
        assert!(ctx.nonlinear_drone().is_none());
        assert!(ctx.endurance_drone().is_none());
    }

    #[test]
    fn test_with_endurance_drone() {
        let ctx = context().with_endurance_drone(DroneEnduranceConfig {
            speed_class: SpeedClass::Low,
            range_class: RangeClass::High,
            capacity: 3.0,
            fixed_time: 1800.0,
            fixed_distance: 10_000.0,
            drone_speed: 12.0,
        });
        assert_eq!(ctx.endurance_drone().expect("present").drone_speed, 12.0);
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(f64::INFINITY, 0.0, 0.0, true, 0.0, 0.0),
        ];
        let truck = TruckConfig::new(15.0, 1.0, vec![1.0]).expect("valid truck");
        assert!(RoutingContext::new(customers, truck).is_err());
    }
}
