//! Schedule evaluator computing arrival timestamps and waiting times.

use crate::context::RoutingContext;
use crate::error::{RoutingError, RoutingResult};
use crate::models::DroneEnergyModel;

/// Seconds per speed-coefficient bucket of the truck profile.
const HOUR: f64 = 3600.0;

/// Evaluates routes against a [`RoutingContext`], producing per-stop
/// arrival timestamps and aggregate waiting-time metrics.
///
/// All operations are pure: they read the shared context and their
/// arguments, and allocate only their results.
///
/// # Examples
///
/// ```
/// use d2d_routing::context::RoutingContext;
/// use d2d_routing::evaluation::ScheduleEvaluator;
/// use d2d_routing::models::{Customer, TruckConfig};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(150.0, 0.0, 5.0, true, 0.0, 0.0),
/// ];
/// let truck = TruckConfig::new(15.0, 1.0, vec![1.0]).unwrap();
/// let ctx = RoutingContext::new(customers, truck).unwrap();
///
/// let evaluator = ScheduleEvaluator::new(&ctx);
/// let timestamps = evaluator.technician_arrival_timestamps(&[0, 1, 0]);
/// assert_eq!(timestamps, vec![0.0, 10.0, 20.0]);
/// ```
pub struct ScheduleEvaluator<'a> {
    context: &'a RoutingContext,
}

impl<'a> ScheduleEvaluator<'a> {
    /// Creates an evaluator over the given context.
    pub fn new(context: &'a RoutingContext) -> Self {
        Self { context }
    }

    /// Computes per-stop arrival timestamps for a drone flying `path`,
    /// starting at `offset`.
    ///
    /// For the endurance model each hop takes `distance / drone_speed`.
    /// For the powered models a hop between identical consecutive stops is
    /// an idle no-op (the drone stays grounded); any other hop takes the
    /// departure stop's drone service time, plus the fixed climb/descent
    /// time, plus `distance / cruise_speed`.
    ///
    /// # Errors
    ///
    /// Fails with [`RoutingError::DroneConfigMissing`] if the context was
    /// not built with a configuration for `model`.
    ///
    /// # Panics
    ///
    /// Panics if a path entry is not a valid customer index.
    pub fn drone_arrival_timestamps(
        &self,
        path: &[usize],
        model: DroneEnergyModel,
        offset: f64,
    ) -> RoutingResult<Vec<f64>> {
        let distances = self.context.distances();
        let customers = self.context.customers();

        let mut result = vec![offset];
        match model {
            DroneEnergyModel::Endurance => {
                let config = self
                    .context
                    .endurance_drone()
                    .ok_or(RoutingError::DroneConfigMissing { model })?;
                for hop in path.windows(2) {
                    let shift = distances.get(hop[0], hop[1]) / config.drone_speed;
                    result.push(result[result.len() - 1] + shift);
                }
            }
            DroneEnergyModel::Linear | DroneEnergyModel::Nonlinear => {
                let profile = match model {
                    DroneEnergyModel::Linear => self
                        .context
                        .linear_drone()
                        .map(|config| config.profile())
                        .ok_or(RoutingError::DroneConfigMissing { model })?,
                    _ => self
                        .context
                        .nonlinear_drone()
                        .map(|config| config.profile())
                        .ok_or(RoutingError::DroneConfigMissing { model })?,
                };

                let vertical_time = profile.vertical_time();
                for hop in path.windows(2) {
                    let shift = if hop[0] == hop[1] {
                        0.0
                    } else {
                        customers[hop[0]].drone_service_time()
                            + vertical_time
                            + distances.get(hop[0], hop[1]) / profile.cruise_speed
                    };
                    result.push(result[result.len() - 1] + shift);
                }
            }
        }

        Ok(result)
    }

    /// Computes per-stop arrival timestamps for a technician driving
    /// `path`, starting at time 0.
    ///
    /// The truck's speed is `maximum_velocity` scaled by the coefficient
    /// of the current elapsed-hour bucket; travel is integrated exactly
    /// over the piecewise-constant profile by advancing in sub-steps
    /// bounded by the time left in the bucket. Service time at each stop
    /// also consumes bucket time before departure.
    ///
    /// # Panics
    ///
    /// Panics if a path entry is not a valid customer index.
    pub fn technician_arrival_timestamps(&self, path: &[usize]) -> Vec<f64> {
        let truck = self.context.truck();
        let customers = self.context.customers();
        let distances = self.context.distances();

        let mut result = vec![0.0];
        let mut coefficient_index = 0;
        let mut within_hour = 0.0;

        for hop in path.windows(2) {
            let service_time = customers[hop[0]].technician_service_time();
            let mut timestamp = result[result.len() - 1] + service_time;
            within_hour += service_time;
            while within_hour >= HOUR {
                within_hour -= HOUR;
                coefficient_index += 1;
            }

            let mut distance = distances.get(hop[0], hop[1]);
            while distance > 0.0 {
                let velocity = truck.maximum_velocity() * truck.coefficient(coefficient_index);
                let time_shift = (distance / velocity).min(HOUR - within_hour);

                timestamp += time_shift;
                distance -= velocity * time_shift;
                within_hour += time_shift;
                if within_hour >= HOUR {
                    within_hour -= HOUR;
                    coefficient_index += 1;
                }
            }

            result.push(timestamp);
        }

        result
    }

    /// Total time drone-served customers spend waiting for the route to
    /// complete: for every interior stop, the gap between the end of its
    /// service and the final arrival of the route.
    ///
    /// # Errors
    ///
    /// Fails with [`RoutingError::TimestampLengthMismatch`] unless the
    /// timestamp sequence has exactly one entry per path stop.
    pub fn drone_total_waiting_time(
        &self,
        path: &[usize],
        arrival_timestamps: &[f64],
    ) -> RoutingResult<f64> {
        self.total_waiting_time(path, arrival_timestamps, |customer| {
            self.context.customers()[customer].drone_service_time()
        })
    }

    /// Total time technician-served customers spend waiting for the route
    /// to complete; see [`Self::drone_total_waiting_time`].
    ///
    /// # Errors
    ///
    /// Fails with [`RoutingError::TimestampLengthMismatch`] unless the
    /// timestamp sequence has exactly one entry per path stop.
    pub fn technician_total_waiting_time(
        &self,
        path: &[usize],
        arrival_timestamps: &[f64],
    ) -> RoutingResult<f64> {
        self.total_waiting_time(path, arrival_timestamps, |customer| {
            self.context.customers()[customer].technician_service_time()
        })
    }

    fn total_waiting_time(
        &self,
        path: &[usize],
        arrival_timestamps: &[f64],
        service_time: impl Fn(usize) -> f64,
    ) -> RoutingResult<f64> {
        if arrival_timestamps.len() != path.len() {
            return Err(RoutingError::TimestampLengthMismatch {
                path_len: path.len(),
                timestamps_len: arrival_timestamps.len(),
            });
        }

        let Some(&completion) = arrival_timestamps.last() else {
            return Ok(0.0);
        };

        let mut result = 0.0;
        for i in 1..path.len().saturating_sub(1) {
            result += completion - arrival_timestamps[i] - service_time(path[i]);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Customer, DroneEnduranceConfig, DroneFlightProfile, DroneLinearConfig, RangeClass,
        SpeedClass, TruckConfig,
    };

    fn profile(takeoff: f64, cruise: f64, landing: f64, altitude: f64) -> DroneFlightProfile {
        DroneFlightProfile {
            takeoff_speed: takeoff,
            cruise_speed: cruise,
            landing_speed: landing,
            altitude,
            capacity: 3.0,
            battery: 500_000.0,
            speed_class: SpeedClass::High,
            range_class: RangeClass::Low,
        }
    }

    /// Depot at the origin plus three customers on the x-axis at 100 m
    /// intervals, no service times unless stated.
    fn context_with(truck: TruckConfig, service: f64) -> RoutingContext {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(100.0, 0.0, 1.0, true, service, service),
            Customer::new(200.0, 0.0, 1.0, true, service, service),
            Customer::new(300.0, 0.0, 1.0, false, service, service),
        ];
        RoutingContext::new(customers, truck).expect("valid context")
    }

    fn simple_truck() -> TruckConfig {
        TruckConfig::new(10.0, 1.0, vec![1.0]).expect("valid truck")
    }

    #[test]
    fn test_drone_linear_pure_cruise() {
        // Zero altitude and service time: each hop is exactly d / v.
        let ctx = context_with(simple_truck(), 0.0)
            .with_linear_drone(DroneLinearConfig::new(profile(10.0, 20.0, 10.0, 0.0), 0.0, 0.0));
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator
            .drone_arrival_timestamps(&[0, 1, 2, 0], DroneEnergyModel::Linear, 0.0)
            .expect("linear config present");
        assert_eq!(timestamps, vec![0.0, 5.0, 10.0, 20.0]);
    }

    #[test]
    fn test_drone_offset_start() {
        let ctx = context_with(simple_truck(), 0.0)
            .with_linear_drone(DroneLinearConfig::new(profile(10.0, 20.0, 10.0, 0.0), 0.0, 0.0));
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator
            .drone_arrival_timestamps(&[0, 1, 0], DroneEnergyModel::Linear, 42.0)
            .expect("linear config present");
        assert_eq!(timestamps, vec![42.0, 47.0, 52.0]);
    }

    #[test]
    fn test_drone_idle_hop_costs_nothing() {
        let ctx = context_with(simple_truck(), 30.0)
            .with_linear_drone(DroneLinearConfig::new(profile(10.0, 20.0, 10.0, 0.0), 0.0, 0.0));
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator
            .drone_arrival_timestamps(&[0, 1, 1, 0], DroneEnergyModel::Linear, 0.0)
            .expect("linear config present");
        assert_eq!(timestamps[1], timestamps[2]);
    }

    #[test]
    fn test_drone_vertical_time_and_service() {
        // altitude 50, takeoff 10, landing 5: vertical time 50*(0.1+0.2)=15.
        // Hop 0→1: service(0)=30 + 15 + 100/20 = 50.
        let ctx = context_with(simple_truck(), 30.0)
            .with_linear_drone(DroneLinearConfig::new(profile(10.0, 20.0, 5.0, 50.0), 0.0, 0.0));
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator
            .drone_arrival_timestamps(&[0, 1], DroneEnergyModel::Linear, 0.0)
            .expect("linear config present");
        // Depot service time is zero, customer service applies on departure.
        assert_eq!(timestamps, vec![0.0, 20.0]);

        let onward = evaluator
            .drone_arrival_timestamps(&[1, 2], DroneEnergyModel::Linear, 0.0)
            .expect("linear config present");
        assert_eq!(onward, vec![0.0, 50.0]);
    }

    #[test]
    fn test_drone_endurance_ignores_service_time() {
        let ctx = context_with(simple_truck(), 30.0).with_endurance_drone(DroneEnduranceConfig {
            speed_class: SpeedClass::Low,
            range_class: RangeClass::High,
            capacity: 3.0,
            fixed_time: 1800.0,
            fixed_distance: 10_000.0,
            drone_speed: 25.0,
        });
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator
            .drone_arrival_timestamps(&[0, 2, 0], DroneEnergyModel::Endurance, 0.0)
            .expect("endurance config present");
        assert_eq!(timestamps, vec![0.0, 8.0, 16.0]);
    }

    #[test]
    fn test_drone_missing_config() {
        let ctx = context_with(simple_truck(), 0.0);
        let evaluator = ScheduleEvaluator::new(&ctx);
        assert_eq!(
            evaluator
                .drone_arrival_timestamps(&[0, 1, 0], DroneEnergyModel::Nonlinear, 0.0)
                .unwrap_err(),
            RoutingError::DroneConfigMissing {
                model: DroneEnergyModel::Nonlinear,
            }
        );
    }

    #[test]
    fn test_technician_constant_speed() {
        let ctx = context_with(simple_truck(), 0.0);
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator.technician_arrival_timestamps(&[0, 1, 2, 3, 0]);
        assert_eq!(timestamps, vec![0.0, 10.0, 20.0, 30.0, 60.0]);
    }

    #[test]
    fn test_technician_crosses_bucket_boundary() {
        // 9000 m at 1 m/s base speed: first hour at coefficient 2
        // covers 7200 m in 3600 s, the remaining 1800 m run at
        // coefficient 1 for 1800 s.
        let truck = TruckConfig::new(1.0, 1.0, vec![2.0, 1.0]).expect("valid truck");
        let customers = vec![Customer::depot(0.0, 0.0), Customer::new(9000.0, 0.0, 0.0, false, 0.0, 0.0)];
        let ctx = RoutingContext::new(customers, truck).expect("valid context");
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator.technician_arrival_timestamps(&[0, 1]);
        assert_eq!(timestamps, vec![0.0, 5400.0]);
    }

    #[test]
    fn test_technician_service_time_consumes_bucket() {
        // 3700 s of service rolls the profile into the second bucket
        // before the truck moves.
        let truck = TruckConfig::new(10.0, 1.0, vec![2.0, 1.0]).expect("valid truck");
        let customers = vec![
            Customer::new(0.0, 0.0, 0.0, false, 0.0, 3700.0),
            Customer::new(100.0, 0.0, 0.0, false, 0.0, 0.0),
        ];
        let ctx = RoutingContext::new(customers, truck).expect("valid context");
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator.technician_arrival_timestamps(&[0, 1]);
        // Departure at 3700, then 100 m at 10 * 1.0 m/s.
        assert_eq!(timestamps, vec![0.0, 3710.0]);
    }

    #[test]
    fn test_technician_coefficients_wrap_around() {
        // A single coefficient applies to every hour.
        let truck = TruckConfig::new(1.0, 1.0, vec![1.0]).expect("valid truck");
        let customers = vec![Customer::depot(0.0, 0.0), Customer::new(7200.0, 0.0, 0.0, false, 0.0, 0.0)];
        let ctx = RoutingContext::new(customers, truck).expect("valid context");
        let evaluator = ScheduleEvaluator::new(&ctx);
        let timestamps = evaluator.technician_arrival_timestamps(&[0, 1]);
        assert_eq!(timestamps, vec![0.0, 7200.0]);
    }

    #[test]
    fn test_waiting_time_three_stops() {
        let ctx = context_with(simple_truck(), 10.0);
        let evaluator = ScheduleEvaluator::new(&ctx);
        let path = [0, 1, 0];
        let timestamps = [0.0, 25.0, 100.0];
        // T - t - s = 100 - 25 - 10.
        let waiting = evaluator
            .technician_total_waiting_time(&path, &timestamps)
            .expect("lengths match");
        assert!((waiting - 65.0).abs() < 1e-10);
    }

    #[test]
    fn test_waiting_time_sums_interior_stops() {
        let ctx = context_with(simple_truck(), 10.0);
        let evaluator = ScheduleEvaluator::new(&ctx);
        let path = [0, 1, 2, 0];
        let timestamps = [0.0, 20.0, 40.0, 90.0];
        // (90-20-10) + (90-40-10) = 100.
        let waiting = evaluator
            .drone_total_waiting_time(&path, &timestamps)
            .expect("lengths match");
        assert!((waiting - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_waiting_time_uses_vehicle_service_column() {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(100.0, 0.0, 1.0, true, 30.0, 60.0),
            Customer::depot(0.0, 0.0),
        ];
        let ctx = RoutingContext::new(customers, simple_truck()).expect("valid context");
        let evaluator = ScheduleEvaluator::new(&ctx);
        let path = [0, 1, 2];
        let timestamps = [0.0, 50.0, 200.0];
        let drone = evaluator
            .drone_total_waiting_time(&path, &timestamps)
            .expect("lengths match");
        let technician = evaluator
            .technician_total_waiting_time(&path, &timestamps)
            .expect("lengths match");
        assert!((drone - 120.0).abs() < 1e-10);
        assert!((technician - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_waiting_time_length_mismatch() {
        let ctx = context_with(simple_truck(), 0.0);
        let evaluator = ScheduleEvaluator::new(&ctx);
        assert_eq!(
            evaluator
                .drone_total_waiting_time(&[0, 1, 0], &[0.0, 1.0])
                .unwrap_err(),
            RoutingError::TimestampLengthMismatch {
                path_len: 3,
                timestamps_len: 2,
            }
        );
        assert!(evaluator
            .technician_total_waiting_time(&[0, 1], &[0.0, 1.0, 2.0])
            .is_err());
    }

    #[test]
    fn test_deterministic_reevaluation() {
        let ctx = context_with(simple_truck(), 17.5)
            .with_linear_drone(DroneLinearConfig::new(profile(7.0, 13.0, 11.0, 42.0), 1.0, 2.0));
        let evaluator = ScheduleEvaluator::new(&ctx);
        let path = [0, 1, 2, 3, 0];

        let first = evaluator
            .drone_arrival_timestamps(&path, DroneEnergyModel::Linear, 3.25)
            .expect("linear config present");
        let second = evaluator
            .drone_arrival_timestamps(&path, DroneEnergyModel::Linear, 3.25)
            .expect("linear config present");
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));

        let truck_first = evaluator.technician_arrival_timestamps(&path);
        let truck_second = evaluator.technician_arrival_timestamps(&path);
        assert_eq!(bits(&truck_first), bits(&truck_second));
    }
}
