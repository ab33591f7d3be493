//! Vehicle physics configurations.
//!
//! A truck drives with a time-of-day-dependent speed profile; drones follow
//! one of three energy models selected by [`DroneEnergyModel`]:
//!
//! - **Linear** — power is an affine function of payload weight, shared by
//!   takeoff, landing, and cruise.
//! - **Nonlinear** — momentum-theory power formulas with distinct vertical
//!   and cruise expressions.
//! - **Endurance** — no power model; travel time is `distance / speed`, and
//!   the outer search enforces a flight-time/distance endurance limit.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};

/// Frame mass added to the payload in the nonlinear power formulas, in kg.
const FRAME_WEIGHT: f64 = 1.5;

/// Gravitational acceleration, in m/s².
const GRAVITY: f64 = 9.8;

/// Drone speed classification from the benchmark parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedClass {
    /// Low-speed parameter set.
    Low,
    /// High-speed parameter set.
    High,
}

/// Drone range classification from the benchmark parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeClass {
    /// Low-range parameter set.
    Low,
    /// High-range parameter set.
    High,
}

/// Tag selecting a drone energy model at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneEnergyModel {
    /// Affine power in payload weight.
    Linear,
    /// Momentum-theory power formulas.
    Nonlinear,
    /// Endurance-limited, no power model.
    Endurance,
}

impl fmt::Display for DroneEnergyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Nonlinear => write!(f, "nonlinear"),
            Self::Endurance => write!(f, "endurance"),
        }
    }
}

/// Truck (technician vehicle) physics configuration.
///
/// The truck's instantaneous velocity is `maximum_velocity` scaled by a
/// dimensionless coefficient selected by the elapsed hour of the route;
/// once all coefficients are exhausted the list is applied cyclically.
///
/// # Examples
///
/// ```
/// use d2d_routing::models::TruckConfig;
///
/// let truck = TruckConfig::new(15.0, 1.0, vec![0.8, 1.0, 1.2]).unwrap();
/// assert_eq!(truck.coefficient(1), 1.0);
/// // The coefficient list wraps around.
/// assert_eq!(truck.coefficient(5), 1.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckConfig {
    maximum_velocity: f64,
    m_t: f64,
    coefficients: Vec<f64>,
}

impl TruckConfig {
    /// Creates a truck configuration.
    ///
    /// Fails if the coefficient list is empty or any velocity value is not
    /// strictly positive; either would make the hour-bucket travel
    /// integration ill-defined.
    pub fn new(maximum_velocity: f64, m_t: f64, coefficients: Vec<f64>) -> RoutingResult<Self> {
        if !(maximum_velocity > 0.0) {
            return Err(RoutingError::NonPositiveVelocity {
                value: maximum_velocity,
            });
        }
        if coefficients.is_empty() {
            return Err(RoutingError::EmptyCoefficients);
        }
        if let Some(&value) = coefficients.iter().find(|&&c| !(c > 0.0)) {
            return Err(RoutingError::NonPositiveVelocity { value });
        }
        Ok(Self {
            maximum_velocity,
            m_t,
            coefficients,
        })
    }

    /// Maximum velocity in meters per second.
    pub fn maximum_velocity(&self) -> f64 {
        self.maximum_velocity
    }

    /// Truck-specific scalar consumed by the owning search; opaque here.
    pub fn m_t(&self) -> f64 {
        self.m_t
    }

    /// The hour-bucket speed coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Speed coefficient for the given elapsed-hour bucket, cyclic.
    pub fn coefficient(&self, hour: usize) -> f64 {
        self.coefficients[hour % self.coefficients.len()]
    }
}

/// Flight parameters shared by the powered (linear and nonlinear) drones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneFlightProfile {
    /// Takeoff speed in m/s.
    pub takeoff_speed: f64,
    /// Cruise speed in m/s.
    pub cruise_speed: f64,
    /// Landing speed in m/s.
    pub landing_speed: f64,
    /// Cruise altitude in meters.
    pub altitude: f64,
    /// Payload capacity in kg.
    pub capacity: f64,
    /// Battery energy in Joules.
    pub battery: f64,
    /// Speed parameter set classification.
    pub speed_class: SpeedClass,
    /// Range parameter set classification.
    pub range_class: RangeClass,
}

impl DroneFlightProfile {
    /// Fixed per-hop climb and descent time: the drone ascends to cruise
    /// altitude at takeoff speed and descends at landing speed.
    pub fn vertical_time(&self) -> f64 {
        self.altitude * (1.0 / self.takeoff_speed + 1.0 / self.landing_speed)
    }
}

/// Drone with an affine power model: `power = beta * weight + gamma` in
/// every flight phase.
///
/// # Examples
///
/// ```
/// use d2d_routing::models::{DroneFlightProfile, DroneLinearConfig, RangeClass, SpeedClass};
///
/// let profile = DroneFlightProfile {
///     takeoff_speed: 10.0,
///     cruise_speed: 20.0,
///     landing_speed: 10.0,
///     altitude: 50.0,
///     capacity: 3.0,
///     battery: 500_000.0,
///     speed_class: SpeedClass::High,
///     range_class: RangeClass::Low,
/// };
/// let drone = DroneLinearConfig::new(profile, 2.0, 100.0);
/// assert_eq!(drone.cruise_power(1.5), 103.0);
/// assert_eq!(drone.takeoff_power(1.5), drone.landing_power(1.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneLinearConfig {
    profile: DroneFlightProfile,
    beta: f64,
    gamma: f64,
}

impl DroneLinearConfig {
    /// Creates a linear-power drone configuration.
    pub fn new(profile: DroneFlightProfile, beta: f64, gamma: f64) -> Self {
        Self {
            profile,
            beta,
            gamma,
        }
    }

    /// The shared flight profile.
    pub fn profile(&self) -> &DroneFlightProfile {
        &self.profile
    }

    /// Weight coefficient of the power model.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Constant term of the power model.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    fn power(&self, weight: f64) -> f64 {
        self.beta * weight + self.gamma
    }

    /// Power draw during takeoff with the given payload weight.
    pub fn takeoff_power(&self, weight: f64) -> f64 {
        self.power(weight)
    }

    /// Power draw during landing with the given payload weight.
    pub fn landing_power(&self, weight: f64) -> f64 {
        self.power(weight)
    }

    /// Power draw during cruise with the given payload weight.
    pub fn cruise_power(&self, weight: f64) -> f64 {
        self.power(weight)
    }
}

/// Drone with momentum-theory power formulas, parameterized by
/// `(k1, k2, c1, c2, c4, c5)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneNonlinearConfig {
    profile: DroneFlightProfile,
    k1: f64,
    k2: f64,
    c1: f64,
    c2: f64,
    c4: f64,
    c5: f64,
}

impl DroneNonlinearConfig {
    /// Creates a nonlinear-power drone configuration.
    pub fn new(
        profile: DroneFlightProfile,
        k1: f64,
        k2: f64,
        c1: f64,
        c2: f64,
        c4: f64,
        c5: f64,
    ) -> Self {
        Self {
            profile,
            k1,
            k2,
            c1,
            c2,
            c4,
            c5,
        }
    }

    /// The shared flight profile.
    pub fn profile(&self) -> &DroneFlightProfile {
        &self.profile
    }

    fn vertical_power(&self, speed: f64, weight: f64) -> f64 {
        let w = FRAME_WEIGHT + weight;
        let g = GRAVITY;
        self.k1 * w * g * (speed / 2.0 + ((speed / 2.0).powi(2) + w * g / self.k2.powi(2)).sqrt())
            + self.c2 * (w * g).powf(1.5)
    }

    /// Power draw during takeoff with the given payload weight.
    pub fn takeoff_power(&self, weight: f64) -> f64 {
        self.vertical_power(self.profile.takeoff_speed, weight)
    }

    /// Power draw during landing with the given payload weight.
    pub fn landing_power(&self, weight: f64) -> f64 {
        self.vertical_power(self.profile.landing_speed, weight)
    }

    /// Power draw during cruise with the given payload weight.
    pub fn cruise_power(&self, weight: f64) -> f64 {
        let w = FRAME_WEIGHT + weight;
        let g = GRAVITY;
        let v = self.profile.cruise_speed;
        (self.c1 + self.c2)
            * ((w * g - self.c5 * (v * (PI / 18.0).cos().powi(2))).powi(2) + self.c4 * v.powi(2))
                .powf(0.75)
            + self.c4 * v.powi(3)
    }
}

/// Endurance-limited drone: travel time is `distance / drone_speed` and the
/// flight-time/distance budget is enforced by the outer search, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneEnduranceConfig {
    /// Speed parameter set classification.
    pub speed_class: SpeedClass,
    /// Range parameter set classification.
    pub range_class: RangeClass,
    /// Payload capacity in kg.
    pub capacity: f64,
    /// Flight-time budget in seconds.
    pub fixed_time: f64,
    /// Flight-distance budget in meters.
    pub fixed_distance: f64,
    /// Constant flight speed in m/s.
    pub drone_speed: f64,
}
