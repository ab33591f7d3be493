//! Customer type and parallel-array import.

use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};

/// A customer (or depot) in a delivery problem.
///
/// Customers are addressed positionally: index 0 in the loaded customer set
/// is the depot, and every route refers to customers by their index.
///
/// # Examples
///
/// ```
/// use d2d_routing::models::Customer;
///
/// let depot = Customer::depot(35.0, 35.0);
/// assert_eq!(depot.demand(), 0.0);
///
/// let c = Customer::new(41.0, 49.0, 10.0, true, 30.0, 60.0);
/// assert!(c.dronable());
/// assert_eq!(c.drone_service_time(), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    x: f64,
    y: f64,
    demand: f64,
    dronable: bool,
    drone_service_time: f64,
    technician_service_time: f64,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(
        x: f64,
        y: f64,
        demand: f64,
        dronable: bool,
        drone_service_time: f64,
        technician_service_time: f64,
    ) -> Self {
        Self {
            x,
            y,
            demand,
            dronable,
            drone_service_time,
            technician_service_time,
        }
    }

    /// Creates a depot at the given coordinates (no demand, no service time).
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, true, 0.0, 0.0)
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Demand at this customer.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Whether this customer may be served by a drone.
    pub fn dronable(&self) -> bool {
        self.dronable
    }

    /// Service duration when a drone serves this customer.
    pub fn drone_service_time(&self) -> f64 {
        self.drone_service_time
    }

    /// Service duration when a technician serves this customer.
    pub fn technician_service_time(&self) -> f64 {
        self.technician_service_time
    }

    /// Builds a customer set from parallel per-customer arrays.
    ///
    /// Row 0 of the arrays is the depot. Fails with
    /// [`RoutingError::ArrayLengthMismatch`] unless all six arrays share
    /// the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use d2d_routing::models::Customer;
    ///
    /// let customers = Customer::from_arrays(
    ///     &[0.0, 1.0],
    ///     &[0.0, 2.0],
    ///     &[0.0, 5.0],
    ///     &[true, false],
    ///     &[0.0, 30.0],
    ///     &[0.0, 60.0],
    /// ).unwrap();
    /// assert_eq!(customers.len(), 2);
    /// assert!(!customers[1].dronable());
    /// ```
    pub fn from_arrays(
        x: &[f64],
        y: &[f64],
        demands: &[f64],
        dronable: &[bool],
        drone_service_time: &[f64],
        technician_service_time: &[f64],
    ) -> RoutingResult<Vec<Customer>> {
        let n = x.len();
        check_length("y", n, y.len())?;
        check_length("demands", n, demands.len())?;
        check_length("dronable", n, dronable.len())?;
        check_length("drone_service_time", n, drone_service_time.len())?;
        check_length("technician_service_time", n, technician_service_time.len())?;

        Ok((0..n)
            .map(|i| {
                Customer::new(
                    x[i],
                    y[i],
                    demands[i],
                    dronable[i],
                    drone_service_time[i],
                    technician_service_time[i],
                )
            })
            .collect())
    }
}

fn check_length(field: &'static str, expected: usize, actual: usize) -> RoutingResult<()> {
    if expected != actual {
        return Err(RoutingError::ArrayLengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
