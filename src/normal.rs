//! Normal (Gaussian) probability distributions on top of the
//! [`simpson`](crate::simpson) integrator.

use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;

use crate::error::{DistributionError, IntegrateError};
use crate::simpson;

/// Tolerance used for all probability integrations.
const PRECISION: f64 = 1e-10;

/// A normal distribution `N(mean, std_dev)`.
#[derive(Debug, Clone)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
    name: Option<String>,
}

impl Normal {
    /// Creates `N(mean, std_dev)`.
    ///
    /// Fails with [`DistributionError::Degenerate`] when both parameters are
    /// exactly zero.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if mean == 0.0 && std_dev == 0.0 {
            return Err(DistributionError::Degenerate);
        }
        Ok(Self {
            mean,
            std_dev,
            name: None,
        })
    }

    /// Creates `N(mean, std_dev)` and registers it in `registry` under
    /// `name`.
    pub fn with_name(
        name: impl Into<String>,
        mean: f64,
        std_dev: f64,
        registry: &DistributionRegistry,
    ) -> Result<Self, DistributionError> {
        let mut dist = Self::new(mean, std_dev)?;
        let name = name.into();
        dist.name = Some(name.clone());
        registry.add(name, dist.clone());
        Ok(dist)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The probability density function at `x`:
    ///
    /// ```text
    /// 1 / (s * sqrt(2 pi)) * exp(-(x - m)^2 / (2 s^2))
    /// ```
    pub fn density(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.std_dev;
        1.0 / (self.std_dev * (2.0 * PI).sqrt()) * (-z * z / 2.0).exp()
    }

    /// `P(a <= X <= b)`, by adaptive Simpson integration of the density.
    ///
    /// Fails with [`IntegrateError::InvalidRange`] when `a > b`.
    pub fn range_probability(&self, a: f64, b: f64) -> Result<f64, IntegrateError> {
        simpson::integrate(|x| self.density(x), a, b, PRECISION)
    }

    /// `P(X <= b)`. Exactly `0.5` at the mean.
    pub fn left_probability(&self, b: f64) -> Result<f64, IntegrateError> {
        if b == self.mean {
            Ok(0.5)
        } else if b > self.mean {
            Ok(0.5 + self.range_probability(self.mean, b)?)
        } else {
            Ok(0.5 - self.range_probability(b, self.mean)?)
        }
    }
}

impl Default for Normal {
    /// The standard normal `N(0, 1)`.
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            name: None,
        }
    }
}

/// Equality over `(mean, std_dev)` only; the name is ignored.
impl PartialEq for Normal {
    fn eq(&self, other: &Self) -> bool {
        self.mean == other.mean && self.std_dev == other.std_dev
    }
}

impl fmt::Display for Normal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({}, {})", self.mean, self.std_dev)
    }
}

/// An explicit name-to-distribution store.
///
/// Populated by named construction, queried any time, never pruned. The store
/// is passed around explicitly instead of living in process-wide state, so
/// tests stay isolated and composable.
#[derive(Debug, Default)]
pub struct DistributionRegistry {
    map: RefCell<HashMap<String, Normal>>,
}

impl DistributionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `dist` under `name`, replacing any previous entry.
    pub fn add(&self, name: impl Into<String>, dist: Normal) {
        self.map.borrow_mut().insert(name.into(), dist);
    }

    /// Looks up a distribution by name.
    pub fn find(&self, name: &str) -> Option<Normal> {
        self.map.borrow().get(name).cloned()
    }
}
