//! Trip planning configuration.

use serde::Deserialize;

use super::trip::TripError;

/// How much fuel to buy at each stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelPolicy {
    /// Fill the whole tank at every stop.
    #[default]
    FullTank,

    /// Buy only enough for the leg to the next stop (or the end of the
    /// route), never more than the tank holds.
    Prorated,
}

/// Tunable parameters for a single optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct TripConfig {
    /// Distance between refueling checkpoints (miles).
    pub interval_miles: f64,

    /// Vehicle fuel efficiency (miles per gallon).
    pub mpg: f64,

    /// Usable tank size (gallons).
    pub tank_capacity_gallons: f64,

    /// How far from a checkpoint to look for stations (miles).
    pub search_radius_miles: f64,

    pub fuel_policy: FuelPolicy,
}

impl TripConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        interval_miles: f64,
        mpg: f64,
        tank_capacity_gallons: f64,
        search_radius_miles: f64,
    ) -> Self {
        Self {
            interval_miles,
            mpg,
            tank_capacity_gallons,
            search_radius_miles,
            fuel_policy: FuelPolicy::default(),
        }
    }

    /// Set the fuel purchase policy.
    pub fn with_fuel_policy(mut self, policy: FuelPolicy) -> Self {
        self.fuel_policy = policy;
        self
    }

    /// Miles the vehicle can cover on a full tank.
    pub fn range_miles(&self) -> f64 {
        self.tank_capacity_gallons * self.mpg
    }

    /// Check that every parameter is usable.
    ///
    /// The checkpoint interval may not exceed the vehicle range, otherwise
    /// the truck could run dry between stops.
    pub fn validate(&self) -> Result<(), TripError> {
        positive("interval_miles", self.interval_miles)?;
        positive("mpg", self.mpg)?;
        positive("tank_capacity_gallons", self.tank_capacity_gallons)?;

        if !self.search_radius_miles.is_finite() || self.search_radius_miles < 0.0 {
            return Err(TripError::InvalidConfig(format!(
                "search_radius_miles must be finite and non-negative, got {}",
                self.search_radius_miles
            )));
        }

        if self.interval_miles > self.range_miles() {
            return Err(TripError::InvalidConfig(format!(
                "interval of {} miles exceeds vehicle range of {} miles",
                self.interval_miles,
                self.range_miles()
            )));
        }

        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), TripError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TripError::InvalidConfig(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            interval_miles: 500.0,
            mpg: 10.0,
            tank_capacity_gallons: 50.0,
            search_radius_miles: 50.0,
            fuel_policy: FuelPolicy::FullTank,
        }
    }
}
