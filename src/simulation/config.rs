// src/simulation/config.rs

use crate::error::{ParamsError, SimResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw, unvalidated simulation inputs.
///
/// This is what a parameter file or the command line produces. Nothing in the
/// engine accepts it directly: call [`SimulationConfig::validate`] to get an
/// [`InventoryParams`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Annual demand (units/year).
    pub annual_demand: f64,
    /// Days in the horizon.
    pub horizon_days: u32,
    /// Days between placing an order and receiving it.
    pub lead_time_days: u32,
    /// Days between consecutive order placements.
    pub cycle_days: u32,
    /// Fixed quantity per order.
    pub order_quantity: f64,
    /// Inventory on hand at day 0. Negative means backorder.
    pub initial_inventory: f64,
    /// Standard deviation of daily demand (units/day).
    pub demand_std_dev: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            annual_demand: 2000.0,
            horizon_days: 365,
            lead_time_days: 0,
            cycle_days: 10,
            order_quantity: 0.0,
            initial_inventory: 0.0,
            demand_std_dev: 0.0,
        }
    }
}

impl SimulationConfig {
    /// Reads a JSON parameter file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Checks every constraint and freezes the record.
    pub fn validate(&self) -> Result<InventoryParams, ParamsError> {
        if !(self.annual_demand.is_finite() && self.annual_demand > 0.0) {
            return Err(ParamsError::AnnualDemand(self.annual_demand));
        }
        if self.horizon_days < 1 {
            return Err(ParamsError::HorizonDays(self.horizon_days));
        }
        if self.cycle_days < 1 {
            return Err(ParamsError::CycleDays(self.cycle_days));
        }
        if !(self.order_quantity.is_finite() && self.order_quantity >= 0.0) {
            return Err(ParamsError::OrderQuantity(self.order_quantity));
        }
        if !self.initial_inventory.is_finite() {
            return Err(ParamsError::InitialInventory(self.initial_inventory));
        }
        if !(self.demand_std_dev.is_finite() && self.demand_std_dev >= 0.0) {
            return Err(ParamsError::DemandStdDev(self.demand_std_dev));
        }

        if self.order_quantity == 0.0 {
            warn!("order_quantity is 0: no stock will ever be replenished");
        }
        if self.lead_time_days >= self.horizon_days {
            warn!(
                "lead time ({} days) covers the whole horizon ({} days): no receipts will arrive",
                self.lead_time_days, self.horizon_days
            );
        }

        Ok(InventoryParams {
            annual_demand: self.annual_demand,
            horizon_days: self.horizon_days,
            lead_time_days: self.lead_time_days,
            cycle_days: self.cycle_days,
            order_quantity: self.order_quantity,
            initial_inventory: self.initial_inventory,
            demand_std_dev: self.demand_std_dev,
        })
    }
}

/// Validated, immutable economic and demand inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryParams {
    annual_demand: f64,
    horizon_days: u32,
    lead_time_days: u32,
    cycle_days: u32,
    order_quantity: f64,
    initial_inventory: f64,
    demand_std_dev: f64,
}

impl InventoryParams {
    pub fn annual_demand(&self) -> f64 {
        self.annual_demand
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    pub fn cycle_days(&self) -> u32 {
        self.cycle_days
    }

    pub fn order_quantity(&self) -> f64 {
        self.order_quantity
    }

    pub fn initial_inventory(&self) -> f64 {
        self.initial_inventory
    }

    pub fn demand_std_dev(&self) -> f64 {
        self.demand_std_dev
    }

    /// Mean daily demand: annual demand spread evenly over the horizon.
    pub fn daily_demand_mean(&self) -> f64 {
        self.annual_demand / self.horizon_days as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let params = SimulationConfig::default().validate().unwrap();
        assert_eq!(params.annual_demand(), 2000.0);
        assert_eq!(params.horizon_days(), 365);
        assert_eq!(params.lead_time_days(), 0);
        assert_eq!(params.order_quantity(), 0.0);
        assert_eq!(params.initial_inventory(), 0.0);
        assert_eq!(params.demand_std_dev(), 0.0);
        assert_eq!(params.cycle_days(), 10);
    }

    #[test]
    fn test_daily_demand_mean() {
        let config = SimulationConfig {
            annual_demand: 3650.0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate().unwrap().daily_demand_mean(), 10.0);
    }

    #[test]
    fn test_rejects_non_positive_demand() {
        for bad in [0.0, -5.0, f64::NAN] {
            let config = SimulationConfig {
                annual_demand: bad,
                ..SimulationConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ParamsError::AnnualDemand(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_horizon_and_cycle() {
        let config = SimulationConfig {
            horizon_days: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(ParamsError::HorizonDays(0)));

        let config = SimulationConfig {
            cycle_days: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(ParamsError::CycleDays(0)));
    }

    #[test]
    fn test_rejects_negative_quantity_and_sigma() {
        let config = SimulationConfig {
            order_quantity: -1.0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(ParamsError::OrderQuantity(-1.0)));

        let config = SimulationConfig {
            demand_std_dev: -0.5,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(ParamsError::DemandStdDev(-0.5)));
    }

    #[test]
    fn test_negative_initial_inventory_is_backorder() {
        let config = SimulationConfig {
            initial_inventory: -40.0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate().unwrap().initial_inventory(), -40.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "order_quantity": 100, "lead_time_days": 3 }"#).unwrap();
        assert_eq!(config.order_quantity, 100.0);
        assert_eq!(config.lead_time_days, 3);
        assert_eq!(config.annual_demand, 2000.0);
        assert_eq!(config.cycle_days, 10);
    }
}
