// src/model/trace.rs

use crate::strategy::policy::OrderPolicy;
use serde::Serialize;

/// One simulated day, before presentation rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayState {
    pub day: u32,
    pub demand: f64,
    pub order_placed: f64,
    pub receipt_received: f64,
    pub inventory_on_hand: f64,
}

impl DayState {
    /// Rounds the quantity columns half-to-even. Demand stays real.
    pub fn rounded(&self) -> DailyRecord {
        DailyRecord {
            day: self.day,
            demand: self.demand,
            order_placed: round_units(self.order_placed),
            receipt_received: round_units(self.receipt_received),
            inventory_on_hand: round_units(self.inventory_on_hand),
        }
    }
}

/// One row of the presented trace.
///
/// Serialized with the column names `time, demand, order, receipt, ioh`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRecord {
    #[serde(rename = "time")]
    pub day: u32,
    pub demand: f64,
    #[serde(rename = "order")]
    pub order_placed: i64,
    #[serde(rename = "receipt")]
    pub receipt_received: i64,
    #[serde(rename = "ioh")]
    pub inventory_on_hand: i64,
}

/// Round-half-to-even, matching banker's rounding of the unit columns.
pub fn round_units(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// The full day-by-day result of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationTrace {
    policy: OrderPolicy,
    demand_clamped: bool,
    days: Vec<DayState>,
}

impl SimulationTrace {
    pub(crate) fn new(policy: OrderPolicy, demand_clamped: bool, days: Vec<DayState>) -> Self {
        Self {
            policy,
            demand_clamped,
            days,
        }
    }

    pub fn policy(&self) -> OrderPolicy {
        self.policy
    }

    pub fn demand_clamped(&self) -> bool {
        self.demand_clamped
    }

    /// Continuous-valued days, in order.
    pub fn days(&self) -> &[DayState] {
        &self.days
    }

    /// Rounded rows, in order.
    pub fn records(&self) -> Vec<DailyRecord> {
        self.days.iter().map(DayState::rounded).collect()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
