// src/model/summary.rs

use crate::model::trace::{DailyRecord, SimulationTrace};
use serde::Serialize;

/// Aggregate figures for one trace, computed from the rounded rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceSummary {
    pub days: usize,
    pub total_demand: f64,
    pub total_ordered: i64,
    pub total_received: i64,
    pub orders_placed: usize,
    pub average_ioh: f64,
    pub min_ioh: i64,
    pub max_ioh: i64,
    /// Days ending with negative inventory on hand.
    pub stockout_days: usize,
}

impl TraceSummary {
    pub fn from_records(records: &[DailyRecord]) -> Self {
        let days = records.len();
        let total_demand: f64 = records.iter().map(|r| r.demand).sum();
        let total_ordered: i64 = records.iter().map(|r| r.order_placed).sum();
        let total_received: i64 = records.iter().map(|r| r.receipt_received).sum();
        let orders_placed = records.iter().filter(|r| r.order_placed > 0).count();
        let stockout_days = records.iter().filter(|r| r.inventory_on_hand < 0).count();

        let ioh_sum: i64 = records.iter().map(|r| r.inventory_on_hand).sum();
        let average_ioh = if days == 0 {
            0.0
        } else {
            ioh_sum as f64 / days as f64
        };

        Self {
            days,
            total_demand,
            total_ordered,
            total_received,
            orders_placed,
            average_ioh,
            min_ioh: records.iter().map(|r| r.inventory_on_hand).min().unwrap_or(0),
            max_ioh: records.iter().map(|r| r.inventory_on_hand).max().unwrap_or(0),
            stockout_days,
        }
    }
}

impl From<&SimulationTrace> for TraceSummary {
    fn from(trace: &SimulationTrace) -> Self {
        Self::from_records(&trace.records())
    }
}
