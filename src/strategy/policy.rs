// src/strategy/policy.rs

use crate::error::PolicyError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// First day of the ordering schedule. No order is ever placed on it.
pub const START_DAY: u32 = 1;

/// Periodic-review ordering rules.
///
/// Both rules are purely time-triggered: they place a fixed quantity `Q`
/// every `T` days and never look at the inventory level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OrderPolicy {
    /// Orders on days `1 + k*T`, k >= 1. Ignores the lead time.
    Basic,
    /// Shifts the order phase by `LD - 1` days so receipts land on a
    /// consistent phase of the cycle.
    #[default]
    LeadTimeCompensated,
}

impl OrderPolicy {
    /// Quantity ordered on `day` (1-based) for cycle length `cycle_days`,
    /// order size `quantity` and lead time `lead_time_days`.
    pub fn order_on(&self, day: u32, cycle_days: u32, quantity: f64, lead_time_days: u32) -> f64 {
        match self {
            OrderPolicy::Basic => basic_cycle(day, cycle_days, quantity),
            OrderPolicy::LeadTimeCompensated => {
                lead_time_compensated_cycle(day, cycle_days, quantity, lead_time_days)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OrderPolicy::Basic => "basic",
            OrderPolicy::LeadTimeCompensated => "leadTimeCompensated",
        }
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrderPolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" | "order" => Ok(OrderPolicy::Basic),
            "leadTimeCompensated" | "lead_time_compensated" | "order_leadtime" => {
                Ok(OrderPolicy::LeadTimeCompensated)
            }
            other => Err(PolicyError {
                name: other.to_string(),
            }),
        }
    }
}

/// Q on days after the start day whose offset is a multiple of the cycle.
pub fn basic_cycle(day: u32, cycle_days: u32, quantity: f64) -> f64 {
    let offset = i64::from(day) - i64::from(START_DAY);
    phased_order(day, offset, cycle_days, quantity)
}

/// Like [`basic_cycle`], with the phase advanced by `lead_time_days - 1`.
pub fn lead_time_compensated_cycle(
    day: u32,
    cycle_days: u32,
    quantity: f64,
    lead_time_days: u32,
) -> f64 {
    let offset =
        i64::from(day) - i64::from(START_DAY) + (i64::from(lead_time_days) - 1);
    phased_order(day, offset, cycle_days, quantity)
}

fn phased_order(day: u32, offset: i64, cycle_days: u32, quantity: f64) -> f64 {
    if day > START_DAY && offset.rem_euclid(i64::from(cycle_days)) == 0 {
        quantity
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_days(policy: OrderPolicy, horizon: u32, cycle: u32, lead: u32) -> Vec<u32> {
        (1..=horizon)
            .filter(|&day| policy.order_on(day, cycle, 100.0, lead) > 0.0)
            .collect()
    }

    #[test]
    fn test_basic_orders_every_cycle_after_day_one() {
        let days = order_days(OrderPolicy::Basic, 45, 10, 3);
        assert_eq!(days, vec![11, 21, 31, 41]);
    }

    #[test]
    fn test_basic_ignores_lead_time() {
        assert_eq!(
            order_days(OrderPolicy::Basic, 60, 10, 0),
            order_days(OrderPolicy::Basic, 60, 10, 7)
        );
    }

    #[test]
    fn test_compensated_shifts_phase() {
        let days = order_days(OrderPolicy::LeadTimeCompensated, 45, 10, 3);
        assert_eq!(days, vec![9, 19, 29, 39]);
    }

    #[test]
    fn test_compensated_with_one_day_lead_matches_basic() {
        assert_eq!(
            order_days(OrderPolicy::LeadTimeCompensated, 60, 10, 1),
            order_days(OrderPolicy::Basic, 60, 10, 1)
        );
    }

    #[test]
    fn test_compensated_with_zero_lead_orders_a_day_later() {
        let days = order_days(OrderPolicy::LeadTimeCompensated, 35, 10, 0);
        assert_eq!(days, vec![2, 12, 22, 32]);
    }

    #[test]
    fn test_never_orders_on_start_day() {
        // Cycle of 1 would otherwise order on day 1.
        for policy in [OrderPolicy::Basic, OrderPolicy::LeadTimeCompensated] {
            assert_eq!(policy.order_on(1, 1, 50.0, 1), 0.0);
            assert_eq!(policy.order_on(2, 1, 50.0, 1), 50.0);
        }
    }

    #[test]
    fn test_parse_policy_names() {
        assert_eq!("basic".parse::<OrderPolicy>(), Ok(OrderPolicy::Basic));
        assert_eq!(
            "leadTimeCompensated".parse::<OrderPolicy>(),
            Ok(OrderPolicy::LeadTimeCompensated)
        );
        assert_eq!(
            "order_leadtime".parse::<OrderPolicy>(),
            Ok(OrderPolicy::LeadTimeCompensated)
        );
        let err = "weekly".parse::<OrderPolicy>().unwrap_err();
        assert_eq!(err.name, "weekly");
    }

    #[test]
    fn test_display_round_trips() {
        for policy in [OrderPolicy::Basic, OrderPolicy::LeadTimeCompensated] {
            assert_eq!(policy.to_string().parse::<OrderPolicy>(), Ok(policy));
        }
    }
}
