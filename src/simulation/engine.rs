// src/simulation/engine.rs

use crate::error::PolicyError;
use crate::io::demand::DemandModel;
use crate::model::queues::TimeDelayQueue;
use crate::model::trace::{DayState, SimulationTrace};
use crate::simulation::config::InventoryParams;
use crate::strategy::policy::OrderPolicy;
use log::debug;
use rand::Rng;

/// Which of the two simulation variants to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Raw normal demand (may go negative), basic ordering cycle.
    RawDemand,
    /// Demand clamped at zero, with a choice of ordering policy.
    ClampedDemand(OrderPolicy),
}

impl Scenario {
    pub fn policy(&self) -> OrderPolicy {
        match self {
            Scenario::RawDemand => OrderPolicy::Basic,
            Scenario::ClampedDemand(policy) => *policy,
        }
    }

    pub fn clamps_demand(&self) -> bool {
        matches!(self, Scenario::ClampedDemand(_))
    }
}

/// Periodic-review replenishment over a fixed horizon.
#[derive(Debug, Clone)]
pub struct InventorySimulation {
    params: InventoryParams,
    daily_demand_mean: f64,
}

impl InventorySimulation {
    pub fn new(params: InventoryParams) -> Self {
        let daily_demand_mean = params.daily_demand_mean();
        Self {
            params,
            daily_demand_mean,
        }
    }

    pub fn params(&self) -> &InventoryParams {
        &self.params
    }

    pub fn daily_demand_mean(&self) -> f64 {
        self.daily_demand_mean
    }

    /// Variant 1: raw demand, basic cycle.
    pub fn simulate_raw<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationTrace {
        self.run(Scenario::RawDemand, rng)
    }

    /// Variant 2: demand clamped at zero, ordering by `policy`.
    pub fn simulate_clamped<R: Rng + ?Sized>(
        &self,
        policy: OrderPolicy,
        rng: &mut R,
    ) -> SimulationTrace {
        self.run(Scenario::ClampedDemand(policy), rng)
    }

    /// Variant 2 with the policy given by name.
    pub fn run_named<R: Rng + ?Sized>(
        &self,
        policy_name: &str,
        rng: &mut R,
    ) -> Result<SimulationTrace, PolicyError> {
        let policy = policy_name.parse::<OrderPolicy>()?;
        Ok(self.simulate_clamped(policy, rng))
    }

    /// Runs one full horizon and returns the day-by-day trace.
    ///
    /// Day 1 keeps the initial inventory untouched; every later day applies
    /// `ioh[t] = ioh[t-1] - demand[t] + receipt[t]`.
    pub fn run<R: Rng + ?Sized>(&self, scenario: Scenario, rng: &mut R) -> SimulationTrace {
        let policy = scenario.policy();
        let demand_model = self.demand_model(scenario.clamps_demand());

        let horizon = self.params.horizon_days();
        let cycle = self.params.cycle_days();
        let quantity = self.params.order_quantity();
        let lead_time = self.params.lead_time_days();

        debug!(
            "simulating {} days: policy={}, clamped={}, mean={:.3}, sigma={:.3}",
            horizon,
            policy,
            scenario.clamps_demand(),
            self.daily_demand_mean,
            self.params.demand_std_dev()
        );

        // One draw per day, in day order, before any inventory update.
        let demand = demand_model.schedule(horizon as usize, rng);

        // Anything ordered inside the horizon with a longer lead time never
        // arrives, so the pipeline never needs more slots than there are days.
        let mut pipeline = TimeDelayQueue::new(lead_time.min(horizon) as usize);
        let mut days = Vec::with_capacity(horizon as usize);
        let mut ioh = self.params.initial_inventory();

        for (day, demand_today) in (1..=horizon).zip(demand) {
            let order = policy.order_on(day, cycle, quantity, lead_time);
            let receipt = pipeline.advance(order);

            if day > 1 {
                ioh = ioh - demand_today + receipt;
            }

            days.push(DayState {
                day,
                demand: demand_today,
                order_placed: order,
                receipt_received: receipt,
                inventory_on_hand: ioh,
            });
        }

        SimulationTrace::new(policy, scenario.clamps_demand(), days)
    }

    fn demand_model(&self, clamp_at_zero: bool) -> DemandModel {
        DemandModel::new(
            self.daily_demand_mean,
            self.params.demand_std_dev(),
            clamp_at_zero,
        )
    }
}
