// src/simulation/monte_carlo.rs

use crate::error::ParamsError;
use crate::model::summary::TraceSummary;
use crate::simulation::config::InventoryParams;
use crate::simulation::engine::InventorySimulation;
use crate::simulation::rng::stream_for_run;
use crate::strategy::policy::OrderPolicy;
use log::info;
use serde::Serialize;

/// Statistics for one policy across many independent runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyStats {
    pub policy: OrderPolicy,
    pub runs: usize,
    pub mean_average_ioh: f64,
    pub std_dev_average_ioh: f64,
    pub min_average_ioh: f64,
    pub max_average_ioh: f64,
    pub mean_stockout_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyComparison {
    pub basic: PolicyStats,
    pub lead_time_compensated: PolicyStats,
}

/// Runs the clamped-demand variant `runs` times under both policies.
///
/// Run `i` of each policy uses the same stream (derived from `master_seed`
/// and `i`), so both policies face identical demand paths.
pub fn compare_policies(
    params: &InventoryParams,
    runs: usize,
    master_seed: u64,
) -> Result<PolicyComparison, ParamsError> {
    if runs == 0 {
        return Err(ParamsError::NoRuns);
    }

    let sim = InventorySimulation::new(params.clone());
    let basic = run_policy(&sim, OrderPolicy::Basic, runs, master_seed);
    let lead_time_compensated =
        run_policy(&sim, OrderPolicy::LeadTimeCompensated, runs, master_seed);

    info!(
        "{} runs: basic avg IOH {:.2} ({:.2} stockout days), compensated avg IOH {:.2} ({:.2} stockout days)",
        runs,
        basic.mean_average_ioh,
        basic.mean_stockout_days,
        lead_time_compensated.mean_average_ioh,
        lead_time_compensated.mean_stockout_days
    );

    Ok(PolicyComparison {
        basic,
        lead_time_compensated,
    })
}

fn run_policy(
    sim: &InventorySimulation,
    policy: OrderPolicy,
    runs: usize,
    master_seed: u64,
) -> PolicyStats {
    let summaries: Vec<TraceSummary> = (0..runs as u64)
        .map(|i| {
            let mut rng = stream_for_run(master_seed, i);
            TraceSummary::from(&sim.simulate_clamped(policy, &mut rng))
        })
        .collect();

    let averages: Vec<f64> = summaries.iter().map(|s| s.average_ioh).collect();
    let n = averages.len() as f64;

    let mean = averages.iter().sum::<f64>() / n;
    let variance = averages.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n;

    PolicyStats {
        policy,
        runs,
        mean_average_ioh: mean,
        std_dev_average_ioh: variance.sqrt(),
        min_average_ioh: averages.iter().copied().fold(f64::INFINITY, f64::min),
        max_average_ioh: averages.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        mean_stockout_days: summaries.iter().map(|s| s.stockout_days as f64).sum::<f64>() / n,
    }
}
