//! inventory-sim: run the periodic-review inventory simulation from the
//! command line.
//!
//! Usage:
//!   inventory-sim --annual-demand 3650 --quantity 100 --lead-time 3 --sigma 2
//!   inventory-sim --params params.json --policy basic --seed 7 --output trace.csv
//!   inventory-sim --quantity 60 --sigma 3 --runs 500

use anyhow::{bail, Context, Result};
use inventory_sim::io::reporting;
use inventory_sim::simulation::monte_carlo::{compare_policies, PolicyStats};
use inventory_sim::simulation::rng;
use inventory_sim::{
    InventorySimulation, OrderPolicy, Scenario, SimulationConfig, TraceSummary,
};
use log::info;
use std::env;
use std::str::FromStr;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // 1. SETUP CONFIGURATION
    // Defaults, then an optional parameter file, then individual flags.
    let mut config = match flag_value(&args, "--params")? {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("reading parameter file '{path}'"))?,
        None => SimulationConfig::default(),
    };
    override_arg(&args, "--annual-demand", &mut config.annual_demand)?;
    override_arg(&args, "--horizon", &mut config.horizon_days)?;
    override_arg(&args, "--lead-time", &mut config.lead_time_days)?;
    override_arg(&args, "--cycle", &mut config.cycle_days)?;
    override_arg(&args, "--quantity", &mut config.order_quantity)?;
    override_arg(&args, "--initial-ioh", &mut config.initial_inventory)?;
    override_arg(&args, "--sigma", &mut config.demand_std_dev)?;

    let params = config.validate()?;

    // 2. PICK THE SCENARIO
    let policy = match flag_value(&args, "--policy")? {
        Some(name) => name.parse::<OrderPolicy>()?,
        None => OrderPolicy::default(),
    };
    let scenario = match flag_value(&args, "--variant")?.unwrap_or("clamped") {
        "raw" => Scenario::RawDemand,
        "clamped" => Scenario::ClampedDemand(policy),
        other => bail!("unknown variant '{other}' (expected 'raw' or 'clamped')"),
    };

    let seed = match flag_value(&args, "--seed")? {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid --seed '{raw}'"))?,
        None => rng::random_master_seed(),
    };

    println!("=== Periodic-Review Inventory Simulation ===");
    println!("  annual demand: {}", params.annual_demand());
    println!("  horizon:       {} days", params.horizon_days());
    println!("  daily mean:    {:.3}", params.daily_demand_mean());
    println!("  sigma:         {:.3}", params.demand_std_dev());
    println!("  cycle:         {} days", params.cycle_days());
    println!("  lead time:     {} days", params.lead_time_days());
    println!("  quantity:      {}", params.order_quantity());
    println!("  scenario:      {:?}", scenario);
    println!("  seed:          {seed}");
    println!();

    // 3. RUN SIMULATION
    let sim = InventorySimulation::new(params);
    let mut stream = rng::seeded(seed);
    let trace = sim.run(scenario, &mut stream);
    let records = trace.records();

    // 4. EXPORT RESULTS
    if let Some(path) = flag_value(&args, "--output")? {
        reporting::write_trace_to_path(path, &records)
            .with_context(|| format!("writing trace to '{path}'"))?;
        println!("Trace written to {path}");
    }

    // 5. PRINT SUMMARY
    let summary = TraceSummary::from_records(&records);
    println!("=== Summary ({}) ===", trace.policy());
    println!("  total demand:    {:.1}", summary.total_demand);
    println!("  orders placed:   {}", summary.orders_placed);
    println!("  total received:  {}", summary.total_received);
    println!("  average IOH:     {:.2}", summary.average_ioh);
    println!("  min / max IOH:   {} / {}", summary.min_ioh, summary.max_ioh);
    println!("  stockout days:   {}", summary.stockout_days);

    // 6. OPTIONAL POLICY COMPARISON
    let runs: usize = parse_arg(&args, "--runs", 0)?;
    if runs > 0 {
        info!("comparing policies over {runs} runs (master seed {seed})");
        let comparison = compare_policies(sim.params(), runs, seed)?;
        println!("\n=== Policy Comparison ({runs} runs) ===");
        print_stats(&comparison.basic);
        print_stats(&comparison.lead_time_compensated);
    }

    Ok(())
}

fn print_stats(stats: &PolicyStats) {
    println!(
        "{:<20} avg IOH {:>9.2} (sd {:.2}, range {:.2}..{:.2}), stockout days {:.1}",
        stats.policy.to_string(),
        stats.mean_average_ioh,
        stats.std_dev_average_ioh,
        stats.min_average_ioh,
        stats.max_average_ioh,
        stats.mean_stockout_days
    );
}

/// Value following `flag`, if the flag is present. A flag given as the last
/// argument has no value and is an error.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => match args.get(i + 1) {
            Some(value) => Ok(Some(value.as_str())),
            None => bail!("{flag} requires a value"),
        },
        None => Ok(None),
    }
}

fn parse_arg<T>(args: &[String], flag: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match flag_value(args, flag)? {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {flag}: '{raw}'")),
        None => Ok(default),
    }
}

fn override_arg<T>(args: &[String], flag: &str, slot: &mut T) -> Result<()>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if let Some(raw) = flag_value(args, flag)? {
        *slot = raw
            .parse()
            .with_context(|| format!("invalid value for {flag}: '{raw}'"))?;
    }
    Ok(())
}
