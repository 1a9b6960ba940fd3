use thiserror::Error;

/// Raised when a parameter record violates one of its declared constraints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("annual_demand must be a finite value > 0, got {0}")]
    AnnualDemand(f64),

    #[error("horizon_days must be >= 1, got {0}")]
    HorizonDays(u32),

    #[error("cycle_days must be >= 1, got {0}")]
    CycleDays(u32),

    #[error("order_quantity must be a finite value >= 0, got {0}")]
    OrderQuantity(f64),

    #[error("initial_inventory must be finite, got {0}")]
    InitialInventory(f64),

    #[error("demand_std_dev must be a finite value >= 0, got {0}")]
    DemandStdDev(f64),

    #[error("Monte Carlo run count must be >= 1")]
    NoRuns,
}

/// Raised when a policy selector does not name a known ordering policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ordering policy '{name}' (expected 'basic' or 'leadTimeCompensated')")]
pub struct PolicyError {
    pub name: String,
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("Invalid policy: {0}")]
    Policy(#[from] PolicyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parameter file error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
