//! Single-item periodic-review inventory simulation.
//!
//! A validated [`InventoryParams`] record drives an [`InventorySimulation`],
//! which produces one [`DailyRecord`] per day of the horizon: demand, order
//! placed, receipt received and inventory on hand.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{ParamsError, PolicyError, SimError, SimResult};
pub use model::summary::TraceSummary;
pub use model::trace::{DailyRecord, DayState, SimulationTrace};
pub use simulation::config::{InventoryParams, SimulationConfig};
pub use simulation::engine::{InventorySimulation, Scenario};
pub use strategy::policy::OrderPolicy;
