//! cts-core: annual cost-to-service budgeting for net new clinical,
//! renal and imaging equipment.

pub mod asset;
pub mod config;
pub mod cost_centre;
pub mod engine;
pub mod error;
pub mod projection;
pub mod regional_staff;
pub mod report;
pub mod staff;
pub mod store;
pub mod support_hours;
pub mod tech_roster;
pub mod types;

pub use config::BudgetConfig;
pub use engine::{run_budget, BudgetEngine};
pub use error::{BudgetError, BudgetResult};
pub use report::BudgetReport;
