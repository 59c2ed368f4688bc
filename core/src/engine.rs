//! The budget engine: one pass from input rows to a finished report.
//!
//! EXECUTION ORDER (fixed):
//!   1. Reference data        (loaded once, read-only afterwards)
//!   2. Regional staff roster (built once, shared by every cost centre)
//!   3. Asset classification  (function + cost centre per input row)
//!   4. Cost centre build     (tech roster, OH, POHR, weighted wage)
//!   5. Support hours         (work-order history overwrites the defaults)
//!   6. Projection + report   (per-asset cost, per-cost-centre totals)
//!
//! RULES:
//!   - Any error aborts the run; no partial report is produced.
//!   - Cost centres appear in the order their first asset appears.

use crate::{
    asset::Asset,
    config::BudgetConfig,
    cost_centre::{aggregate_cost_centres, CostCentre, CostingContext},
    error::BudgetResult,
    regional_staff::RegionalStaffRoster,
    report::BudgetReport,
    store::{self, AssetRow, FinancialSource, ReferenceData},
    support_hours::assign_support_hours,
};
use std::path::Path;

pub struct BudgetEngine<F: FinancialSource> {
    pub config: BudgetConfig,
    pub reference: ReferenceData,
    financials: F,
    roster: RegionalStaffRoster,
}

impl<F: FinancialSource> BudgetEngine<F> {
    pub fn new(config: BudgetConfig, reference: ReferenceData, financials: F) -> BudgetResult<Self> {
        let roster = RegionalStaffRoster::build(
            &reference.regional_staff,
            &reference.responsibility,
            reference.benefits_multiplier,
        )?;
        log::info!("regional staff roster: {} members", roster.len());
        Ok(Self {
            config,
            reference,
            financials,
            roster,
        })
    }

    pub fn roster(&self) -> &RegionalStaffRoster {
        &self.roster
    }

    /// Steps 3 through 5: classified, aggregated, support hours assigned.
    pub fn cost_centres(&self, rows: Vec<AssetRow>) -> BudgetResult<Vec<CostCentre>> {
        let assets = rows
            .into_iter()
            .map(|row| {
                Asset::new(
                    row,
                    &self.reference.sites,
                    &self.config.default_support_hours,
                )
            })
            .collect::<BudgetResult<Vec<_>>>()?;
        log::info!("{} assets classified", assets.len());

        let ctx = CostingContext {
            config: &self.config,
            reference: &self.reference,
            regional_staff: &self.roster,
            financials: &self.financials,
        };
        let mut cost_centres = aggregate_cost_centres(assets, &ctx)?;
        log::info!("{} cost centres built", cost_centres.len());

        assign_support_hours(&mut cost_centres, &self.reference.work_orders)?;
        Ok(cost_centres)
    }

    pub fn run(&self, rows: Vec<AssetRow>) -> BudgetResult<BudgetReport> {
        let cost_centres = self.cost_centres(rows)?;
        let report = BudgetReport::build(&cost_centres, &self.config);
        log::info!(
            "budget complete: {} cost centres, total cost to service ${:.2}",
            report.cost_centres.len(),
            report.total_cost
        );
        Ok(report)
    }
}

/// Load every input under `data_dir` and run the model.
pub fn run_budget(config: BudgetConfig, data_dir: &Path) -> BudgetResult<BudgetReport> {
    let reference = ReferenceData::load(&config, data_dir)?;
    let rows = store::load_asset_rows(&config, data_dir)?;
    let financials = store::financial_reports(&config, data_dir);
    BudgetEngine::new(config, reference, financials)?.run(rows)
}
