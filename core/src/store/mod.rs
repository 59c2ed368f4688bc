//! Input loading. Every reference table is read once per run and then
//! shared read-only by every cost centre.

pub mod assets;
pub mod financials;
pub mod labour;
pub mod responsibility;
pub mod salaries;
pub mod sheet;
pub mod sites;
pub mod work_orders;

pub use assets::{read_asset_rows, AssetRow};
pub use financials::{FinancialReports, FinancialSource, InMemoryFinancials, OverheadYear};
pub use labour::LabourHours;
pub use responsibility::CostCentreResponsibility;
pub use salaries::{RegionalStaffRecord, StaffingTable, WageSchedule};
pub use sheet::{Record, Sheet, Workbook};
pub use sites::{SiteCostCentres, SiteTable};
pub use work_orders::{WorkOrderHistory, WorkOrderRecord};

use crate::{config::BudgetConfig, error::BudgetResult};
use std::path::Path;

/// All reference data consumed by the costing model.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub sites: SiteTable,
    pub responsibility: CostCentreResponsibility,
    pub wages: WageSchedule,
    pub regional_staff: Vec<RegionalStaffRecord>,
    pub staffing: StaffingTable,
    pub benefits_multiplier: f64,
    pub labour: LabourHours,
    pub work_orders: WorkOrderHistory,
}

impl ReferenceData {
    pub fn load(config: &BudgetConfig, data_dir: &Path) -> BudgetResult<Self> {
        let inputs = &config.inputs;
        let sheets = &config.sheets;

        let mut sites_book = Workbook::locate(&data_dir.join(&inputs.sites_reference))?;
        let sites = SiteTable::from_sheet(&sites_book.sheet(&sheets.sites)?)?;
        let responsibility =
            CostCentreResponsibility::from_sheet(&sites_book.sheet(&sheets.cost_centres)?)?;

        let mut salaries_book = Workbook::locate(&data_dir.join(&inputs.staff_salaries))?;
        let wages = WageSchedule::from_sheet(
            &salaries_book.sheet(&sheets.tech_wages)?,
            &config.tech_wage_column,
        )?;
        let regional_staff =
            salaries::read_regional_staff(&salaries_book.sheet(&sheets.regional_staff)?)?;
        let staffing = StaffingTable::from_sheet(&salaries_book.sheet(&sheets.tech_staffing)?)?;
        let benefits_multiplier =
            salaries::read_benefits_multiplier(&salaries_book.sheet(&sheets.benefits_multiplier)?)?;

        let mut labour_book = Workbook::locate(&data_dir.join(&inputs.labour_hours))?;
        let labour = LabourHours::from_sheets(
            &labour_book.sheet(&sheets.general_summary)?,
            &labour_book.sheet(&sheets.vacation_summary)?,
        )?;

        let mut wo_book = Workbook::locate(&data_dir.join(&inputs.work_orders))?;
        let work_orders = WorkOrderHistory::from_sheet(&wo_book.sheet(&sheets.support_hours)?)?;

        log::info!(
            "reference data loaded: {} sites, {} health authorities, {} regional staff, {} work order rows, benefits x{}",
            sites.len(),
            responsibility.len(),
            regional_staff.len(),
            work_orders.len(),
            benefits_multiplier
        );

        Ok(Self {
            sites,
            responsibility,
            wages,
            regional_staff,
            staffing,
            benefits_multiplier,
            labour,
            work_orders,
        })
    }
}

/// Read the asset input rows named in the config.
pub fn load_asset_rows(config: &BudgetConfig, data_dir: &Path) -> BudgetResult<Vec<AssetRow>> {
    let mut book = Workbook::locate(&data_dir.join(&config.inputs.asset_input))?;
    read_asset_rows(&book.sheet(&config.sheets.assets)?)
}

/// Financial reports rooted at the configured directory.
pub fn financial_reports(config: &BudgetConfig, data_dir: &Path) -> FinancialReports {
    FinancialReports::new(data_dir.join(&config.inputs.financial_reports))
}
