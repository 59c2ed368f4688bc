use crate::types::Function;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "budget_config.json";

/// Paths of the input workbooks, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    pub asset_input: String,
    pub sites_reference: String,
    pub staff_salaries: String,
    pub labour_hours: String,
    /// Directory holding `<function>/<health authority>` workbooks.
    pub financial_reports: String,
    pub work_orders: String,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            asset_input: "budget_report_input".into(),
            sites_reference: "cost_centres_and_sites/cost_centres_and_sites_reference".into(),
            staff_salaries: "labour_reports/staff_salaries".into(),
            labour_hours: "labour_reports/tech_labour_hours".into(),
            financial_reports: "financial_reports".into(),
            work_orders: "wo_reports/asset_support_hours_reference".into(),
        }
    }
}

/// Worksheet names read from each workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetNames {
    pub assets: String,
    pub sites: String,
    pub cost_centres: String,
    pub tech_wages: String,
    pub regional_staff: String,
    pub tech_staffing: String,
    pub benefits_multiplier: String,
    pub general_summary: String,
    pub vacation_summary: String,
    pub support_hours: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            assets: "User Input".into(),
            sites: "Sites".into(),
            cost_centres: "Cost Centres".into(),
            tech_wages: "Tech Staff Salary Sched".into(),
            regional_staff: "Regional Staff".into(),
            tech_staffing: "Tech Staff".into(),
            benefits_multiplier: "Benefits Multiplier".into(),
            general_summary: "General Summary".into(),
            vacation_summary: "Vacation Summary".into(),
            support_hours: "Support Hours".into(),
        }
    }
}

/// Initial support hours assigned to an asset before work-order history is consulted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSupportHours {
    pub clinical: f64,
    pub renal: f64,
    pub imaging: f64,
}

impl DefaultSupportHours {
    pub fn for_function(&self, function: Function) -> f64 {
        match function {
            Function::Clinical => self.clinical,
            Function::Renal => self.renal,
            Function::Imaging => self.imaging,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Share of technician compensation spent on non-device work, billed as overhead.
    pub oh_tech_time_percentage: f64,
    /// Discount applied to productive labour hours in the POHR denominator.
    pub productivity_factor: f64,
    /// Column of the wage schedule that supplies each level's hourly wage.
    pub tech_wage_column: String,
    pub default_support_hours: DefaultSupportHours,
    /// Per-asset service contract cost. Applies to imaging assets only.
    pub imaging_service_contract_cost: f64,
    pub inputs: InputPaths,
    pub sheets: SheetNames,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            oh_tech_time_percentage: 0.30,
            productivity_factor: 0.80,
            tech_wage_column: "year6_hourly_wage".into(),
            default_support_hours: DefaultSupportHours::default(),
            imaging_service_contract_cost: 0.0,
            inputs: InputPaths::default(),
            sheets: SheetNames::default(),
        }
    }
}

impl BudgetConfig {
    /// Load `budget_config.json` from the data directory.
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/{CONFIG_FILE_NAME}");
        if !Path::new(&path).exists() {
            log::info!("no {CONFIG_FILE_NAME} in {data_dir}, using defaults");
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    pub fn load_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: BudgetConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.oh_tech_time_percentage) {
            anyhow::bail!(
                "oh_tech_time_percentage must be within [0, 1], got {}",
                self.oh_tech_time_percentage
            );
        }
        if self.productivity_factor <= 0.0 || self.productivity_factor > 1.0 {
            anyhow::bail!(
                "productivity_factor must be within (0, 1], got {}",
                self.productivity_factor
            );
        }
        Ok(())
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::default()
    }
}
