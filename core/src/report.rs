//! Budget report: everything the writer needs, and the writers themselves.
//!
//! The report is assembled only after every cost centre and asset figure
//! has been computed, so a failed run never leaves partial output.

use crate::{
    asset::SupportHoursBasis,
    config::BudgetConfig,
    cost_centre::CostCentre,
    error::{BudgetError, BudgetResult},
    projection::{project_asset_cost, AssetCost},
    types::{Function, TechLevel},
};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;

pub const SUMMARY_FILE_NAME: &str = "Summary.csv";
pub const JSON_FILE_NAME: &str = "budget_report.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetLine {
    pub health_auth: String,
    pub shop_code: String,
    pub site_code: String,
    pub model_num: Option<String>,
    pub description: String,
    pub quantity: f64,
    pub avg_support_hours: f64,
    pub support_hours_basis: SupportHoursBasis,
    #[serde(flatten)]
    pub cost: AssetCost,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechStaffLine {
    pub level: TechLevel,
    pub headcount: f64,
    pub hourly_wage: f64,
    pub total_compensation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostCentreReport {
    pub name: String,
    pub health_auth: String,
    pub function: Function,
    pub total_oh: f64,
    pub non_labour_oh: f64,
    pub tech_staff_oh: f64,
    pub regional_staff_oh: f64,
    pub pohr: f64,
    pub weighted_avg_tech_hourly_wage: f64,
    pub annual_labour_hours: f64,
    pub tech_staff: Vec<TechStaffLine>,
    pub regional_staff: Vec<String>,
    pub assets: Vec<AssetLine>,
    pub net_cost_to_service: f64,
}

impl CostCentreReport {
    pub fn from_cost_centre(cc: &CostCentre, config: &BudgetConfig) -> Self {
        let assets: Vec<AssetLine> = cc
            .assets
            .iter()
            .map(|asset| AssetLine {
                health_auth: asset.health_auth.clone(),
                shop_code: asset.shop_code.clone(),
                site_code: asset.site_code.clone(),
                model_num: asset.model_num.clone(),
                description: asset.description.clone(),
                quantity: asset.quantity,
                avg_support_hours: asset.avg_support_hours,
                support_hours_basis: asset.support_hours_basis,
                cost: project_asset_cost(asset, cc.pohr, cc.weighted_avg_tech_hourly_wage, config),
            })
            .collect();
        let net_cost_to_service = assets.iter().map(|a| a.cost.total_cost_to_service).sum();

        Self {
            name: cc.name.clone(),
            health_auth: cc.health_auth.clone(),
            function: cc.function,
            total_oh: cc.total_oh(),
            non_labour_oh: cc.non_labour_oh,
            tech_staff_oh: cc.tech_staff_oh,
            regional_staff_oh: cc.regional_staff_oh,
            pohr: cc.pohr,
            weighted_avg_tech_hourly_wage: cc.weighted_avg_tech_hourly_wage,
            annual_labour_hours: cc.annual_labour_hours,
            tech_staff: cc
                .tech_staff
                .iter()
                .map(|s| TechStaffLine {
                    level: s.level,
                    headcount: s.headcount,
                    hourly_wage: s.hourly_wage,
                    total_compensation: s.total_compensation,
                })
                .collect(),
            regional_staff: cc.regional_staff.iter().map(|s| s.name.clone()).collect(),
            assets,
            net_cost_to_service,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryLine {
    pub cost_centre: String,
    pub net_cost_to_service: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReport {
    pub generated_at: DateTime<Utc>,
    pub cost_centres: Vec<CostCentreReport>,
    pub summary: Vec<SummaryLine>,
    pub total_cost: f64,
}

impl BudgetReport {
    pub fn build(cost_centres: &[CostCentre], config: &BudgetConfig) -> Self {
        let cost_centres: Vec<CostCentreReport> = cost_centres
            .iter()
            .map(|cc| CostCentreReport::from_cost_centre(cc, config))
            .collect();
        let summary: Vec<SummaryLine> = cost_centres
            .iter()
            .map(|cc| SummaryLine {
                cost_centre: cc.name.clone(),
                net_cost_to_service: cc.net_cost_to_service,
            })
            .collect();
        let total_cost = summary.iter().map(|s| s.net_cost_to_service).sum();

        Self {
            generated_at: Utc::now(),
            cost_centres,
            summary,
            total_cost,
        }
    }

    pub fn cost_centre(&self, name: &str) -> Option<&CostCentreReport> {
        self.cost_centres.iter().find(|cc| cc.name == name)
    }

    pub fn write_json(&self, path: &Path) -> BudgetResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// `Summary.csv` plus one `<cost centre>.csv` per cost centre.
    /// File names are checked before anything is written.
    pub fn write_csv_dir(&self, dir: &Path) -> BudgetResult<()> {
        let files = self.csv_file_names()?;
        fs::create_dir_all(dir)?;

        let mut summary = WriterBuilder::new()
            .flexible(true)
            .from_path(dir.join(SUMMARY_FILE_NAME))?;
        summary.write_record(["Total Cost", money(self.total_cost).as_str()])?;
        summary.write_record([""])?;
        summary.write_record(["Cost Centre", "Net Cost to Service"])?;
        for line in &self.summary {
            summary.write_record([
                line.cost_centre.as_str(),
                money(line.net_cost_to_service).as_str(),
            ])?;
        }
        summary.flush()?;

        for (cc, file) in self.cost_centres.iter().zip(&files) {
            write_cost_centre_csv(cc, &dir.join(file))?;
        }
        Ok(())
    }

    /// One file name per cost centre, in report order. Names are compared
    /// case-insensitively and `Summary.csv` is reserved.
    pub fn csv_file_names(&self) -> BudgetResult<Vec<String>> {
        let mut taken: HashMap<String, &str> = HashMap::new();
        taken.insert(SUMMARY_FILE_NAME.to_lowercase(), "Summary");

        let mut files = Vec::with_capacity(self.cost_centres.len());
        for cc in &self.cost_centres {
            let file = format!("{}.csv", file_safe(&cc.name));
            if let Some(previous) = taken.insert(file.to_lowercase(), &cc.name) {
                return Err(BudgetError::ReportFileCollision {
                    cost_centre: cc.name.clone(),
                    previous: previous.to_string(),
                    file,
                });
            }
            files.push(file);
        }
        Ok(files)
    }
}

fn write_cost_centre_csv(cc: &CostCentreReport, path: &Path) -> BudgetResult<()> {
    let mut w = WriterBuilder::new().flexible(true).from_path(path)?;

    w.write_record([format!(
        "{}: Annual Service Delivery Costs for Net New Equipment",
        cc.name
    )])?;
    w.write_record([""])?;
    w.write_record(["OH Information"])?;
    w.write_record(["Total OH", money(cc.total_oh).as_str()])?;
    w.write_record(["Non-labour OH", money(cc.non_labour_oh).as_str()])?;
    w.write_record(["Tech Staff OH", money(cc.tech_staff_oh).as_str()])?;
    w.write_record(["Regional Staff OH", money(cc.regional_staff_oh).as_str()])?;
    w.write_record([""])?;
    w.write_record(["Rates"])?;
    w.write_record(["POHR", money(cc.pohr).as_str()])?;
    w.write_record(["Tech $/hr", money(cc.weighted_avg_tech_hourly_wage).as_str()])?;
    w.write_record([""])?;
    w.write_record(["Total"])?;
    w.write_record(["Net Cost to Service", money(cc.net_cost_to_service).as_str()])?;
    w.write_record([""])?;

    let direct_label = if cc.function == Function::Imaging {
        "WO Cost per Asset"
    } else {
        "Direct Cost per Asset"
    };
    w.write_record([
        "Health Authority",
        "Shop",
        "Site",
        "Model Number",
        "Asset Description",
        "Qty",
        "Annual Support Hours per Asset",
        "OH Cost per Asset",
        direct_label,
        "Service Contract Cost per Asset",
        "Cost to Service per Asset",
        "Total Cost to Service",
    ])?;
    for asset in &cc.assets {
        w.write_record([
            asset.health_auth.clone(),
            asset.shop_code.clone(),
            asset.site_code.clone(),
            asset.model_num.clone().unwrap_or_default(),
            asset.description.clone(),
            asset.quantity.to_string(),
            format!("{:.2}", asset.avg_support_hours),
            money(asset.cost.oh_cost_per_asset),
            money(asset.cost.direct_cost_per_asset),
            asset
                .cost
                .service_contract_cost_per_asset
                .map(money)
                .unwrap_or_default(),
            money(asset.cost.cost_to_service_per_asset),
            money(asset.cost.total_cost_to_service),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Cost centre names become file names; path separators are replaced.
fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}
