//! Staff salary inputs: technician wage schedule, regional staff, technician
//! staffing levels and the benefits multiplier.

use super::sheet::{Record, Sheet};
use crate::{
    error::{BudgetError, BudgetResult},
    types::{CostCentreName, TechLevel},
};
use std::collections::{BTreeMap, HashMap};

/// Read a technician level out of a numeric cell. Levels outside the fixed
/// set are not technician tiers and yield `None`.
pub(crate) fn level_from_record(record: &Record<'_>, column: &str) -> BudgetResult<Option<TechLevel>> {
    let n = record.number(column)?;
    if n.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&n) {
        return Ok(None);
    }
    Ok(TechLevel::from_number(n as u8))
}

/// Hourly wage per technician level.
#[derive(Debug, Clone, Default)]
pub struct WageSchedule {
    wages: HashMap<TechLevel, f64>,
}

impl WageSchedule {
    pub fn from_sheet(sheet: &Sheet, wage_column: &str) -> BudgetResult<Self> {
        sheet.require_columns(&["level", wage_column])?;

        let mut schedule = Self::default();
        for record in sheet.records() {
            match level_from_record(&record, "level")? {
                Some(level) => schedule.set(level, record.number(wage_column)?),
                None => log::debug!(
                    "wage schedule row {} is not a technician level, skipped",
                    record.row()
                ),
            }
        }
        Ok(schedule)
    }

    pub fn set(&mut self, level: TechLevel, hourly_wage: f64) {
        self.wages.insert(level, hourly_wage);
    }

    pub fn wage(&self, level: TechLevel) -> BudgetResult<f64> {
        self.wages
            .get(&level)
            .copied()
            .ok_or(BudgetError::MissingWage {
                level: level.number(),
            })
    }
}

/// One row of the regional staff table.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalStaffRecord {
    pub name: String,
    pub title: String,
    pub min_salary: f64,
    pub max_salary: f64,
    /// Comma-separated health authorities with clinical and renal oversight.
    pub clinical_renal_resp: Option<String>,
    /// Comma-separated health authorities with imaging oversight.
    pub imaging_resp: Option<String>,
}

pub fn read_regional_staff(sheet: &Sheet) -> BudgetResult<Vec<RegionalStaffRecord>> {
    sheet.require_columns(&[
        "name",
        "title",
        "min_salary",
        "max_salary",
        "clinical_renal_resp",
        "imaging_resp",
    ])?;

    sheet
        .records()
        .map(|record| {
            Ok(RegionalStaffRecord {
                name: record.text("name")?.to_string(),
                title: record.opt_text("title")?.unwrap_or_default().to_string(),
                min_salary: record.number("min_salary")?,
                max_salary: record.number("max_salary")?,
                clinical_renal_resp: record.opt_text("clinical_renal_resp")?.map(str::to_string),
                imaging_resp: record.opt_text("imaging_resp")?.map(str::to_string),
            })
        })
        .collect()
}

/// Technician headcount per level, per cost centre. A level with no entry
/// was left blank in the staffing table.
#[derive(Debug, Clone, Default)]
pub struct StaffingTable {
    rows: HashMap<CostCentreName, BTreeMap<TechLevel, f64>>,
}

impl StaffingTable {
    pub fn from_sheet(sheet: &Sheet) -> BudgetResult<Self> {
        let mut columns = vec!["cost_centre_name"];
        columns.extend(TechLevel::ALL.iter().map(|l| l.staffing_column()));
        sheet.require_columns(&columns)?;

        let mut table = Self::default();
        for record in sheet.records() {
            let mut headcounts = BTreeMap::new();
            for level in TechLevel::ALL {
                if let Some(qty) = record.opt_number(level.staffing_column())? {
                    headcounts.insert(level, qty);
                }
            }
            let cost_centre = record.text("cost_centre_name")?;
            if table.rows.contains_key(cost_centre.trim()) {
                log::warn!(
                    "staffing row {} repeats cost centre {cost_centre}; the first row is kept",
                    record.row()
                );
                continue;
            }
            table.insert(cost_centre, headcounts);
        }
        Ok(table)
    }

    pub fn insert(&mut self, cost_centre: &str, headcounts: BTreeMap<TechLevel, f64>) {
        self.rows.insert(cost_centre.trim().to_string(), headcounts);
    }

    pub fn headcounts(&self, cost_centre: &str) -> BudgetResult<&BTreeMap<TechLevel, f64>> {
        self.rows
            .get(cost_centre)
            .ok_or_else(|| BudgetError::MissingStaffingRow {
                cost_centre: cost_centre.to_string(),
            })
    }
}

/// The benefits multiplier sheet has no header: a label in A1 and the value in B1.
pub fn read_benefits_multiplier(sheet: &Sheet) -> BudgetResult<f64> {
    let raw = sheet.raw_cell(0, 1).ok_or_else(|| BudgetError::MissingValue {
        sheet: sheet.name().to_string(),
        row: 1,
        column: "B".into(),
    })?;
    super::sheet::parse_number(raw).ok_or_else(|| BudgetError::InvalidNumber {
        sheet: sheet.name().to_string(),
        row: 1,
        column: "B".into(),
        value: raw.to_string(),
    })
}
