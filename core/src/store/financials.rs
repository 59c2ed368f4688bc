//! Historical financials: per-year partial (non-labour) overhead.
//!
//! Reports are organised as one workbook per health authority under a
//! directory per function, with one sheet per cost centre:
//!   `<root>/<function>/<health authority>` → sheet `<cost centre>`

use super::sheet::Workbook;
use crate::{
    error::{BudgetError, BudgetResult},
    types::Function,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverheadYear {
    pub actual_partial_oh: f64,
    pub budgeted_partial_oh: f64,
}

impl OverheadYear {
    pub fn new(actual_partial_oh: f64, budgeted_partial_oh: f64) -> Self {
        Self {
            actual_partial_oh,
            budgeted_partial_oh,
        }
    }

    /// The greater of actual and budgeted. Budget acts as a floor.
    pub fn planning_figure(&self) -> f64 {
        self.actual_partial_oh.max(self.budgeted_partial_oh)
    }
}

/// Where a cost centre's financial history comes from.
pub trait FinancialSource {
    /// One entry per historical fiscal year. A missing report is an error.
    fn partial_overhead(
        &self,
        function: Function,
        health_auth: &str,
        cost_centre: &str,
    ) -> BudgetResult<Vec<OverheadYear>>;
}

/// Financial reports read from disk.
#[derive(Debug, Clone)]
pub struct FinancialReports {
    root: PathBuf,
}

impl FinancialReports {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FinancialSource for FinancialReports {
    fn partial_overhead(
        &self,
        function: Function,
        health_auth: &str,
        cost_centre: &str,
    ) -> BudgetResult<Vec<OverheadYear>> {
        let stem = self.root.join(function.as_str()).join(health_auth);
        let mut workbook = Workbook::locate(&stem)?;
        let sheet = workbook.sheet(cost_centre)?;
        sheet.require_columns(&["actual_partial_oh", "budgeted_partial_oh"])?;

        sheet
            .records()
            .map(|record| {
                Ok(OverheadYear::new(
                    record.number("actual_partial_oh")?,
                    record.number("budgeted_partial_oh")?,
                ))
            })
            .collect()
    }
}

/// Financial history held in memory, keyed by (function, health authority, cost centre).
#[derive(Debug, Clone, Default)]
pub struct InMemoryFinancials {
    sheets: HashMap<(Function, String, String), Vec<OverheadYear>>,
}

impl InMemoryFinancials {
    pub fn insert(
        &mut self,
        function: Function,
        health_auth: &str,
        cost_centre: &str,
        years: Vec<OverheadYear>,
    ) {
        self.sheets
            .insert((function, health_auth.to_string(), cost_centre.to_string()), years);
    }
}

impl FinancialSource for InMemoryFinancials {
    fn partial_overhead(
        &self,
        function: Function,
        health_auth: &str,
        cost_centre: &str,
    ) -> BudgetResult<Vec<OverheadYear>> {
        self.sheets
            .get(&(function, health_auth.to_string(), cost_centre.to_string()))
            .cloned()
            .ok_or_else(|| BudgetError::SheetNotFound {
                workbook: format!("{function}/{health_auth}"),
                sheet: cost_centre.to_string(),
            })
    }
}
