//! Work-order history: historical support hours per asset model.

use super::sheet::Sheet;
use crate::error::BudgetResult;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrderRecord {
    pub asset_description: String,
    /// Rows without a model number are left out of description-weighted
    /// lookups, which group by model.
    pub model_number: Option<String>,
    pub avg_support_hour_per_model: f64,
    pub count_asset: f64,
}

#[derive(Debug, Clone, Default)]
pub struct WorkOrderHistory {
    records: Vec<WorkOrderRecord>,
}

impl WorkOrderHistory {
    pub fn new(records: Vec<WorkOrderRecord>) -> Self {
        Self { records }
    }

    pub fn from_sheet(sheet: &Sheet) -> BudgetResult<Self> {
        sheet.require_columns(&[
            "asset_description",
            "model_number",
            "avg_support_hour_per_model",
            "count_asset",
        ])?;

        let records = sheet
            .records()
            .map(|record| {
                Ok(WorkOrderRecord {
                    asset_description: record.text("asset_description")?.to_string(),
                    model_number: record.opt_text("model_number")?.map(str::to_string),
                    avg_support_hour_per_model: record.number("avg_support_hour_per_model")?,
                    count_asset: record.number("count_asset")?,
                })
            })
            .collect::<BudgetResult<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn by_model<'a>(&'a self, model_number: &'a str) -> impl Iterator<Item = &'a WorkOrderRecord> {
        self.records
            .iter()
            .filter(move |r| r.model_number.as_deref() == Some(model_number))
    }

    pub fn by_description<'a>(&'a self, description: &'a str) -> impl Iterator<Item = &'a WorkOrderRecord> {
        self.records
            .iter()
            .filter(move |r| r.asset_description == description)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
