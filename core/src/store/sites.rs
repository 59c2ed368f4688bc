//! Site reference: which cost centre serves each function at a site.

use super::sheet::Sheet;
use crate::{
    error::BudgetResult,
    types::{CostCentreName, Function},
};
use std::collections::HashMap;

/// `[clinical, renal, imaging]` cost centres for one site. Absent entries are `None`.
pub type SiteCostCentres = [Option<CostCentreName>; 3];

#[derive(Debug, Clone, Default)]
pub struct SiteTable {
    sites: HashMap<String, SiteCostCentres>,
}

impl SiteTable {
    pub fn from_sheet(sheet: &Sheet) -> BudgetResult<Self> {
        sheet.require_columns(&[
            "site_code",
            "clinical_cost_centre",
            "renal_cost_centre",
            "imaging_cost_centre",
        ])?;

        let mut table = Self::default();
        for record in sheet.records() {
            let site_code = record.text("site_code")?;
            let entry = [
                record.opt_text("clinical_cost_centre")?.map(str::to_string),
                record.opt_text("renal_cost_centre")?.map(str::to_string),
                record.opt_text("imaging_cost_centre")?.map(str::to_string),
            ];
            table.insert(site_code, entry);
        }
        Ok(table)
    }

    pub fn insert(&mut self, site_code: &str, cost_centres: SiteCostCentres) {
        self.sites.insert(site_code.trim().to_string(), cost_centres);
    }

    pub fn get(&self, site_code: &str) -> Option<&SiteCostCentres> {
        self.sites.get(site_code.trim())
    }

    pub fn slot(&self, site_code: &str, function: Function) -> Option<&str> {
        self.get(site_code)
            .and_then(|entry| entry[function.site_slot()].as_deref())
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
