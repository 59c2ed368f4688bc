//! Cost-centre responsibility reference: health authority → function → cost centres.

use super::sheet::Sheet;
use crate::{
    error::{BudgetError, BudgetResult},
    types::{CostCentreName, Function, HealthAuthority},
};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CostCentreResponsibility {
    by_health_auth: HashMap<HealthAuthority, HashMap<Function, Vec<CostCentreName>>>,
}

impl CostCentreResponsibility {
    /// Build from `(cost_centre_name, health_authority, function)` rows, keeping row order.
    pub fn from_sheet(sheet: &Sheet) -> BudgetResult<Self> {
        sheet.require_columns(&["cost_centre_name", "health_authority", "function"])?;

        let mut table = Self::default();
        for record in sheet.records() {
            let raw_function = record.text("function")?;
            let function = Function::parse(raw_function)
                .ok_or_else(|| BudgetError::UnknownFunction(raw_function.to_string()))?;
            table.add(
                record.text("cost_centre_name")?,
                record.text("health_authority")?,
                function,
            );
        }
        Ok(table)
    }

    /// Register a cost centre. A health authority seen once knows all three
    /// functions, with empty lists where it has no cost centre.
    pub fn add(&mut self, cost_centre: &str, health_auth: &str, function: Function) {
        self.by_health_auth
            .entry(health_auth.trim().to_string())
            .or_insert_with(|| Function::ALL.into_iter().map(|f| (f, Vec::new())).collect())
            .entry(function)
            .or_default()
            .push(cost_centre.trim().to_string());
    }

    pub fn cost_centres(&self, health_auth: &str, function: Function) -> BudgetResult<&[CostCentreName]> {
        let functions = self
            .by_health_auth
            .get(health_auth.trim())
            .ok_or_else(|| BudgetError::UnknownHealthAuthority {
                health_auth: health_auth.trim().to_string(),
            })?;
        Ok(functions.get(&function).map(Vec::as_slice).unwrap_or(&[]))
    }

    pub fn len(&self) -> usize {
        self.by_health_auth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_health_auth.is_empty()
    }
}
