//! Technician labour-hours reference.

use super::{salaries::level_from_record, sheet::Sheet};
use crate::{
    error::{BudgetError, BudgetResult},
    types::TechLevel,
};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LabourHours {
    /// Hours a technician is paid for in a year.
    pub hours_paid_per_year: f64,
    /// Days in a year less weekends, statutory holidays and sick days.
    pub semi_prod_days_per_year: f64,
    pub avg_hours_per_day: f64,
    vacation_days: HashMap<TechLevel, f64>,
}

impl LabourHours {
    pub fn new(hours_paid_per_year: f64, semi_prod_days_per_year: f64, avg_hours_per_day: f64) -> Self {
        Self {
            hours_paid_per_year,
            semi_prod_days_per_year,
            avg_hours_per_day,
            vacation_days: HashMap::new(),
        }
    }

    pub fn with_vacation(mut self, level: TechLevel, avg_vacation_days: f64) -> Self {
        self.vacation_days.insert(level, avg_vacation_days);
        self
    }

    /// `general` holds the three scalars in its first data row;
    /// `vacation` maps `level` to `avg_vac`.
    pub fn from_sheets(general: &Sheet, vacation: &Sheet) -> BudgetResult<Self> {
        general.require_columns(&[
            "hours_paid_per_year",
            "semi_prod_days_per_year",
            "avg_hours_per_day",
        ])?;
        let row = general
            .records()
            .next()
            .ok_or_else(|| BudgetError::MissingValue {
                sheet: general.name().to_string(),
                row: 2,
                column: "hours_paid_per_year".into(),
            })?;
        let mut hours = Self::new(
            row.number("hours_paid_per_year")?,
            row.number("semi_prod_days_per_year")?,
            row.number("avg_hours_per_day")?,
        );

        vacation.require_columns(&["level", "avg_vac"])?;
        for record in vacation.records() {
            if let Some(level) = level_from_record(&record, "level")? {
                hours.vacation_days.insert(level, record.number("avg_vac")?);
            }
        }
        Ok(hours)
    }

    pub fn vacation_days(&self, level: TechLevel) -> BudgetResult<f64> {
        self.vacation_days
            .get(&level)
            .copied()
            .ok_or(BudgetError::MissingVacation {
                level: level.number(),
            })
    }
}
