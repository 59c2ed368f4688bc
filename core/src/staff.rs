//! The compensation contract shared by every payroll entity.

use crate::types::TechLevel;

/// Anything paid a salary. Each kind derives its own annual salary; total
/// compensation always applies the run's benefits multiplier on top.
pub trait Staff {
    fn annual_salary(&self) -> f64;

    fn total_compensation(&self, benefits_multiplier: f64) -> f64 {
        self.annual_salary() * benefits_multiplier
    }
}

/// All technicians of one level at one cost centre.
#[derive(Debug, Clone, PartialEq)]
pub struct TechStaff {
    pub level: TechLevel,
    pub headcount: f64,
    pub hourly_wage: f64,
    pub hours_paid_per_year: f64,
    pub total_compensation: f64,
}

impl TechStaff {
    pub fn new(
        level: TechLevel,
        headcount: f64,
        hourly_wage: f64,
        hours_paid_per_year: f64,
        benefits_multiplier: f64,
    ) -> Self {
        let mut staff = Self {
            level,
            headcount,
            hourly_wage,
            hours_paid_per_year,
            total_compensation: 0.0,
        };
        staff.total_compensation = staff.total_compensation(benefits_multiplier);
        staff
    }
}

impl Staff for TechStaff {
    /// Headcount × hourly wage × paid hours, for the whole group.
    fn annual_salary(&self) -> f64 {
        self.headcount * self.hourly_wage * self.hours_paid_per_year
    }
}
