//! Technician roster: one `TechStaff` group per staffed level at a cost centre.

use crate::{
    error::BudgetResult,
    staff::TechStaff,
    store::{StaffingTable, WageSchedule},
};

/// Build the technician groups for `cost_centre`. Levels with a blank or zero
/// headcount produce no group at all.
pub fn build_tech_staff(
    cost_centre: &str,
    staffing: &StaffingTable,
    wages: &WageSchedule,
    hours_paid_per_year: f64,
    benefits_multiplier: f64,
) -> BudgetResult<Vec<TechStaff>> {
    let mut roster = Vec::new();
    for (&level, &headcount) in staffing.headcounts(cost_centre)? {
        if headcount == 0.0 || !headcount.is_finite() {
            continue;
        }
        roster.push(TechStaff::new(
            level,
            headcount,
            wages.wage(level)?,
            hours_paid_per_year,
            benefits_multiplier,
        ));
    }
    Ok(roster)
}
