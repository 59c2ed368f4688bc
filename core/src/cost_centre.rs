//! Cost centres: overhead aggregation, POHR and weighted technician wage.
//!
//! A cost centre is created by the first asset assigned to it. Every
//! derived figure is computed once, at construction, from the reference
//! data available then; later assets only join the asset list.
//!
//! Overhead has three parts:
//!   - technician OH:     share of technician compensation spent off-device
//!   - regional staff OH: one share of each overseeing regional staff member
//!   - non-labour OH:     mean over years of max(actual, budgeted)
//!
//! POHR = total OH / (productivity factor × productive labour hours).

use crate::{
    asset::Asset,
    config::BudgetConfig,
    error::{BudgetError, BudgetResult},
    regional_staff::{RegionalStaff, RegionalStaffRoster},
    staff::TechStaff,
    store::{FinancialSource, LabourHours, OverheadYear, ReferenceData},
    tech_roster::build_tech_staff,
    types::{CostCentreName, Function, HealthAuthority},
};
use std::collections::HashMap;
use std::rc::Rc;

/// Everything a cost centre reads while it is being built.
pub struct CostingContext<'a> {
    pub config: &'a BudgetConfig,
    pub reference: &'a ReferenceData,
    pub regional_staff: &'a RegionalStaffRoster,
    pub financials: &'a dyn FinancialSource,
}

#[derive(Debug, Clone)]
pub struct CostCentre {
    pub name: CostCentreName,
    pub health_auth: HealthAuthority,
    pub function: Function,
    pub assets: Vec<Asset>,
    pub tech_staff: Vec<TechStaff>,
    pub regional_staff: Vec<Rc<RegionalStaff>>,
    pub regional_staff_oh: f64,
    pub tech_staff_oh: f64,
    pub non_labour_oh: f64,
    pub annual_labour_hours: f64,
    pub pohr: f64,
    pub weighted_avg_tech_hourly_wage: f64,
}

impl CostCentre {
    /// Build from the first asset assigned to this cost centre.
    pub fn new(seed: Asset, ctx: &CostingContext<'_>) -> BudgetResult<Self> {
        let name = seed.cost_centre.clone();
        let health_auth = seed.health_auth.clone();
        let function = seed.function;
        let reference = ctx.reference;

        let regional_staff = ctx.regional_staff.responsible_for(&name);
        let regional_staff_oh = ctx.regional_staff.overhead_for(&name);

        let tech_staff = build_tech_staff(
            &name,
            &reference.staffing,
            &reference.wages,
            reference.labour.hours_paid_per_year,
            reference.benefits_multiplier,
        )?;
        if tech_staff.is_empty() {
            return Err(BudgetError::EmptyTechRoster { cost_centre: name });
        }
        let tech_staff_oh = compute_tech_staff_oh(&tech_staff, ctx.config.oh_tech_time_percentage);

        let history = ctx
            .financials
            .partial_overhead(function, &health_auth, &name)?;
        let non_labour_oh =
            compute_non_labour_oh(&history).ok_or_else(|| BudgetError::EmptyFinancialHistory {
                cost_centre: name.clone(),
                function,
                health_auth: health_auth.clone(),
            })?;

        let annual_labour_hours = compute_annual_labour_hours(&tech_staff, &reference.labour)?;
        let total_oh = non_labour_oh + regional_staff_oh + tech_staff_oh;
        let pohr = compute_pohr(total_oh, annual_labour_hours, ctx.config.productivity_factor)
            .ok_or_else(|| BudgetError::NoProductiveHours {
                cost_centre: name.clone(),
                productive_hours: ctx.config.productivity_factor * annual_labour_hours,
            })?;
        let weighted_avg_tech_hourly_wage = compute_weighted_avg_tech_hourly_wage(&tech_staff)
            .ok_or_else(|| BudgetError::EmptyTechRoster {
                cost_centre: name.clone(),
            })?;

        log::info!(
            "cost centre {name} ({function}, {health_auth}): OH ${total_oh:.2} = non-labour ${non_labour_oh:.2} + tech ${tech_staff_oh:.2} + regional ${regional_staff_oh:.2}; POHR ${pohr:.2}/h, tech ${weighted_avg_tech_hourly_wage:.2}/h"
        );

        Ok(Self {
            name,
            health_auth,
            function,
            assets: vec![seed],
            tech_staff,
            regional_staff,
            regional_staff_oh,
            tech_staff_oh,
            non_labour_oh,
            annual_labour_hours,
            pohr,
            weighted_avg_tech_hourly_wage,
        })
    }

    /// The overhead POHR recovers.
    pub fn total_oh(&self) -> f64 {
        self.regional_staff_oh + self.tech_staff_oh + self.non_labour_oh
    }

    pub fn tech_headcount(&self) -> f64 {
        self.tech_staff.iter().map(|s| s.headcount).sum()
    }
}

/// Group assets into cost centres in first-seen order. The first asset of
/// each name builds the cost centre; the rest join it.
pub fn aggregate_cost_centres(
    assets: Vec<Asset>,
    ctx: &CostingContext<'_>,
) -> BudgetResult<Vec<CostCentre>> {
    let mut cost_centres: Vec<CostCentre> = Vec::new();
    let mut index: HashMap<CostCentreName, usize> = HashMap::new();

    for asset in assets {
        match index.get(&asset.cost_centre) {
            Some(&idx) => cost_centres[idx].assets.push(asset),
            None => {
                index.insert(asset.cost_centre.clone(), cost_centres.len());
                cost_centres.push(CostCentre::new(asset, ctx)?);
            }
        }
    }
    Ok(cost_centres)
}

pub fn compute_tech_staff_oh(tech_staff: &[TechStaff], oh_tech_time_percentage: f64) -> f64 {
    let total_tech_labour_cost: f64 = tech_staff.iter().map(|s| s.total_compensation).sum();
    oh_tech_time_percentage * total_tech_labour_cost
}

/// Arithmetic mean of each year's planning figure. `None` without history.
pub fn compute_non_labour_oh(history: &[OverheadYear]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    let total: f64 = history.iter().map(OverheadYear::planning_figure).sum();
    Some(total / history.len() as f64)
}

/// Σ headcount × (semi-productive days − vacation days for the level) × hours per day.
pub fn compute_annual_labour_hours(
    tech_staff: &[TechStaff],
    labour: &LabourHours,
) -> BudgetResult<f64> {
    let mut hours = 0.0;
    for staff in tech_staff {
        let days_per_staff = labour.semi_prod_days_per_year - labour.vacation_days(staff.level)?;
        hours += staff.headcount * days_per_staff * labour.avg_hours_per_day;
    }
    Ok(hours)
}

/// `None` when there are no productive hours to spread overhead over.
pub fn compute_pohr(total_oh: f64, annual_labour_hours: f64, productivity_factor: f64) -> Option<f64> {
    let productive_hours = productivity_factor * annual_labour_hours;
    if productive_hours <= 0.0 || !productive_hours.is_finite() {
        return None;
    }
    Some(total_oh / productive_hours)
}

/// Headcount-weighted mean hourly wage. `None` when nobody is on the roster.
pub fn compute_weighted_avg_tech_hourly_wage(tech_staff: &[TechStaff]) -> Option<f64> {
    let total_num_staff: f64 = tech_staff.iter().map(|s| s.headcount).sum();
    if total_num_staff <= 0.0 {
        return None;
    }
    Some(
        tech_staff
            .iter()
            .map(|s| s.hourly_wage * (s.headcount / total_num_staff))
            .sum(),
    )
}
