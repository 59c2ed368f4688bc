//! Regional staff allocation.
//!
//! Regional staff oversee many cost centres across health authorities.
//! Each one's total compensation is split evenly over every cost centre
//! in their oversight list, and each cost centre they oversee carries
//! one share as overhead.
//!
//! RULES:
//!   - The roster is built once per run and shared by every cost centre.
//!   - Oversight lists keep duplicates. A health authority with clinical
//!     oversight contributes its clinical AND renal lists, so a name can
//!     appear more than once; every occurrence counts in the divisor.
//!   - An empty oversight list is a configuration error, never a zero share.

use crate::{
    error::{BudgetError, BudgetResult},
    staff::Staff,
    store::{CostCentreResponsibility, RegionalStaffRecord},
    types::{CostCentreName, Function},
};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionalStaff {
    pub name: String,
    pub title: String,
    pub min_annual_salary: f64,
    pub max_annual_salary: f64,
    pub cost_centre_responsibility: Vec<CostCentreName>,
    pub total_compensation: f64,
    /// Share of total compensation charged to each overseen cost centre.
    pub oh_cost_per_cc: f64,
}

impl Staff for RegionalStaff {
    /// Midpoint of the salary band.
    fn annual_salary(&self) -> f64 {
        (self.min_annual_salary + self.max_annual_salary) / 2.0
    }
}

impl RegionalStaff {
    pub fn new(
        record: &RegionalStaffRecord,
        cc_ref: &CostCentreResponsibility,
        benefits_multiplier: f64,
    ) -> BudgetResult<Self> {
        let cost_centre_responsibility = determine_cost_centre_resp(
            record.clinical_renal_resp.as_deref(),
            record.imaging_resp.as_deref(),
            cc_ref,
        )?;

        let mut staff = Self {
            name: record.name.trim().to_string(),
            title: record.title.trim().to_string(),
            min_annual_salary: record.min_salary,
            max_annual_salary: record.max_salary,
            cost_centre_responsibility,
            total_compensation: 0.0,
            oh_cost_per_cc: 0.0,
        };
        staff.total_compensation = staff.total_compensation(benefits_multiplier);
        staff.oh_cost_per_cc = compute_oh_cost_per_cc(
            &staff.name,
            staff.total_compensation,
            &staff.cost_centre_responsibility,
        )?;
        Ok(staff)
    }

    pub fn is_responsible_for(&self, cost_centre: &str) -> bool {
        self.cost_centre_responsibility.iter().any(|cc| cc == cost_centre)
    }
}

/// Split a comma-separated health authority list. Missing or blank means none.
fn split_health_auths(field: Option<&str>) -> impl Iterator<Item = &str> {
    field
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|ha| !ha.is_empty())
}

/// Cost centres overseen by a regional staff member.
///
/// For each health authority in `clinical_renal_resp`, appends its clinical
/// then its renal cost centres; for each in `imaging_resp`, its imaging
/// cost centres. Duplicates are kept.
pub fn determine_cost_centre_resp(
    clinical_renal_resp: Option<&str>,
    imaging_resp: Option<&str>,
    cc_ref: &CostCentreResponsibility,
) -> BudgetResult<Vec<CostCentreName>> {
    let mut responsibility = Vec::new();

    for health_auth in split_health_auths(clinical_renal_resp) {
        responsibility.extend_from_slice(cc_ref.cost_centres(health_auth, Function::Clinical)?);
        responsibility.extend_from_slice(cc_ref.cost_centres(health_auth, Function::Renal)?);
    }
    for health_auth in split_health_auths(imaging_resp) {
        responsibility.extend_from_slice(cc_ref.cost_centres(health_auth, Function::Imaging)?);
    }

    Ok(responsibility)
}

/// Equal split of `total_compensation` over the oversight list.
pub fn compute_oh_cost_per_cc(
    name: &str,
    total_compensation: f64,
    responsibility: &[CostCentreName],
) -> BudgetResult<f64> {
    if responsibility.is_empty() {
        return Err(BudgetError::EmptyOversight {
            name: name.to_string(),
        });
    }
    Ok(total_compensation / responsibility.len() as f64)
}

/// The run's regional staff, shared by reference with every cost centre.
#[derive(Debug, Clone, Default)]
pub struct RegionalStaffRoster {
    staff: Vec<Rc<RegionalStaff>>,
}

impl RegionalStaffRoster {
    pub fn build(
        records: &[RegionalStaffRecord],
        cc_ref: &CostCentreResponsibility,
        benefits_multiplier: f64,
    ) -> BudgetResult<Self> {
        let mut staff = Vec::with_capacity(records.len());
        for record in records {
            let member = RegionalStaff::new(record, cc_ref, benefits_multiplier)?;
            log::debug!(
                "regional staff {} ({}): ${:.2} over {} cost centres = ${:.2} each",
                member.name,
                member.title,
                member.total_compensation,
                member.cost_centre_responsibility.len(),
                member.oh_cost_per_cc
            );

            let mut names = member.cost_centre_responsibility.clone();
            names.sort();
            names.dedup();
            if names.len() < member.cost_centre_responsibility.len() {
                log::warn!(
                    "regional staff {} lists {} cost centres, {} distinct; duplicates count toward the split",
                    member.name,
                    member.cost_centre_responsibility.len(),
                    names.len()
                );
            }

            staff.push(Rc::new(member));
        }
        Ok(Self { staff })
    }

    /// Staff whose oversight list names `cost_centre`.
    pub fn responsible_for(&self, cost_centre: &str) -> Vec<Rc<RegionalStaff>> {
        self.staff
            .iter()
            .filter(|s| s.is_responsible_for(cost_centre))
            .cloned()
            .collect()
    }

    /// Sum of one share from every staff member overseeing `cost_centre`.
    /// A member listing the centre twice still contributes one share here.
    pub fn overhead_for(&self, cost_centre: &str) -> f64 {
        self.staff
            .iter()
            .filter(|s| s.is_responsible_for(cost_centre))
            .map(|s| s.oh_cost_per_cc)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<RegionalStaff>> {
        self.staff.iter()
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }
}
