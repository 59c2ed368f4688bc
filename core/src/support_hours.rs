//! Support hours per asset from work-order history.
//!
//! Lookup order:
//!   1. Work orders for the asset's model number: plain mean of their hours.
//!   2. Otherwise, work orders for the asset's description, grouped by model:
//!      each model's mean hours weighted by its share of the unit count.
//!
//! An asset with neither is an error; no default is substituted.

use crate::{
    asset::{Asset, SupportHoursBasis},
    cost_centre::CostCentre,
    error::{BudgetError, BudgetResult},
    store::WorkOrderHistory,
};

/// Resolve support hours for one asset without modifying it.
pub fn resolve_support_hours(
    asset: &Asset,
    history: &WorkOrderHistory,
) -> BudgetResult<(f64, SupportHoursBasis)> {
    if let Some(model_num) = asset.model_num.as_deref() {
        if let Some(hours) = mean_hours_for_model(model_num, history) {
            return Ok((hours, SupportHoursBasis::ModelHistory));
        }
    }

    weighted_hours_for_description(&asset.description, history)
        .map(|hours| (hours, SupportHoursBasis::DescriptionWeighted))
        .ok_or_else(|| BudgetError::NoSupportHistory {
            model_num: asset.model_num.clone().unwrap_or_default(),
            description: asset.description.clone(),
        })
}

fn mean_hours_for_model(model_num: &str, history: &WorkOrderHistory) -> Option<f64> {
    let (sum, n) = history
        .by_model(model_num)
        .fold((0.0, 0usize), |(sum, n), r| (sum + r.avg_support_hour_per_model, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Per-model group accumulated in first-seen order.
struct ModelGroup<'a> {
    model_number: &'a str,
    hours_sum: f64,
    rows: usize,
    units: f64,
}

fn weighted_hours_for_description(description: &str, history: &WorkOrderHistory) -> Option<f64> {
    let mut groups: Vec<ModelGroup<'_>> = Vec::new();
    for record in history.by_description(description) {
        let Some(model_number) = record.model_number.as_deref() else {
            continue;
        };
        match groups.iter_mut().find(|g| g.model_number == model_number) {
            Some(group) => {
                group.hours_sum += record.avg_support_hour_per_model;
                group.rows += 1;
                group.units += record.count_asset;
            }
            None => groups.push(ModelGroup {
                model_number,
                hours_sum: record.avg_support_hour_per_model,
                rows: 1,
                units: record.count_asset,
            }),
        }
    }

    let total_units: f64 = groups.iter().map(|g| g.units).sum();
    if groups.is_empty() || total_units <= 0.0 {
        return None;
    }

    Some(
        groups
            .iter()
            .map(|g| (g.hours_sum / g.rows as f64) * (g.units / total_units))
            .sum(),
    )
}

/// Overwrite the support hours of every asset held by every cost centre.
pub fn assign_support_hours(
    cost_centres: &mut [CostCentre],
    history: &WorkOrderHistory,
) -> BudgetResult<()> {
    for cost_centre in cost_centres.iter_mut() {
        for asset in cost_centre.assets.iter_mut() {
            let (hours, basis) = resolve_support_hours(asset, history)?;
            log::debug!(
                "{} / {} ({}): {hours:.2} support hours via {basis:?}",
                cost_centre.name,
                asset.description,
                asset.model_num.as_deref().unwrap_or("no model")
            );
            asset.avg_support_hours = hours;
            asset.support_hours_basis = basis;
        }
    }
    Ok(())
}
