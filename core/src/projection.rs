//! Per-asset cost to service.

use crate::{asset::Asset, config::BudgetConfig, types::Function};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetCost {
    /// POHR × support hours.
    pub oh_cost_per_asset: f64,
    /// Weighted technician wage × support hours.
    pub direct_cost_per_asset: f64,
    /// Imaging assets only.
    pub service_contract_cost_per_asset: Option<f64>,
    pub cost_to_service_per_asset: f64,
    /// Quantity × cost to service per asset.
    pub total_cost_to_service: f64,
}

pub fn project_asset_cost(
    asset: &Asset,
    pohr: f64,
    weighted_avg_tech_hourly_wage: f64,
    config: &BudgetConfig,
) -> AssetCost {
    let oh_cost_per_asset = pohr * asset.avg_support_hours;
    let direct_cost_per_asset = weighted_avg_tech_hourly_wage * asset.avg_support_hours;
    let service_contract_cost_per_asset =
        (asset.function == Function::Imaging).then_some(config.imaging_service_contract_cost);

    let cost_to_service_per_asset =
        oh_cost_per_asset + direct_cost_per_asset + service_contract_cost_per_asset.unwrap_or(0.0);

    AssetCost {
        oh_cost_per_asset,
        direct_cost_per_asset,
        service_contract_cost_per_asset,
        cost_to_service_per_asset,
        total_cost_to_service: asset.quantity * cost_to_service_per_asset,
    }
}
