//! Assets: classification into a function and resolution of the owning cost centre.

use crate::{
    config::DefaultSupportHours,
    error::{BudgetError, BudgetResult},
    store::{AssetRow, SiteTable},
    types::{CostCentreName, Function, HealthAuthority},
};
use serde::{Deserialize, Serialize};

/// Where an asset's support hours came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportHoursBasis {
    /// Per-function default; history not yet consulted.
    Default,
    /// Mean over work orders for the same model number.
    ModelHistory,
    /// Unit-weighted mean over models sharing the asset description.
    DescriptionWeighted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub model_num: Option<String>,
    pub description: String,
    pub quantity: f64,
    pub health_auth: HealthAuthority,
    pub site_code: String,
    pub shop_code: String,
    pub function: Function,
    /// Key of the owning cost centre.
    pub cost_centre: CostCentreName,
    pub avg_support_hours: f64,
    pub support_hours_basis: SupportHoursBasis,
}

impl Asset {
    pub fn new(
        row: AssetRow,
        sites: &SiteTable,
        default_hours: &DefaultSupportHours,
    ) -> BudgetResult<Self> {
        let shop_code = row.shop_code.trim().to_string();
        let site_code = row.site_code.trim().to_string();
        let function = classify(&shop_code);
        let cost_centre = resolve_cost_centre(&site_code, function, sites)?;

        Ok(Self {
            model_num: row.model_num.map(|m| m.trim().to_string()),
            description: row.description.trim().to_string(),
            quantity: row.quantity,
            health_auth: row.health_auth.trim().to_string(),
            site_code,
            shop_code,
            function,
            cost_centre,
            avg_support_hours: default_hours.for_function(function),
            support_hours_basis: SupportHoursBasis::Default,
        })
    }
}

/// Function category of a shop code.
pub fn classify(shop_code: &str) -> Function {
    Function::from_shop_code(shop_code)
}

/// Cost centre serving `function` at `site_code`. When the site has no cost
/// centre for that function, fall back to clinical, then imaging, then renal.
pub fn resolve_cost_centre(
    site_code: &str,
    function: Function,
    sites: &SiteTable,
) -> BudgetResult<CostCentreName> {
    if sites.get(site_code).is_none() {
        return Err(BudgetError::UnknownSite {
            site_code: site_code.to_string(),
        });
    }

    [function, Function::Clinical, Function::Imaging, Function::Renal]
        .into_iter()
        .find_map(|f| sites.slot(site_code, f))
        .map(|cc| cc.trim().to_string())
        .ok_or_else(|| BudgetError::UnresolvedCostCentre {
            site_code: site_code.to_string(),
        })
}
