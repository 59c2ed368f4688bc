//! Asset input rows: the equipment the user is budgeting for.

use super::sheet::Sheet;
use crate::error::BudgetResult;

#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub model_num: Option<String>,
    pub description: String,
    pub quantity: f64,
    pub health_auth: String,
    pub site_code: String,
    pub shop_code: String,
}

pub fn read_asset_rows(sheet: &Sheet) -> BudgetResult<Vec<AssetRow>> {
    sheet.require_columns(&[
        "model_num",
        "asset_description",
        "quantity",
        "health_auth",
        "site_code",
        "shop_code",
    ])?;

    sheet
        .records()
        .map(|record| {
            Ok(AssetRow {
                model_num: record.opt_text("model_num")?.map(str::to_string),
                description: record.text("asset_description")?.to_string(),
                quantity: record.number("quantity")?,
                health_auth: record.text("health_auth")?.to_string(),
                site_code: record.text("site_code")?.to_string(),
                shop_code: record.text("shop_code")?.to_string(),
            })
        })
        .collect()
}
