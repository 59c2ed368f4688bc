//! Shared in-memory fixtures: one health authority ("FHA") with two clinical
//! cost centres, one renal and one imaging.
#![allow(dead_code)]

pub mod inputs;

use cts_core::{
    config::BudgetConfig,
    store::{
        AssetRow, CostCentreResponsibility, InMemoryFinancials, LabourHours, OverheadYear,
        ReferenceData, RegionalStaffRecord, SiteTable, StaffingTable, WageSchedule,
        WorkOrderHistory, WorkOrderRecord,
    },
    types::{Function, TechLevel},
};
use std::collections::BTreeMap;

pub const CLIN_A: &str = "FHA Clinical Surrey";
pub const CLIN_B: &str = "FHA Clinical Abbotsford";
pub const REN_A: &str = "FHA Renal Surrey";
pub const IMG_A: &str = "FHA Imaging Surrey";

pub const BENEFITS: f64 = 1.2;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sites() -> SiteTable {
    let mut sites = SiteTable::default();
    sites.insert(
        "SMH",
        [Some(CLIN_A.into()), Some(REN_A.into()), Some(IMG_A.into())],
    );
    sites.insert("ARH", [Some(CLIN_B.into()), None, None]);
    sites.insert("RENAL_ONLY", [None, Some(REN_A.into()), None]);
    sites.insert("IMAGING_ONLY", [None, None, Some(IMG_A.into())]);
    sites.insert("EMPTY", [None, None, None]);
    sites
}

pub fn responsibility() -> CostCentreResponsibility {
    let mut cc_ref = CostCentreResponsibility::default();
    cc_ref.add(CLIN_A, "FHA", Function::Clinical);
    cc_ref.add(CLIN_B, "FHA", Function::Clinical);
    cc_ref.add(REN_A, "FHA", Function::Renal);
    cc_ref.add(IMG_A, "FHA", Function::Imaging);
    cc_ref
}

pub fn wages() -> WageSchedule {
    let mut wages = WageSchedule::default();
    wages.set(TechLevel::Level8, 30.0);
    wages.set(TechLevel::Level9, 35.0);
    wages.set(TechLevel::Level10, 40.0);
    wages.set(TechLevel::Level12, 50.0);
    wages
}

pub fn headcounts(levels: &[(TechLevel, f64)]) -> BTreeMap<TechLevel, f64> {
    levels.iter().copied().collect()
}

pub fn staffing() -> StaffingTable {
    let mut staffing = StaffingTable::default();
    staffing.insert(
        CLIN_A,
        headcounts(&[(TechLevel::Level8, 2.0), (TechLevel::Level10, 1.0)]),
    );
    staffing.insert(CLIN_B, headcounts(&[(TechLevel::Level9, 1.0)]));
    staffing.insert(REN_A, headcounts(&[(TechLevel::Level8, 1.0)]));
    staffing.insert(IMG_A, headcounts(&[(TechLevel::Level12, 1.0)]));
    staffing
}

pub fn regional_staff_record(
    name: &str,
    clinical_renal_resp: Option<&str>,
    imaging_resp: Option<&str>,
) -> RegionalStaffRecord {
    RegionalStaffRecord {
        name: name.into(),
        title: "Regional Manager".into(),
        min_salary: 80_000.0,
        max_salary: 100_000.0,
        clinical_renal_resp: clinical_renal_resp.map(str::to_string),
        imaging_resp: imaging_resp.map(str::to_string),
    }
}

pub fn labour() -> LabourHours {
    LabourHours::new(1950.0, 220.0, 7.5)
        .with_vacation(TechLevel::Level8, 15.0)
        .with_vacation(TechLevel::Level9, 20.0)
        .with_vacation(TechLevel::Level10, 20.0)
        .with_vacation(TechLevel::Level12, 25.0)
}

pub fn work_order(description: &str, model: Option<&str>, hours: f64, count: f64) -> WorkOrderRecord {
    WorkOrderRecord {
        asset_description: description.into(),
        model_number: model.map(str::to_string),
        avg_support_hour_per_model: hours,
        count_asset: count,
    }
}

pub fn work_orders() -> WorkOrderHistory {
    WorkOrderHistory::new(vec![
        work_order("Infusion Pump", Some("M1"), 2.0, 10.0),
        work_order("Infusion Pump", Some("M2"), 4.0, 30.0),
        work_order("CT Scanner", Some("X-100"), 12.0, 1.0),
        work_order("CT Scanner", Some("X-100"), 14.0, 2.0),
        work_order("Dialysis Machine", Some("D-5"), 6.0, 4.0),
        work_order("Patient Monitor", Some("PM-9"), 3.0, 8.0),
    ])
}

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        sites: sites(),
        responsibility: responsibility(),
        wages: wages(),
        regional_staff: vec![
            regional_staff_record("Alex Chen", Some("FHA"), None),
            regional_staff_record("Sam Patel", None, Some("FHA")),
        ],
        staffing: staffing(),
        benefits_multiplier: BENEFITS,
        labour: labour(),
        work_orders: work_orders(),
    }
}

pub fn financials() -> InMemoryFinancials {
    let mut financials = InMemoryFinancials::default();
    let history = || {
        vec![
            OverheadYear::new(10_000.0, 12_000.0),
            OverheadYear::new(15_000.0, 14_000.0),
        ]
    };
    financials.insert(Function::Clinical, "FHA", CLIN_A, history());
    financials.insert(Function::Clinical, "FHA", CLIN_B, history());
    financials.insert(Function::Renal, "FHA", REN_A, history());
    financials.insert(Function::Imaging, "FHA", IMG_A, history());
    financials
}

pub fn asset_row(model: Option<&str>, description: &str, quantity: f64, site: &str, shop: &str) -> AssetRow {
    AssetRow {
        model_num: model.map(str::to_string),
        description: description.into(),
        quantity,
        health_auth: "FHA".into(),
        site_code: site.into(),
        shop_code: shop.into(),
    }
}

pub fn config() -> BudgetConfig {
    BudgetConfig::default_test()
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{what}: got {actual}, expected {expected}"
    );
}
