//! Support hours from work-order history.

mod common;

use common::*;
use cts_core::{
    asset::{Asset, SupportHoursBasis},
    config::DefaultSupportHours,
    error::BudgetError,
    store::WorkOrderHistory,
    support_hours::resolve_support_hours,
};

fn asset(model: Option<&str>, description: &str) -> Asset {
    Asset::new(
        asset_row(model, description, 1.0, "SMH", "BIOMED"),
        &sites(),
        &DefaultSupportHours::default(),
    )
    .unwrap()
}

/// A model with history uses the plain mean of its work-order rows.
#[test]
fn model_history_is_averaged() {
    let (hours, basis) = resolve_support_hours(&asset(Some("X-100"), "CT Scanner"), &work_orders()).unwrap();
    assert_close(hours, 13.0, "model mean");
    assert_eq!(basis, SupportHoursBasis::ModelHistory);
}

/// Model history wins even when the description would weight differently.
#[test]
fn model_match_takes_precedence_over_description() {
    let (hours, basis) =
        resolve_support_hours(&asset(Some("M1"), "Infusion Pump"), &work_orders()).unwrap();
    assert_close(hours, 2.0, "model M1");
    assert_eq!(basis, SupportHoursBasis::ModelHistory);
}

/// Unknown model: M1 (2.0 h, 10 units) and M2 (4.0 h, 30 units) weight to 3.5 h.
#[test]
fn description_fallback_weights_by_units() {
    let (hours, basis) =
        resolve_support_hours(&asset(Some("NEW-1"), "Infusion Pump"), &work_orders()).unwrap();
    assert_close(hours, 2.0 * (10.0 / 40.0) + 4.0 * (30.0 / 40.0), "weighted hours");
    assert_close(hours, 3.5, "weighted hours");
    assert_eq!(basis, SupportHoursBasis::DescriptionWeighted);
}

/// An asset with no model number goes straight to the description.
#[test]
fn asset_without_model_uses_description() {
    let (hours, basis) = resolve_support_hours(&asset(None, "Infusion Pump"), &work_orders()).unwrap();
    assert_close(hours, 3.5, "weighted hours");
    assert_eq!(basis, SupportHoursBasis::DescriptionWeighted);
}

/// Several rows for one model are averaged before weighting.
#[test]
fn repeated_model_rows_are_grouped() {
    let history = WorkOrderHistory::new(vec![
        work_order("Ventilator", Some("V1"), 2.0, 5.0),
        work_order("Ventilator", Some("V1"), 4.0, 5.0),
        work_order("Ventilator", Some("V2"), 6.0, 10.0),
        work_order("Ventilator", None, 100.0, 100.0),
    ]);
    let (hours, _) = resolve_support_hours(&asset(None, "Ventilator"), &history).unwrap();
    // V1: mean 3.0 over 10 units, V2: 6.0 over 10 units; the unmodelled row is ignored.
    assert_close(hours, 3.0 * 0.5 + 6.0 * 0.5, "grouped hours");
}

/// Neither model nor description in history is fatal.
#[test]
fn no_history_is_fatal() {
    let err = resolve_support_hours(&asset(Some("ZZZ"), "Robot Arm"), &work_orders()).unwrap_err();
    assert!(
        matches!(err, BudgetError::NoSupportHistory { ref model_num, ref description }
            if model_num == "ZZZ" && description == "Robot Arm"),
        "unexpected error: {err}"
    );
}

/// A description whose history carries zero units cannot be weighted.
#[test]
fn zero_unit_history_is_fatal() {
    let history = WorkOrderHistory::new(vec![work_order("Scale", Some("S1"), 1.0, 0.0)]);
    let err = resolve_support_hours(&asset(None, "Scale"), &history).unwrap_err();
    assert!(matches!(err, BudgetError::NoSupportHistory { .. }), "unexpected error: {err}");
}
