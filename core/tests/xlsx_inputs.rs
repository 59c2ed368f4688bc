//! The same inputs read from .xlsx workbooks instead of CSV directories.

mod common;

use common::{
    assert_close, init_logging,
    inputs::{write_csv_inputs, write_xlsx_inputs},
    CLIN_A,
};
use cts_core::{
    config::BudgetConfig,
    engine::run_budget,
    report::BudgetReport,
    store::{read_asset_rows, LabourHours, StaffingTable, Workbook},
    types::TechLevel,
};
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tempfile::TempDir;

fn run_with(write: fn(&std::path::Path)) -> BudgetReport {
    init_logging();
    let dir = TempDir::new().unwrap();
    write(dir.path());
    run_budget(BudgetConfig::default_test(), dir.path()).unwrap()
}

/// A run over spreadsheets gives the same figures as the CSV run.
#[test]
fn xlsx_run_matches_csv_run() {
    let xlsx = run_with(write_xlsx_inputs);
    let csv = run_with(write_csv_inputs);

    assert_eq!(xlsx.cost_centres.len(), csv.cost_centres.len());
    for (x, c) in xlsx.cost_centres.iter().zip(&csv.cost_centres) {
        assert_eq!(x.name, c.name);
        assert_close(x.pohr, c.pohr, "POHR");
        assert_close(x.weighted_avg_tech_hourly_wage, c.weighted_avg_tech_hourly_wage, "weighted wage");
        assert_close(x.regional_staff_oh, c.regional_staff_oh, "regional OH");
        assert_close(x.net_cost_to_service, c.net_cost_to_service, "net cost");

        let x_levels: Vec<_> = x.tech_staff.iter().map(|s| (s.level, s.headcount)).collect();
        let c_levels: Vec<_> = c.tech_staff.iter().map(|s| (s.level, s.headcount)).collect();
        assert_eq!(x_levels, c_levels, "tech staff in {}", x.name);

        for (xa, ca) in x.assets.iter().zip(&c.assets) {
            assert_eq!(xa.model_num, ca.model_num);
            assert_eq!(xa.support_hours_basis, ca.support_hours_basis);
            assert_close(xa.avg_support_hours, ca.avg_support_hours, "support hours");
        }
    }
    assert_close(xlsx.total_cost, csv.total_cost, "total cost");

    let suction = &xlsx.cost_centre(CLIN_A).unwrap().assets[1];
    assert_eq!(suction.model_num.as_deref(), Some("12345"));
    assert_close(suction.avg_support_hours, 2.0, "suction pump hours");
}

/// Numeric cells read back as the text a user typed.
#[test]
fn numeric_cells_read_as_plain_text() {
    let dir = TempDir::new().unwrap();
    write_xlsx_inputs(dir.path());

    let mut book = Workbook::locate(&dir.path().join("budget_report_input")).unwrap();
    assert!(book.name().ends_with(".xlsx"), "opened {}", book.name());
    let rows = read_asset_rows(&book.sheet("User Input").unwrap()).unwrap();
    assert_eq!(rows.len(), 5, "blank row skipped");
    let suction = rows.iter().find(|r| r.description == "Suction Pump").unwrap();
    assert_eq!(suction.model_num.as_deref(), Some("12345"));
    assert_eq!(suction.quantity, 2.0);

    let mut salaries = Workbook::locate(&dir.path().join("labour_reports/staff_salaries")).unwrap();
    let staffing = StaffingTable::from_sheet(&salaries.sheet("Tech Staff").unwrap()).unwrap();
    let clin_a = staffing.headcounts(CLIN_A).unwrap();
    assert_eq!(clin_a.get(&TechLevel::Level8), Some(&2.0));
    assert_eq!(clin_a.get(&TechLevel::Level10), Some(&1.0));
    assert_eq!(clin_a.get(&TechLevel::Level9), None);

    let mut labour = Workbook::locate(&dir.path().join("labour_reports/tech_labour_hours")).unwrap();
    let hours = LabourHours::from_sheets(
        &labour.sheet("General Summary").unwrap(),
        &labour.sheet("Vacation Summary").unwrap(),
    )
    .unwrap();
    assert_eq!(hours.hours_paid_per_year, 1950.0);
    assert_eq!(hours.vacation_days(TechLevel::Level8).unwrap(), 15.0);
    assert_eq!(hours.vacation_days(TechLevel::Level12).unwrap(), 25.0);
}

/// A sheet whose first used cell is not A1 keeps its cell positions.
#[test]
fn sheets_starting_below_a1_keep_positions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("offset.xlsx");
    let mut xlsx = XlsxWorkbook::new();
    let ws = xlsx.add_worksheet();
    ws.set_name("Benefits Multiplier").unwrap();
    ws.write_string(1, 1, "Benefits Multiplier").unwrap();
    ws.write_number(1, 2, 1.25).unwrap();
    xlsx.save(&path).unwrap();

    let mut book = Workbook::open(&path).unwrap();
    let sheet = book.sheet("Benefits Multiplier").unwrap();
    assert_eq!(sheet.raw_cell(0, 0), None);
    assert_eq!(sheet.raw_cell(1, 0), None);
    assert_eq!(sheet.raw_cell(1, 1), Some("Benefits Multiplier"));
    assert_eq!(sheet.raw_cell(1, 2), Some("1.25"));
}

/// A missing worksheet in a spreadsheet is reported like a missing CSV sheet.
#[test]
fn missing_xlsx_sheet_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_xlsx_inputs(dir.path());
    let mut book = Workbook::locate(&dir.path().join("budget_report_input")).unwrap();
    let err = book.sheet("Nope").unwrap_err();
    assert!(
        matches!(err, cts_core::error::BudgetError::SheetNotFound { ref sheet, .. } if sheet == "Nope"),
        "unexpected error: {err}"
    );
}
