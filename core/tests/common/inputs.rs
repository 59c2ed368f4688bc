//! The on-disk input set, written either as CSV sheet directories or as
//! .xlsx workbooks. Both layouts carry exactly the same cells.

use super::{CLIN_A, CLIN_B, IMG_A, REN_A};
use csv::ReaderBuilder;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::fs;
use std::path::Path;

/// A workbook stem relative to the data directory, a sheet name and the
/// sheet's cells as CSV text.
pub struct InputSheet {
    pub workbook: &'static str,
    pub sheet: &'static str,
    pub csv: String,
}

fn sheet(workbook: &'static str, sheet: &'static str, csv: impl Into<String>) -> InputSheet {
    InputSheet {
        workbook,
        sheet,
        csv: csv.into(),
    }
}

pub fn input_sheets() -> Vec<InputSheet> {
    let sites = "cost_centres_and_sites/cost_centres_and_sites_reference";
    let salaries = "labour_reports/staff_salaries";
    let labour = "labour_reports/tech_labour_hours";
    let history = "actual_partial_oh,budgeted_partial_oh\n10000,12000\n15000,14000\n";

    vec![
        sheet(
            "budget_report_input",
            "User Input",
            "model_num,asset_description,quantity,health_auth,site_code,shop_code\n\
             PM-9,Patient Monitor,4,FHA,SMH,BIOMED\n\
             X-100,CT Scanner,2,FHA,SMH,IMAG\n\
             NEW-1,Infusion Pump,5,FHA,ARH,BIOMED\n\
             ,,,,,\n\
             D-5,Dialysis Machine,3,FHA,SMH,REN\n\
             12345,Suction Pump,2,FHA,SMH,BIOMED\n",
        ),
        sheet(
            sites,
            "Sites",
            format!(
                "site_code,clinical_cost_centre,renal_cost_centre,imaging_cost_centre\n\
                 SMH,{CLIN_A},{REN_A},{IMG_A}\n\
                 ARH,{CLIN_B},,\n"
            ),
        ),
        sheet(
            sites,
            "Cost Centres",
            format!(
                "cost_centre_name,health_authority,function\n\
                 {CLIN_A},FHA,Clinical\n\
                 {CLIN_B},FHA,Clinical\n\
                 {REN_A},FHA,Renal\n\
                 {IMG_A},FHA,Imaging\n"
            ),
        ),
        sheet(
            salaries,
            "Tech Staff Salary Sched",
            "level,year1_hourly_wage,year6_hourly_wage\n\
             7,20.00,25.00\n\
             8,26.00,30.00\n\
             9,30.00,35.00\n\
             10,34.00,40.00\n\
             12,44.00,50.00\n",
        ),
        sheet(
            salaries,
            "Regional Staff",
            "name,title,min_salary,max_salary,clinical_renal_resp,imaging_resp\n\
             Alex Chen,Regional Manager,\"$80,000\",\"$100,000\",FHA,\n\
             Sam Patel,Imaging Lead,80000,100000,,FHA\n",
        ),
        sheet(
            salaries,
            "Tech Staff",
            format!(
                "cost_centre_name,level8,level9,level10,level12\n\
                 {CLIN_A},2,,1,\n\
                 {CLIN_B},,1,,\n\
                 {REN_A},1,,,\n\
                 {IMG_A},,,,1\n"
            ),
        ),
        sheet(salaries, "Benefits Multiplier", "Benefits Multiplier,1.2\n"),
        sheet(
            labour,
            "General Summary",
            "hours_paid_per_year,semi_prod_days_per_year,avg_hours_per_day\n1950,220,7.5\n",
        ),
        sheet(labour, "Vacation Summary", "level,avg_vac\n8,15\n9,20\n10,20\n12,25\n"),
        sheet("financial_reports/clinical/FHA", CLIN_A, history),
        sheet("financial_reports/clinical/FHA", CLIN_B, history),
        sheet("financial_reports/renal/FHA", REN_A, history),
        sheet("financial_reports/imaging/FHA", IMG_A, history),
        sheet(
            "wo_reports/asset_support_hours_reference",
            "Support Hours",
            "asset_description,model_number,avg_support_hour_per_model,count_asset\n\
             Infusion Pump,M1,2.0,10\n\
             Infusion Pump,M2,4.0,30\n\
             CT Scanner,X-100,12.0,1\n\
             CT Scanner,X-100,14.0,2\n\
             Dialysis Machine,D-5,6.0,4\n\
             Patient Monitor,PM-9,3.0,8\n\
             Suction Pump,12345,1.5,6\n\
             Suction Pump,12345,2.5,2\n",
        ),
    ]
}

/// Every workbook as a directory of `<sheet>.csv` files.
pub fn write_csv_inputs(root: &Path) {
    for input in input_sheets() {
        let dir = root.join(input.workbook);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.csv", input.sheet)), &input.csv).unwrap();
    }
}

/// Every workbook as `<stem>.xlsx`. Cells that parse as numbers are written
/// as numeric cells, the way spreadsheet users enter them.
pub fn write_xlsx_inputs(root: &Path) {
    let sheets = input_sheets();
    let mut stems: Vec<&str> = sheets.iter().map(|s| s.workbook).collect();
    stems.dedup();

    for stem in stems {
        let mut book = XlsxWorkbook::new();
        for input in sheets.iter().filter(|s| s.workbook == stem) {
            let worksheet = book.add_worksheet();
            worksheet.set_name(input.sheet).unwrap();
            for (row, cells) in csv_rows(&input.csv).iter().enumerate() {
                for (col, value) in cells.iter().enumerate() {
                    let (row, col) = (row as u32, col as u16);
                    if value.is_empty() {
                        continue;
                    }
                    match value.parse::<f64>() {
                        Ok(number) => worksheet.write_number(row, col, number).unwrap(),
                        Err(_) => worksheet.write_string(row, col, value).unwrap(),
                    };
                }
            }
        }
        let path = root.join(format!("{stem}.xlsx"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        book.save(&path).unwrap();
    }
}

fn csv_rows(text: &str) -> Vec<Vec<String>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}
