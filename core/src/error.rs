use crate::types::Function;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Workbook '{path}' not found")]
    WorkbookNotFound { path: String },

    #[error("Unsupported workbook format: '{path}' (expected .xlsx, .xls, .ods or a directory of .csv sheets)")]
    UnsupportedFormat { path: String },

    #[error("Sheet '{sheet}' not found in workbook '{workbook}'")]
    SheetNotFound { workbook: String, sheet: String },

    #[error("Column '{column}' missing from sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Sheet '{sheet}' row {row}: column '{column}' is empty")]
    MissingValue {
        sheet: String,
        row: usize,
        column: String,
    },

    #[error("Sheet '{sheet}' row {row}: cannot parse '{value}' in column '{column}' as a number")]
    InvalidNumber {
        sheet: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("Unknown function '{0}' (expected clinical, renal or imaging)")]
    UnknownFunction(String),

    #[error("Site '{site_code}' not found in the site reference")]
    UnknownSite { site_code: String },

    #[error("Site '{site_code}' has no clinical, renal or imaging cost centre")]
    UnresolvedCostCentre { site_code: String },

    #[error("Health authority '{health_auth}' not found in the cost centre reference")]
    UnknownHealthAuthority { health_auth: String },

    #[error("No wage defined for technician level {level}")]
    MissingWage { level: u8 },

    #[error("No vacation days defined for technician level {level}")]
    MissingVacation { level: u8 },

    #[error("Cost centre '{cost_centre}' not found in the technician staffing table")]
    MissingStaffingRow { cost_centre: String },

    #[error("Regional staff '{name}' has no cost centre oversight to split compensation over")]
    EmptyOversight { name: String },

    #[error("Cost centre '{cost_centre}' has no technician staff")]
    EmptyTechRoster { cost_centre: String },

    #[error("Cost centre '{cost_centre}' has non-positive productive technician labour hours ({productive_hours:.2})")]
    NoProductiveHours {
        cost_centre: String,
        productive_hours: f64,
    },

    #[error("No financial history for cost centre '{cost_centre}' ({function} / {health_auth})")]
    EmptyFinancialHistory {
        cost_centre: String,
        function: Function,
        health_auth: String,
    },

    #[error("No support hour history for model '{model_num}' or description '{description}'")]
    NoSupportHistory {
        model_num: String,
        description: String,
    },

    #[error("Cost centres '{cost_centre}' and '{previous}' would both be written to report file '{file}'")]
    ReportFileCollision {
        cost_centre: String,
        previous: String,
        file: String,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type BudgetResult<T> = Result<T, BudgetError>;
