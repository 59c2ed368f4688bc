//! Workbook access: spreadsheets via calamine, CSV directories via csv.
//!
//! A workbook is either a spreadsheet file (.xlsx/.xls/.ods) or a
//! directory whose sheets are `<sheet name>.csv` files. Every cell is
//! read as a trimmed string; an empty cell is a missing value.

use crate::error::{BudgetError, BudgetResult};
use calamine::{open_workbook_auto, Reader, Sheets};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

enum Source {
    Spreadsheet(Sheets<BufReader<File>>),
    CsvDir(PathBuf),
}

pub struct Workbook {
    name: String,
    source: Source,
}

impl Workbook {
    /// Open a spreadsheet file or a directory of CSV sheets.
    pub fn open(path: &Path) -> BudgetResult<Self> {
        let name = path.display().to_string();
        if path.is_dir() {
            return Ok(Self {
                name,
                source: Source::CsvDir(path.to_path_buf()),
            });
        }
        if !path.exists() {
            return Err(BudgetError::WorkbookNotFound { path: name });
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            return Err(BudgetError::UnsupportedFormat { path: name });
        }

        let sheets = open_workbook_auto(path)?;
        Ok(Self {
            name,
            source: Source::Spreadsheet(sheets),
        })
    }

    /// Find a workbook by path stem: the path itself if it exists, otherwise
    /// `<stem>.<ext>` for each supported spreadsheet extension.
    pub fn locate(stem: &Path) -> BudgetResult<Self> {
        if stem.exists() {
            return Self::open(stem);
        }
        for ext in SPREADSHEET_EXTENSIONS {
            let mut candidate = stem.as_os_str().to_owned();
            candidate.push(".");
            candidate.push(ext);
            let candidate = PathBuf::from(candidate);
            if candidate.is_file() {
                return Self::open(&candidate);
            }
        }
        Err(BudgetError::WorkbookNotFound {
            path: stem.display().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sheet(&mut self, sheet_name: &str) -> BudgetResult<Sheet> {
        let cells = match &mut self.source {
            Source::Spreadsheet(sheets) => {
                if !sheets.sheet_names().iter().any(|s| s == sheet_name) {
                    return Err(sheet_not_found(&self.name, sheet_name));
                }
                let range = sheets.worksheet_range(sheet_name)?;
                // The range starts at the first used cell, not at A1.
                let (first_row, first_col) = range.start().unwrap_or((0, 0));
                let mut cells: Vec<Vec<String>> = vec![Vec::new(); first_row as usize];
                for row in range.rows() {
                    let mut values = vec![String::new(); first_col as usize];
                    values.extend(row.iter().map(|c| c.to_string().trim().to_string()));
                    cells.push(values);
                }
                cells
            }
            Source::CsvDir(dir) => {
                let path = dir.join(format!("{sheet_name}.csv"));
                if !path.is_file() {
                    return Err(sheet_not_found(&self.name, sheet_name));
                }
                read_csv_cells(&path)?
            }
        };
        Ok(Sheet::from_rows(sheet_name, cells))
    }
}

fn sheet_not_found(workbook: &str, sheet_name: &str) -> BudgetError {
    BudgetError::SheetNotFound {
        workbook: workbook.to_string(),
        sheet: sheet_name.to_string(),
    }
}

fn read_csv_cells(path: &Path) -> BudgetResult<Vec<Vec<String>>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|v| v.trim().to_string()).collect());
    }
    Ok(rows)
}

/// One worksheet. The first row is the header row for `records()`.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    cells: Vec<Vec<String>>,
}

impl Sheet {
    pub fn from_rows(name: &str, cells: Vec<Vec<String>>) -> Self {
        Self {
            name: name.to_string(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional access for header-less sheets. Empty cells are `None`.
    pub fn raw_cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn headers(&self) -> &[String] {
        self.cells.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fail early if any of `columns` is absent from the header row.
    pub fn require_columns(&self, columns: &[&str]) -> BudgetResult<()> {
        for column in columns {
            if !self.headers().iter().any(|h| h == column) {
                return Err(BudgetError::MissingColumn {
                    sheet: self.name.clone(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Data rows below the header, skipping rows that are entirely blank.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        let headers = self.headers();
        self.cells
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, cells)| cells.iter().any(|c| !c.is_empty()))
            .map(move |(idx, cells)| Record {
                sheet: &self.name,
                row: idx + 1,
                headers,
                cells,
            })
    }
}

/// A data row with typed, column-named accessors.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    sheet: &'a str,
    row: usize,
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> Record<'a> {
    /// 1-based spreadsheet row number, header included.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn opt_text(&self, column: &str) -> BudgetResult<Option<&'a str>> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| BudgetError::MissingColumn {
                sheet: self.sheet.to_string(),
                column: column.to_string(),
            })?;
        Ok(self
            .cells
            .get(idx)
            .map(String::as_str)
            .filter(|v| !v.is_empty()))
    }

    pub fn text(&self, column: &str) -> BudgetResult<&'a str> {
        self.opt_text(column)?
            .ok_or_else(|| BudgetError::MissingValue {
                sheet: self.sheet.to_string(),
                row: self.row,
                column: column.to_string(),
            })
    }

    pub fn opt_number(&self, column: &str) -> BudgetResult<Option<f64>> {
        match self.opt_text(column)? {
            None => Ok(None),
            Some(raw) => parse_number(raw)
                .map(Some)
                .ok_or_else(|| BudgetError::InvalidNumber {
                    sheet: self.sheet.to_string(),
                    row: self.row,
                    column: column.to_string(),
                    value: raw.to_string(),
                }),
        }
    }

    pub fn number(&self, column: &str) -> BudgetResult<f64> {
        self.opt_number(column)?
            .ok_or_else(|| BudgetError::MissingValue {
                sheet: self.sheet.to_string(),
                row: self.row,
                column: column.to_string(),
            })
    }
}

/// Parse a spreadsheet number. Accepts thousands separators and a leading `$`.
/// Non-finite values such as `NaN` never parse.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
