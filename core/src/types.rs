//! Shared primitive types used across the costing model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cost centre name. Unique key for a cost centre across a run.
pub type CostCentreName = String;

/// A health authority code, e.g. "FHA".
pub type HealthAuthority = String;

/// Function category of an asset or cost centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Function {
    Clinical,
    Renal,
    Imaging,
}

impl Function {
    pub const ALL: [Function; 3] = [Function::Clinical, Function::Renal, Function::Imaging];

    /// Classify a shop code. Anything not imaging or renal is clinical.
    pub fn from_shop_code(shop_code: &str) -> Self {
        match shop_code.trim() {
            "IMAG" | "IMAG0" | "IMAG1" => Function::Imaging,
            "REN" | "FHA_R" => Function::Renal,
            _ => Function::Clinical,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clinical" => Some(Function::Clinical),
            "renal" => Some(Function::Renal),
            "imaging" => Some(Function::Imaging),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Function::Clinical => "clinical",
            Function::Renal => "renal",
            Function::Imaging => "imaging",
        }
    }

    /// Position of this function in a site's `[clinical, renal, imaging]` list.
    pub fn site_slot(&self) -> usize {
        match self {
            Function::Clinical => 0,
            Function::Renal => 1,
            Function::Imaging => 2,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Technician staffing tier. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TechLevel {
    Level8,
    Level9,
    Level10,
    Level12,
}

impl TechLevel {
    pub const ALL: [TechLevel; 4] = [
        TechLevel::Level8,
        TechLevel::Level9,
        TechLevel::Level10,
        TechLevel::Level12,
    ];

    pub fn number(&self) -> u8 {
        match self {
            TechLevel::Level8 => 8,
            TechLevel::Level9 => 9,
            TechLevel::Level10 => 10,
            TechLevel::Level12 => 12,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        TechLevel::ALL.into_iter().find(|l| l.number() == n)
    }

    /// Staffing-table column holding the headcount for this level.
    pub fn staffing_column(&self) -> &'static str {
        match self {
            TechLevel::Level8 => "level8",
            TechLevel::Level9 => "level9",
            TechLevel::Level10 => "level10",
            TechLevel::Level12 => "level12",
        }
    }
}

impl fmt::Display for TechLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.number())
    }
}
