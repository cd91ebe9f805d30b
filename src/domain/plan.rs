use crate::error::FeeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the student intends to pay: installments or a single lump sum.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPlan {
    #[default]
    Standard,
    Upfront,
}

impl FromStr for PaymentPlan {
    type Err = FeeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "upfront" => Ok(Self::Upfront),
            other => Err(FeeError::InvalidInput(format!(
                "unknown payment plan '{other}'"
            ))),
        }
    }
}

impl fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Upfront => f.write_str("upfront"),
        }
    }
}
