//! Revenue segments split a contract into recognised revenue streams.
//!
//! Recognition and invoicing timing is computed by the backend; the agent only
//! carries the month offsets it needs to describe a segment's timeline.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::contract::ContractId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevenueSegmentId(pub i64);

impl fmt::Display for RevenueSegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueSegment {
    pub id: RevenueSegmentId,
    pub contract_id: ContractId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub delay_rev_start_mths: i32,
    pub delay_inv_from_rev_mths: i32,
    pub length_rev_mths: i32,
    pub invoice_schedule: String,
}

/// Payload for `POST /revenuesegments`; the backend assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRevenueSegment {
    pub contract_id: ContractId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub delay_rev_start_mths: i32,
    pub delay_inv_from_rev_mths: i32,
    pub length_rev_mths: i32,
    pub invoice_schedule: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SegmentsForContractQuery {
    pub contract_id: ContractId,
}

impl RevenueSegment {
    pub fn timeline(&self) -> String {
        format!(
            "{}: revenue from month +{} for {} months, invoiced {} months after revenue ({})",
            self.name,
            self.delay_rev_start_mths,
            self.length_rev_mths,
            self.delay_inv_from_rev_mths,
            self.invoice_schedule
        )
    }
}
