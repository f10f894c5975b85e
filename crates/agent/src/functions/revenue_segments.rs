use async_trait::async_trait;
use revrec_core::{NewRevenueSegment, RevenueSegment, SegmentsForContractQuery};
use serde_json::Value;

use crate::args::parse_json_arg;
use crate::backend::{Backend, BackendRequest};
use crate::errors::ToolError;
use crate::tools::Tool;

pub const NO_REVENUE_SEGMENTS: &str = "No revenue segments for this contract";

pub struct AddRevenueSegment;

#[async_trait]
impl Tool for AddRevenueSegment {
    fn name(&self) -> &'static str {
        "addrevenuesegment"
    }

    fn description(&self) -> &'static str {
        "Add a revenue segment to a contract."
    }

    async fn call(&self, backend: &dyn Backend, input: &str) -> Result<String, ToolError> {
        let segment: NewRevenueSegment = parse_json_arg(self.name(), input)?;
        let body = serde_json::to_value(&segment)?;
        let response = backend.send(BackendRequest::post(&["revenuesegments"], body)).await?;
        Ok(response.body)
    }
}

pub struct GetRevenueSegments;

#[async_trait]
impl Tool for GetRevenueSegments {
    fn name(&self) -> &'static str {
        "getrevenuesegments"
    }

    fn description(&self) -> &'static str {
        "List every revenue segment in the database."
    }

    async fn call(&self, backend: &dyn Backend, _input: &str) -> Result<String, ToolError> {
        let response = backend.send(BackendRequest::get(&["revenuesegments"])).await?;
        let segments: Value = response.json()?;
        Ok(segments.to_string())
    }
}

pub struct GetRevenueSegmentsForContract;

#[async_trait]
impl Tool for GetRevenueSegmentsForContract {
    fn name(&self) -> &'static str {
        "getrevenuesegmentsforcontract"
    }

    fn description(&self) -> &'static str {
        "Describe the revenue segments of a contract: names, amounts and timelines."
    }

    async fn call(&self, backend: &dyn Backend, input: &str) -> Result<String, ToolError> {
        let query: SegmentsForContractQuery = parse_json_arg(self.name(), input)?;
        let contract_id = query.contract_id.to_string();
        let response = backend
            .send(BackendRequest::get(&[
                "contracts",
                "id",
                contract_id.as_str(),
                "revenuesegments",
            ]))
            .await?;
        let segments: Vec<RevenueSegment> = response.json()?;
        Ok(describe_segments(&segments))
    }
}

fn describe_segments(segments: &[RevenueSegment]) -> String {
    if segments.is_empty() {
        return NO_REVENUE_SEGMENTS.to_string();
    }

    let names = segments.iter().map(|segment| segment.name.clone()).collect::<Vec<_>>();
    let amounts =
        segments.iter().map(|segment| segment.amount.normalize().to_string()).collect::<Vec<_>>();
    let timelines = segments.iter().map(RevenueSegment::timeline).collect::<Vec<_>>();

    format!(
        "Revenue segments: {}\nAmounts: {}\nTimelines: {}",
        names.join(", "),
        amounts.join(", "),
        timelines.join("; ")
    )
}
