//! The callback functions registered with the agent framework.
//!
//! Each function issues one backend request. Functions that create or mutate
//! records relay the backend's response text verbatim; lookups decode JSON and
//! reshape it into a short sentence for the conversational reply.

pub mod contracts;
pub mod customers;
pub mod maintenance;
pub mod revenue_segments;

use crate::errors::ToolError;
use crate::tools::ToolRegistry;

pub fn register_all(registry: &mut ToolRegistry) -> Result<(), ToolError> {
    registry.register(customers::AddCustomer)?;
    registry.register(customers::GetCustomers)?;
    registry.register(customers::GetCustomerByName)?;
    registry.register(customers::GetCustomerById)?;
    registry.register(contracts::AddContract)?;
    registry.register(contracts::GetContracts)?;
    registry.register(contracts::GetContractsForCustomer)?;
    registry.register(revenue_segments::AddRevenueSegment)?;
    registry.register(revenue_segments::GetRevenueSegments)?;
    registry.register(revenue_segments::GetRevenueSegmentsForContract)?;
    registry.register(maintenance::ClearDatabase)?;
    registry.register(maintenance::PopulateDataframe)?;
    Ok(())
}

pub fn default_registry() -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::default();
    register_all(&mut registry)?;
    Ok(registry)
}
