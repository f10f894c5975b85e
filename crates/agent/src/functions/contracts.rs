use async_trait::async_trait;
use revrec_core::{Contract, ContractsForCustomerQuery, NewContract};
use serde_json::Value;

use crate::args::parse_json_arg;
use crate::backend::{Backend, BackendRequest};
use crate::errors::ToolError;
use crate::tools::Tool;

pub const NO_CONTRACTS: &str = "No contracts for this customer";

pub struct AddContract;

#[async_trait]
impl Tool for AddContract {
    fn name(&self) -> &'static str {
        "addcontract"
    }

    fn description(&self) -> &'static str {
        "Add a contract to the database."
    }

    async fn call(&self, backend: &dyn Backend, input: &str) -> Result<String, ToolError> {
        let contract: NewContract = parse_json_arg(self.name(), input)?;
        let body = serde_json::to_value(&contract)?;
        let response = backend.send(BackendRequest::post(&["contracts"], body)).await?;
        Ok(response.body)
    }
}

pub struct GetContracts;

#[async_trait]
impl Tool for GetContracts {
    fn name(&self) -> &'static str {
        "getcontracts"
    }

    fn description(&self) -> &'static str {
        "List every contract in the database."
    }

    async fn call(&self, backend: &dyn Backend, _input: &str) -> Result<String, ToolError> {
        let response = backend.send(BackendRequest::get(&["contracts"])).await?;
        let contracts: Value = response.json()?;
        Ok(contracts.to_string())
    }
}

pub struct GetContractsForCustomer;

#[async_trait]
impl Tool for GetContractsForCustomer {
    fn name(&self) -> &'static str {
        "getcontractsforcustomer"
    }

    fn description(&self) -> &'static str {
        "List the contract IDs booked for a customer."
    }

    async fn call(&self, backend: &dyn Backend, input: &str) -> Result<String, ToolError> {
        let query: ContractsForCustomerQuery = parse_json_arg(self.name(), input)?;
        let customer_id = query.customer_id.to_string();
        let response = backend
            .send(BackendRequest::get(&["customers", "id", customer_id.as_str(), "contracts"]))
            .await?;
        let contracts: Vec<Contract> = response.json()?;
        Ok(describe_contract_ids(&contracts))
    }
}

fn describe_contract_ids(contracts: &[Contract]) -> String {
    if contracts.is_empty() {
        return NO_CONTRACTS.to_string();
    }

    let ids = contracts.iter().map(|contract| contract.id.to_string()).collect::<Vec<_>>();
    format!("The contract IDs are {}", ids.join(", "))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AddContract, GetContracts, GetContractsForCustomer, NO_CONTRACTS};
    use crate::backend::Method;
    use crate::errors::ToolError;
    use crate::testing::RecordingBackend;
    use crate::tools::Tool;

    #[tokio::test]
    async fn addcontract_posts_typed_body() {
        let backend = RecordingBackend::default().respond(
            Method::Post,
            "/contracts",
            201,
            "Contract 1 was added for customer Alpha with booked month 5",
        );

        let output = AddContract
            .call(&backend, "{'customer_id': 6, 'booked_month': 5}")
            .await
            .expect("call should succeed");

        assert_eq!(output, "Contract 1 was added for customer Alpha with booked month 5");
        let request = backend.last_request().expect("request recorded");
        assert_eq!(request.path(), "/contracts");
        assert_eq!(request.body, Some(json!({ "customer_id": 6, "booked_month": 5 })));
    }

    #[tokio::test]
    async fn addcontract_rejects_missing_month_without_calling_backend() {
        let backend = RecordingBackend::default();

        let result = AddContract.call(&backend, r#"{"customer_id": 6}"#).await;

        assert!(matches!(result, Err(ToolError::InvalidArgument { function: "addcontract", .. })));
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn getcontracts_renders_parsed_json() {
        let backend = RecordingBackend::default().respond(
            Method::Get,
            "/contracts",
            200,
            "[\n  {\"id\": 1, \"customer_id\": 6, \"booked_month\": 5}\n]",
        );

        let output = GetContracts.call(&backend, "").await.expect("call should succeed");
        assert_eq!(output, r#"[{"id":1,"customer_id":6,"booked_month":5}]"#);
    }

    #[tokio::test]
    async fn getcontractsforcustomer_lists_ids() {
        let backend = RecordingBackend::default().respond(
            Method::Get,
            "/customers/id/6/contracts",
            200,
            r#"[{"id": 1, "customer_id": 6, "booked_month": 5},
                {"id": 3, "customer_id": 6, "booked_month": 9}]"#,
        );

        let output = GetContractsForCustomer
            .call(&backend, r#"{"customer_id": 6}"#)
            .await
            .expect("call should succeed");
        assert_eq!(output, "The contract IDs are 1, 3");
    }

    #[tokio::test]
    async fn getcontractsforcustomer_reports_empty_list() {
        let backend = RecordingBackend::default().respond(
            Method::Get,
            "/customers/id/7/contracts",
            200,
            "[]",
        );

        let output = GetContractsForCustomer
            .call(&backend, r#"{"customer_id": 7}"#)
            .await
            .expect("call should succeed");
        assert_eq!(output, NO_CONTRACTS);
    }
}
