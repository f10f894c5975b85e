use async_trait::async_trait;
use revrec_core::{Customer, CustomerIdQuery, CustomerNameQuery, NewCustomer};

use crate::args::{parse_json_arg, parse_text_arg};
use crate::backend::{Backend, BackendRequest};
use crate::errors::ToolError;
use crate::tools::Tool;

pub struct AddCustomer;

#[async_trait]
impl Tool for AddCustomer {
    fn name(&self) -> &'static str {
        "addcustomer"
    }

    fn description(&self) -> &'static str {
        "Add a customer to the database."
    }

    async fn call(&self, backend: &dyn Backend, input: &str) -> Result<String, ToolError> {
        let customer = NewCustomer { name: parse_text_arg(self.name(), input)? };
        let body = serde_json::to_value(&customer)?;
        let response = backend.send(BackendRequest::post(&["customers"], body)).await?;
        Ok(response.body)
    }
}

pub struct GetCustomers;

#[async_trait]
impl Tool for GetCustomers {
    fn name(&self) -> &'static str {
        "getcustomers"
    }

    fn description(&self) -> &'static str {
        "List the names of all customers."
    }

    async fn call(&self, backend: &dyn Backend, _input: &str) -> Result<String, ToolError> {
        let response = backend.send(BackendRequest::get(&["customers"])).await?;
        let customers: Vec<Customer> = response.json()?;
        Ok(customers.iter().map(|customer| customer.name.as_str()).collect::<Vec<_>>().join(", "))
    }
}

pub struct GetCustomerByName;

#[async_trait]
impl Tool for GetCustomerByName {
    fn name(&self) -> &'static str {
        "getcustomerbyname"
    }

    fn description(&self) -> &'static str {
        "Look up a customer's ID from its name."
    }

    async fn call(&self, backend: &dyn Backend, input: &str) -> Result<String, ToolError> {
        let query: CustomerNameQuery = parse_json_arg(self.name(), input)?;
        let response =
            backend.send(BackendRequest::get(&["customers", "name", query.name.as_str()])).await?;
        let customer: Customer = response.json()?;
        Ok(format!("The customer ID is {}", customer.id))
    }
}

pub struct GetCustomerById;

#[async_trait]
impl Tool for GetCustomerById {
    fn name(&self) -> &'static str {
        "getcustomerbyid"
    }

    fn description(&self) -> &'static str {
        "Look up a customer's name from its ID."
    }

    async fn call(&self, backend: &dyn Backend, input: &str) -> Result<String, ToolError> {
        let query: CustomerIdQuery = parse_json_arg(self.name(), input)?;
        let id = query.id.to_string();
        let response = backend.send(BackendRequest::get(&["customers", "id", id.as_str()])).await?;
        let customer: Customer = response.json()?;
        Ok(format!("Customer name is {}", customer.name))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AddCustomer, GetCustomerById, GetCustomerByName, GetCustomers};
    use crate::backend::Method;
    use crate::errors::ToolError;
    use crate::testing::RecordingBackend;
    use crate::tools::Tool;

    #[tokio::test]
    async fn addcustomer_posts_name_and_relays_text() {
        let backend =
            RecordingBackend::default().respond(Method::Post, "/customers", 201, "Meta has ID 4");

        let output = AddCustomer.call(&backend, " Meta ").await.expect("call should succeed");

        assert_eq!(output, "Meta has ID 4");
        let request = backend.last_request().expect("request recorded");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path(), "/customers");
        assert_eq!(request.body, Some(json!({ "name": "Meta" })));
    }

    #[tokio::test]
    async fn addcustomer_relays_error_body_verbatim() {
        let backend = RecordingBackend::default().respond(
            Method::Post,
            "/customers",
            409,
            "Customer Meta already exists",
        );

        let output = AddCustomer.call(&backend, "Meta").await.expect("raw text is relayed");
        assert_eq!(output, "Customer Meta already exists");
    }

    #[tokio::test]
    async fn getcustomers_joins_names() {
        let backend = RecordingBackend::default().respond(
            Method::Get,
            "/customers",
            200,
            r#"[{"id": 4, "name": "Meta"}, {"id": 5, "name": "Alpha"}]"#,
        );

        let output = GetCustomers.call(&backend, "ignored").await.expect("call should succeed");
        assert_eq!(output, "Meta, Alpha");
    }

    #[tokio::test]
    async fn getcustomerbyname_reports_id() {
        let backend = RecordingBackend::default().respond(
            Method::Get,
            "/customers/name/Meta",
            200,
            r#"{"id": 4, "name": "Meta"}"#,
        );

        let output =
            GetCustomerByName.call(&backend, r#"{"name": "Meta"}"#).await.expect("call succeeds");
        assert_eq!(output, "The customer ID is 4");
    }

    #[tokio::test]
    async fn getcustomerbyid_reports_name() {
        let backend = RecordingBackend::default().respond(
            Method::Get,
            "/customers/id/5",
            200,
            r#"{"id": 5, "name": "Alpha"}"#,
        );

        let output = GetCustomerById.call(&backend, "{'id': 5}").await.expect("call succeeds");
        assert_eq!(output, "Customer name is Alpha");
    }

    #[tokio::test]
    async fn getcustomerbyid_propagates_missing_customer() {
        let backend = RecordingBackend::default();

        let result = GetCustomerById.call(&backend, r#"{"id": 99}"#).await;
        assert!(matches!(result, Err(ToolError::Status { status: 404, .. })));
    }
}
