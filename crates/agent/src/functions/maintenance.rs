use async_trait::async_trait;

use crate::backend::{Backend, BackendRequest};
use crate::errors::ToolError;
use crate::tools::Tool;

pub struct ClearDatabase;

#[async_trait]
impl Tool for ClearDatabase {
    fn name(&self) -> &'static str {
        "cleardatabase"
    }

    fn description(&self) -> &'static str {
        "Delete every customer, contract and revenue segment."
    }

    async fn call(&self, backend: &dyn Backend, _input: &str) -> Result<String, ToolError> {
        let response = backend.send(BackendRequest::delete(&["clear_database"])).await?;
        Ok(response.body)
    }
}

pub struct PopulateDataframe;

#[async_trait]
impl Tool for PopulateDataframe {
    fn name(&self) -> &'static str {
        "populatedataframe"
    }

    fn description(&self) -> &'static str {
        "Rebuild the revenue recognition and invoicing schedule."
    }

    async fn call(&self, backend: &dyn Backend, _input: &str) -> Result<String, ToolError> {
        let response = backend.send(BackendRequest::get(&["dataframe"])).await?;
        Ok(response.body)
    }
}
