use std::collections::HashMap;

use async_trait::async_trait;
use tracing::info;

use crate::backend::Backend;
use crate::errors::ToolError;

/// A named callback the agent framework can invoke with extracted text.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn call(&self, backend: &dyn Backend, input: &str) -> Result<String, ToolError>;
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, Box<dyn Tool>>,
    order: Vec<&'static str>,
}

impl ToolRegistry {
    pub fn register<T>(&mut self, tool: T) -> Result<(), ToolError>
    where
        T: Tool + 'static,
    {
        let name = tool.name();
        if self.tools.contains_key(name) {
            return Err(ToolError::DuplicateFunction(name.to_string()));
        }
        self.tools.insert(name, Box::new(tool));
        self.order.push(name);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Tool> + '_ {
        self.order.iter().filter_map(|name| self.get(name))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.order.clone()
    }

    pub async fn invoke(
        &self,
        backend: &dyn Backend,
        name: &str,
        input: &str,
    ) -> Result<String, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::UnknownFunction(name.to_string()))?;
        info!(
            event_name = "agent.function.invoke",
            function = name,
            "invoking registered function"
        );
        tool.call(backend, input).await
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::{Tool, ToolRegistry};
    use crate::backend::Backend;
    use crate::errors::ToolError;
    use crate::testing::RecordingBackend;

    struct Echo(&'static str);

    #[async_trait]
    impl Tool for Echo {
        fn name(&self) -> &'static str {
            self.0
        }

        fn description(&self) -> &'static str {
            "Echo the input."
        }

        async fn call(&self, _backend: &dyn Backend, input: &str) -> Result<String, ToolError> {
            Ok(format!("{}:{input}", self.0))
        }
    }

    #[test]
    fn registry_keeps_registration_order() {
        let mut registry = ToolRegistry::default();
        registry.register(Echo("zeta")).expect("register zeta");
        registry.register(Echo("alpha")).expect("register alpha");

        assert_eq!(registry.names(), vec!["zeta", "alpha"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = ToolRegistry::default();
        registry.register(Echo("echo")).expect("first registration");

        let result = registry.register(Echo("echo"));
        assert!(matches!(result, Err(ToolError::DuplicateFunction(ref name)) if name == "echo"));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn invoke_dispatches_by_name() {
        let mut registry = ToolRegistry::default();
        registry.register(Echo("echo")).expect("register");
        let backend = RecordingBackend::default();

        let output = registry.invoke(&backend, "echo", "hi").await.expect("invoke");
        assert_eq!(output, "echo:hi");

        let missing = registry.invoke(&backend, "nope", "hi").await;
        assert!(matches!(missing, Err(ToolError::UnknownFunction(ref name)) if name == "nope"));
    }
}
