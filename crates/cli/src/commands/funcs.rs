use revrec_agent::functions::default_registry;

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    let registry = match default_registry() {
        Ok(registry) => registry,
        Err(error) => return CommandResult::from_tool_error("funcs", &error),
    };

    let mut lines = vec![format!("registered functions ({}):", registry.len())];
    lines.extend(registry.iter().map(|tool| format!("- {}: {}", tool.name(), tool.description())));

    CommandResult { exit_code: 0, output: lines.join("\n") }
}
