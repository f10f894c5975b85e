use revrec_agent::AgentRuntime;
use revrec_core::config::{AppConfig, LoadOptions};

use crate::commands::{init_logging, CommandResult};

enum Invocation<'a> {
    Function { name: &'a str, argument: &'a str },
    Line(&'a str),
}

pub fn run(name: &str, argument: &str) -> CommandResult {
    execute("call", Invocation::Function { name, argument })
}

pub fn run_line(line: &str) -> CommandResult {
    execute("ask", Invocation::Line(line))
}

fn execute(command: &str, invocation: Invocation<'_>) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                command,
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };
    init_logging(&config);

    let agent = match AgentRuntime::from_config(&config.backend) {
        Ok(agent) => agent,
        Err(error) => return CommandResult::from_tool_error(command, &error),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                command,
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let result = runtime.block_on(async {
        match invocation {
            Invocation::Function { name, argument } => agent.invoke(name, argument).await,
            Invocation::Line(line) => agent.handle_call_line(line).await,
        }
    });

    match result {
        Ok(output) => CommandResult::success(command, output),
        Err(error) => CommandResult::from_tool_error(command, &error),
    }
}
