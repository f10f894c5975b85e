pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "revrec",
    about = "Revenue agent operator CLI",
    long_about = "Inspect the agent's registered functions and prompt, invoke functions against the revenue backend, and check configuration readiness.",
    after_help = "Examples:\n  revrec funcs\n  revrec call addcustomer Meta\n  revrec ask \"Ask Func[getcustomerbyname]: {'name': 'Meta'}\"\n  revrec doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List registered functions with their descriptions")]
    Funcs,
    #[command(about = "Print the base prompt and few-shot dialogues")]
    Prompt,
    #[command(about = "Invoke one registered function against the backend")]
    Call {
        #[arg(help = "Registered function name, e.g. addcustomer")]
        name: String,
        #[arg(help = "Argument text passed to the function", trailing_var_arg = true)]
        argument: Vec<String>,
    },
    #[command(about = "Replay a transcript call line such as `Ask Func[getcustomers]: all`")]
    Ask {
        #[arg(help = "Call line in `Ask Func[name]: argument` form")]
        line: String,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, few-shot coverage, and backend connectivity")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Funcs => commands::funcs::run(),
        Command::Prompt => {
            commands::CommandResult { exit_code: 0, output: commands::prompt::run() }
        }
        Command::Call { name, argument } => commands::call::run(&name, &argument.join(" ")),
        Command::Ask { line } => commands::call::run_line(&line),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
