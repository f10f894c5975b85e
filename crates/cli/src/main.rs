use std::process::ExitCode;

fn main() -> ExitCode {
    revrec_cli::run()
}
