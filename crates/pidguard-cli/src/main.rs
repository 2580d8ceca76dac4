//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;

use pidguard_cli::{Cli, CliError, Commands, bootstrap, handlers};

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let manager = bootstrap::bootstrap(cli);

    let code = match &cli.command {
        Commands::Run { name, command } => handlers::run::execute(&manager, name, command)?,
        Commands::Status { name, json } => handlers::status::execute(&manager, name, *json)?,
        Commands::Sweep { json } => handlers::sweep::execute(&manager, *json)?,
    };

    Ok(code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    bootstrap::init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
