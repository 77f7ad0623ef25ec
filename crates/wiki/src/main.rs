mod app;
mod cli;
mod config;
mod display;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::{
    app::{AppError, EXIT_USAGE},
    cli::Cli,
    display::ErrorJson,
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version come through here too
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    match app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, &cli),
    }
}

fn report(err: &AppError, cli: &Cli) -> ExitCode {
    if cli.json {
        let body = ErrorJson {
            ok: false,
            error: err.to_string(),
            code: err.code().to_string(),
            url: match err {
                AppError::NotFound { url } => Some(url.clone()),
                _ => None,
            },
        };
        match serde_json::to_string(&body) {
            Ok(text) => println!("{text}"),
            Err(_) => println!(
                r#"{{"ok":false,"error":"Internal serialization error","code":"SERIALIZE"}}"#
            ),
        }
    } else if let AppError::NotFound { url } = err {
        eprintln!("No such page");
        if !cli.simple {
            println!("Create it on: {url}");
        }
    } else {
        eprintln!("error: {err}");
    }

    ExitCode::from(err.exit_status())
}
