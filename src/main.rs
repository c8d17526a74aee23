use ieee_specials::app::{self, Status};
use ieee_specials::config::Config;
use owo_colors::OwoColorize;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let result = Config::get().and_then(|config| app::run(&config, &mut io::stdout().lock()));

    match result {
        Ok(Status::Ok) => ExitCode::SUCCESS,
        Ok(Status::Unclassified) => {
            eprintln!(
                "{} some values weren't covered by the range table",
                "[bug]".bright_red()
            );
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{} {}", "[error]".bright_red(), e);
            ExitCode::from(1)
        }
    }
}
