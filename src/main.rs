use std::process::ExitCode;

use args::Invocation;
use launch::{ProcessSpawner, Programs};

mod args;
mod launch;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let invocation = Invocation::parse();
    log::debug!("Invocation: {invocation:?}");

    match launch::dispatch(&invocation, &Programs::default(), &mut ProcessSpawner) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
