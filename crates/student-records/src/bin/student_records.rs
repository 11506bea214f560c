//! Prints generated student records as JSON.
//!
//! Settings come from `PortalSettings`; the binary only wires logging,
//! generation, and output so the behaviour stays testable in the library.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use student_records::{
    CliError, PortalSettings, render_section, student_records, student_records_with_rng,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let settings =
        PortalSettings::load_from_iter(env::args_os()).map_err(|err| CliError::Settings {
            message: err.to_string(),
        })?;
    let section = settings.section()?;
    let registration_number = settings.registration_number();

    let records = if settings.random_marks {
        student_records_with_rng(registration_number, &mut rand::rng())
    } else {
        student_records(registration_number)
    };
    info!(
        registration_number,
        section = %section,
        random_marks = settings.random_marks,
        "rendering student records"
    );

    let json = render_section(&records, section)?;
    if let Err(err) = writeln!(io::stdout().lock(), "{json}") {
        drop(err);
    }
    Ok(())
}
