//! fontlist CLI - lists installed font families to the console and a log file

mod cli;
mod console;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use fontlist_core::{
    report::{EncodedWriter, Tee, TextEncoding},
    types::FontFamily,
    EnumerateOptions, FontListError, Report, Result,
};

use crate::cli::Cli;
use crate::console::Console;

/// Enumerates the system collection through DirectWrite
#[cfg(windows)]
fn system_families(options: &EnumerateOptions) -> Result<Vec<FontFamily>> {
    let source = fontlist_os_win::DWriteFontSource::system()?;
    Ok(fontlist_core::enumerate_families(&source, options))
}

#[cfg(not(windows))]
fn system_families(_options: &EnumerateOptions) -> Result<Vec<FontFamily>> {
    Err(FontListError::FactoryCreation(
        "DirectWrite is only available on Windows".to_string(),
    ))
}

fn open_log(path: &Path) -> Result<EncodedWriter<BufWriter<File>>> {
    let log_err = |source| FontListError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(log_err)?;
    EncodedWriter::new(BufWriter::new(file), TextEncoding::Utf8Bom).map_err(log_err)
}

fn run(args: &Cli, console: &mut Console) -> Result<()> {
    let log = open_log(&args.log_file)?;

    if let Err(e) = console.write_str("Font Family Enumerator\n======================\n") {
        log::warn!("Could not write banner: {e}");
    }

    let options = EnumerateOptions {
        preferred_locale: args.locale.clone(),
    };
    let families = system_families(&options)?;
    let report = Report::from_families(&families);

    // Output failures are not fatal: a closed console still lets the log finish
    let mut tee = Tee::new(console, log);
    if let Err(e) = report.write_to(&mut tee) {
        log::warn!("Report output incomplete: {e}");
    }

    log::info!("Wrote {} families to {}", families.len(), args.log_file.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    console::prepare();
    let mut console = match Console::new() {
        Ok(console) => console,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = run(&args, &mut console) {
        if let Some(detail) = e.detail() {
            log::error!("{detail}");
        }
        // Nothing more useful to do if the console itself is gone
        let _ = console.write_str(&format!("Error: {e}\n"));
        return ExitCode::FAILURE;
    }

    let trailer = format!(
        "Results saved to {}\nPress Enter to exit...\n",
        args.log_file.display()
    );
    if let Err(e) = console.write_str(&trailer) {
        log::warn!("Could not write trailer: {e}");
    }

    if !args.no_wait {
        if let Err(e) = console::wait_for_key() {
            log::warn!("Could not wait for input: {e}");
        }
    }

    ExitCode::SUCCESS
}
