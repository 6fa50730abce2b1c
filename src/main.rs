// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mntl-space and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! mntl-space CLI entrypoint.
//!
//! By default this runs the interactive picker and prints the canonical URI on exit.
//!
//! Use `--print` to apply the flags and print the URI plus the change payload without a TUI.

use std::error::Error;
use std::path::PathBuf;

use mntl_space::model::{catalog_json_schema, TypeCatalog};
use mntl_space::Locator;

const LOG_DIR_ENV: &str = "MNTL_SPACE_LOG_DIR";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--catalog <file>] [--identity <id>] [--value <uri>] [--path-value <path>] [--no-path-edit] [--hide-path] [--verbose]\n  {program} [same options] --print\n  {program} --schema\n\n--catalog loads the selectable space types from a JSON array of {{value, label, description}}.\n--print prints the canonical URI and the change payload instead of starting the picker.\n--schema prints the JSON Schema of the catalog file.\n\nSet {LOG_DIR_ENV} to write logs to a file; RUST_LOG overrides the log filter."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    catalog: Option<String>,
    identity: Option<String>,
    value: Option<String>,
    path_value: Option<String>,
    no_path_edit: bool,
    hide_path: bool,
    print: bool,
    schema: bool,
    verbose: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    fn set_once(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
        if slot.is_some() {
            return Err(());
        }
        *slot = Some(value.ok_or(())?);
        Ok(())
    }

    fn flag_once(flag: &mut bool) -> Result<(), ()> {
        if *flag {
            return Err(());
        }
        *flag = true;
        Ok(())
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => set_once(&mut options.catalog, args.next())?,
            "--identity" => set_once(&mut options.identity, args.next())?,
            "--value" => set_once(&mut options.value, args.next())?,
            "--path-value" => set_once(&mut options.path_value, args.next())?,
            "--no-path-edit" => flag_once(&mut options.no_path_edit)?,
            "--hide-path" => flag_once(&mut options.hide_path)?,
            "--print" => flag_once(&mut options.print)?,
            "--schema" => flag_once(&mut options.schema)?,
            "--verbose" | "-v" => flag_once(&mut options.verbose)?,
            _ => return Err(()),
        }
    }

    let schema_only = CliOptions { schema: true, verbose: options.verbose, ..CliOptions::default() };
    if options.schema && options != schema_only {
        return Err(());
    }

    Ok(options)
}

fn build_locator(options: &CliOptions) -> Result<Locator, Box<dyn Error>> {
    let mut locator = match &options.catalog {
        Some(path) => Locator::with_catalog(TypeCatalog::load(path)?),
        None => Locator::new(),
    };

    // Identity first so identity-scoped URIs resolve against it.
    locator.set_identity(options.identity.as_deref());
    if let Some(value) = &options.value {
        locator.set_value(value);
    }
    if let Some(path) = &options.path_value {
        locator.set_path_override(Some(path.as_str()));
    }
    locator.set_path_editable(!options.no_path_edit);
    locator.set_show_path(!options.hide_path);
    Ok(locator)
}

fn setup_tracing(options: &CliOptions) {
    use std::fs::OpenOptions;

    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if options.verbose {
                EnvFilter::new("mntl_space=debug")
            } else {
                EnvFilter::new("mntl_space=info")
            }
        })
    };

    if let Some(log_dir) = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from) {
        if std::fs::create_dir_all(&log_dir).is_ok() {
            let log_path = log_dir.join(format!("mntl-space.{}.log", std::process::id()));
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true);
                tracing_subscriber::registry().with(filter()).with(file_layer).init();
                tracing::info!(path = ?log_path, "tracing initialized");
                return;
            }
        }
    }

    // The picker owns the terminal, so stderr logging is only safe in non-interactive modes.
    if options.print || options.schema {
        tracing_subscriber::fmt().with_env_filter(filter()).with_writer(std::io::stderr).init();
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "mntl-space".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        setup_tracing(&options);

        if options.schema {
            println!("{}", serde_json::to_string_pretty(&catalog_json_schema())?);
            return Ok(());
        }

        let locator = build_locator(&options)?;
        tracing::debug!(uri = %locator.uri(), "locator ready");

        if options.print {
            println!("{}", locator.uri());
            println!("{}", serde_json::to_string(&locator.change_event())?);
            return Ok(());
        }

        let locator = mntl_space::tui::run(locator)?;
        println!("{}", locator.uri());
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("mntl-space: {err}");
        std::process::exit(1);
    }
}
