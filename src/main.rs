// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boltforest CLI entrypoint.
//!
//! Runs a command script (see `boltforest::format::script`) against a fresh session and prints
//! JSON snapshots of the session on `show` and once at the end.
//!
//! Without a script path the script is read from stdin.

use std::error::Error;
use std::io::Read;

use boltforest::format::{apply_command, parse_script, CommandOutcome};
use boltforest::model::{GridConfig, Session};
use boltforest::query::session_view;

const DEMO_SCRIPT: &str = "\
# 2x2 block, closed square, signs from +
cell 0 0
cell 0 1
cell 1 0
cell 1 1
start
point 0 0
point 0 2
point 2 2
point 2 0
point 0 0
signs 0 +
show
# slide the top edge down twice; the second step lands on the bottom edge and cancels
nudge 0 0 down
show
nudge 0 0 down
";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<script>] [--rows <n>] [--cols <n>] [--pretty]\n  {program} [--script <path>] [--rows <n>] [--cols <n>] [--pretty]\n  {program} --demo [--rows <n>] [--cols <n>] [--pretty]\n\nWithout a script path the script is read from stdin.\n--rows/--cols size the grid (clamped to 5..=20, default 10).\n--demo runs a built-in script and cannot be combined with a script path.\n\nBuild with `--features tracing` and set RUST_LOG=debug for rebuild diagnostics."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    pretty: bool,
    script_path: Option<String>,
    rows: Option<u32>,
    cols: Option<u32>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            "--script" => {
                if options.script_path.is_some() {
                    return Err(());
                }
                options.script_path = Some(args.next().ok_or(())?);
            }
            "--rows" => {
                if options.rows.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.rows = Some(raw.parse().map_err(|_| ())?);
            }
            "--cols" => {
                if options.cols.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.cols = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.script_path.is_some() {
                    return Err(());
                }
                options.script_path = Some(arg);
            }
        }
    }

    if options.demo && options.script_path.is_some() {
        return Err(());
    }

    Ok(options)
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn print_view(session: &Session, pretty: bool) -> Result<(), Box<dyn Error>> {
    let view = session_view(session);
    let json =
        if pretty { serde_json::to_string_pretty(&view)? } else { serde_json::to_string(&view)? };
    println!("{json}");
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "boltforest".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let src = if options.demo {
            DEMO_SCRIPT.to_owned()
        } else if let Some(path) = &options.script_path {
            std::fs::read_to_string(path)?
        } else {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        };
        let script = parse_script(&src)?;

        let defaults = GridConfig::default();
        let grid = GridConfig::new(
            options.rows.unwrap_or(defaults.rows()),
            options.cols.unwrap_or(defaults.cols()),
        );
        let mut session = Session::new(grid);

        for line in &script {
            match apply_command(&mut session, &line.command) {
                Ok(CommandOutcome::Show) => print_view(&session, options.pretty)?,
                Ok(_) => {}
                Err(err) => eprintln!("boltforest: line {}: rejected: {err}", line.line),
            }
        }

        print_view(&session, options.pretty)
    })();

    if let Err(err) = result {
        eprintln!("boltforest: {err}");
        std::process::exit(1);
    }
}
