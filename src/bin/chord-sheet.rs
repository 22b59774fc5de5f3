//! Command-line interface for chord-sheet
//!
//! Usage:
//!   chord-sheet `<song.yaml>`                       - write an A4 PDF to stdout
//!   chord-sheet `<song.yaml>` --html                - write the HTML document instead
//!   chord-sheet `<song.yaml>` -o `<file>`           - write to a file
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use chord_sheet::export::DEFAULT_WKHTMLTOPDF;
use chord_sheet::{ChordSheet, Wkhtmltopdf};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("chord-sheet: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn build_cli() -> Command {
    Command::new("chord-sheet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a YAML chord layout into a printable chord sheet")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the song YAML file")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the document to this file instead of stdout")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help("Emit the HTML document instead of PDF")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .help("Custom Mustache skeleton with {{title}}, {{bar_width}} and {{{content}}}")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("wkhtmltopdf")
                .long("wkhtmltopdf")
                .help("wkhtmltopdf program used for PDF output")
                .default_value(DEFAULT_WKHTMLTOPDF)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let path = matches
        .get_one::<PathBuf>("path")
        .ok_or("missing song path")?;

    let mut sheet = ChordSheet::load(path)?;
    if let Some(template_path) = matches.get_one::<PathBuf>("template") {
        let template = fs::read_to_string(template_path).map_err(|e| {
            format!("failed to read template {}: {}", template_path.display(), e)
        })?;
        sheet = sheet.with_template(template);
    }

    let bytes = if matches.get_flag("html") {
        sheet.to_html()?.into_bytes()
    } else {
        let program = matches
            .get_one::<PathBuf>("wkhtmltopdf")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WKHTMLTOPDF));
        sheet.to_pdf(&Wkhtmltopdf::with_program(program))?
    };

    match matches.get_one::<PathBuf>("output") {
        Some(output) => fs::write(output, &bytes)
            .map_err(|e| format!("failed to write {}: {}", output.display(), e))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
