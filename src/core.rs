use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, info};

use crate::cli::{Args, Command, ConeArgs, MpcArgs, TableFormat};
use crate::config::Config;
use crate::errors::SsoError;
use crate::logging;
use crate::mpc::{first_record, MpcClient};
use crate::skybot::{Banner, ConeSearch, SkybotClient};
use crate::status::ExitStatus;
use crate::table::{
    format_as_csv, format_as_json, format_as_table, parse_response_with, read_response_file,
    save_response, ParseOptions,
};

/// Main entry point for the CLI.
///
/// Loads the configuration, parses arguments, sets up logging and
/// dispatches to the cone search or the MPC lookup.
pub fn run(args: Vec<String>) -> ExitStatus {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    logging::init(parsed.log_format.unwrap_or_default(), parsed.verbose);
    let traceback = parsed.traceback;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match program(parsed, &config, &mut out) {
        Ok(status) => status,
        Err(e) => handle_error(e, traceback),
    }
}

pub fn program<W: Write>(args: Args, config: &Config, out: &mut W) -> Result<ExitStatus, SsoError> {
    debug!(?args, config_dir = %config.config_dir.display(), "Parsed arguments");

    match &args.command {
        Command::Cone(cone) => run_cone_search(cone, config, out),
        Command::Mpc(mpc) => run_mpc_lookup(mpc, config, out),
    }
}

fn run_cone_search<W: Write>(args: &ConeArgs, config: &Config, out: &mut W) -> Result<ExitStatus, SsoError> {
    let params = ConeSearch::from_args(args, &config.skybot)?;
    let url = args.url.as_deref().unwrap_or(&config.skybot.url);
    let timeout = args.timeout.unwrap_or(config.skybot.timeout);

    let client = SkybotClient::new(url, timeout)?;
    let text = client.cone_search(&params)?;

    if let Some(path) = &args.save {
        save_response(path, &text)?;
        info!(path = %path.display(), "Saved cone-search answer");
    }

    if args.format == TableFormat::Raw {
        write!(out, "{}", text)?;
        return Ok(ExitStatus::Success);
    }

    let banner = Banner::parse(&text);
    debug!(flag = ?banner.flag, ticket = ?banner.ticket, "Cone-search banner");

    if banner.is_error() {
        return Err(SsoError::Service(service_message(&text)));
    }
    if banner.no_objects() {
        eprintln!("No solar system object found in the field");
        return Ok(ExitStatus::Success);
    }

    let table = match &args.save {
        Some(path) => read_response_file(path)?,
        None => parse_response_with(&text, &ParseOptions { trim_cells: args.trim_cells })?,
    };
    info!(rows = table.len(), columns = table.columns().len(), "Parsed cone-search answer");

    let table = match args.head {
        Some(n) => table.head(n),
        None => table,
    };

    let rendered = match args.format {
        TableFormat::Table => format_as_table(&table),
        TableFormat::Csv => format_as_csv(&table)?,
        TableFormat::Json => format_as_json(&table)?,
        TableFormat::Raw => text,
    };
    writeln!(out, "{}", rendered.trim_end())?;

    Ok(ExitStatus::Success)
}

fn run_mpc_lookup<W: Write>(args: &MpcArgs, config: &Config, out: &mut W) -> Result<ExitStatus, SsoError> {
    let mut mpc_config = config.mpc.clone();
    if let Some(url) = &args.url {
        mpc_config.url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        mpc_config.timeout = timeout;
    }

    let client = MpcClient::new(&mpc_config)?;
    let records = client.query_asteroid(args.number)?;
    let record = first_record(records, args.number)?;

    writeln!(out, "{}", record.summary())?;
    Ok(ExitStatus::Success)
}

/// Everything after the flag line, on one line
fn service_message(text: &str) -> String {
    let message = text
        .lines()
        .skip(1)
        .map(|line| line.trim_start_matches('#').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if message.is_empty() {
        "cone search failed".to_string()
    } else {
        message
    }
}

fn handle_error(error: SsoError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}
