// Thu Oct 15 2026 - Alex

use crate::error::{Result, SiggrepError};
use crate::pattern::{Encoding, Signature, Specification};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// A fully parsed scan request. Signatures are already compiled and keep
/// the order they were given in.
#[derive(Debug, Clone)]
pub struct Args {
    pub specs: Vec<Specification>,
    pub signatures: Vec<Signature>,
    pub file: PathBuf,
    pub json: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub enum Command {
    Scan(Args),
    Help,
    Version,
}

const FILE: &str = "file";
const JSON: &str = "json";
const VERBOSE: &str = "verbose";
const HELP: &str = "help";
const VERSION: &str = "version";

const ENCODINGS: [Encoding; 4] = [
    Encoding::HexPattern,
    Encoding::Narrow,
    Encoding::WideLe,
    Encoding::WideBe,
];

fn signature_arg(encoding: Encoding) -> Arg {
    let id = encoding.name();
    Arg::new(id)
        .long(id)
        .value_name("VALUE")
        .num_args(1)
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .value_parser(value_parser!(OsString))
}

fn switch(id: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .action(ArgAction::SetTrue)
        .overrides_with(id)
}

/// The clap definition of the command line. Help and version are handled
/// by the caller so the usage text stays in one place.
pub fn command() -> ClapCommand {
    ClapCommand::new(crate::ui::usage::PROGRAM)
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args(ENCODINGS.map(signature_arg))
        .arg(switch(JSON))
        .arg(switch(VERBOSE).short('v'))
        .arg(switch(HELP).short('h'))
        .arg(switch(VERSION).short('V'))
        // The first token that is not a known flag starts the file path and
        // every later token lands here too, so extras can be rejected.
        .arg(
            Arg::new(FILE)
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(OsString)),
        )
}

fn clap_error(error: clap::Error) -> SiggrepError {
    let rendered = error.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    SiggrepError::argument(line.strip_prefix("error: ").unwrap_or(line))
}

/// Signature values from every encoding flag, in command-line order.
fn ordered_values(matches: &ArgMatches) -> Vec<(usize, Encoding, OsString)> {
    let mut values = Vec::new();
    for encoding in ENCODINGS {
        let id = encoding.name();
        if let (Some(indices), Some(raw)) = (matches.indices_of(id), matches.get_many::<OsString>(id)) {
            values.extend(
                indices.zip(raw).map(|(index, value)| (index, encoding, value.clone())),
            );
        }
    }
    values.sort_by_key(|(index, _, _)| *index);
    values
}

/// Parses everything after the program name.
pub fn parse<I, T>(tokens: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(tokens).map_err(clap_error)?;

    if matches.get_flag(HELP) {
        return Ok(Command::Help);
    }
    if matches.get_flag(VERSION) {
        return Ok(Command::Version);
    }

    let mut specs = Vec::new();
    let mut signatures = Vec::new();
    for (_, encoding, raw) in ordered_values(&matches) {
        let text = raw.into_string().map_err(|raw| {
            SiggrepError::argument(format!(
                "Value for {} is not valid Unicode: {:?}",
                encoding.flag(),
                raw
            ))
        })?;
        let spec = Specification::new(encoding, text);
        signatures.push(spec.compile()?);
        specs.push(spec);
    }

    if signatures.is_empty() {
        return Err(SiggrepError::argument("At least one signature is required"));
    }

    let mut files = matches.get_many::<OsString>(FILE).into_iter().flatten();
    let file = files.next()
        .map(PathBuf::from)
        .ok_or_else(|| SiggrepError::argument("Missing file path"))?;
    if let Some(extra) = files.next() {
        return Err(SiggrepError::argument(format!(
            "Unexpected argument {:?} after file path",
            extra
        )));
    }

    Ok(Command::Scan(Args {
        specs,
        signatures,
        file,
        json: matches.get_flag(JSON),
        verbose: matches.get_flag(VERBOSE),
    }))
}
