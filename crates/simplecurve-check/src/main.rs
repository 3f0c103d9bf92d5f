//! simplecurve-check: validate JSON linestrings and multi-linestrings.
//!
//! Reads GeoJSON-style geometry objects (a single object or an array of
//! them) from files or standard input and reports, for each geometry,
//! whether it is a valid OGC simple curve.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin simplecurve-check -- [OPTIONS] [FILES]...
//! ```
//!
//! Exit status is 0 when every geometry is valid, 1 when at least one is
//! invalid, and 2 when an input could not be read or parsed.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::{Deserialize, Serialize};
use simplecurve::{Geometry, GeometryKind, Validate, ValidityError, ValidityPolicy};
use tracing_subscriber::EnvFilter;

/// Check linestrings and multi-linestrings for OGC simple-curve validity.
///
/// Each input holds one geometry object or a JSON array of them, e.g.
/// `{"type": "LineString", "coordinates": [[0, 0], [1, 1]]}`.
#[derive(Parser)]
#[command(name = "simplecurve-check", version)]
struct Cli {
    /// JSON files to check. Reads standard input when none are given.
    files: Vec<PathBuf>,

    /// Accept vertices where a curve folds back onto itself.
    #[arg(long)]
    allow_spikes: bool,

    /// Full validity policy as a JSON string.
    ///
    /// When provided, `--allow-spikes` is ignored.
    #[arg(long)]
    policy_json: Option<String>,

    /// Output a JSON report instead of one line per geometry.
    #[arg(long)]
    json: bool,
}

/// Errors that stop the checker before a verdict is reached.
#[derive(Debug, thiserror::Error)]
enum CheckError {
    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        source: std::io::Error,
    },

    #[error("{origin}: not a geometry or array of geometries: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("invalid --policy-json: {0}")]
    Policy(#[source] serde_json::Error),

    #[error("failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),

    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),
}

/// One input document: a single geometry or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Geometry>),
    One(Geometry),
}

impl Document {
    fn into_geometries(self) -> Vec<Geometry> {
        match self {
            Self::Many(geometries) => geometries,
            Self::One(geometry) => vec![geometry],
        }
    }
}

/// Verdict for a single geometry.
#[derive(Serialize)]
struct Verdict {
    origin: String,
    index: usize,
    kind: GeometryKind,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<ValidityError>,
}

impl Verdict {
    fn line(&self) -> String {
        let status = match &self.reason {
            None => "valid".to_owned(),
            Some(reason) => format!("invalid: {reason}"),
        };
        format!("{}[{}] {:?}: {status}", self.origin, self.index, self.kind)
    }
}

/// Build the [`ValidityPolicy`] from CLI arguments.
///
/// If `--policy-json` is provided, the JSON is parsed directly and
/// `--allow-spikes` is ignored.
fn policy_from_cli(cli: &Cli) -> Result<ValidityPolicy, CheckError> {
    if let Some(ref json) = cli.policy_json {
        return serde_json::from_str(json).map_err(CheckError::Policy);
    }
    Ok(ValidityPolicy::default().with_allow_spikes(cli.allow_spikes))
}

/// Read every input as `(origin, contents)` pairs, taking `stdin` when no
/// files are named.
fn read_inputs(
    files: &[PathBuf],
    stdin: &mut impl Read,
) -> Result<Vec<(String, String)>, CheckError> {
    if files.is_empty() {
        let origin = "<stdin>".to_owned();
        let mut contents = String::new();
        stdin
            .read_to_string(&mut contents)
            .map_err(|source| CheckError::Read {
                origin: origin.clone(),
                source,
            })?;
        return Ok(vec![(origin, contents)]);
    }

    files
        .iter()
        .map(|path| {
            let origin = path.display().to_string();
            tracing::debug!(%origin, "reading input");
            std::fs::read_to_string(path)
                .map(|contents| (origin.clone(), contents))
                .map_err(|source| CheckError::Read { origin, source })
        })
        .collect()
}

fn check(cli: &Cli, stdin: &mut impl Read) -> Result<Vec<Verdict>, CheckError> {
    let policy = policy_from_cli(cli)?;
    tracing::debug!(?policy, "checking geometries");

    let mut verdicts = Vec::new();
    for (origin, contents) in read_inputs(&cli.files, stdin)? {
        let document: Document =
            serde_json::from_str(&contents).map_err(|source| CheckError::Parse {
                origin: origin.clone(),
                source,
            })?;

        for (index, geometry) in document.into_geometries().iter().enumerate() {
            let reason = geometry.validate(&policy).err();
            tracing::debug!(%origin, index, valid = reason.is_none(), "checked geometry");
            verdicts.push(Verdict {
                origin: origin.clone(),
                index,
                kind: geometry.kind(),
                valid: reason.is_none(),
                reason,
            });
        }
    }
    Ok(verdicts)
}

/// How a run ended. Each outcome has its own process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    AllValid,
    SomeInvalid,
    InputError,
}

impl Outcome {
    fn of(verdicts: &[Verdict]) -> Self {
        if verdicts.iter().all(|v| v.valid) {
            Self::AllValid
        } else {
            Self::SomeInvalid
        }
    }

    const fn code(self) -> u8 {
        match self {
            Self::AllValid => 0,
            Self::SomeInvalid => 1,
            Self::InputError => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        Self::from(outcome.code())
    }
}

/// Format verdicts as a pretty JSON array or as one line each.
fn render(verdicts: &[Verdict], json: bool) -> Result<String, CheckError> {
    if json {
        let mut report = serde_json::to_string_pretty(verdicts).map_err(CheckError::Report)?;
        report.push('\n');
        return Ok(report);
    }
    Ok(verdicts
        .iter()
        .map(|verdict| format!("{}\n", verdict.line()))
        .collect())
}

/// Check every input and write the report to `out`.
fn run(cli: &Cli, stdin: &mut impl Read, out: &mut impl Write) -> Result<Outcome, CheckError> {
    let verdicts = check(cli, stdin)?;
    out.write_all(render(&verdicts, cli.json)?.as_bytes())
        .map_err(CheckError::Write)?;

    let invalid = verdicts.iter().filter(|v| !v.valid).count();
    tracing::info!(checked = verdicts.len(), invalid, "done");
    Ok(Outcome::of(&verdicts))
}

/// Report a failed run on stderr and settle on the final outcome.
fn finish(result: Result<Outcome, CheckError>) -> Outcome {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        Outcome::InputError
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = run(
        &cli,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    );
    finish(result).into()
}
