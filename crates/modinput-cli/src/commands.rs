use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use modinput_cli::session::{self, EmitOptions, EmitSummary, ValidationOutcome};

use crate::cli::{DescribeArgs, EmitArgs, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationOutcome> {
    let input = open_input(args.input.as_deref())?;
    session::validate(input, &mut io::stdout().lock(), &mut io::stderr().lock())
}

pub fn run_describe(args: &DescribeArgs) -> Result<usize> {
    let file = File::open(&args.args)
        .with_context(|| format!("open {}", args.args.display()))?;
    session::describe(
        BufReader::new(file),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

pub fn run_emit(args: &EmitArgs) -> Result<EmitSummary> {
    let options = EmitOptions {
        stanza: args.stanza.clone(),
        source: args.source.clone(),
        sourcetype: args.sourcetype.clone(),
        index: args.index.clone(),
        host: args.host.clone(),
    };
    let input = open_input(args.input.as_deref())?;
    session::emit(
        input,
        &options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
