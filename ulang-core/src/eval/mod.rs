use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf
};

use utf8_chars::BufReadCharsExt;

use crate::{
    parser::prelude::{parse_program, parse_program_from_stream, Program},
    utils::prelude::Error
};

use evaluator::Evaluator;

pub mod error;
pub mod evaluator;

pub mod prelude {
    pub use super::{
        error::*,
        evaluator::*
    };
    pub use super::{check_path, run_path, run_source};
}

#[cfg(test)]
mod tests;

/// Parse a source file without running it.
pub fn check_path(path: PathBuf) -> Result<Program, Error> {
    let (program, _) = parse_path(path)?;

    Ok(program)
}

/// Parse a source file and run it against stdin/stdout.
pub fn run_path(path: PathBuf) -> Result<(), Error> {
    let (program, src) = parse_path(path.clone())?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut evaluator = Evaluator::new(stdin.lock(), stdout.lock());

    evaluator.eval_program(&program)
        .map_err(|error| Error::Runtime { path, src, error })
}

/// Run an in-memory program against the given line IO. The REPLs and the
/// test suite go through here.
pub fn run_source(
    src: &str,
    input: impl BufRead,
    output: impl Write
) -> Result<(), Error> {
    let path = PathBuf::from("<source>");

    let program = parse_program(src).map_err(|error| Error::Parse {
        path: path.clone(),
        src: src.to_string(),
        error
    })?;

    let mut evaluator = Evaluator::new(input, output);

    evaluator.eval_program(&program).map_err(|error| Error::Runtime {
        path,
        src: src.to_string(),
        error
    })
}

fn parse_path(path: PathBuf) -> Result<(Program, String), Error> {
    let file = File::open(&path).map_err(|err| Error::StdIo { err: err.kind() })?;
    let mut reader = BufReader::new(file);

    // lexing consumes the stream a character at a time, so the source for
    // diagnostics is accumulated on the way through
    let mut src = String::new();

    let result = parse_program_from_stream(reader.chars()
        .map_while(|c| c.ok())
        .inspect(|c| src.push(*c)));

    match result {
        Ok(program) => Ok((program, src)),
        Err(error) => Err(Error::Parse { path, src, error })
    }
}
