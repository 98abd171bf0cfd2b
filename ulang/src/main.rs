mod cli;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;
use cli::{print_checked, print_checking, print_running};
use ulang_core::eval::prelude::{check_path, run_path};

#[derive(Parser)]
enum Command {
    /// Parses a source file and runs it
    Run {
        /// Path of source file
        path: PathBuf,
    },
    /// Performs lexical and syntactical analysis without running
    Check {
        /// Path of source file
        path: PathBuf,
        /// Do not print parsed source code
        #[arg(short, long, default_value_t = false)]
        no_output: bool,
        /// Print ast instead of parsed source code
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl
}

fn main() {
    match Command::parse() {
        Command::Run { path } => {
            print_running(path.to_str().unwrap_or_default());

            if let Err(err) = run_path(path) {
                print_error(&err);

                std::process::exit(1);
            }
        },
        Command::Check { path, no_output, print_ast } => {
            print_checking(path.to_str().unwrap_or_default());
            let start = std::time::Instant::now();

            match check_path(path) {
                Ok(program) => {
                    if !no_output {
                        if print_ast {
                            println!("{:#?}", program);
                        } else {
                            println!("{}", program);
                        }
                    }
                },
                Err(err) => {
                    print_error(&err);

                    std::process::exit(1);
                }
            }

            print_checked(std::time::Instant::now() - start);
        },
        Command::Rlpl => {
            let _ = rlpl::start();
        },
        Command::Rppl => {
            let _ = rppl::start();
        }
    }
}

fn print_error(err: &ulang_core::utils::prelude::Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    err.pretty(&mut buf);
    buf_writer
        .print(&buf)
        .expect("Writing error to stderr");
}
