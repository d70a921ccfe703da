use std::process::ExitCode;

use clap::Parser;
use i18n_typegen::cli::{Arguments, ExitStatus, init_tracing, report};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match i18n_typegen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
