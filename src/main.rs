use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use stepcalc::{
    Trace,
    error::InputError,
    get_result,
    input::{check_length, read_expression},
};

/// stepcalc evaluates an arithmetic expression and prints every step of the
/// calculation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stepcalc to read the expression from the file named by
    /// EXPRESSION.
    #[arg(short, long)]
    file: bool,

    /// Prints only the final value instead of every step.
    #[arg(short, long)]
    quiet: bool,

    /// The expression to evaluate. stepcalc prompts for one when omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let expression = match acquire_expression(&args) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    match get_result(&expression) {
        Ok(trace) => {
            print_trace(&trace, args.quiet);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn acquire_expression(args: &Args) -> Result<String, InputError> {
    match (&args.expression, args.file) {
        (Some(path), true) => {
            let contents = fs::read_to_string(path).map_err(|e| InputError::Unreadable {
                details: format!("failed to read the input file '{path}': {e}"),
            })?;
            let expression = contents.trim_end();
            check_length(expression)?;
            Ok(expression.to_string())
        },
        (Some(expression), false) => {
            check_length(expression)?;
            Ok(expression.clone())
        },
        (None, true) => Err(InputError::Unreadable { details: "--file needs a path".to_string() }),
        (None, false) => {
            print!("\nEnter your mathematical expression:\n  -> ");
            io::stdout().flush()
                        .map_err(|e| InputError::Unreadable { details: e.to_string() })?;
            read_expression(io::stdin().lock())
        },
    }
}

fn print_trace(trace: &Trace, quiet: bool) {
    if quiet {
        println!("{}", trace.result());
        return;
    }

    let mut steps = trace.steps().iter();
    if let Some(expression) = steps.next() {
        println!("  {expression}");
    }
    for step in steps {
        println!("\t= {step}");
    }
}
