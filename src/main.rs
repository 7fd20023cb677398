use std::{fs, process::ExitCode};

use clap::Parser;
use sigfig::{Error, EvalResult, Evaluation, PrecisionValue, evaluate, evaluate_all, expressions, parse};
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// sigfig evaluates arithmetic expressions and reports results to their
/// significant figures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sigfig to read expressions from a file, one per line, instead of
    /// the command line.
    #[arg(short, long)]
    file: bool,

    /// Prints the decomposed operator tree instead of evaluating.
    #[arg(short, long)]
    tree: bool,

    /// Prints the full value and the significant-figure count instead of the
    /// rounded result.
    #[arg(short, long)]
    raw: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = "SIGFIG_LOG", default_value = "warn")]
    log_level: String,

    /// The expression, or the path of the file with `--file`.
    #[arg(required = true, num_args = 1..)]
    contents: Vec<String>,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry().with(filter)
                                  .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                                  .init();
}

fn report(expression: &str, result: EvalResult<PrecisionValue>, raw: bool) -> Result<String, Error> {
    let result = result?;
    if result.is_degenerate() {
        warn!(expression,
              sig_figs = %result.sig_figs,
              "no significant figures left; showing a single digit");
    }

    Ok(if raw {
           format!("{} {}", result.value, result.sig_figs)
       } else {
           result.to_string()
       })
}

fn run(expression: &str, args: &Args) -> Result<String, Error> {
    if args.tree {
        return parse(expression).map(|tree| tree.to_string());
    }
    report(expression, evaluate(expression), args.raw)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let joined = args.contents.join(" ");
    let source = if args.file {
        fs::read_to_string(&joined).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{joined}'. Perhaps this file does not exist?");
                                       std::process::exit(1);
                                   })
    } else {
        joined
    };

    let mut failed = false;
    if args.file {
        let outputs: Vec<(&str, Result<String, Error>)> = if args.tree {
            expressions(&source).map(|expression| (expression, run(expression, &args)))
                                .collect()
        } else {
            evaluate_all(&source).into_iter()
                                 .map(|Evaluation { expression, result }| {
                                     (expression, report(expression, result, args.raw))
                                 })
                                 .collect()
        };

        for (expression, output) in outputs {
            match output {
                Ok(output) => println!("{expression} = {output}"),
                Err(e) => {
                    eprintln!("{expression}: {e}");
                    failed = true;
                },
            }
        }
    } else {
        match run(&source, &args) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
