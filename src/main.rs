use std::{
    io,
    io::Write,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use clap_verbosity_flag::Verbosity;
use error_stack::Report;
use normhist::{
    histogram::{DEFAULT_SEED, Error as HistogramError, RunConfig},
    params::{Parameters, Parsing, USAGE},
};
use thiserror::Error;

/// Histogram of normally distributed pseudo-random numbers
///
/// Generates a reproducible list of numbers drawn from a normal distribution, buckets them into
/// equally spaced bins over `[min_val, max_val)`, and prints each bin's center next to its count.
///
/// With no positional arguments, the parameters are asked for interactively. Options must come
/// before the positional arguments.
#[derive(Parser, Debug)]
#[command(version, author = "Alex Saveau (@SUPERCILEX)")]
#[command(infer_long_args = true)]
#[command(disable_help_flag = true)]
#[command(max_term_width = 100)]
#[cfg_attr(test, command(help_expected = true))]
struct Histogram {
    /// `list_size num_bins max_val min_val [no_list]`
    ///
    /// The number of values to generate, the number of bins, and the upper and lower bounds of
    /// the binned range. Passing a fifth argument, whatever its value, suppresses printing the
    /// generated values.
    ///
    /// Everything after the first positional argument is taken as-is, flags included.
    #[arg(value_name = "PARAMS", num_args = 1.., trailing_var_arg = true)]
    #[arg(allow_hyphen_values = true)]
    params: Vec<String>,

    /// Parse numbers from their leading digits, treating garbage as 0
    ///
    /// By default, malformed numbers are rejected. In lenient mode `12abc` reads as 12 and `abc`
    /// reads as 0.
    #[arg(long)]
    lenient: bool,

    /// The PRNG's starting seed
    #[arg(long, alias = "entropy", default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[command(flatten)]
    #[command(next_display_order = None)]
    verbose: Verbosity,

    #[arg(short, long, short_alias = '?', global = true)]
    #[arg(action = ArgAction::Help, help = "Print help (use `--help` for more detail)")]
    #[arg(long_help = "Print help (use `-h` for a summary)")]
    help: Option<bool>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to acquire run parameters.")]
    Parameters,
    #[error("Failed to build the histogram.")]
    Histogram,
}

fn main() -> ExitCode {
    let args = Histogram::parse();
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(args.verbose.log_level_filter())
        .init();

    match histogram(args) {
        Ok(code) => code,
        Err(err) => {
            drop(writeln!(io::stderr(), "Error: {err:?}"));
            err.downcast_ref::<ExitCode>()
                .copied()
                .unwrap_or_else(|| ExitCode::from(sysexits::ExitCode::Software))
        }
    }
}

fn histogram(
    Histogram {
        params,
        lenient,
        seed,
        verbose: _,
        help: _,
    }: Histogram,
) -> Result<ExitCode, Report<CliError>> {
    let mut stdout = io::stdout().lock();

    let parameters = if params.is_empty() {
        Parameters::prompt(&mut io::stdin().lock(), &mut stdout)
    } else {
        Parameters::from_positional(
            params.as_slice(),
            if lenient {
                Parsing::Lenient
            } else {
                Parsing::Strict
            },
        )
    };
    let Parameters {
        list_size,
        num_bins,
        max_val,
        min_val,
        show_list,
    } = match parameters {
        Ok(p) => p,
        Err(e) if matches!(e.current_context(), HistogramError::Usage) => {
            drop(writeln!(stdout, "{USAGE}"));
            return Ok(ExitCode::from(sysexits::ExitCode::Usage));
        }
        Err(e) => return Err(e.change_context(CliError::Parameters)),
    };

    RunConfig::builder()
        .list_size(list_size)
        .num_bins(num_bins)
        .max_val(max_val)
        .min_val(min_val)
        .show_list(show_list)
        .seed(seed)
        .build()
        .run(&mut stdout)
        .map_err(|e| e.change_context(CliError::Histogram))?;

    Ok(ExitCode::SUCCESS)
}
