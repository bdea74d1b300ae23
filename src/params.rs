use std::{
    io,
    io::{BufRead, Write},
    process::ExitCode,
    str::FromStr,
};

use error_stack::{Report, ResultExt};

use crate::{
    histogram::Error,
    utils::{enter_next_param, leading_float, leading_int},
};

pub const USAGE: &str = "Usage: histogram [list_size num_bins max_val min_val [no_list]]";

/// The run parameters every invocation must provide, one way or another.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Parameters {
    pub list_size: usize,
    pub num_bins: usize,
    pub max_val: f64,
    pub min_val: f64,
    pub show_list: bool,
}

/// How positional arguments are turned into numbers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Parsing {
    /// Reject anything that isn't entirely a number.
    #[default]
    Strict,
    /// Use the longest numeric prefix and fall back to zero.
    Lenient,
}

impl Parameters {
    /// Reads `list_size num_bins max_val min_val [no_list]`.
    ///
    /// A fifth argument of any content turns the numbers listing off. Any other argument count
    /// fails with [`Error::Usage`].
    pub fn from_positional(
        args: &[impl AsRef<str>],
        parsing: Parsing,
    ) -> Result<Self, Report<Error>> {
        let [list_size, num_bins, max_val, min_val, rest @ ..] = args else {
            return Err(usage_error(args.len()));
        };
        if rest.len() > 1 {
            return Err(usage_error(args.len()));
        }
        let (list_size, num_bins, max_val, min_val) = (
            list_size.as_ref(),
            num_bins.as_ref(),
            max_val.as_ref(),
            min_val.as_ref(),
        );

        Ok(match parsing {
            Parsing::Strict => Self {
                list_size: strict_count("list_size", list_size)?,
                num_bins: strict_count("num_bins", num_bins)?,
                max_val: strict_float("max_val", max_val)?,
                min_val: strict_float("min_val", min_val)?,
                show_list: rest.is_empty(),
            },
            Parsing::Lenient => Self {
                list_size: lenient_count(list_size),
                num_bins: lenient_count(num_bins),
                max_val: leading_float(max_val),
                min_val: leading_float(min_val),
                show_list: rest.is_empty(),
            },
        })
    }

    /// Asks for each parameter in turn, re-prompting until the answer is usable.
    pub fn prompt(
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Self, Report<Error>> {
        Self::prompt_inner(input, output)
            .change_context(Error::Prompt)
            .attach(ExitCode::from(sysexits::ExitCode::NoInput))
    }

    fn prompt_inner(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Self> {
        let list_size = enter_next_param::<usize>(
            input,
            output,
            "Enter number of numbers in list:",
            |&n| n > 0,
        )?;
        let num_bins = enter_next_param::<usize>(
            input,
            output,
            "Enter number of bins in histogram:",
            |&n| n > 0,
        )?;
        let max_val = enter_next_param::<f64>(
            input,
            output,
            "Enter Upper Range of histogram:",
            |v| v.is_finite(),
        )?;
        let min_val = enter_next_param::<f64>(
            input,
            output,
            "Enter Lower Range of histogram:",
            |v| v.is_finite() && *v < max_val,
        )?;
        let Answer(suppress) = enter_next_param::<Answer>(
            input,
            output,
            "Suppress numbers array printing (y or n):",
            |_| true,
        )?;

        Ok(Self {
            list_size,
            num_bins,
            max_val,
            min_val,
            show_list: !matches!(suppress, 'y' | 'Y'),
        })
    }
}

/// First non-blank character of a line.
struct Answer(char);

impl FromStr for Answer {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().chars().next().map(Self).ok_or(())
    }
}

fn usage_error(num_args: usize) -> Report<Error> {
    Report::new(Error::Usage)
        .attach_printable(format!("Expected 0, 4, or 5 positional arguments, got {num_args}."))
        .attach_printable(USAGE)
        .attach(ExitCode::from(sysexits::ExitCode::Usage))
}

fn strict_count(name: &str, s: &str) -> Result<usize, Report<Error>> {
    s.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid_parameter(name, s, &e.to_string()))
}

fn strict_float(name: &str, s: &str) -> Result<f64, Report<Error>> {
    s.trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| invalid_parameter(name, s, &e.to_string()))
}

fn invalid_parameter(name: &str, value: &str, reason: &str) -> Report<Error> {
    Report::new(Error::InvalidParameter)
        .attach_printable(format!("Failed to parse {name} from {value:?}: {reason}"))
        .attach(ExitCode::from(sysexits::ExitCode::DataErr))
}

fn lenient_count(s: &str) -> usize {
    usize::try_from(leading_int(s)).unwrap_or(0)
}
