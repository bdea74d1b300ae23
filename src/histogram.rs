use std::{
    io,
    io::{BufWriter, Write},
    process::ExitCode,
};

use bon::Builder;
use error_stack::{Report, ResultExt};
use log::info;
use thiserror::Error;
use thousands::Separable;

pub use crate::core::{Bins, BoxMuller, Histogram, create_list};

/// Seed used when none is supplied, so that default runs are reproducible.
pub const DEFAULT_SEED: u64 = 123_446;
pub const MEAN: f64 = 50.;
pub const STD_DEV: f64 = 20.;

#[derive(Error, Debug)]
pub enum Error {
    #[error("An IO error occurred while writing the report.")]
    Io,
    #[error("Invalid histogram configuration.")]
    InvalidConfig,
    #[error("Invalid run parameter.")]
    InvalidParameter,
    #[error("Wrong number of positional arguments.")]
    Usage,
    #[error("Failed to read run parameters.")]
    Prompt,
    #[error("Memory allocation failed.")]
    Allocation,
}

/// A single histogram run.
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct RunConfig {
    list_size: usize,
    num_bins: usize,
    max_val: f64,
    min_val: f64,
    #[builder(default = true)]
    show_list: bool,
    #[builder(default = DEFAULT_SEED)]
    seed: u64,
}

impl RunConfig {
    /// Generates the numbers, bins them and writes the report to `output`.
    ///
    /// The bin geometry is validated before anything is generated or printed.
    pub fn run(self, output: &mut impl Write) -> Result<Histogram, Report<Error>> {
        info!("Starting config: {self:?}");
        let bins = Bins::new(self.num_bins, self.min_val, self.max_val)?;

        let numbers = create_list(self.list_size, self.seed, &BoxMuller::new(MEAN, STD_DEV))?;

        let mut output = BufWriter::new(output);
        if self.show_list {
            print_numbers(&numbers, &mut output)
                .change_context(Error::Io)
                .attach_printable("Failed to print the numbers list")
                .attach(ExitCode::from(sysexits::ExitCode::IoErr))?;
        }

        let histogram = Histogram::from_values(bins, &numbers)?;
        info!(
            "Binned {} of {} values.",
            histogram.total().separate_with_commas(),
            numbers.len().separate_with_commas(),
        );

        print_histogram(&histogram, &mut output)
            .and_then(|()| output.flush())
            .change_context(Error::Io)
            .attach_printable("Failed to print the histogram")
            .attach(ExitCode::from(sysexits::ExitCode::IoErr))?;

        Ok(histogram)
    }
}

/// Writes every generated value, one per line, under a header and followed by a blank line.
pub fn print_numbers(numbers: &[f64], output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "numbers matrix =")?;
    for number in numbers {
        writeln!(output, "{number:.6}")?;
    }
    writeln!(output)
}

/// Writes one `center  count` line per bin.
pub fn print_histogram(histogram: &Histogram, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Histogram Information")?;
    for (center, count) in histogram.iter() {
        writeln!(output, "{center:.6}  {count}")?;
    }
    Ok(())
}
