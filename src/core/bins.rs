use std::{num::NonZeroUsize, process::ExitCode};

use error_stack::{Report, ResultExt};
use log::debug;

use crate::histogram::Error;

/// Equal-width partition of `[min_val, max_val)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bins {
    min_val: f64,
    max_val: f64,
    num_bins: NonZeroUsize,
    bin_range: f64,
}

impl Bins {
    pub fn new(num_bins: usize, min_val: f64, max_val: f64) -> Result<Self, Report<Error>> {
        let Some(num_bins) = NonZeroUsize::new(num_bins) else {
            return Err(Report::new(Error::InvalidConfig)
                .attach_printable("The histogram must have at least one bin.")
                .attach(ExitCode::from(sysexits::ExitCode::DataErr)));
        };
        if !min_val.is_finite() || !max_val.is_finite() {
            return Err(Report::new(Error::InvalidConfig)
                .attach_printable(format!(
                    "The histogram range must be finite: [{min_val}, {max_val})."
                ))
                .attach(ExitCode::from(sysexits::ExitCode::DataErr)));
        }
        if max_val <= min_val {
            return Err(Report::new(Error::InvalidConfig)
                .attach_printable(format!(
                    "The upper range ({max_val}) must be greater than the lower range ({min_val})."
                ))
                .attach(ExitCode::from(sysexits::ExitCode::DataErr)));
        }

        let bin_range = (max_val - min_val) / num_bins.get() as f64;
        debug!("Using {num_bins} bins of width {bin_range} over [{min_val}, {max_val}).");
        Ok(Self {
            min_val,
            max_val,
            num_bins,
            bin_range,
        })
    }

    #[must_use]
    pub const fn num_bins(&self) -> usize {
        self.num_bins.get()
    }

    #[must_use]
    pub const fn bin_range(&self) -> f64 {
        self.bin_range
    }

    /// The bin `value` falls into, or `None` if it lies outside `[min_val, max_val)`.
    #[must_use]
    pub fn index_of(&self, value: f64) -> Option<usize> {
        if !(self.min_val..self.max_val).contains(&value) {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ((value - self.min_val) / self.bin_range) as usize;
        // Values a hair under max_val can round up to num_bins
        Some(index.min(self.num_bins.get() - 1))
    }

    #[must_use]
    pub fn center(&self, index: usize) -> f64 {
        self.bin_range.mul_add(index as f64, self.min_val + self.bin_range / 2.)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Bins,
    counts: Vec<u64>,
}

impl Histogram {
    pub fn new(bins: Bins) -> Result<Self, Report<Error>> {
        let mut counts = Vec::new();
        counts
            .try_reserve_exact(bins.num_bins())
            .change_context(Error::Allocation)
            .attach_printable_lazy(|| {
                format!("Failed to allocate the histogram ({} bins)", bins.num_bins())
            })
            .attach(ExitCode::from(sysexits::ExitCode::OsErr))?;
        counts.resize(bins.num_bins(), 0);

        Ok(Self { bins, counts })
    }

    pub fn from_values(bins: Bins, values: &[f64]) -> Result<Self, Report<Error>> {
        let mut histogram = Self::new(bins)?;
        for &value in values {
            histogram.record(value);
        }
        Ok(histogram)
    }

    /// Counts `value` if it is in range, returning whether it was counted.
    pub fn record(&mut self, value: f64) -> bool {
        let Some(i) = self.bins.index_of(value) else {
            return false;
        };
        self.counts[i] += 1;
        true
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(center, count)` pairs in bin order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (self.bins.center(i), count))
    }
}
