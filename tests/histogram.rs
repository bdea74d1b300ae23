use std::io;

use more_asserts::{assert_gt, assert_le, assert_lt};
use normhist::histogram::{
    Bins, BoxMuller, DEFAULT_SEED, Error, Histogram, MEAN, RunConfig, STD_DEV, create_list,
};
use rstest::rstest;

fn generate(list_size: usize, seed: u64) -> Vec<f64> {
    create_list(list_size, seed, &BoxMuller::new(MEAN, STD_DEV)).unwrap()
}

#[rstest]
fn counts_match_in_range_values(
    #[values(1, 10, 1_000, 10_000)] list_size: usize,
    #[values(1, 7, 10, 100)] num_bins: usize,
    #[values((110., -10.), (60., 40.), (1_000., -1_000.), (0.5, 0.25))] range: (f64, f64),
) {
    let (max_val, min_val) = range;
    let numbers = generate(list_size, DEFAULT_SEED);

    let histogram =
        Histogram::from_values(Bins::new(num_bins, min_val, max_val).unwrap(), &numbers).unwrap();

    let in_range = numbers
        .iter()
        .filter(|&&v| min_val <= v && v < max_val)
        .count() as u64;
    assert_eq!(histogram.counts().len(), num_bins);
    assert_eq!(histogram.total(), in_range);
    assert_le!(histogram.total(), list_size as u64);
}

#[test]
fn generation_is_deterministic() {
    let a = generate(1_000, DEFAULT_SEED);
    let b = generate(1_000, DEFAULT_SEED);

    let a = a.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    let b = b.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(a, b);
}

#[test]
fn shorter_lists_are_prefixes() {
    let short = generate(100, DEFAULT_SEED);
    let long = generate(1_000, DEFAULT_SEED);

    assert_eq!(short, long[..100]);
}

#[test]
fn boundary_values() {
    let bins = Bins::new(10, -10., 110.).unwrap();

    let histogram = Histogram::from_values(bins, &[-10., 110.]).unwrap();

    assert_eq!(histogram.counts()[0], 1);
    assert_eq!(histogram.total(), 1);
}

#[test]
fn bell_shaped_scenario() {
    let histogram = RunConfig::builder()
        .list_size(1_000)
        .num_bins(10)
        .max_val(110.)
        .min_val(-10.)
        .show_list(false)
        .build()
        .run(&mut io::sink())
        .unwrap();
    let counts = histogram.counts();
    println!("{counts:?}");

    assert_le!(histogram.total(), 1_000);
    assert_gt!(histogram.total(), 980);

    let (peak, _) = counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, c)| c)
        .unwrap();
    assert!((4..=5).contains(&peak), "peak at bin {peak}");

    for &inner in &counts[1..9] {
        assert_lt!(counts[0], inner);
        assert_lt!(counts[9], inner);
    }

    let lower = counts[..5].iter().sum::<u64>();
    let upper = counts[5..].iter().sum::<u64>();
    assert_lt!(lower.abs_diff(upper), 120);
}

#[test]
fn centers_are_reported_in_order() {
    let histogram = RunConfig::builder()
        .list_size(0)
        .num_bins(10)
        .max_val(110.)
        .min_val(-10.)
        .build()
        .run(&mut io::sink())
        .unwrap();

    let centers = histogram.iter().map(|(c, _)| c).collect::<Vec<_>>();
    assert_eq!(centers, [-4., 8., 20., 32., 44., 56., 68., 80., 92., 104.]);
    assert_eq!(histogram.total(), 0);
}

#[rstest]
#[case(0, 110., -10.)]
#[case(10, 10., 10.)]
#[case(10, -10., 110.)]
fn invalid_geometry_is_rejected(
    #[case] num_bins: usize,
    #[case] max_val: f64,
    #[case] min_val: f64,
) {
    let mut output = Vec::new();

    let err = RunConfig::builder()
        .list_size(10)
        .num_bins(num_bins)
        .max_val(max_val)
        .min_val(min_val)
        .build()
        .run(&mut output)
        .unwrap_err();

    assert!(matches!(err.current_context(), Error::InvalidConfig));
    assert!(output.is_empty());
}
