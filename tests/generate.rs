use plgen::config::{toml, SamplingConfig};
use plgen::driver::{self, Driver, DriverState};
use plgen::{ConfigError, DistributionParameters, RunError};

fn parse_lines(out: &[u8]) -> Vec<i64> {
    std::str::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| l.parse().expect("every line is a plain integer"))
        .collect()
}

#[test]
fn five_power_law_samples() {
    let params = DistributionParameters::power_law(2.0);
    let mut out = Vec::new();

    driver::run(&params, 5, &SamplingConfig::with_seed(2024), &mut out).unwrap();

    let values = parse_lines(&out);
    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|&k| (1..100_000).contains(&k)));
}

#[test]
fn exact_line_count_on_non_multiple_of_block_size() {
    let params = DistributionParameters::with_cutoff(2.5, 500.0);
    let config = SamplingConfig {
        block_size: 4_096,
        ..SamplingConfig::with_seed(11)
    };
    let mut out = Vec::new();

    let summary = driver::run(&params, 12_345, &config, &mut out).unwrap();

    assert_eq!(summary.samples_written, 12_345);
    assert_eq!(summary.blocks, 4);
    assert_eq!(parse_lines(&out).len(), 12_345);
}

#[test]
fn zero_samples_produce_no_output() {
    let mut out = Vec::new();
    let summary = driver::run(
        &DistributionParameters::with_cutoff(1.5, 10.0),
        0,
        &SamplingConfig::default(),
        &mut out,
    )
    .unwrap();

    assert_eq!(summary.samples_written, 0);
    assert!(out.is_empty());
}

#[test]
fn continuous_mode_is_unsupported() {
    let params = DistributionParameters::power_law(2.0).continuous(true);
    let config = SamplingConfig::with_seed(3);
    let mut driver = Driver::new(&config);
    let mut out = Vec::new();

    let err = driver.run(&params, 1, &mut out).unwrap_err();

    assert!(matches!(err, RunError::Unsupported(_)));
    assert_eq!(err.exit_code(), 5);
    assert!(out.is_empty());
    assert!(driver.state().is_terminal());
}

#[test]
fn zero_kappa_is_rejected() {
    for gamma in [-1.0, 0.0, 2.0, 3.5] {
        let params = DistributionParameters::with_cutoff(gamma, 0.0);
        let mut out = Vec::new();

        let err = driver::run(&params, 100, &SamplingConfig::with_seed(1), &mut out).unwrap_err();
        assert!(matches!(err, RunError::Config(ConfigError::ZeroCutoff)));
        assert_eq!(err.exit_code(), 8);
    }
}

#[test]
fn same_seed_same_output() {
    let params = DistributionParameters::with_cutoff(1.8, 1_000.0).offset(10.0);
    let config = SamplingConfig {
        block_size: 500,
        ..SamplingConfig::with_seed(99)
    };
    let (mut a, mut b) = (Vec::new(), Vec::new());

    driver::run(&params, 3_000, &config, &mut a).unwrap();
    driver::run(&params, 3_000, &config, &mut b).unwrap();

    assert_eq!(a, b);
}

#[test]
fn output_does_not_depend_on_block_size() {
    let params = DistributionParameters::power_law(2.2);
    let small = SamplingConfig {
        block_size: 7,
        ..SamplingConfig::with_seed(5)
    };
    let large = SamplingConfig::with_seed(5);
    let (mut a, mut b) = (Vec::new(), Vec::new());

    driver::run(&params, 1_000, &small, &mut a).unwrap();
    driver::run(&params, 1_000, &large, &mut b).unwrap();

    assert_eq!(a, b);
}

#[test]
fn offset_shifts_every_value() {
    let base = DistributionParameters::power_law(2.0);
    let config = SamplingConfig::with_seed(8);
    let (mut plain, mut shifted) = (Vec::new(), Vec::new());

    driver::run(&base, 200, &config, &mut plain).unwrap();
    driver::run(&base.offset(100.0), 200, &config, &mut shifted).unwrap();

    let plain = parse_lines(&plain);
    let shifted = parse_lines(&shifted);
    assert!(plain.iter().zip(&shifted).all(|(p, s)| s - p == 100));
}

#[test]
fn cutoff_limits_the_tail() {
    let config = SamplingConfig::with_seed(21);
    let mut out = Vec::new();

    // exp(-k/5) makes anything beyond a few hundred practically unreachable
    driver::run(&DistributionParameters::with_cutoff(1.0, 5.0), 10_000, &config, &mut out).unwrap();

    let values = parse_lines(&out);
    assert!(values.iter().all(|&k| k >= 1 && k < 500));
}

#[test]
fn heavy_tail_reaches_far() {
    let config = SamplingConfig::with_seed(13);
    let mut out = Vec::new();

    driver::run(&DistributionParameters::power_law(1.1), 20_000, &config, &mut out).unwrap();

    let max = parse_lines(&out).into_iter().max().unwrap();
    assert!(max > 1_000, "max sample {}", max);
}

#[test]
fn config_file_drives_a_run() {
    let config = toml::parse_toml_string(
        r#"
        [distribution]
        gamma = 2.0
        offset = -1.0

        [sampling]
        resolution = 50
        block_size = 10
        seed = 4
        "#,
    )
    .unwrap();

    let mut driver = Driver::new(&config.sampling);
    let mut out = Vec::new();
    let summary = driver.run(&config.distribution, 25, &mut out).unwrap();

    assert_eq!(summary.blocks, 3);
    assert_eq!(driver.state(), DriverState::Done);
    assert!(parse_lines(&out).iter().all(|&k| (0..49).contains(&k)));
}
