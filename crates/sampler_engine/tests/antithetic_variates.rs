//! Antithetic variate behaviour through the full engine.

use sampler_engine::{Rule, SampleRequest, Sampler, SamplerError};

fn engine() -> Sampler {
    Sampler::from_seed(42)
}

#[test]
fn halton_antithetic_reference_values() {
    let request = SampleRequest::new(8).rule(Rule::Halton).antithetic(true);
    let samples = engine().generate(&request).unwrap();
    assert_eq!(samples.shape(), (1, 8));
    assert_eq!(
        samples.row(0),
        &[0.5, 0.5, 0.25, 0.75, 0.75, 0.25, 0.125, 0.875]
    );
}

#[test]
fn mirrored_pairs_are_adjacent() {
    let request = SampleRequest::new(16).rule(Rule::Random).antithetic(true);
    let samples = engine().generate(&request).unwrap();
    assert_eq!(samples.shape(), (1, 16));
    let row = samples.row(0);
    for pair in row.chunks_exact(2) {
        assert_eq!(pair[1], 1.0 - pair[0]);
    }
}

#[test]
fn order_must_exceed_dimension() {
    let request = SampleRequest::new(1).domain(2).rule(Rule::Random).antithetic(true);
    assert_eq!(
        engine().generate(&request).unwrap_err(),
        SamplerError::InvalidSampleCount { order: 1, dim: 2 }
    );
}

#[test]
fn broadcast_and_single_entry_mask_agree() {
    let request_bool = SampleRequest::new(12)
        .domain(2)
        .rule(Rule::Halton)
        .antithetic(true);
    let request_mask = SampleRequest::new(12)
        .domain(2)
        .rule(Rule::Halton)
        .antithetic(vec![true]);
    assert_eq!(
        engine().generate(&request_bool).unwrap(),
        engine().generate(&request_mask).unwrap()
    );
}

#[test]
fn mask_length_must_fit_domain() {
    let request = SampleRequest::new(10)
        .domain(3)
        .rule(Rule::Halton)
        .antithetic(vec![true, false]);
    assert_eq!(
        engine().generate(&request).unwrap_err(),
        SamplerError::AntitheticMaskMismatch {
            expected: 3,
            got: 2
        }
    );
}

#[test]
fn all_false_mask_reduces_to_plain_generation() {
    // The order reconciliation still runs, but mirroring is a no-op, so the
    // result matches the unmirrored scheme at the reconciled order.
    let with_mask = SampleRequest::new(8).rule(Rule::Halton).antithetic(false);
    let plain = SampleRequest::new(8).rule(Rule::Halton);
    assert_eq!(
        engine().generate(&with_mask).unwrap(),
        engine().generate(&plain).unwrap()
    );
}

#[test]
fn partial_mask_mirrors_selected_axis_only() {
    let request = SampleRequest::new(8)
        .domain(2)
        .rule(Rule::Grid)
        .antithetic([true, false]);
    let samples = engine().generate(&request).unwrap();
    assert_eq!(samples.shape(), (2, 8));
    // Base grid runs at internal order 3; axis 0 alternates with its
    // reflection while axis 1 repeats unmirrored.
    assert_eq!(
        samples.row(0),
        &[0.25, 0.75, 0.25, 0.75, 0.25, 0.75, 0.5, 0.5]
    );
    assert_eq!(
        samples.row(1),
        &[0.25, 0.25, 0.5, 0.5, 0.75, 0.75, 0.25, 0.25]
    );
}

#[test]
fn grid_rules_cover_requested_order_after_truncation() {
    // internal order 3 over two axes yields 9 columns, mirroring one axis
    // doubles that, and truncation keeps exactly the requested 8.
    let request = SampleRequest::new(8)
        .domain(2)
        .rule(Rule::Grid)
        .antithetic([false, true]);
    let samples = engine().generate(&request).unwrap();
    assert_eq!(samples.columns(), 8);
}

#[test]
fn linear_rules_may_under_produce() {
    // Sequence schemes emit `internal` columns, not `internal ^ dim`, so
    // the mirrored matrix can fall short of the request and truncation
    // keeps what exists.
    let request = SampleRequest::new(30)
        .domain(3)
        .rule(Rule::Halton)
        .antithetic([true, false, false]);
    let samples = engine().generate(&request).unwrap();
    // internal order 4 (4^3 >= 30), one mirrored axis: 8 columns.
    assert_eq!(samples.shape(), (3, 8));
}

#[test]
fn antithetic_applies_before_domain_mapping() {
    let bounds = sampler_engine::Bounds::interval(0.0, 10.0).unwrap();
    let request = SampleRequest::new(8)
        .domain(bounds)
        .rule(Rule::Halton)
        .antithetic(true);
    let samples = engine().generate(&request).unwrap();
    // Mirroring happened on the unit interval, so pairs sum to 10 after the
    // affine map.
    assert_eq!(samples.row(0), &[5.0, 5.0, 2.5, 7.5, 7.5, 2.5, 1.25, 8.75]);
}
