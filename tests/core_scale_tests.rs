use approx::assert_relative_eq;
use trendchart::core::{
    ChartDimensions, Domain, LinearScale, NiceScaleConfig, NiceScaleMethod, Scales, create_scales,
};

fn dims() -> ChartDimensions {
    ChartDimensions::new(300.0, 200.0, 10.0, 20.0)
}

fn scales_without_nice(domain: Domain) -> Scales {
    create_scales(
        domain,
        (0.0, 1_000.0),
        dims(),
        false,
        &NiceScaleConfig::default(),
        5,
        false,
    )
}

#[test]
fn y_scale_maps_domain_bounds_to_padded_edges() {
    let scales = scales_without_nice(Domain::new(10.0, 110.0));

    assert_relative_eq!(scales.y.apply(110.0), 20.0, epsilon = 1e-9);
    assert_relative_eq!(scales.y.apply(10.0), 180.0, epsilon = 1e-9);
}

#[test]
fn y_scale_is_inverted() {
    let scales = scales_without_nice(Domain::new(0.0, 100.0));

    let low = scales.y.apply(25.0);
    let high = scales.y.apply(75.0);
    assert!(high < low, "larger values must map to smaller pixel y");
}

#[test]
fn x_scale_maps_time_range_to_padded_width() {
    let scales = scales_without_nice(Domain::new(0.0, 100.0));

    assert_relative_eq!(scales.x.apply(0.0), 10.0, epsilon = 1e-9);
    assert_relative_eq!(scales.x.apply(1_000.0), 290.0, epsilon = 1e-9);
    assert_relative_eq!(scales.x.apply(500.0), 150.0, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new((42.0, 42.0), (180.0, 20.0));

    assert_relative_eq!(scale.apply(42.0), 100.0, epsilon = 1e-9);
    assert_relative_eq!(scale.apply(-7.0), 100.0, epsilon = 1e-9);
    assert!(scale.apply(f64::MAX).is_finite());
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (180.0, 20.0));

    let original = 42.5;
    let pixel = scale.apply(original);
    let recovered = scale.invert(pixel);

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn auto_nice_scale_brackets_domain_with_round_step() {
    let config = NiceScaleConfig {
        method: NiceScaleMethod::Auto,
        round_to: None,
    };
    let scales = create_scales(
        Domain::new(44_123.0, 53_980.0),
        (0.0, 1_000.0),
        dims(),
        true,
        &config,
        5,
        false,
    );

    let (min, max) = scales.y.domain();
    assert!(min <= 44_123.0);
    assert!(max >= 53_980.0);
    // Bounds land on exact multiples of a 1/2/5/10-ladder step.
    assert_relative_eq!(min, 44_000.0, epsilon = 1e-6);
    assert_relative_eq!(max, 54_000.0, epsilon = 1e-6);
}

#[test]
fn percentage_nice_scale_uses_coarse_step_ladder() {
    let config = NiceScaleConfig::default();

    // Range of 30 stays on the 5 step.
    let narrow = create_scales(
        Domain::new(-12.0, 18.0),
        (0.0, 1.0),
        dims(),
        true,
        &config,
        4,
        true,
    );
    let (narrow_min, narrow_max) = narrow.y.domain();
    assert_eq!(narrow_min % 5.0, 0.0);
    assert_eq!(narrow_max % 5.0, 0.0);

    // Range above 50 moves to the 10 step.
    let wide = create_scales(
        Domain::new(-42.0, 37.0),
        (0.0, 1.0),
        dims(),
        true,
        &config,
        4,
        true,
    );
    let (wide_min, wide_max) = wide.y.domain();
    assert_eq!(wide_min % 10.0, 0.0);
    assert_eq!(wide_max % 10.0, 0.0);
}

#[test]
fn nice_scale_off_keeps_exact_domain() {
    let scales = scales_without_nice(Domain::new(44_123.0, 53_980.0));

    assert_eq!(scales.y.domain(), (44_123.0, 53_980.0));
}

#[test]
fn degenerate_domain_survives_nice_adjustment() {
    let scales = create_scales(
        Domain::new(7.0, 7.0),
        (0.0, 1.0),
        dims(),
        true,
        &NiceScaleConfig::default(),
        5,
        false,
    );

    // Zero-span domains skip adjustment and map to a constant pixel.
    assert!(scales.y.apply(7.0).is_finite());
    assert_relative_eq!(scales.y.apply(7.0), 100.0, epsilon = 1e-9);
}

#[test]
fn dimensions_validate_rejects_padding_consuming_the_axis() {
    assert!(dims().validate().is_ok());

    let too_padded = ChartDimensions::new(300.0, 200.0, 10.0, 100.0);
    assert!(!too_padded.is_valid());
    let error = too_padded.validate().expect_err("padding consumes height");
    assert!(error.to_string().contains("invalid dimensions"));

    assert!(!ChartDimensions::new(f64::NAN, 200.0, 10.0, 20.0).is_valid());
}
