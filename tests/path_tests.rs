use std::str::FromStr;

use approx::assert_relative_eq;
use trendchart::core::{
    LineStyle, LinearScale, Path, PathCommand, PathSink, Point, Scales, area_path, combine_paths,
    line_path,
};

// Identity-ish scales: x and y pass through unchanged so command
// coordinates can be asserted directly against input points.
fn identity_scales() -> Scales {
    Scales {
        y: LinearScale::new((0.0, 100.0), (0.0, 100.0)),
        x: LinearScale::new((0.0, 100.0), (0.0, 100.0)),
    }
}

fn chart_scales() -> Scales {
    Scales {
        y: LinearScale::new((10.0, 110.0), (180.0, 20.0)),
        x: LinearScale::new((0.0, 100.0), (10.0, 290.0)),
    }
}

fn end_point(command: &PathCommand) -> Option<(f64, f64)> {
    match *command {
        PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => Some((x, y)),
        PathCommand::CubicTo { x, y, .. } => Some((x, y)),
        PathCommand::Close => None,
    }
}

#[test]
fn empty_input_builds_no_path() {
    let scales = identity_scales();

    assert!(line_path(&[], &scales, LineStyle::Linear).is_none());
    assert!(area_path(&[], &scales, LineStyle::Linear).is_none());
}

#[test]
fn linear_path_connects_points_with_straight_segments() {
    let points = vec![
        Point::new(0.0, 10.0),
        Point::new(50.0, 40.0),
        Point::new(100.0, 20.0),
    ];
    let path = line_path(&points, &identity_scales(), LineStyle::Linear).expect("path");

    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo { x: 0.0, y: 10.0 },
            PathCommand::LineTo { x: 50.0, y: 40.0 },
            PathCommand::LineTo { x: 100.0, y: 20.0 },
        ]
    );
}

#[test]
fn step_path_moves_horizontally_then_vertically() {
    let points = vec![Point::new(0.0, 10.0), Point::new(50.0, 40.0)];
    let path = line_path(&points, &identity_scales(), LineStyle::Step).expect("path");

    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo { x: 0.0, y: 10.0 },
            PathCommand::LineTo { x: 50.0, y: 10.0 },
            PathCommand::LineTo { x: 50.0, y: 40.0 },
        ]
    );
}

#[test]
fn catmull_path_emits_one_cubic_per_interval() {
    let points = vec![
        Point::new(0.0, 10.0),
        Point::new(25.0, 60.0),
        Point::new(50.0, 20.0),
        Point::new(100.0, 80.0),
    ];
    let path = line_path(&points, &identity_scales(), LineStyle::CatmullRom).expect("path");
    let commands = path.commands();

    assert_eq!(commands.len(), 4);
    assert!(matches!(commands[0], PathCommand::MoveTo { .. }));
    assert!(
        commands[1..]
            .iter()
            .all(|command| matches!(command, PathCommand::CubicTo { .. }))
    );

    // The curve passes through every input point.
    let (x, y) = end_point(&commands[3]).expect("cubic end");
    assert_relative_eq!(x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(y, 80.0, epsilon = 1e-9);
}

#[test]
fn smooth_styles_fall_back_to_straight_lines_below_three_points() {
    let points = vec![Point::new(0.0, 10.0), Point::new(100.0, 20.0)];

    for style in [LineStyle::Natural, LineStyle::CatmullRom, LineStyle::Monotone] {
        let path = line_path(&points, &identity_scales(), style).expect("path");
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo { x: 0.0, y: 10.0 },
                PathCommand::LineTo { x: 100.0, y: 20.0 },
            ]
        );
    }
}

#[test]
fn monotone_path_does_not_overshoot_monotonic_data() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 5.0),
        Point::new(20.0, 50.0),
        Point::new(30.0, 55.0),
        Point::new(100.0, 60.0),
    ];
    let path = line_path(&points, &identity_scales(), LineStyle::Monotone).expect("path");

    for command in path.commands() {
        if let PathCommand::CubicTo { y1, y2, y, .. } = *command {
            for control_y in [y1, y2, y] {
                assert!((0.0..=60.0).contains(&control_y), "overshoot: {control_y}");
            }
        }
    }
}

#[test]
fn natural_path_interpolates_every_input_point() {
    let points = vec![
        Point::new(0.0, 10.0),
        Point::new(40.0, 80.0),
        Point::new(100.0, 30.0),
    ];
    let path = line_path(&points, &identity_scales(), LineStyle::Natural).expect("path");
    let commands = path.commands();

    assert_eq!(commands.len(), 3);
    let (mid_x, mid_y) = end_point(&commands[1]).expect("cubic end");
    assert_relative_eq!(mid_x, 40.0, epsilon = 1e-9);
    assert_relative_eq!(mid_y, 80.0, epsilon = 1e-9);
    let (last_x, last_y) = end_point(&commands[2]).expect("cubic end");
    assert_relative_eq!(last_x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(last_y, 30.0, epsilon = 1e-9);
}

#[test]
fn area_path_closes_against_the_zero_baseline() {
    let scales = chart_scales();
    // Entirely positive series; the baseline must still be y(0), not y(min).
    let points = vec![
        Point::new(0.0, 20.0),
        Point::new(50.0, 60.0),
        Point::new(100.0, 40.0),
    ];
    let path = area_path(&points, &scales, LineStyle::Linear).expect("path");
    let commands = path.commands();

    let baseline = scales.y.apply(0.0);
    assert!(baseline > scales.y.apply(10.0), "baseline sits below y(min)");

    let n = commands.len();
    assert_eq!(commands[n - 1], PathCommand::Close);
    assert_eq!(
        commands[n - 2],
        PathCommand::LineTo {
            x: scales.x.apply(0.0),
            y: baseline,
        }
    );
    assert_eq!(
        commands[n - 3],
        PathCommand::LineTo {
            x: scales.x.apply(100.0),
            y: baseline,
        }
    );
}

#[test]
fn non_finite_points_are_filtered_not_propagated() {
    let points = vec![
        Point::new(0.0, 10.0),
        Point::new(50.0, f64::NAN),
        Point::new(100.0, 20.0),
    ];
    let path = line_path(&points, &identity_scales(), LineStyle::Linear).expect("path");

    assert_eq!(path.commands().len(), 2);
    for command in path.commands() {
        let (x, y) = end_point(command).expect("coordinates");
        assert!(x.is_finite() && y.is_finite());
    }
}

#[test]
fn combine_paths_skips_missing_entries() {
    let scales = identity_scales();
    let first = line_path(&[Point::new(0.0, 1.0), Point::new(10.0, 2.0)], &scales, LineStyle::Linear);
    let second = line_path(
        &[Point::new(20.0, 3.0), Point::new(30.0, 4.0)],
        &scales,
        LineStyle::Linear,
    );

    let combined = combine_paths([None, first.clone(), None, second.clone()]).expect("combined");
    let expected_len =
        first.expect("first").commands().len() + second.expect("second").commands().len();
    assert_eq!(combined.commands().len(), expected_len);
}

#[test]
fn combine_paths_of_all_missing_is_none() {
    assert!(combine_paths([None, None, None]).is_none());
}

#[test]
fn unknown_style_name_falls_back_to_catmull() {
    assert_eq!(LineStyle::from_str("monotone"), Ok(LineStyle::Monotone));
    assert_eq!(LineStyle::from_str("step"), Ok(LineStyle::Step));
    assert_eq!(LineStyle::from_str("wiggly"), Ok(LineStyle::CatmullRom));
    assert_eq!(LineStyle::from_str(""), Ok(LineStyle::CatmullRom));
}

#[derive(Default)]
struct RecordingSink {
    operations: Vec<String>,
}

impl PathSink for RecordingSink {
    fn move_to(&mut self, x: f64, y: f64) {
        self.operations.push(format!("M {x} {y}"));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.operations.push(format!("L {x} {y}"));
    }

    fn cubic_to(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, x: f64, y: f64) {
        self.operations.push(format!("C .. {x} {y}"));
    }

    fn close(&mut self) {
        self.operations.push("Z".to_owned());
    }
}

#[test]
fn replay_feeds_commands_to_a_backend_sink() {
    let mut path = Path::new();
    path.move_to(0.0, 1.0);
    path.line_to(2.0, 3.0);
    path.close();

    let mut sink = RecordingSink::default();
    path.replay(&mut sink);

    assert_eq!(sink.operations, vec!["M 0 1", "L 2 3", "Z"]);
}
