use super::*;

use approx::assert_relative_eq;

fn irregular() -> PointSet {
    PointSet::new([(3.0, 2.5), (0.0, 1.0), (4.5, 1.0), (1.0, 2.0), (7.0, 0.5)]).unwrap()
}

#[test]
fn linear_joins_sorted_knots() {
    let spline = linear(&irregular()).unwrap();

    assert_eq!(spline.degree(), 1);
    assert_eq!(spline.knots(), &[0.0, 1.0, 3.0, 4.5, 7.0]);
    assert!(spline.system().is_none());

    assert_relative_eq!(spline.evaluate(0.5).unwrap(), 1.5);
    assert_relative_eq!(spline.evaluate(2.0).unwrap(), 2.25);
    assert_relative_eq!(spline.evaluate(7.0).unwrap(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(spline.derivative(5.0, 1).unwrap(), -0.2, epsilon = 1e-12);
    assert_relative_eq!(spline.derivative(5.0, 2).unwrap(), 0.0);
}

#[test]
fn every_degree_passes_through_its_knots() {
    let points = irregular();
    for spline in [
        linear(&points).unwrap(),
        quadratic(&points).unwrap(),
        cubic(&points).unwrap(),
    ] {
        for p in points.iter() {
            assert_relative_eq!(spline.evaluate(p.x).unwrap(), p.y, epsilon = 1e-9);
        }
    }
}

#[test]
fn single_segment_cubic_is_a_line() {
    let points = PointSet::new([(1.0, 1.0), (2.0, 4.0)]).unwrap();
    let spline = cubic(&points).unwrap();

    assert_relative_eq!(spline.evaluate(1.5).unwrap(), 2.5, epsilon = 1e-10);

    let system = spline.system().unwrap();
    assert_eq!(system.matrix.dim(), (4, 4));
    assert_eq!(system.rhs.to_vec(), vec![1.0, 4.0, 0.0, 0.0]);
}

#[test]
fn quadratic_is_smooth_and_starts_linear() {
    let spline = quadratic(&irregular()).unwrap();
    assert_eq!(spline.system().unwrap().matrix.dim(), (12, 12));

    // Leading coefficient of the first segment.
    assert_relative_eq!(spline.coefficients()[0][0], 0.0, epsilon = 1e-12);

    let segments: Vec<_> = spline.segments().collect();
    for pair in segments.windows(2) {
        let knot = pair[0].end;
        assert_eq!(knot, pair[1].start);
        assert_relative_eq!(
            pair[0].evaluate(knot),
            pair[1].evaluate(knot),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            pair[0].derivative(knot, 1),
            pair[1].derivative(knot, 1),
            epsilon = 1e-8
        );
    }
}

#[test]
fn cubic_is_twice_smooth_with_natural_ends() {
    let spline = cubic(&irregular()).unwrap();
    let segments: Vec<_> = spline.segments().collect();
    assert_eq!(segments.len(), 4);

    for pair in segments.windows(2) {
        let knot = pair[0].end;
        for order in 0..=2 {
            assert_relative_eq!(
                pair[0].derivative(knot, order),
                pair[1].derivative(knot, order),
                epsilon = 1e-8
            );
        }
    }

    assert_relative_eq!(spline.derivative(0.0, 2).unwrap(), 0.0, epsilon = 1e-8);
    assert_relative_eq!(spline.derivative(7.0, 2).unwrap(), 0.0, epsilon = 1e-8);
    assert_relative_eq!(spline.derivative(2.0, 4).unwrap(), 0.0);
}

#[test]
fn cubic_reproduces_a_line() {
    let points = PointSet::new([0.0, 0.5, 2.0, 3.0].map(|x| (x, 3.0 * x - 1.0))).unwrap();
    let spline = cubic(&points).unwrap();
    for x in [0.25, 1.0, 2.75] {
        assert_relative_eq!(spline.evaluate(x).unwrap(), 3.0 * x - 1.0, epsilon = 1e-9);
    }
}

#[test]
fn evaluation_outside_the_knots_fails() {
    let spline = cubic(&irregular()).unwrap();
    assert_eq!(
        spline.evaluate(7.5),
        Err(Error::OutOfRange {
            x: 7.5,
            min: 0.0,
            max: 7.0
        })
    );
    assert!(matches!(
        spline.evaluate(f64::NAN),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn construction_rejects_bad_knots() {
    let single = PointSet::new([(1.0, 2.0)]).unwrap();
    assert_eq!(
        linear(&single),
        Err(Error::TooFewNodes { count: 1, min: 2 })
    );

    let repeated = PointSet::new([(2.0, 1.0), (0.0, 0.0), (2.0, 3.0)]).unwrap();
    assert!(matches!(
        cubic(&repeated),
        Err(Error::DuplicateNode { x, .. }) if x == 2.0
    ));
}
