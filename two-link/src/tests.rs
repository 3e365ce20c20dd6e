use crate::*;
use approx::assert_abs_diff_eq;

fn arm(l1: f64, l2: f64, t1: f64, t2: f64) -> PlanarArm {
    let joint = |t| Joint::with_limits(t, -360., 360.).unwrap();
    PlanarArm::new(
        Link::new(l1, "Link 1").unwrap(),
        joint(t1),
        Link::new(l2, "Link 2").unwrap(),
        joint(t2),
    )
}

fn example() -> PlanarArm {
    PlanarArm::new(
        Link::new(5., "Link 1").unwrap(),
        Joint::new(45.).unwrap(),
        Link::new(3., "Link 2").unwrap(),
        Joint::new(30.).unwrap(),
    )
}

fn samples() -> impl Iterator<Item = [f64; 2]> {
    // Skips the singular configurations θ2 = 0 and θ2 = ±180
    let range = || (-6..=6).map(|i| i as f64 * 29. + 7.);
    range().flat_map(move |t1| range().map(move |t2| [t1, t2]))
}

#[test]
fn forward_kinematics() {
    let Pose { elbow, end_effector } = example().forward_kinematics();
    assert_abs_diff_eq!(elbow[0], 3.536, epsilon = 1e-3);
    assert_abs_diff_eq!(elbow[1], 3.536, epsilon = 1e-3);
    assert_abs_diff_eq!(end_effector[0], 4.312, epsilon = 1e-3);
    assert_abs_diff_eq!(end_effector[1], 6.434, epsilon = 1e-3);
    let t75 = 75f64.to_radians();
    assert_abs_diff_eq!(end_effector[0], elbow[0] + 3. * t75.cos(), epsilon = 1e-12);
    assert_abs_diff_eq!(end_effector[1], elbow[1] + 3. * t75.sin(), epsilon = 1e-12);
}

#[test]
fn forward_kinematics_zero() {
    let pose = arm(5., 3., 0., 0.).forward_kinematics();
    assert_eq!(pose.elbow, [5., 0.]);
    assert_eq!(pose.end_effector, [8., 0.]);
}

#[test]
fn inverse_kinematics_round_trip() {
    let base = arm(5., 3., 0., 0.);
    for [x, y] in [[6., 2.], [0., 7.], [-3., -4.], [2.5, 0.], [-7.9, 0.1]] {
        let solutions = base.inverse_kinematics(x, y).unwrap();
        for angles in solutions {
            let [ex, ey] = base.with_angles(angles).unwrap().forward_kinematics().end_effector;
            assert_abs_diff_eq!(ex, x, epsilon = 1e-9);
            assert_abs_diff_eq!(ey, y, epsilon = 1e-9);
        }
    }
}

#[test]
fn inverse_kinematics_recovers_angles() {
    for [t1, t2] in samples() {
        let arm = arm(5., 3., t1, t2);
        let [x, y] = arm.forward_kinematics().end_effector;
        let solutions = arm.inverse_kinematics(x, y).unwrap();
        assert!(solutions.iter().any(|&angles| {
            let [ex, ey] = arm.with_angles(angles).unwrap().forward_kinematics().end_effector;
            (ex - x).abs() < 1e-9 && (ey - y).abs() < 1e-9
        }));
    }
}

#[test]
fn inverse_kinematics_branches() {
    let arm = example();
    let [up, down] = arm.inverse_kinematics(6., 2.).unwrap();
    assert!(up[1] > 0.);
    assert_abs_diff_eq!(down[1], -up[1]);
    assert_abs_diff_eq!(up[1], 0.2f64.acos().to_degrees(), epsilon = 1e-12);
    assert_eq!(arm.inverse_kinematics_branch(6., 2., Elbow::Up).unwrap(), up);
    assert_eq!(arm.inverse_kinematics_branch(6., 2., Elbow::Down).unwrap(), down);
}

#[test]
fn inverse_kinematics_boundary() {
    let arm = arm(5., 3., 0., 0.);
    // Fully stretched
    let [up, down] = arm.inverse_kinematics(8., 0.).unwrap();
    assert_eq!(up, [0., 0.]);
    assert_eq!(up, down);
    // Fully folded
    let [up, down] = arm.inverse_kinematics(0., 2.).unwrap();
    let a = arm.with_angles(up).unwrap().forward_kinematics();
    let b = arm.with_angles(down).unwrap().forward_kinematics();
    assert_abs_diff_eq!(a.elbow[0], b.elbow[0], epsilon = 1e-12);
    assert_abs_diff_eq!(a.elbow[1], b.elbow[1], epsilon = 1e-12);
    assert_abs_diff_eq!(a.end_effector[1], 2., epsilon = 1e-12);
}

#[test]
fn unreachable() {
    let arm = example();
    for [x, y] in [[10., 0.], [6., 8.], [1., 0.], [0., 0.], [f64::NAN, 0.]] {
        let err = arm.inverse_kinematics(x, y).unwrap_err();
        assert!(err.is_unreachable(), "{x}, {y}");
    }
    let Err(Error::Unreachable { distance, min, max, .. }) = arm.inverse_kinematics(6., 8.) else {
        panic!("expected unreachable");
    };
    assert_eq!([distance, min, max], [10., 2., 8.]);
}

#[test]
fn reachable_solutions() {
    let limited = PlanarArm::new(
        Link::new(5., "Link 1").unwrap(),
        Joint::new(0.).unwrap(),
        Link::new(3., "Link 2").unwrap(),
        Joint::with_limits(0., 0., 180.).unwrap(),
    );
    let solutions = limited.reachable_solutions(6., 2.).unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].0, Elbow::Up);
    assert!(limited.reachable_solutions(9., 0.).is_err());
    assert_eq!(example().reachable_solutions(6., 2.).unwrap().len(), 2);
}

#[test]
fn with_angles_limits() {
    let err = example().with_angles([190., 0.]).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    let arm = example().with_angles([10., -20.]).unwrap();
    assert_eq!(arm.angles(), [10., -20.]);
    assert_eq!(arm.lengths(), [5., 3.]);
}

#[test]
fn jacobian_det() {
    for [t1, t2] in samples() {
        let arm = arm(5., 3., t1, t2);
        let [[a, b], [c, d]] = arm.jacobian();
        let expected = 5. * 3. * t2.to_radians().sin();
        assert_abs_diff_eq!(a * d - b * c, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(arm.jacobian_det(), expected, epsilon = 1e-9);
    }
}

#[test]
fn jacobian_finite_difference() {
    const H: f64 = 1e-6;
    let arm = arm(5., 3., 45., 30.);
    let j = arm.jacobian();
    for (col, delta) in [[H, 0.], [0., H]].into_iter().enumerate() {
        let [t1, t2] = arm.angles();
        let dh = delta.map(f64::to_degrees);
        let p = |s: f64| {
            arm.with_angles([t1 + s * dh[0], t2 + s * dh[1]])
                .unwrap()
                .forward_kinematics()
                .end_effector
        };
        let [xp, yp] = p(1.);
        let [xm, ym] = p(-1.);
        assert_abs_diff_eq!((xp - xm) / (2. * H), j[0][col], epsilon = 1e-6);
        assert_abs_diff_eq!((yp - ym) / (2. * H), j[1][col], epsilon = 1e-6);
    }
}

#[test]
fn singularity() {
    assert!(arm(5., 3., 30., 0.).is_singular(1e-12));
    assert!(arm(5., 3., 30., 180.).is_singular(1e-12));
    assert!(!example().is_singular(1e-12));
    let [vx, vy] = arm(5., 3., 0., 0.).tip_velocity([1., 0.]);
    assert_abs_diff_eq!(vx, 0., epsilon = 1e-12);
    assert_abs_diff_eq!(vy, 8., epsilon = 1e-12);
}

#[test]
fn workspace() {
    assert_eq!(arm(3., 5., 0., 0.).workspace_bounds(), [2., 8.]);
    let arm = example();
    assert_eq!(arm.workspace_bounds(), [2., 8.]);
    let ws = arm.workspace();
    assert!(ws.contains(8., 0.));
    assert!(ws.contains(0., -2.));
    assert!(!ws.contains(1., 1.));
    assert_abs_diff_eq!(ws.area(), std::f64::consts::PI * 60.);
    let summary = arm.workspace_summary();
    assert_eq!(summary.min_reach, 2.);
    assert_eq!(summary.max_reach, 8.);
    assert_eq!(summary.description, "From 2 to 8 units from the base.");
    assert_eq!(
        summary.to_string(),
        "Minimum Reach: 2\nMaximum Reach: 8\nReachable Area: From 2 to 8 units from the base."
    );
}

#[test]
fn elbow() {
    let mut elbow = Elbow::default();
    assert_eq!(elbow, Elbow::Up);
    elbow.flip();
    assert_eq!(elbow, Elbow::Down);
    assert_eq!(elbow.to_string(), "Elbow down");
    assert_eq!(elbow.name_lowercase(), "down");
}
