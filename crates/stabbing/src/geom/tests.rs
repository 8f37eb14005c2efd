use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn assert_touches_both(r: f64, l: &Line, p1: Point2, p2: Point2) {
    let d1 = squared_distance(l, p1).sqrt();
    let d2 = squared_distance(l, p2).sqrt();
    assert!((d1 - r).abs() < 1e-7, "distance to p1 = {d1}, r = {r}");
    assert!((d2 - r).abs() < 1e-7, "distance to p2 = {d2}, r = {r}");
}

#[test]
fn tangents_of_coincident_centers_are_empty() {
    let p = vector![3.0, -1.0];
    assert!(tangents(1.0, p, p).is_empty());
    assert!(tangent_line(1.0, p, p, TangentKind::OuterUpper).is_none());
}

#[test]
fn overlapping_disks_only_have_outer_tangents() {
    let ts = tangents(1.0, vector![0.0, 0.0], vector![1.5, 0.0]);
    assert_eq!(ts.len(), 2);
    // d == 2r is still overlapping (touching) for the inner tangents
    let ts = tangents(1.0, vector![0.0, 0.0], vector![2.0, 0.0]);
    assert_eq!(ts.len(), 2);
    assert!(
        tangent_line(1.0, vector![0.0, 0.0], vector![2.0, 0.0], TangentKind::InnerCcw).is_none()
    );
}

#[test]
fn horizontal_pair_tangents() {
    let (p1, p2) = (vector![0.0, 0.0], vector![10.0, 0.0]);
    let ts = tangents(1.0, p1, p2);
    assert_eq!(ts.len(), 4);
    // outer+ is y = 1, outer− is y = −1, both directed along +x
    assert_eq!(ts[0], Segment::new(vector![0.0, 1.0], vector![10.0, 1.0]));
    assert_eq!(ts[1], Segment::new(vector![0.0, -1.0], vector![10.0, -1.0]));
    // inner tangents cross the midpoint; ccw rises, cw falls
    let ccw = ts[2].supporting_line();
    let cw = ts[3].supporting_line();
    assert!(ccw.d.y > 0.0 && ccw.d.x > 0.0);
    assert!(cw.d.y < 0.0 && cw.d.x > 0.0);
    assert!(squared_distance(&ccw, vector![5.0, 0.0]) < 1e-18);
    assert!(squared_distance(&cw, vector![5.0, 0.0]) < 1e-18);
    // segment endpoints are the tangency points: |inner| = sqrt(d² − 4r²)
    assert!((ts[2].squared_length() - 96.0).abs() < 1e-9);
    assert_touches_both(1.0, &ccw, p1, p2);
    assert_touches_both(1.0, &cw, p1, p2);
}

#[test]
fn side_tests_plain_and_inflated() {
    let cfg = GeomCfg::default();
    let x_axis = Line::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    assert_eq!(oriented_side(vector![3.0, 2.0], &x_axis), Side::Positive);
    assert_eq!(oriented_side(vector![3.0, -2.0], &x_axis), Side::Negative);
    assert_eq!(oriented_side(vector![-7.0, 0.0], &x_axis), Side::Zero);
    // a radius-2 disk at height 2 touches the axis
    assert_eq!(inflated_side(2.0, vector![3.0, 2.0], &x_axis, cfg), Side::Zero);
    assert_eq!(inflated_side(1.0, vector![3.0, 2.0], &x_axis, cfg), Side::Positive);
    assert_eq!(inflated_side(1.0, vector![3.0, -2.0], &x_axis, cfg), Side::Negative);
}

#[test]
fn perpendicular_turns_left() {
    let l = Line::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let perp = l.perpendicular(vector![4.0, 4.0]);
    assert_eq!(perp.p, vector![4.0, 4.0]);
    assert_eq!(perp.d, vector![0.0, 1.0]);
    // points further along `l` than the foot lie on the negative side
    assert_eq!(oriented_side(vector![9.0, 0.0], &perp), Side::Negative);
    assert_eq!(oriented_side(vector![1.0, 0.0], &perp), Side::Positive);
}

#[test]
fn intersection_counts() {
    let cfg = GeomCfg::exact();
    let l = Line::new(vector![0.0, 1.0], vector![2.0, 0.0]);
    assert_eq!(line_circle_intersection_count(1.0, vector![5.0, 0.5], &l, cfg), 2);
    assert_eq!(line_circle_intersection_count(1.0, vector![5.0, 0.0], &l, cfg), 1);
    assert_eq!(line_circle_intersection_count(1.0, vector![5.0, -0.5], &l, cfg), 0);

    let o = vector![0.0, 0.0];
    assert_eq!(circle_circle_intersection_count(1.0, o, vector![1.0, 0.0], cfg), 2);
    assert_eq!(circle_circle_intersection_count(1.0, o, vector![2.0, 0.0], cfg), 1);
    assert_eq!(circle_circle_intersection_count(1.0, o, vector![2.5, 0.0], cfg), 0);
}

#[test]
fn touch_slack_scales_with_radius() {
    let cfg = GeomCfg::default();
    let r = 1e-6;
    let o = vector![0.0, 0.0];
    // ten radii apart: clearly disjoint however small the disks are
    assert_eq!(circle_circle_intersection_count(r, o, vector![1e-5, 0.0], cfg), 0);
    assert_eq!(circle_circle_intersection_count(r, o, vector![2e-6, 0.0], cfg), 1);
    assert_eq!(circle_circle_intersection_count(r, o, vector![1.5e-6, 0.0], cfg), 2);

    let x_axis = Line::new(o, vector![1.0, 0.0]);
    assert_eq!(inflated_side(r, vector![3.0, 2e-6], &x_axis, cfg), Side::Positive);
    assert_eq!(inflated_side(r, vector![3.0, -2e-6], &x_axis, cfg), Side::Negative);
    assert_eq!(inflated_side(r, vector![3.0, 1e-6], &x_axis, cfg), Side::Zero);
    assert_eq!(line_circle_intersection_count(r, vector![3.0, 2e-6], &x_axis, cfg), 0);
}

#[test]
fn ray_distance_clamps_at_source() {
    let cfg = GeomCfg::exact();
    let ray = Ray::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    // behind the source the distance is to the source point
    assert_eq!(squared_distance(&ray, vector![-3.0, 4.0]), 25.0);
    assert_eq!(squared_distance(&ray, vector![3.0, 4.0]), 16.0);
    // a disk straddling the supporting line behind the source misses the ray
    let line = Line::new(ray.source, ray.d);
    assert_eq!(line_circle_intersection_count(1.0, vector![-5.0, 0.0], &line, cfg), 2);
    assert_eq!(line_circle_intersection_count(1.0, vector![-5.0, 0.0], &ray, cfg), 0);
    assert_eq!(line_circle_intersection_count(1.0, vector![5.0, 0.0], &ray, cfg), 2);
}

#[test]
fn segment_distance_clamps_to_endpoints() {
    let s = Segment::new(vector![0.0, 0.0], vector![2.0, 0.0]);
    assert_eq!(squared_distance(&s, vector![1.0, 3.0]), 9.0);
    assert_eq!(squared_distance(&s, vector![5.0, 4.0]), 25.0);
}

#[test]
fn line_intersection_and_parallels() {
    let a = Line::through(vector![0.0, 0.0], vector![1.0, 1.0]);
    let b = Line::through(vector![0.0, 2.0], vector![2.0, 0.0]);
    let p = line_intersection(&a, &b).unwrap();
    assert!((p - vector![1.0, 1.0]).norm() < 1e-12);
    let c = Line::new(vector![0.0, 5.0], vector![3.0, 3.0]);
    assert!(line_intersection(&a, &c).is_none());
}

#[test]
fn coincides_ignores_orientation_and_base_point() {
    let a = Line::new(vector![0.0, 1.0], vector![1.0, 0.0]);
    let b = Line::new(vector![7.0, 1.0], vector![-4.0, 0.0]);
    let c = Line::new(vector![7.0, 1.5], vector![-4.0, 0.0]);
    assert!(a.coincides(&b, 1e-12));
    assert!(!a.coincides(&c, 1e-12));
}

proptest! {
    #[test]
    fn outer_tangents_touch_both_disks(
        x1 in -50.0..50.0f64, y1 in -50.0..50.0f64,
        x2 in -50.0..50.0f64, y2 in -50.0..50.0f64,
        r in 0.1..5.0f64,
    ) {
        let (p1, p2) = (vector![x1, y1], vector![x2, y2]);
        prop_assume!((p2 - p1).norm() > 1e-3);
        let ts = tangents(r, p1, p2);
        prop_assert!(ts.len() >= 2);
        for t in &ts[..2] {
            let l = t.supporting_line();
            prop_assert!((squared_distance(&l, p1).sqrt() - r).abs() < 1e-7);
            prop_assert!((squared_distance(&l, p2).sqrt() - r).abs() < 1e-7);
        }
        // both disks lie on the same side of an outer tangent
        let up = ts[0].supporting_line();
        prop_assert_eq!(oriented_side(p1, &up), Side::Negative);
        prop_assert_eq!(oriented_side(p2, &up), Side::Negative);
    }

    #[test]
    fn inner_tangents_touch_both_disks_and_separate_them(
        x1 in -50.0..50.0f64, y1 in -50.0..50.0f64,
        x2 in -50.0..50.0f64, y2 in -50.0..50.0f64,
        r in 0.1..5.0f64,
    ) {
        let (p1, p2) = (vector![x1, y1], vector![x2, y2]);
        prop_assume!((p2 - p1).norm() > 2.0 * r + 1e-3);
        let ts = tangents(r, p1, p2);
        prop_assert_eq!(ts.len(), 4);
        for t in &ts[2..] {
            let l = t.supporting_line();
            prop_assert!((squared_distance(&l, p1).sqrt() - r).abs() < 1e-7);
            prop_assert!((squared_distance(&l, p2).sqrt() - r).abs() < 1e-7);
            // crosses between the centers
            prop_assert_ne!(oriented_side(p1, &l), oriented_side(p2, &l));
            let hit = line_intersection(&l, &Line::through(p1, p2)).unwrap();
            prop_assert!(squared_distance(&Segment::new(p1, p2), hit) < 1e-9);
        }
    }
}
