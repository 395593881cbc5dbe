use std::f64::consts::{FRAC_PI_2, PI};

use coords::{Coords, PartialCoords, Side};

#[test]
fn three_four_five() {
    assert_eq!(Coords::new(3.0, 4.0).get_magnitude(), 5.0);
}

#[test]
fn theta_of_axes() {
    assert_eq!(Coords::new(1.0, 0.0).get_theta(), 0.0);
    assert_eq!(Coords::new(0.0, 1.0).get_theta(), PI / 2.0);
    assert_eq!(Coords::new(-1.0, 0.0).get_theta(), PI);
}

#[test]
fn add_from_origin() {
    assert!(Coords::new(0.0, 0.0).add((2.0, 3.0)).is_equal((2.0, 3.0)));
}

#[test]
fn perpendicular_defaults_to_right() {
    let c = Coords::new(5.0, 0.0);
    assert!(c.get_perpendicular_vector(false).is_equal((0.0, -5.0)));
    assert!(c.get_perpendicular_vector(Side::Left).is_equal((0.0, 5.0)));
}

#[test]
fn multiply_zero_is_not_the_missing_scalar() {
    let mut c = Coords::new(3.0, -4.0);
    c.multiply(None);
    assert_eq!(c, Coords::new(3.0, -4.0));
    c.multiply(0.0);
    assert_eq!(c.get_magnitude(), 0.0);
}

// Zero and a missing component are the same thing for additive operands.
#[test]
fn explicit_zero_and_missing_component_add_alike() {
    let mut explicit = Coords::new(1.0, 1.0);
    explicit.add((0.0, 2.0));
    let mut missing = Coords::new(1.0, 1.0);
    missing.add(PartialCoords::y_only(2.0));
    assert_eq!(explicit, missing);
}

#[test]
fn chained_mutations() {
    let mut c = Coords::new(-3.0, 4.0);
    c.abs().reverse().set_magnitude(10.0).round();
    assert_eq!(c, Coords::new(-6.0, -8.0));

    let mut c = Coords::new(1.0, 2.0);
    c.set_tangent().subtract((1.0, 1.0));
    assert_eq!(c, Coords::new(1.0, 0.0));
}

#[test]
fn rotate_quarter_turn_around_pivot() {
    let mut c = Coords::new(3.0, 1.0);
    c.rotate(FRAC_PI_2, (1.0, 1.0));
    assert!((c.x - 1.0).abs() < 1e-9);
    assert!((c.y - 3.0).abs() < 1e-9);
}

#[test]
fn clear_zeroes_and_derived_values_do_not_mutate() {
    let mut c = Coords::new(2.0, 2.0);
    let unit = c.get_unit_vector((2.0, 4.0));
    let doubled = c.get_multiply(2.0);
    assert_eq!(unit, Coords::new(0.0, 1.0));
    assert_eq!(doubled, Coords::new(4.0, 4.0));
    assert_eq!(c, Coords::new(2.0, 2.0));
    c.clear();
    assert_eq!(c, Coords::zero());
}

#[test]
fn degrees_follow_theta() {
    assert!((Coords::new(1.0, 1.0).get_degrees() - 45.0).abs() < 1e-9);
    assert!((Coords::new(0.0, -2.0).get_degrees() + 90.0).abs() < 1e-9);
}

#[test]
fn integer_equality_rounds_both_sides() {
    let c = Coords::new(0.5, -0.5);
    assert!(c.is_equal_integer((1.0, 0.0)));
    assert!(!c.is_equal((1.0, 0.0)));
}
