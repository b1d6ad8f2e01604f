use super::*;

#[test]
fn default_is_identity() {
    let t = Transform::default();
    assert_eq!(t, Transform::new(1.0, Point::new(0.0, 0.0)));
}

#[test]
fn identity_css() {
    assert_eq!(Transform::default().to_css(), "scale(1) translate(0px, 0px)");
}

#[test]
fn css_puts_scale_before_translate() {
    let css = Transform::new(1.5, Point::new(-12.5, 40.0)).to_css();
    assert_eq!(css, "scale(1.5) translate(-12.5px, 40px)");
    assert!(css.find("scale").unwrap_or(usize::MAX) < css.find("translate").unwrap_or(0));
}

#[test]
fn css_is_stable_for_same_input() {
    let t = Transform::new(2.25, Point::new(3.0, -4.0));
    assert_eq!(t.to_css(), t.to_css());
}

#[test]
fn translate_round_trips_point() {
    let t = Transform::new(2.0, Point::new(7.0, 8.0));
    assert_eq!(t.translate(), Point::new(7.0, 8.0));
}
