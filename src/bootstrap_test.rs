use super::*;

#[test]
fn step_rounds_to_pixels() {
    assert_eq!(horizontal_step(100.0), 100);
    assert_eq!(horizontal_step(-3.4), -3);
    assert_eq!(horizontal_step(2.5), 3);
}

#[test]
fn step_saturates() {
    assert_eq!(horizontal_step(1e12), i32::MAX);
    assert_eq!(horizontal_step(-1e12), i32::MIN);
}

#[test]
fn gallery_ignores_zero_delta() {
    assert_eq!(gallery_step(0.0), None);
}

#[test]
fn gallery_leaves_sub_pixel_deltas_alone() {
    assert_eq!(gallery_step(0.3), None);
    assert_eq!(gallery_step(-0.49), None);
}

#[test]
fn gallery_scrolls_whole_pixels() {
    assert_eq!(gallery_step(0.5), Some(1));
    assert_eq!(gallery_step(-53.0), Some(-53));
}
