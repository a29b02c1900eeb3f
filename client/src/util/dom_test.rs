use super::*;

#[test]
fn helpers_are_inert_off_browser() {
    scroll_to_top();
    scroll_to_section("pricing");
    assert_eq!(location_origin(), "");
}
