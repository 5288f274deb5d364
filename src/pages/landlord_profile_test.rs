use super::*;

#[test]
fn profile_lookup_returns_a_record_for_a_subject() {
    let profile = get_profile("abc123").unwrap();
    assert_eq!(profile.first_name, "Juan");
    assert_eq!(profile.compliance_pct, 98);
}

#[test]
fn profile_lookup_fails_for_an_empty_subject() {
    assert_eq!(get_profile(""), None);
}

#[test]
fn filled_stars_floors_the_average() {
    assert_eq!(filled_stars(4.5), 4);
    assert_eq!(filled_stars(5.0), 5);
    assert_eq!(filled_stars(0.9), 0);
}

#[test]
fn filled_stars_clamps_out_of_range_input() {
    assert_eq!(filled_stars(7.2), 5);
    assert_eq!(filled_stars(-1.0), 0);
}
