use super::*;

#[test]
fn subject_id_strips_provider_prefix() {
    assert_eq!(subject_id("auth0|abc123"), "abc123");
    assert_eq!(subject_id("google-oauth2|987"), "987");
}

#[test]
fn subject_id_passes_bare_ids_through() {
    assert_eq!(subject_id("abc123"), "abc123");
    assert_eq!(subject_id(""), "");
}

#[test]
fn subject_id_keeps_only_the_last_segment() {
    assert_eq!(subject_id("a|b|c"), "c");
}
