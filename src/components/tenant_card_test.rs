use super::*;

#[test]
fn initials_take_first_letter_of_each_name() {
    assert_eq!(initials("Juan", "Pérez"), "JP");
}

#[test]
fn initials_uppercase_lowercase_input() {
    assert_eq!(initials("ana", "garcía"), "AG");
}

#[test]
fn initials_tolerate_missing_parts() {
    assert_eq!(initials("Ana", ""), "A");
    assert_eq!(initials("", ""), "");
}
