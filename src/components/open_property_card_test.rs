use super::*;

#[test]
fn count_label_singular() {
    assert_eq!(count_label(1, "Dormitorio"), "1 Dormitorio");
    assert_eq!(count_label(1, "Baño"), "1 Baño");
}

#[test]
fn count_label_plural() {
    assert_eq!(count_label(2, "Dormitorio"), "2 Dormitorios");
    assert_eq!(count_label(0, "Baño"), "0 Baños");
    assert_eq!(count_label(3, "Baño"), "3 Baños");
}
