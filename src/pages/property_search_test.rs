use super::*;

fn sample_property(id: &str, address: &str) -> Property {
    Property {
        id: id.to_owned(),
        address: address.to_owned(),
        bedrooms: 2,
        bathrooms: 1,
        media: Vec::new(),
        candidates: Vec::new(),
    }
}

#[test]
fn blank_query_keeps_the_full_list() {
    let properties = vec![
        sample_property("p-1", "Calle 12 #34-56"),
        sample_property("p-2", "Carrera 7 #45-10"),
    ];
    assert_eq!(filter_properties(&properties, "").len(), 2);
    assert_eq!(filter_properties(&properties, "   ").len(), 2);
}

#[test]
fn query_matches_addresses_case_insensitively() {
    let properties = vec![
        sample_property("p-1", "Calle 12 #34-56"),
        sample_property("p-2", "Carrera 7 #45-10"),
    ];
    let filtered = filter_properties(&properties, "CARRERA");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "p-2");
}

#[test]
fn query_without_matches_yields_empty() {
    let properties = vec![sample_property("p-1", "Calle 12 #34-56")];
    assert!(filter_properties(&properties, "Medellín").is_empty());
}
