use super::*;

fn sample_tenant(id: &str, name: &str, last_name: &str) -> TenantSummary {
    TenantSummary {
        id: id.to_owned(),
        name: name.to_owned(),
        last_name: last_name.to_owned(),
        image: None,
        classification: "Profesional".to_owned(),
        rating: 4.5,
        email: "tenant@example.com".to_owned(),
        phone: "+57 300 000 0000".to_owned(),
        current_property: "Calle 12 #34-56".to_owned(),
        monthly_rent: 1200.0,
    }
}

#[test]
fn blank_query_keeps_the_full_list() {
    let tenants = vec![
        sample_tenant("t-1", "Juan", "Pérez"),
        sample_tenant("t-2", "Ana", "García"),
    ];
    assert_eq!(filter_tenants(&tenants, "").len(), 2);
}

#[test]
fn query_matches_across_name_and_last_name() {
    let tenants = vec![
        sample_tenant("t-1", "Juan", "Pérez"),
        sample_tenant("t-2", "Ana", "García"),
    ];
    let filtered = filter_tenants(&tenants, "juan pérez");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "t-1");
}

#[test]
fn query_matches_last_name_alone() {
    let tenants = vec![
        sample_tenant("t-1", "Juan", "Pérez"),
        sample_tenant("t-2", "Ana", "García"),
    ];
    let filtered = filter_tenants(&tenants, "garcía");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "t-2");
}
