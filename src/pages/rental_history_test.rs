use super::*;
use crate::net::types::{ContractProperty, ContractTenant, PropertyMedia};

fn sample_contract(id: &str, status: &str) -> Contract {
    Contract {
        id: id.to_owned(),
        property: ContractProperty {
            id: format!("p-{id}"),
            address: "Calle 12 #34-56".to_owned(),
            city: "Bogotá".to_owned(),
            state: "Cundinamarca".to_owned(),
            kind: "Apartamento".to_owned(),
        },
        start_date: "2024-01-01".to_owned(),
        end_date: "2024-06-01".to_owned(),
        status: status.to_owned(),
        tenant: ContractTenant { avg_rating: 4.5 },
    }
}

fn sample_property(id: &str) -> Property {
    Property {
        id: id.to_owned(),
        address: "Calle 12 #34-56".to_owned(),
        bedrooms: 2,
        bathrooms: 1,
        media: vec![PropertyMedia { media_url: format!("https://cdn.example/{id}.jpg") }],
        candidates: Vec::new(),
    }
}

// =============================================================
// Status derivation
// =============================================================

#[test]
fn status_code_one_is_arrendado() {
    assert_eq!(ExperienceStatus::from_code("1"), ExperienceStatus::Arrendado);
    assert_eq!(ExperienceStatus::from_code("1").label(), "Arrendado");
}

#[test]
fn any_other_status_code_is_finalizado() {
    assert_eq!(ExperienceStatus::from_code("0"), ExperienceStatus::Finalizado);
    assert_eq!(ExperienceStatus::from_code("2"), ExperienceStatus::Finalizado);
    assert_eq!(ExperienceStatus::from_code(""), ExperienceStatus::Finalizado);
}

// =============================================================
// Experience derivation
// =============================================================

#[test]
fn derive_experience_formats_dates_and_status() {
    let contract = sample_contract("c-1", "1");
    let property = sample_property("p-c-1");
    let experience = derive_experience(&contract, &property);

    assert_eq!(experience.status.label(), "Arrendado");
    assert_eq!(experience.move_in, "1/1/2024");
    assert_eq!(experience.move_out, "6/1/2024");
    assert_eq!(experience.name, "Calle 12 #34-56");
    assert_eq!(experience.address, "Bogotá, Cundinamarca");
    assert_eq!(experience.image, "https://cdn.example/p-c-1.jpg");
    assert!((experience.rating - 4.5).abs() < f64::EPSILON);
}

#[test]
fn derive_experience_falls_back_to_placeholder_image() {
    let contract = sample_contract("c-1", "1");
    let property = Property { media: Vec::new(), ..sample_property("p-c-1") };
    let experience = derive_experience(&contract, &property);
    assert_eq!(experience.image, PLACEHOLDER_IMAGE);
}

// =============================================================
// All-or-nothing enrichment join
// =============================================================

#[test]
fn all_successful_lookups_yield_one_experience_per_contract() {
    let contracts = vec![sample_contract("c-1", "1"), sample_contract("c-2", "0")];
    let properties: Vec<Result<Property, String>> =
        vec![Ok(sample_property("p-c-1")), Ok(sample_property("p-c-2"))];

    let experiences = pair_experiences(&contracts, &properties).unwrap();
    assert_eq!(experiences.len(), 2);
    assert_eq!(experiences[0].id, "c-1");
    assert_eq!(experiences[1].id, "c-2");
    assert_eq!(experiences[1].status, ExperienceStatus::Finalizado);
}

#[test]
fn one_failed_lookup_discards_the_whole_batch() {
    let contracts = vec![sample_contract("c-1", "1"), sample_contract("c-2", "0")];
    let properties: Vec<Result<Property, String>> = vec![
        Ok(sample_property("p-c-1")),
        Err("property request failed: 500".to_owned()),
    ];

    let error = pair_experiences(&contracts, &properties).unwrap_err();
    assert_eq!(error, "property request failed: 500");
}

#[test]
fn empty_contract_list_yields_no_experiences() {
    let experiences = pair_experiences(&[], &[]).unwrap();
    assert!(experiences.is_empty());
}

// =============================================================
// Client-side filtering
// =============================================================

fn sample_experiences() -> Vec<Experience> {
    let contracts = vec![
        sample_contract("c-1", "1"),
        sample_contract("c-2", "0"),
        sample_contract("c-3", "1"),
    ];
    contracts
        .iter()
        .map(|c| derive_experience(c, &sample_property(&c.property.id)))
        .collect()
}

#[test]
fn todas_returns_the_full_list() {
    let experiences = sample_experiences();
    assert_eq!(filtered_experiences(&experiences, HistoryFilter::Todas).len(), 3);
}

#[test]
fn arrendadas_keeps_only_active_leases() {
    let experiences = sample_experiences();
    let filtered = filtered_experiences(&experiences, HistoryFilter::Arrendadas);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|e| e.status == ExperienceStatus::Arrendado));
    assert!(filtered.iter().all(|e| e.status.label() == "Arrendado"));
}

#[test]
fn finalizadas_keeps_only_ended_leases() {
    let experiences = sample_experiences();
    let filtered = filtered_experiences(&experiences, HistoryFilter::Finalizadas);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "c-2");
}

#[test]
fn default_filter_is_todas() {
    assert_eq!(HistoryFilter::default(), HistoryFilter::Todas);
}
