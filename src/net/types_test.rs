use super::*;

// =============================================================
// Backend JSON fixtures
// =============================================================

#[test]
fn contract_deserializes_backend_shape() {
    let json = serde_json::json!({
        "_id": "c-1",
        "propertyId": {
            "_id": "p-9",
            "address": "Calle 12 #34-56",
            "city": "Bogotá",
            "state": "Cundinamarca",
            "type": "Apartamento"
        },
        "startDate": "2024-01-01",
        "endDate": "2024-06-01",
        "status": "1",
        "tenant": { "avgRating": 4.5 }
    });
    let contract: Contract = serde_json::from_value(json).unwrap();
    assert_eq!(contract.id, "c-1");
    assert_eq!(contract.property.id, "p-9");
    assert_eq!(contract.property.kind, "Apartamento");
    assert_eq!(contract.start_date, "2024-01-01");
    assert_eq!(contract.status, "1");
    assert!((contract.tenant.avg_rating - 4.5).abs() < f64::EPSILON);
}

#[test]
fn property_deserializes_with_media_and_candidates() {
    let json = serde_json::json!({
        "_id": "p-9",
        "address": "Calle 12 #34-56",
        "bedrooms": 2,
        "bathrooms": 1,
        "media": [{ "mediaUrl": "https://cdn.example/p9.jpg" }],
        "candidates": [{ "userId": "u-1" }, { "userId": "u-2" }]
    });
    let property: Property = serde_json::from_value(json).unwrap();
    assert_eq!(property.bedrooms, 2);
    assert_eq!(property.cover_url(), Some("https://cdn.example/p9.jpg"));
    assert_eq!(property.candidates.len(), 2);
}

#[test]
fn property_media_and_candidates_default_to_empty() {
    let json = serde_json::json!({
        "_id": "p-9",
        "address": "Calle 12 #34-56",
        "bedrooms": 1,
        "bathrooms": 1
    });
    let property: Property = serde_json::from_value(json).unwrap();
    assert!(property.media.is_empty());
    assert_eq!(property.cover_url(), None);
    assert!(property.candidates.is_empty());
}

#[test]
fn tenant_summary_image_is_optional() {
    let json = serde_json::json!({
        "_id": "t-1",
        "name": "Ana",
        "lastName": "García",
        "classification": "Profesional",
        "rating": 4.8,
        "email": "ana@example.com",
        "phone": "+57 300 000 0000",
        "currentProperty": "Calle 12 #34-56",
        "monthlyRent": 1500.0
    });
    let tenant: TenantSummary = serde_json::from_value(json).unwrap();
    assert_eq!(tenant.image, None);
    assert_eq!(tenant.last_name, "García");
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_to_lowercase_wire_values() {
    assert_eq!(serde_json::to_value(Role::Tenant).unwrap(), "tenant");
    assert_eq!(serde_json::to_value(Role::Landlord).unwrap(), "landlord");
}

#[test]
fn role_titles_are_product_facing() {
    assert_eq!(Role::Tenant.title(), "Inquilino");
    assert_eq!(Role::Landlord.title(), "Arrendatario");
}

// =============================================================
// Closed preference enumerations
// =============================================================

#[test]
fn contract_duration_parses_only_declared_values() {
    assert_eq!(ContractDuration::parse("6_meses"), Some(ContractDuration::SixMonths));
    assert_eq!(ContractDuration::parse("1_año"), Some(ContractDuration::OneYear));
    assert_eq!(ContractDuration::parse("2_años"), Some(ContractDuration::TwoYears));
    assert_eq!(ContractDuration::parse("mas_2_años"), Some(ContractDuration::MoreThanTwoYears));
    assert_eq!(ContractDuration::parse("3_meses"), None);
    assert_eq!(ContractDuration::parse(""), None);
}

#[test]
fn yes_no_parses_only_declared_values() {
    assert_eq!(YesNo::parse("si"), Some(YesNo::Si));
    assert_eq!(YesNo::parse("no"), Some(YesNo::No));
    assert_eq!(YesNo::parse("sí"), None);
    assert_eq!(YesNo::parse("yes"), None);
}

#[test]
fn tenant_type_parses_only_declared_values() {
    assert_eq!(TenantType::parse("estudiante"), Some(TenantType::Estudiante));
    assert_eq!(TenantType::parse("familia"), Some(TenantType::Familia));
    assert_eq!(TenantType::parse("empresa"), None);
}

#[test]
fn age_range_parses_only_declared_buckets() {
    assert_eq!(AgeRange::parse("18-25"), Some(AgeRange::From18To25));
    assert_eq!(AgeRange::parse("50+"), Some(AgeRange::Over50));
    assert_eq!(AgeRange::parse("25-30"), None);
}

#[test]
fn smoker_policy_accepts_indiferente() {
    assert_eq!(SmokerPolicy::parse("indiferente"), Some(SmokerPolicy::Indiferente));
    assert_eq!(SmokerPolicy::parse("maybe"), None);
}

#[test]
fn enum_round_trips_match_as_str() {
    for duration in [
        ContractDuration::SixMonths,
        ContractDuration::OneYear,
        ContractDuration::TwoYears,
        ContractDuration::MoreThanTwoYears,
    ] {
        assert_eq!(ContractDuration::parse(duration.as_str()), Some(duration));
    }
    for range in [AgeRange::From18To25, AgeRange::From26To35, AgeRange::From36To50, AgeRange::Over50] {
        assert_eq!(AgeRange::parse(range.as_str()), Some(range));
    }
}

// =============================================================
// Preference payload wire shape
// =============================================================

#[test]
fn tenant_preferences_serialize_with_spanish_keys() {
    let prefs = TenantPreferences {
        location: "Madrid Centro".to_owned(),
        budget: "1000".to_owned(),
        rooms: "2".to_owned(),
        min_area: "60".to_owned(),
        contract_duration: ContractDuration::OneYear,
        pets: YesNo::No,
    };
    let value = serde_json::to_value(&prefs).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "ubicacion": "Madrid Centro",
            "presupuesto": "1000",
            "habitaciones": "2",
            "areaCuadrada": "60",
            "duracionContrato": "1_año",
            "mascotas": "no"
        })
    );
}

#[test]
fn landlord_preferences_serialize_with_spanish_keys() {
    let prefs = LandlordPreferences {
        tenant_type: TenantType::Estudiante,
        preferred_age: AgeRange::From18To25,
        preferred_gender: GenderPreference::Indiferente,
        smoker: SmokerPolicy::No,
        pets_allowed: YesNo::Si,
    };
    let value = serde_json::to_value(&prefs).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "tipoInquilino": "estudiante",
            "edadPreferida": "18-25",
            "generoPreferido": "indiferente",
            "fumador": "no",
            "mascotasPermitidas": "si"
        })
    );
}

#[test]
fn preference_payload_is_tagged_by_role_variant() {
    let payload = PreferencePayload::Tenant(TenantPreferences {
        location: "Chapinero".to_owned(),
        budget: "900".to_owned(),
        rooms: "1".to_owned(),
        min_area: "45".to_owned(),
        contract_duration: ContractDuration::SixMonths,
        pets: YesNo::Si,
    });
    match &payload {
        PreferencePayload::Tenant(p) => assert_eq!(p.location, "Chapinero"),
        PreferencePayload::Landlord(_) => panic!("expected tenant variant"),
    }
}
