use super::*;

#[test]
fn tenant_contracts_endpoint_formats_expected_path() {
    assert_eq!(tenant_contracts_endpoint("u123"), "/api/contract/tenant/u123");
}

#[test]
fn property_endpoint_formats_expected_path() {
    assert_eq!(property_endpoint("p-9"), "/api/property/p-9");
}

#[test]
fn assign_role_endpoint_formats_expected_path() {
    assert_eq!(assign_role_endpoint("u123"), "/api/user/u123/role");
}

#[test]
fn contract_request_failed_message_formats_status() {
    assert_eq!(contract_request_failed_message(500), "contract request failed: 500");
}

#[test]
fn property_request_failed_message_formats_status() {
    assert_eq!(property_request_failed_message(404), "property request failed: 404");
}

#[test]
fn tenant_request_failed_message_formats_status() {
    assert_eq!(tenant_request_failed_message(503), "tenant request failed: 503");
}

#[test]
fn assign_role_failed_message_formats_status() {
    assert_eq!(assign_role_failed_message(409), "role assignment failed: 409");
}

#[test]
fn parse_contract_list_reads_array_bodies() {
    let body = serde_json::json!([{
        "_id": "c-1",
        "propertyId": {
            "_id": "p-1",
            "address": "Calle 1",
            "city": "Bogotá",
            "state": "Cundinamarca",
            "type": "Casa"
        },
        "startDate": "2023-02-01",
        "endDate": "2023-08-01",
        "status": "0",
        "tenant": { "avgRating": 4.0 }
    }]);
    let contracts = parse_contract_list(body);
    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0].id, "c-1");
}

#[test]
fn parse_contract_list_treats_non_array_body_as_empty() {
    let body = serde_json::json!({ "message": "no contracts found" });
    assert!(parse_contract_list(body).is_empty());
}
