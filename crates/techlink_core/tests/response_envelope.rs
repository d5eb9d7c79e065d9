use serde_json::Value;
use techlink_core::{ApiResponse, BusinessError, RepoError, StatusMessage, Technology};

#[test]
fn success_envelope_carries_data_and_omits_errors() {
    let data = vec![Technology {
        id: 1,
        name: "Rust".to_string(),
        description: "systems programming language".to_string(),
    }];
    let envelope = ApiResponse::success(StatusMessage::TechnologyCreated, &data);

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["code"], "201");
    assert_eq!(value["message"], "Technology created successfully");
    assert!(!value["date"].as_str().unwrap().is_empty());
    assert_eq!(value["data"][0]["name"], "Rust");
    assert!(value.get("errors").is_none());
}

#[test]
fn empty_success_envelope_omits_data() {
    let envelope =
        ApiResponse::<Vec<Technology>>::success_empty(StatusMessage::RelationsCreated);

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["code"], "201-1");
    assert!(value.get("data").is_none());
    assert!(value.get("errors").is_none());
}

#[test]
fn failure_envelope_carries_error_list_and_omits_data() {
    let envelope =
        ApiResponse::<Vec<Technology>>::failure(&BusinessError::TooFewAssociations);

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["code"], "404-4");
    assert!(value.get("data").is_none());

    let errors = value["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["code"], "404-4");
    assert_eq!(
        errors[0]["message"],
        "A capability must be associated with at least 3 technologies"
    );
    assert_eq!(errors[0]["param"], "");
}

#[test]
fn date_is_iso8601_utc() {
    let envelope =
        ApiResponse::<Vec<Technology>>::success_empty(StatusMessage::RelationsDeleted);
    let value = serde_json::to_value(&envelope).unwrap();

    let date = value["date"].as_str().unwrap();
    assert!(date.ends_with('Z'), "expected UTC timestamp, got {date}");
    assert!(date.contains('T'));
}

#[test]
fn http_status_mapping_follows_error_class() {
    assert_eq!(BusinessError::TooFewAssociations.http_status(), 400);
    assert_eq!(BusinessError::CapabilityNotFound.http_status(), 400);
    assert_eq!(
        BusinessError::from(RepoError::InvalidData("bad row".to_string())).http_status(),
        500
    );

    assert_eq!(StatusMessage::TechnologyCreated.http_status(), 201);
    assert_eq!(StatusMessage::RelationsCreated.http_status(), 201);
    assert_eq!(StatusMessage::TechnologiesFound.http_status(), 200);
}

#[test]
fn envelope_values_match_serialized_json() {
    let envelope = ApiResponse::<Vec<Technology>>::failure(&BusinessError::DuplicateNames);
    let text = serde_json::to_string(&envelope).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["errors"][0]["code"], "404-3");
}
