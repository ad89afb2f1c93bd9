use super::*;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StoreClient {
    StoreClient::new(base_url, "test-key", 10).expect("client construction should not fail")
}

fn bbox() -> BoundingBox {
    BoundingBox {
        min_lat: 22.30,
        min_lng: 114.16,
        max_lat: 22.34,
        max_lng: 114.20,
    }
}

fn sample_rows() -> serde_json::Value {
    serde_json::json!([
        {
            "doctorNameTC": "陳大文",
            "doctorNameEN": "Dr. Chan Tai Man",
            "telephone": "2345 6789",
            "medicalSpecialty": "牙科",
            "medicalSpecialtyDetailed": "牙齒矯正科",
            "addressDesc": "123 Nathan Road",
            "addressLatitude": 22.32,
            "addressLongitude": 114.17,
            "qualifications": "[\"MBBS (HK)\"]",
            "openingHours": "{\"MON\": [{\"from\": {\"h\": 9, \"m\": 0}, \"to\": {\"h\": 17, \"m\": 0}}]}"
        },
        {
            "doctorNameTC": "李小明",
            "doctorNameEN": "Dr. Lee Siu Ming",
            "telephone": "2987 6543",
            "medicalSpecialty": "外科",
            "addressDesc": "88 Des Voeux Road",
            "addressLatitude": 22.33,
            "addressLongitude": 114.18,
            "qualifications": "not json",
            "openingHours": "also not json"
        }
    ])
}

#[tokio::test]
async fn fetch_posts_bbox_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_practitioners_in_bbox"))
        .and(query_param("limit", "2000"))
        .and(header("apikey", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "min_lat": 22.30,
            "min_long": 114.16,
            "max_lat": 22.34,
            "max_long": 114.20
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_rows()))
        .expect(1)
        .mount(&server)
        .await;

    let practitioners = test_client(&server.uri())
        .practitioners_in_bbox(bbox(), 2000)
        .await
        .unwrap();
    assert_eq!(practitioners.len(), 2);
    assert_eq!(practitioners[0].specialty, "牙科");
    assert_eq!(practitioners[0].qualifications, vec!["MBBS (HK)".to_owned()]);
}

#[tokio::test]
async fn malformed_row_columns_degrade_not_fail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_practitioners_in_bbox"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_rows()))
        .mount(&server)
        .await;

    let practitioners = test_client(&server.uri())
        .practitioners_in_bbox(bbox(), 100)
        .await
        .unwrap();
    let degraded = &practitioners[1];
    assert_eq!(degraded.hours, medmap_core::WeeklySchedule::default());
    assert_eq!(degraded.qualifications, vec!["not json".to_owned()]);
}

#[tokio::test]
async fn non_2xx_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_practitioners_in_bbox"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .practitioners_in_bbox(bbox(), 100)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnexpectedStatus { status: 401, .. }
    ));
}

#[tokio::test]
async fn non_array_body_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_practitioners_in_bbox"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "nope"})),
        )
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .practitioners_in_bbox(bbox(), 100)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Deserialize { .. }));
}
