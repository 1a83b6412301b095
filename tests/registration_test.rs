//! New-friend registration flow against a mock API

mod helpers;

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use helpers::AttendanceMockServer;
use rollcall::controllers::RegistrationController;
use rollcall::RollcallError;

const YEAR: i32 = 2025;

fn sample_students() -> serde_json::Value {
    json!([
        {"id": 10, "name": "김은혜", "classRoomId": 1},
        {"id": 11, "name": "김은총", "classRoomId": 2},
        {"id": 12, "name": "박요한", "classRoomId": 1}
    ])
}

fn sample_classes() -> serde_json::Value {
    json!([
        {"id": 1, "schoolType": "MIDDLE", "grade": 1, "classNumber": 1, "teacherName": "장미령"},
        {"id": 2, "schoolType": "HIGH", "grade": 1, "classNumber": 3, "teacherName": "안유빈"}
    ])
}

#[tokio::test]
async fn test_short_query_makes_no_request() {
    let mock = AttendanceMockServer::new().await;
    // A single hangul syllable is one character, below the threshold.
    mock.mock_students(YEAR, sample_students(), 0).await;

    let mut registration = RegistrationController::new(mock.client(), YEAR);
    registration.search_referrer("김").await.unwrap();
    assert!(registration.results().is_empty());
}

#[tokio::test]
async fn test_search_joins_students_with_their_class() {
    let mock = AttendanceMockServer::new().await;
    mock.mock_students(YEAR, sample_students(), 1).await;
    mock.mock_class_rooms(YEAR, sample_classes()).await;

    let mut registration = RegistrationController::new(mock.client(), YEAR);
    registration.search_referrer("김은").await.unwrap();

    assert_eq!(registration.results().len(), 2);
    let first = &registration.results()[0];
    assert_eq!(first.name, "김은혜");
    assert_eq!(
        first.class_label.as_ref().map(|l| l.to_string()),
        Some("중1-1".to_string())
    );
    assert_eq!(first.teacher_name.as_deref(), Some("장미령"));
}

#[tokio::test]
async fn test_incomplete_form_never_reaches_the_network() {
    let mock = AttendanceMockServer::new().await;
    Mock::given(method("POST"))
        .and(path("/new-friends"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock.server)
        .await;

    let mut registration = RegistrationController::new(mock.client(), YEAR);
    registration.set_name("새친구");
    registration.set_phone("010-0000-0000");
    // Birth and referrer are still missing.
    let outcome = registration.submit().await;
    assert!(matches!(outcome, Err(RollcallError::Validation(_))));
}

#[tokio::test]
async fn test_full_submission_posts_and_resets_the_form() {
    let mock = AttendanceMockServer::new().await;
    mock.mock_students(YEAR, sample_students(), 1).await;
    mock.mock_class_rooms(YEAR, sample_classes()).await;
    Mock::given(method("POST"))
        .and(path("/new-friends"))
        .and(body_json(json!({
            "name": "새친구",
            "birth": "2011-05-14",
            "phone": "010-0000-0000",
            "studentId": 12
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock.server)
        .await;

    let mut registration = RegistrationController::new(mock.client(), YEAR);
    registration.search_referrer("요한").await.unwrap();
    assert!(registration.select_referrer(0));

    registration.set_name("새친구");
    registration.set_birth(NaiveDate::from_ymd_opt(2011, 5, 14).unwrap());
    registration.set_phone("010-0000-0000");
    registration.submit().await.unwrap();

    assert!(registration.was_submitted());
    assert!(registration.form().name.is_empty());
    assert!(registration.referrer().is_none());
}
