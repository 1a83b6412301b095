//! Self check-in kiosk flow against a mock API

mod helpers;

use serde_json::json;

use helpers::AttendanceMockServer;
use rollcall::controllers::{SearchOutcome, SelfCheckController};
use rollcall::utils::time::{format_date, today_at_offset};
use rollcall::Settings;

const YEAR: i32 = 2025;

fn settings_for(mock: &AttendanceMockServer) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = mock.server.uri();
    settings
}

fn kiosk_roster() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "schoolType": "MIDDLE",
            "grade": 1,
            "classNumber": 1,
            "teacherName": "장미령",
            "students": [
                {"id": 110, "studentId": 10, "studentName": "김은혜"},
                {"id": 111, "studentId": 11, "studentName": "김은총"},
                {"id": 112, "studentId": 12, "studentName": "박요한"}
            ]
        }
    ])
}

async fn kiosk(mock: &AttendanceMockServer) -> SelfCheckController {
    let settings = settings_for(mock);
    let mut kiosk = SelfCheckController::new(mock.client(), &settings);
    kiosk.load().await.unwrap();
    kiosk
}

#[tokio::test]
async fn test_shared_surname_asks_the_student_to_pick() {
    let mock = AttendanceMockServer::new().await;
    mock.mock_roster(YEAR, kiosk_roster()).await;

    let kiosk = kiosk(&mock).await;
    assert!(!kiosk.is_using_fallback());

    match kiosk.search("김") {
        SearchOutcome::Multiple(matches) => assert_eq!(matches.len(), 2),
        other => panic!("expected Multiple, got {:?}", other),
    }
    assert_eq!(kiosk.search(""), SearchOutcome::Blank);
    assert_eq!(kiosk.search("아무개"), SearchOutcome::NotFound);
}

#[tokio::test]
async fn test_roster_failure_falls_back_to_configured_members() {
    let mock = AttendanceMockServer::new().await;
    mock.mock_roster_failure(YEAR, 503).await;

    let kiosk = kiosk(&mock).await;
    assert!(kiosk.is_using_fallback());
    assert_eq!(kiosk.members().len(), 8);
    assert!(matches!(kiosk.search("김은혜"), SearchOutcome::Single(_)));
}

#[tokio::test]
async fn test_check_in_always_records_late() {
    let mock = AttendanceMockServer::new().await;
    mock.mock_roster(YEAR, kiosk_roster()).await;
    let today = format_date(today_at_offset(9));
    // The mock only accepts a LATE body; any other status fails the test.
    mock.mock_mark_attendance(110, &today, "LATE", true).await;

    let mut kiosk = kiosk(&mock).await;
    let member = match kiosk.search("김은혜") {
        SearchOutcome::Single(member) => member,
        other => panic!("expected Single, got {:?}", other),
    };

    kiosk.check_in(&member).await.unwrap();
    assert_eq!(kiosk.last_checked(), Some(10));
    // The local cache now answers without a history fetch.
    assert!(kiosk.already_checked_today(&member).await);
}

#[tokio::test]
async fn test_history_with_todays_record_counts_as_checked() {
    let mock = AttendanceMockServer::new().await;
    mock.mock_roster(YEAR, kiosk_roster()).await;
    let today = format_date(today_at_offset(9));
    mock.mock_attendance_history(
        112,
        json!([
            {"date": today, "status": "ATTEND"},
            {"date": "2025-03-02", "status": "ABSENT"}
        ]),
    )
    .await;
    mock.mock_attendance_history(110, json!([{"date": "2025-03-02", "status": "ATTEND"}]))
        .await;

    let mut kiosk = kiosk(&mock).await;
    let checked = match kiosk.search("박요한") {
        SearchOutcome::Single(member) => member,
        other => panic!("expected Single, got {:?}", other),
    };
    let unchecked = match kiosk.search("김은혜") {
        SearchOutcome::Single(member) => member,
        other => panic!("expected Single, got {:?}", other),
    };

    assert!(kiosk.already_checked_today(&checked).await);
    assert!(!kiosk.already_checked_today(&unchecked).await);
}
