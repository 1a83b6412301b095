//! Invited-friend list flow against a mock API

mod helpers;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use helpers::AttendanceMockServer;
use rollcall::controllers::FriendListController;

#[tokio::test]
async fn test_delete_with_empty_response_refetches_the_list() {
    let mock = AttendanceMockServer::new().await;
    Mock::given(method("GET"))
        .and(path("/new-friends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "새친구", "studentId": 10, "studentName": "김은혜"},
            {"id": 2, "name": "다른친구", "studentId": 12, "studentName": "박요한"}
        ])))
        .up_to_n_times(1)
        .mount(&mock.server)
        .await;
    // The delete endpoint answers with no body at all.
    Mock::given(method("DELETE"))
        .and(path("/new-friends/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new-friends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "다른친구", "studentId": 12, "studentName": "박요한"}
        ])))
        .mount(&mock.server)
        .await;

    let mut list = FriendListController::new(mock.client());
    list.load().await.unwrap();
    assert_eq!(list.friends().len(), 2);

    list.remove(1).await.unwrap();
    assert_eq!(list.friends().len(), 1);
    assert_eq!(list.friends()[0].name, "다른친구");
}
