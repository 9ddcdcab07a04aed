mod common;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};

use link_backend::routes::configure_all_routes;

fn create_body(target: &mongodb::bson::oid::ObjectId, datetime: &str) -> Value {
    json!({ "targetUserId": target.to_hex(), "reservationDatetime": datetime })
}

#[actix_web::test]
async fn reschedule_frees_the_original_slot() {
    common::context();
    let app = test::init_service(App::new().configure(configure_all_routes)).await;

    let a_email = common::unique_email("a");
    common::create_user(&a_email, &[]).await;
    let b = common::create_user(&common::unique_email("b"), &[]).await;
    let c = common::create_user(&common::unique_email("c"), &[]).await;
    let a = common::session_from(test::call_service(&app, common::login_request(&a_email).to_request()).await).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/reservations")
        .insert_header(a.bearer())
        .set_json(create_body(&b, "2024-06-01T10:00:00"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let reservation_id = created["data"]["reservationId"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/auth/reservations")
        .insert_header(a.bearer())
        .set_json(create_body(&c, "2024-06-01T10:00:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::put()
        .uri(&format!("/api/auth/reservations/{}", reservation_id))
        .insert_header(a.bearer())
        .set_json(json!({ "reservationDatetime": "2024-06-01T11:00:00" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/auth/reservations")
        .insert_header(a.bearer())
        .set_json(create_body(&c, "2024-06-01T10:00:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn leader_and_member_see_each_other() {
    common::context();
    let app = test::init_service(App::new().configure(configure_all_routes)).await;

    let member_email = common::unique_email("member");
    let leader_email = common::unique_email("leader");
    let member_id = common::create_user(&member_email, &[]).await;
    let leader_id = common::create_user(&leader_email, &[]).await;
    let member = common::session_from(test::call_service(&app, common::login_request(&member_email).to_request()).await).await;
    let leader = common::session_from(test::call_service(&app, common::login_request(&leader_email).to_request()).await).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/reservations")
        .insert_header(member.bearer())
        .set_json(create_body(&leader_id, "2024-06-02T09:30:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/auth/reservations")
        .insert_header(leader.bearer())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"][0]["isLeader"], true);
    assert_eq!(body["data"][0]["counterpartId"], member_id.to_hex());
    assert_eq!(body["data"][0]["reservationDatetime"], "2024-06-02T09:30:00");

    let req = test::TestRequest::get()
        .uri("/api/auth/reservations")
        .insert_header(member.bearer())
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"][0]["isLeader"], false);
    assert_eq!(body["data"][0]["counterpartId"], leader_id.to_hex());
}

#[actix_web::test]
async fn only_participants_can_change_a_reservation() {
    common::context();
    let app = test::init_service(App::new().configure(configure_all_routes)).await;

    let owner_email = common::unique_email("owner");
    let outsider_email = common::unique_email("outsider");
    common::create_user(&owner_email, &[]).await;
    common::create_user(&outsider_email, &[]).await;
    let target = common::create_user(&common::unique_email("target"), &[]).await;
    let owner = common::session_from(test::call_service(&app, common::login_request(&owner_email).to_request()).await).await;
    let outsider = common::session_from(test::call_service(&app, common::login_request(&outsider_email).to_request()).await).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/reservations")
        .insert_header(owner.bearer())
        .set_json(create_body(&target, "2024-06-03T15:00:00"))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let uri = format!("/api/auth/reservations/{}", created["data"]["reservationId"].as_str().unwrap());

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(outsider.bearer())
        .set_json(json!({ "reservationDatetime": "2024-06-03T16:00:00" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete().uri(&uri).insert_header(outsider.bearer()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete().uri(&uri).insert_header(owner.bearer()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri(&uri).insert_header(owner.bearer()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_requests_are_rejected() {
    common::context();
    let app = test::init_service(App::new().configure(configure_all_routes)).await;

    let email = common::unique_email("malformed");
    let me = common::create_user(&email, &[]).await;
    let session = common::session_from(test::call_service(&app, common::login_request(&email).to_request()).await).await;

    let req = test::TestRequest::put()
        .uri("/api/auth/reservations/not-an-id")
        .insert_header(session.bearer())
        .set_json(json!({ "reservationDatetime": "2024-06-03T16:00:00" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/auth/reservations")
        .insert_header(session.bearer())
        .set_json(create_body(&me, "2024-06-03T16:00:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/auth/reservations")
        .insert_header(session.bearer())
        .set_json(create_body(&mongodb::bson::oid::ObjectId::new(), "2024-06-03T16:00:00"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn reservations_require_authentication() {
    common::context();
    let app = test::init_service(App::new().configure(configure_all_routes)).await;

    let req = test::TestRequest::get().uri("/api/auth/reservations").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "authentication_required");
}
