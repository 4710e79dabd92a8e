mod common;

use academy_portal::site::{ACADEMY_NAME, FEATURED, HOME_NOTICE_COUNT, PROGRAMS};
use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[actix_web::test]
async fn test_programs_page() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/site/programs").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let programs = body["programs"].as_array().expect("programs");
    assert_eq!(programs.len(), PROGRAMS.len());
    assert_eq!(programs[0]["name"], PROGRAMS[0].name);
    assert!(!body["process"].as_array().expect("process").is_empty());
}

#[actix_web::test]
async fn test_about_page() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/site/about").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["headline"].is_string());
    assert_eq!(body["academy"], ACADEMY_NAME);
    assert!(!body["philosophy"].as_array().expect("philosophy").is_empty());
}

#[actix_web::test]
async fn test_home_shows_latest_notices() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (admin, _) = client.create_test_admin().await;
    for (title, date) in [
        ("1월 소식", "2026-01-05"),
        ("2월 소식", "2026-02-05"),
        ("3월 소식", "2026-03-05"),
        ("4월 소식", "2026-04-05"),
    ] {
        client.create_notice_on(&admin, title, "공지", date).await;
    }

    let req = test::TestRequest::get().uri("/site/home").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["academy"], ACADEMY_NAME);
    assert_eq!(body["featured_programs"].as_array().expect("featured").len(), FEATURED.len());

    let latest = body["latest_notices"].as_array().expect("notices");
    assert_eq!(latest.len() as u64, HOME_NOTICE_COUNT);
    let titles: Vec<&str> = latest.iter().map(|n| n["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["4월 소식", "3월 소식", "2월 소식"]);
}
