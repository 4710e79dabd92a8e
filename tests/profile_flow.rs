mod common;

use academy_portal::types::user::{LoginRes, RLogin, RPasswordChange, UserProfile};
use actix_web::{http::StatusCode, test};
use common::{
    client::{bearer, TestClient},
    test_data::PASSWORD,
    TestContext,
};
use entity::user::UserRole;
use serde_json::json;

#[actix_web::test]
async fn test_get_and_update_profile() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user, token) = client.create_test_user().await;

    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: UserProfile = test::read_body_json(resp).await;
    assert_eq!(profile.id, user.id);
    assert_eq!(profile.email, user.email);

    let req = test::TestRequest::patch()
        .uri("/profile")
        .insert_header(bearer(&token))
        .set_json(json!({"name": "  새이름 "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let profile: UserProfile = test::read_body_json(resp).await;
    assert_eq!(profile.display_name, "새이름");

    let stored = ctx.db.get_user_by_id(&user.id).await.unwrap();
    assert_eq!(stored.display_name, "새이름");
}

#[actix_web::test]
async fn test_update_profile_rejects_blank_name() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_, token) = client.create_test_user().await;

    let req = test::TestRequest::patch()
        .uri("/profile")
        .insert_header(bearer(&token))
        .set_json(json!({"name": ""}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_profile_requires_session() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/profile").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_change_password_wrong_current() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_, token) = client.create_test_user().await;

    let req = test::TestRequest::post()
        .uri("/profile/password")
        .insert_header(bearer(&token))
        .set_json(RPasswordChange {
            current_password: "not-my-password".into(),
            new_password: "brand-new-1".into(),
            confirm_password: "brand-new-1".into(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "WRONG_PASSWORD");
}

#[actix_web::test]
async fn test_change_password_rejects_weak_or_mismatched() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_, token) = client.create_test_user().await;

    for (new, confirm, kind) in [("123", "123", "WEAK_PASSWORD"), ("brand-new-1", "brand-new-2", "VALIDATION_ERROR")] {
        let req = test::TestRequest::post()
            .uri("/profile/password")
            .insert_header(bearer(&token))
            .set_json(RPasswordChange {
                current_password: PASSWORD.into(),
                new_password: new.into(),
                confirm_password: confirm.into(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], kind);
    }
}

#[actix_web::test]
async fn test_change_password_revokes_other_sessions() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user = client
        .create_user("mover@example.com", "Mover", UserRole::User)
        .await
        .unwrap();
    let here = client.token_for(user.id).await;
    let elsewhere = client.token_for(user.id).await;

    let req = test::TestRequest::post()
        .uri("/profile/password")
        .insert_header(bearer(&here))
        .set_json(RPasswordChange {
            current_password: PASSWORD.into(),
            new_password: "brand-new-1".into(),
            confirm_password: "brand-new-1".into(),
        })
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/session")
        .insert_header(bearer(&here))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/session")
        .insert_header(bearer(&elsewhere))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(ctx.db.list_user_sessions(&user.id).await.unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(RLogin { email: user.email.clone(), password: PASSWORD.into() })
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(RLogin { email: user.email.clone(), password: "brand-new-1".into() })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let login: LoginRes = test::read_body_json(resp).await;
    assert_eq!(login.user.id, user.id);
}
