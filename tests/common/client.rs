use academy_portal::{
    db::db_service::DbService,
    types::{error::AppError, notice::DBNoticeCreate, user::DBUserCreate},
    utils::{throttle::LoginThrottle, token::encrypt},
};
use actix_web::{web, App};
use chrono::Duration;
use entity::user::{Model as UserModel, UserRole};
use std::sync::Arc;
use uuid::Uuid;

use super::{test_data::PASSWORD, MAX_LOGIN_ATTEMPTS};

pub struct TestClient {
    pub db: Arc<DbService>,
    pub throttle: web::Data<LoginThrottle>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient {
            db,
            throttle: web::Data::new(LoginThrottle::new(
                MAX_LOGIN_ATTEMPTS,
                std::time::Duration::from_secs(300),
            )),
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(self.throttle.clone())
            .configure(academy_portal::routes::configure_routes)
    }

    /// Inserts a user with [`PASSWORD`] straight into the database.
    pub async fn create_user(&self, email: &str, name: &str, role: UserRole) -> Result<UserModel, AppError> {
        self.db
            .create_user(DBUserCreate {
                display_name: name.to_string(),
                email: email.to_string(),
                password_hash: encrypt(PASSWORD).expect("Failed to hash password"),
                role,
            })
            .await
    }

    pub async fn token_for(&self, user_id: Uuid) -> String {
        let (token, _) = self
            .db
            .create_session(user_id, Duration::hours(1))
            .await
            .expect("Failed to create session");
        token
    }

    pub async fn create_test_user(&self) -> (UserModel, String) {
        let email = format!("user-{}@test.com", Uuid::new_v4());
        let user = self
            .create_user(&email, "Test User", UserRole::User)
            .await
            .expect("Failed to create user");
        let token = self.token_for(user.id).await;
        (user, token)
    }

    pub async fn create_test_admin(&self) -> (UserModel, String) {
        let email = format!("admin-{}@test.com", Uuid::new_v4());
        let user = self
            .create_user(&email, "원장님", UserRole::Admin)
            .await
            .expect("Failed to create admin");
        let token = self.token_for(user.id).await;
        (user, token)
    }

    pub async fn create_notice_on(&self, author: &UserModel, title: &str, category: &str, date: &str) -> Uuid {
        self.db
            .create_notice(DBNoticeCreate {
                title: title.to_string(),
                category: category.to_string(),
                content: format!("{title} 본문"),
                date: date.to_string(),
                author_id: author.id,
                author_name: author.display_name.clone(),
            })
            .await
            .expect("Failed to create notice")
            .id
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
