use crate::utils::webutils::{validate_admin_token, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod admin;
pub mod auth;
pub mod consult;
pub mod health;
pub mod notice;
pub mod profile;
pub mod session;
pub mod site;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/auth")
            .service(auth::signup::signup)
            .service(auth::login::login)
    );
    cfg.service(
        web::scope("/session")
            .service(session::current::current)
            .service(session::logout::logout)
            .wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/profile")
            .service(profile::get::get_profile)
            .service(profile::update::update_profile)
            .service(profile::password::change_password)
            .wrap(user_auth)
    );
    cfg.service(
        web::scope("/notices")
            // before "/{id}" so it is not read as an id
            .service(notice::categories::categories)
            .service(notice::list::list)
            .service(notice::get::get_notice)
    );
    cfg.service(
        web::scope("/consult")
            .service(consult::submit::submit)
            .service(consult::quick::quick)
    );
    cfg.service(
        web::scope("/site")
            .service(site::home::home)
            .service(site::about::about)
            .service(site::programs::programs)
    );
    cfg.service(
        web::scope("/admin")
            .service(
                web::scope("/notices")
                    .service(admin::notice::create::create)
                    .service(admin::notice::update::update)
                    .service(admin::notice::delete::delete_notice)
            )
            .service(
                web::scope("/users")
                    .service(admin::users::list::list)
                    .service(admin::users::grant::grant)
                    .service(admin::users::revoke::revoke)
            )
            .service(
                web::scope("/consultations")
                    .service(admin::consult::list::list)
                    .service(admin::consult::handled::mark_handled)
            )
            .wrap(admin_auth)
    );
}
