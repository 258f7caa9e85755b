use actix_web::web;

use super::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .service(web::resource("/login").route(web::post().to(handlers::login)))
                    .service(web::resource("/register").route(web::post().to(handlers::register))),
            )
            .service(
                web::scope("/leaves")
                    // /leaves
                    .service(
                        web::resource("")
                            .route(web::get().to(handlers::leave_list))
                            .route(web::post().to(handlers::create_leave)),
                    )
                    // /leaves/my
                    .service(web::resource("/my").route(web::get().to(handlers::my_leaves)))
                    // /leaves/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::post().to(handlers::approve_leave)),
                    )
                    // /leaves/{id}/reject
                    .service(
                        web::resource("/{id}/reject").route(web::post().to(handlers::reject_leave)),
                    ),
            ),
    );
}
