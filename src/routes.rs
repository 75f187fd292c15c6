use crate::{
    api::{attendance, dashboard, employee, index},
    config::Config,
    error::{json_error_handler, path_error_handler, query_error_handler},
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::Condition, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Helper to build the per-IP limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            (60_000 / requests_per_min as u64).max(1)
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min.max(1))
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap_or_default();
        Governor::new(&cfg)
    }

    let limiter = Condition::new(config.rate_per_min > 0, build_limiter(config.rate_per_min));

    // Extractor failures answer 422 like field validation does
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));

    cfg.service(index);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(limiter) // rate limiting
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    )
                    // /employees/{employee_id}/attendance
                    .service(
                        web::resource("/{employee_id}/attendance")
                            .route(web::get().to(attendance::employee_attendance)),
                    ),
            )
            // /attendance
            .service(
                web::resource("/attendance")
                    .route(web::get().to(attendance::list_attendance))
                    .route(web::post().to(attendance::mark_attendance)),
            )
            // /dashboard
            .service(web::resource("/dashboard").route(web::get().to(dashboard::dashboard_summary))),
    );
}
