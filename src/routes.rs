use crate::{
    api::{attendance, client, employee, payroll, summary, task},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(
    requests_per_min: u32,
) -> Option<Governor<PeerIpKeyExtractor, NoOpMiddleware>> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()?;
    Some(Governor::new(&cfg))
}

/// Report routes without rate limiting.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attendance")
            .service(
                web::resource("/calendar")
                    .route(web::post().to(attendance::attendance_calendar)),
            ),
    )
    .service(
        web::scope("/summary")
            .service(web::resource("").route(web::post().to(summary::work_summary)))
            .service(web::resource("/buckets").route(web::post().to(summary::work_buckets))),
    )
    .service(web::resource("/ranking").route(web::post().to(summary::ranking)))
    .service(
        web::resource("/employees/search").route(web::post().to(employee::search_employees)),
    )
    .service(web::resource("/clients/search").route(web::post().to(client::search_clients)))
    .service(web::resource("/salary/summary").route(web::post().to(payroll::salary_summary)))
    .service(web::resource("/tasks/eligibility").route(web::post().to(task::task_eligibility)));
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    match build_limiter(config.rate_per_min) {
        Some(limiter) => {
            cfg.service(
                web::scope(&config.api_prefix)
                    .wrap(limiter) // rate limiting
                    .configure(configure_api),
            );
        }
        None => {
            tracing::warn!(
                rate_per_min = config.rate_per_min,
                "Invalid rate limit, serving without limiter"
            );
            cfg.service(web::scope(&config.api_prefix).configure(configure_api));
        }
    }
}
