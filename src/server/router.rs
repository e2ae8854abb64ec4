//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the authentication, timer, workload, stats, and
/// account data endpoints registered. Each endpoint is annotated with OpenAPI
/// specifications via utoipa, which are collected into a unified OpenAPI document.
/// The router includes Swagger UI at `/api/docs` for interactive API exploration.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Begin the OAuth sign-in flow
/// - `GET /api/auth/callback` - OAuth callback handler
/// - `GET /api/auth/logout` - Sign the account out
/// - `GET /api/auth/account` - Get the signed-in account
/// - `POST /api/timer/start`, `POST /api/timer/stop` - Control the work timer
/// - `GET /api/timer/active`, `GET /api/timer/history` - Read timer state
/// - `POST`/`GET /api/clients`, `/api/projects`, `/api/side-projects`,
///   `/api/invoices` - Workload records
/// - `GET /api/stats` - Workload summary
/// - `DELETE /api/account/data` - Clear the account's data
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes and middleware, ready to be
/// merged into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tally", description = "Tally API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::timer::TIMER_TAG, description = "Work timer API routes"),
        (name = controller::work::WORK_TAG, description = "Workload record API routes"),
        (name = controller::stats::STATS_TAG, description = "Statistics API routes"),
        (name = controller::account::ACCOUNT_TAG, description = "Account data API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_account))
        .routes(routes!(controller::timer::start))
        .routes(routes!(controller::timer::stop))
        .routes(routes!(controller::timer::active))
        .routes(routes!(controller::timer::history))
        .routes(routes!(
            controller::work::create_client,
            controller::work::list_clients
        ))
        .routes(routes!(
            controller::work::create_project,
            controller::work::list_projects
        ))
        .routes(routes!(
            controller::work::create_side_project,
            controller::work::list_side_projects
        ))
        .routes(routes!(
            controller::work::create_invoice,
            controller::work::list_invoices
        ))
        .routes(routes!(controller::stats::get_stats))
        .routes(routes!(controller::account::clear_data))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
