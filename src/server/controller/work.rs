use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        work::{
            ClientDto, CreateClientDto, CreateInvoiceDto, CreateProjectDto, CreateSideProjectDto,
            InvoiceDto, ProjectDto, SideProjectDto,
        },
    },
    server::{
        controller::util::get_account::get_account_from_session,
        error::Error,
        model::app::AppState,
        service::work::WorkService,
    },
};

pub static WORK_TAG: &str = "work";

/// Create a client
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = WORK_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 200, description = "Success when creating a client", body = ClientDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateClientDto>,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let client = WorkService::new(&state.db)
        .create_client(account.id, body)
        .await?;

    Ok(Json(ClientDto::from(client)))
}

/// Get the account's clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = WORK_TAG,
    responses(
        (status = 200, description = "Success when retrieving clients", body = Vec<ClientDto>),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_clients(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let clients = WorkService::new(&state.db).list_clients(account.id).await?;

    let client_dtos: Vec<ClientDto> = clients.into_iter().map(ClientDto::from).collect();

    Ok(Json(client_dtos))
}

/// Create a project
///
/// The project's client can be referenced by id or named; a named client is
/// found or created under the account in the same transaction.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = WORK_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 200, description = "Success when creating a project", body = ProjectDto),
        (status = 404, description = "Account or client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateProjectDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let project = WorkService::new(&state.db)
        .create_project(account.id, body)
        .await?;

    Ok(Json(ProjectDto::from(project)))
}

/// Get the account's projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = WORK_TAG,
    responses(
        (status = 200, description = "Success when retrieving projects", body = Vec<ProjectDto>),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let projects = WorkService::new(&state.db).list_projects(account.id).await?;

    let project_dtos: Vec<ProjectDto> = projects.into_iter().map(ProjectDto::from).collect();

    Ok(Json(project_dtos))
}

/// Create a side project
#[utoipa::path(
    post,
    path = "/api/side-projects",
    tag = WORK_TAG,
    request_body = CreateSideProjectDto,
    responses(
        (status = 200, description = "Success when creating a side project", body = SideProjectDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_side_project(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateSideProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let side_project = WorkService::new(&state.db)
        .create_side_project(account.id, body)
        .await?;

    Ok(Json(SideProjectDto::from(side_project)))
}

/// Get the account's side projects
#[utoipa::path(
    get,
    path = "/api/side-projects",
    tag = WORK_TAG,
    responses(
        (status = 200, description = "Success when retrieving side projects", body = Vec<SideProjectDto>),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_side_projects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let side_projects = WorkService::new(&state.db)
        .list_side_projects(account.id)
        .await?;

    let side_project_dtos: Vec<SideProjectDto> = side_projects
        .into_iter()
        .map(SideProjectDto::from)
        .collect();

    Ok(Json(side_project_dtos))
}

/// Create an invoice
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = WORK_TAG,
    request_body = CreateInvoiceDto,
    responses(
        (status = 200, description = "Success when creating an invoice", body = InvoiceDto),
        (status = 404, description = "Account or client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateInvoiceDto>,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let invoice = WorkService::new(&state.db)
        .create_invoice(account.id, body)
        .await?;

    Ok(Json(InvoiceDto::from(invoice)))
}

/// Get the account's invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = WORK_TAG,
    responses(
        (status = 200, description = "Success when retrieving invoices", body = Vec<InvoiceDto>),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let invoices = WorkService::new(&state.db).list_invoices(account.id).await?;

    let invoice_dtos: Vec<InvoiceDto> = invoices.into_iter().map(InvoiceDto::from).collect();

    Ok(Json(invoice_dtos))
}
