use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status values persisted on project, side project, and invoice rows.
///
/// Stored as plain strings; these constants are the full vocabulary the
/// services write and the stats rollup groups by.
pub mod status {
    pub const NOT_STARTED: &str = "NOT_STARTED";
    pub const IN_PROGRESS: &str = "IN_PROGRESS";
    pub const ON_HOLD: &str = "ON_HOLD";
    pub const COMPLETED: &str = "COMPLETED";

    pub const DRAFT: &str = "DRAFT";
    pub const SENT: &str = "SENT";
    pub const PAID: &str = "PAID";
    pub const OVERDUE: &str = "OVERDUE";
}

/// Priority values persisted on project and side project rows.
pub mod priority {
    pub const LOW: &str = "LOW";
    pub const MEDIUM: &str = "MEDIUM";
    pub const HIGH: &str = "HIGH";
    pub const URGENT: &str = "URGENT";
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub client_id: Option<i32>,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub worked_seconds: i64,
    pub due_date: Option<NaiveDateTime>,
}

impl From<entity::project::Model> for ProjectDto {
    fn from(project: entity::project::Model) -> Self {
        Self {
            id: project.id,
            client_id: project.client_id,
            title: project.title,
            status: project.status,
            priority: project.priority,
            worked_seconds: project.worked_seconds,
            due_date: project.due_date,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
}

impl From<entity::client::Model> for ClientDto {
    fn from(client: entity::client::Model) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            company: client.company,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InvoiceDto {
    pub id: i32,
    pub client_id: Option<i32>,
    pub invoice_number: String,
    pub amount: f64,
    pub status: String,
    pub due_date: Option<NaiveDateTime>,
}

impl From<entity::invoice::Model> for InvoiceDto {
    fn from(invoice: entity::invoice::Model) -> Self {
        Self {
            id: invoice.id,
            client_id: invoice.client_id,
            invoice_number: invoice.invoice_number,
            amount: invoice.amount,
            status: invoice.status,
            due_date: invoice.due_date,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SideProjectDto {
    pub id: i32,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub worked_seconds: i64,
}

impl From<entity::side_project::Model> for SideProjectDto {
    fn from(side_project: entity::side_project::Model) -> Self {
        Self {
            id: side_project.id,
            title: side_project.title,
            status: side_project.status,
            priority: side_project.priority,
            worked_seconds: side_project.worked_seconds,
        }
    }
}

/// Request body for creating a client
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateClientDto {
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
}

/// Request body for creating a project
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateProjectDto {
    pub title: String,
    pub description: Option<String>,
    /// Attach the project to this existing client
    pub client_id: Option<i32>,
    /// Find or create a client with this name; ignored when `client_id` is set
    pub client_name: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDateTime>,
}

/// Request body for creating a side project
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateSideProjectDto {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
}

/// Request body for creating an invoice
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateInvoiceDto {
    pub client_id: Option<i32>,
    pub invoice_number: String,
    pub amount: f64,
    pub description: Option<String>,
    /// Defaults to DRAFT when omitted
    pub status: Option<String>,
    pub due_date: Option<NaiveDateTime>,
}
