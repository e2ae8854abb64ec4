//! Account statistics service layer.
//!
//! Builds the dashboard summary by folding the account's workload rows into
//! per-status counts, revenue totals, and the worked-time accumulators.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        stats::{
            ClientStatsDto, InvoiceStatsDto, ProjectStatsDto, RevenueStatsDto,
            SideProjectStatsDto, StatsDto, WorkedSecondsDto,
        },
        work::status,
    },
    server::{
        data::work::{
            client::ClientRepository, invoice::InvoiceRepository, project::ProjectRepository,
            side_project::SideProjectRepository,
        },
        error::Error,
    },
};

/// Service for computing an account's workload summary.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of [`StatsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the account's statistics from the live tables.
    ///
    /// Revenue counts PAID invoices as earned and SENT or OVERDUE invoices
    /// as pending; DRAFT invoices count toward neither figure.
    pub async fn account_stats(&self, account_id: i32) -> Result<StatsDto, Error> {
        let projects = ProjectRepository::new(self.db)
            .find_by_account(account_id)
            .await?;
        let side_projects = SideProjectRepository::new(self.db)
            .find_by_account(account_id)
            .await?;
        let clients = ClientRepository::new(self.db)
            .find_by_account(account_id)
            .await?;
        let invoices = InvoiceRepository::new(self.db)
            .find_by_account(account_id)
            .await?;

        let mut project_stats = ProjectStatsDto {
            total: projects.len() as u64,
            ..Default::default()
        };
        let mut project_seconds = 0;

        for project in &projects {
            project_seconds += project.worked_seconds;
            match project.status.as_str() {
                status::NOT_STARTED => project_stats.not_started += 1,
                status::IN_PROGRESS => project_stats.in_progress += 1,
                status::ON_HOLD => project_stats.on_hold += 1,
                status::COMPLETED => project_stats.completed += 1,
                _ => {}
            }
        }

        let mut side_project_stats = SideProjectStatsDto {
            total: side_projects.len() as u64,
            ..Default::default()
        };
        let mut side_project_seconds = 0;

        for side_project in &side_projects {
            side_project_seconds += side_project.worked_seconds;
            match side_project.status.as_str() {
                status::IN_PROGRESS => side_project_stats.in_progress += 1,
                status::COMPLETED => side_project_stats.completed += 1,
                _ => {}
            }
        }

        let mut invoice_stats = InvoiceStatsDto {
            total: invoices.len() as u64,
            ..Default::default()
        };
        let mut revenue = RevenueStatsDto::default();

        for invoice in &invoices {
            match invoice.status.as_str() {
                status::DRAFT => invoice_stats.draft += 1,
                status::SENT => {
                    invoice_stats.sent += 1;
                    revenue.pending += invoice.amount;
                }
                status::PAID => {
                    invoice_stats.paid += 1;
                    revenue.total += invoice.amount;
                }
                status::OVERDUE => {
                    invoice_stats.overdue += 1;
                    revenue.pending += invoice.amount;
                }
                _ => {}
            }
        }

        Ok(StatsDto {
            projects: project_stats,
            side_projects: side_project_stats,
            clients: ClientStatsDto {
                total: clients.len() as u64,
            },
            invoices: invoice_stats,
            revenue,
            worked_seconds: WorkedSecondsDto {
                total: project_seconds + side_project_seconds,
                projects: project_seconds,
                side_projects: side_project_seconds,
            },
        })
    }
}
