//! Workload record service layer.
//!
//! Creation and listing of the records a freelancer tracks: clients,
//! projects, side projects, and invoices. Project creation can name a
//! client instead of referencing one, in which case the client is found or
//! created in the same transaction as the project.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::work::{
        priority, status, CreateClientDto, CreateInvoiceDto, CreateProjectDto,
        CreateSideProjectDto,
    },
    server::{
        data::work::{
            client::ClientRepository,
            invoice::{InvoiceRepository, NewInvoice},
            project::{NewProject, ProjectRepository},
            side_project::{NewSideProject, SideProjectRepository},
        },
        error::{work::WorkError, Error},
    },
};

/// Service for managing an account's workload records.
pub struct WorkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkService<'a> {
    /// Creates a new instance of [`WorkService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_client(
        &self,
        account_id: i32,
        new: CreateClientDto,
    ) -> Result<entity::client::Model, Error> {
        let client = ClientRepository::new(self.db)
            .create(
                account_id,
                &new.name,
                new.email.as_deref(),
                new.company.as_deref(),
            )
            .await?;

        Ok(client)
    }

    /// Creates a project, resolving its client by id or by name.
    ///
    /// # Behavior
    /// - `client_id` must reference the account's own client
    /// - `client_name` finds the account's client with that exact name, or
    ///   creates one, in the same transaction as the project
    /// - New projects start as NOT_STARTED with a zeroed work accumulator
    ///
    /// # Returns
    /// - `Ok(Model)` - The created project
    /// - `Err(Error::WorkError(WorkError::ClientNotFound))` - Unknown or foreign client id
    /// - `Err(Error::DbErr)` - Database operation failed; transaction rolled back
    pub async fn create_project(
        &self,
        account_id: i32,
        new: CreateProjectDto,
    ) -> Result<entity::project::Model, Error> {
        let txn = self.db.begin().await?;
        let client_repo = ClientRepository::new(&txn);

        let client_id = match (new.client_id, new.client_name.as_deref()) {
            (Some(client_id), _) => {
                let client = client_repo.get(client_id).await?;
                match client {
                    Some(client) if client.account_id == account_id => Some(client_id),
                    _ => return Err(WorkError::ClientNotFound(client_id).into()),
                }
            }
            (None, Some(client_name)) => {
                let client = match client_repo
                    .find_by_account_and_name(account_id, client_name)
                    .await?
                {
                    Some(client) => client,
                    None => client_repo.create(account_id, client_name, None, None).await?,
                };

                Some(client.id)
            }
            (None, None) => None,
        };

        let project = ProjectRepository::new(&txn)
            .create(NewProject {
                account_id,
                client_id,
                title: new.title,
                description: new.description,
                status: status::NOT_STARTED.to_string(),
                priority: new.priority.unwrap_or_else(|| priority::MEDIUM.to_string()),
                due_date: new.due_date,
            })
            .await?;

        txn.commit().await?;

        Ok(project)
    }

    pub async fn create_side_project(
        &self,
        account_id: i32,
        new: CreateSideProjectDto,
    ) -> Result<entity::side_project::Model, Error> {
        let side_project = SideProjectRepository::new(self.db)
            .create(NewSideProject {
                account_id,
                title: new.title,
                description: new.description,
                status: status::NOT_STARTED.to_string(),
                priority: new.priority.unwrap_or_else(|| priority::MEDIUM.to_string()),
            })
            .await?;

        Ok(side_project)
    }

    /// Creates an invoice, defaulting its status to DRAFT.
    pub async fn create_invoice(
        &self,
        account_id: i32,
        new: CreateInvoiceDto,
    ) -> Result<entity::invoice::Model, Error> {
        if let Some(client_id) = new.client_id {
            let client = ClientRepository::new(self.db).get(client_id).await?;
            match client {
                Some(client) if client.account_id == account_id => {}
                _ => return Err(WorkError::ClientNotFound(client_id).into()),
            }
        }

        let invoice = InvoiceRepository::new(self.db)
            .create(NewInvoice {
                account_id,
                client_id: new.client_id,
                invoice_number: new.invoice_number,
                amount: new.amount,
                description: new.description,
                status: new.status.unwrap_or_else(|| status::DRAFT.to_string()),
                due_date: new.due_date,
            })
            .await?;

        Ok(invoice)
    }

    pub async fn list_clients(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::client::Model>, Error> {
        Ok(ClientRepository::new(self.db).find_by_account(account_id).await?)
    }

    pub async fn list_projects(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::project::Model>, Error> {
        Ok(ProjectRepository::new(self.db).find_by_account(account_id).await?)
    }

    pub async fn list_side_projects(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::side_project::Model>, Error> {
        Ok(SideProjectRepository::new(self.db)
            .find_by_account(account_id)
            .await?)
    }

    pub async fn list_invoices(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::invoice::Model>, Error> {
        Ok(InvoiceRepository::new(self.db).find_by_account(account_id).await?)
    }
}
