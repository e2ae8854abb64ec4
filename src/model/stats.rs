use serde::{Deserialize, Serialize};

/// Workload summary for one account, assembled per request from the live
/// tables. Monetary figures are invoice amounts; time figures are the
/// persisted whole-second accumulators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatsDto {
    pub projects: ProjectStatsDto,
    pub side_projects: SideProjectStatsDto,
    pub clients: ClientStatsDto,
    pub invoices: InvoiceStatsDto,
    pub revenue: RevenueStatsDto,
    pub worked_seconds: WorkedSecondsDto,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProjectStatsDto {
    pub total: u64,
    pub not_started: u64,
    pub in_progress: u64,
    pub on_hold: u64,
    pub completed: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SideProjectStatsDto {
    pub total: u64,
    pub in_progress: u64,
    pub completed: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClientStatsDto {
    pub total: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InvoiceStatsDto {
    pub total: u64,
    pub draft: u64,
    pub sent: u64,
    pub paid: u64,
    pub overdue: u64,
}

/// Paid revenue plus the amount still outstanding on sent and overdue
/// invoices. Draft invoices count toward neither figure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RevenueStatsDto {
    pub total: f64,
    pub pending: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WorkedSecondsDto {
    pub total: i64,
    pub projects: i64,
    pub side_projects: i64,
}
