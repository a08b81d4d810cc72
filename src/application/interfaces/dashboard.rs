use crate::error::AppError;
use crate::presentation::dashboard::DashboardStats;
use async_trait::async_trait;

/// Interface for the dashboard service
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Gets the counters shown on the logged in user's dashboard
    async fn get_dashboard_stats(&self) -> Result<DashboardStats, AppError>;
}
