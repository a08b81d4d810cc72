use crate::application::client::Client;
use crate::application::services::DashboardService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::presentation::dashboard::DashboardStats;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl DashboardService for Client {
    async fn get_dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        debug!("Getting dashboard stats");
        self.send(ApiRequest::get("get_dashboard_stats")).await
    }
}
