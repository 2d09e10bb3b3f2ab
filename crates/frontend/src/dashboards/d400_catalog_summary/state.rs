use crate::shared::form::{expired_session_commands, Notification, UiCommand};
use crate::shared::service::{ServiceError, ServiceResult};

pub const SUMMARY_FAILED_MESSAGE: &str = "Gagal mengambil data dashboard";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub products: usize,
    pub categories: usize,
    pub variants: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub summary: CatalogSummary,
    pub loading: bool,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Failures keep the previous counts and raise a single toast,
    /// except an expired session which logs out instead.
    pub fn apply(&mut self, result: ServiceResult<CatalogSummary>) -> Vec<UiCommand> {
        self.loading = false;
        match result {
            Ok(summary) => {
                self.summary = summary;
                Vec::new()
            }
            Err(ServiceError::TokenExpired) => expired_session_commands(),
            Err(e) => {
                log::warn!("dashboard summary failed: {}", e);
                vec![UiCommand::Notify(Notification::error(SUMMARY_FAILED_MESSAGE))]
            }
        }
    }
}
