mod dashboard;

pub use dashboard::CatalogSummaryDashboard;
