pub mod d400_catalog_summary;

pub use d400_catalog_summary::ui::CatalogSummaryDashboard;
