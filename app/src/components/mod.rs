mod bar_chart;
mod category_table;
mod stat_card;
mod version_info;

pub use bar_chart::BarChart;
pub use category_table::CategoryTable;
pub use stat_card::StatCardGrid;
pub use version_info::VersionInfo;
