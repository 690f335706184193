mod dashboard;
mod series;

pub use dashboard::DashboardData;
pub use series::PriceSeries;
