mod home_page;
mod stats_page;

pub use home_page::HomePage;
pub use stats_page::StatsPage;
