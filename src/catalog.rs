pub mod aggregate;
pub mod dispatch;
pub mod local;
pub mod plan;
pub mod tmdb;
pub mod youtube;
