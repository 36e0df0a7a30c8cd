pub mod api;
pub mod app;
pub mod error;
pub mod model;
pub mod quiz;
pub mod roadmap;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::RoadmapApp;
