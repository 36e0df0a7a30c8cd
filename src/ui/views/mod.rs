pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod learning;
pub mod roadmap;
pub mod settings;
