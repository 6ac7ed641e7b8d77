pub mod analytics;
pub mod board;
pub mod chart;
pub mod comment;
pub mod health;
pub mod portfolio;
pub mod trade;
