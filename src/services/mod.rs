//! Business logic for the stock view

pub mod prediction_service;
pub mod series_service;
pub mod view_service;
pub mod window_service;
