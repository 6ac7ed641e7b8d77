pub mod clock;
pub mod id_service;
pub mod metrics_service;
pub mod trending_service;
