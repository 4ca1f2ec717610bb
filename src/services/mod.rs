pub mod crew_service;
pub mod crew_service_impl;
pub use crew_service::CrewService;
pub use crew_service_impl::SeaOrmCrewService;

pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::AuthService;
pub use auth_service_impl::SeaOrmAuthService;
