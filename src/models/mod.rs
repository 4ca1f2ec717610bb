pub mod admin;
pub mod crew;
