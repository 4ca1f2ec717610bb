pub mod prelude;

pub mod admins;
pub mod crew_members;
