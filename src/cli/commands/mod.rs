mod admin;
mod crew;

pub use admin::cmd_create_admin;
pub use crew::{cmd_advance, cmd_list_crew, cmd_stages, cmd_stats, cmd_track};
