pub use super::admins::Entity as Admins;
pub use super::crew_members::Entity as CrewMembers;
