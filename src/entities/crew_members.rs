use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "crew_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub rank: String,

    /// Uppercase-normalized passport number
    #[sea_orm(unique)]
    pub passport: String,

    /// Pipeline stage, 0..=3
    pub status: i32,

    pub nationality: Option<String>,

    /// `YYYY-MM-DD`
    pub date_of_birth: Option<String>,

    pub years_experience: Option<i32>,

    pub last_vessel_type: Option<String>,

    /// `YYYY-MM-DD`
    pub availability_date: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
