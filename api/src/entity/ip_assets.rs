//! `ip_assets` table model

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ip_assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub creator: String,
    pub title: String,
    pub description: Option<String>,
    pub content_type: String,
    pub ipfs_hash: Option<String>,
    pub score: Option<i32>,
    pub grade: Option<String>,
    pub reward_amount: Option<i32>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub license_terms: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::licenses::Entity")]
    Licenses,
}

impl Related<super::licenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Licenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
