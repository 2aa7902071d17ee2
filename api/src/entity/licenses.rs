//! `licenses` table model

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "licenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub asset_id: Uuid,
    pub licensee: String,
    pub commercial_use: bool,
    pub derivatives: bool,
    pub attribution: bool,
    pub share_alike: bool,
    #[sea_orm(column_type = "JsonBinary")]
    pub territory: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub channels: Json,
    pub timeframe: i32,
    pub royalty: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ip_assets::Entity",
        from = "Column::AssetId",
        to = "super::ip_assets::Column::Id"
    )]
    IpAssets,
}

impl Related<super::ip_assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IpAssets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
