use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Genres;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub address: Option<String>,
    #[sea_orm(unique)]
    pub phone: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub genres: Genres,
    #[sea_orm(unique)]
    pub website: Option<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[sea_orm(unique)]
    pub facebook_link: Option<String>,
    pub location_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::LocationId",
        to = "super::locations::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Locations,
    #[sea_orm(has_many = "super::shows::Entity")]
    Shows,
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::shows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
