//! User entity
//!
//! Users own recipes and their cart/favorite entries. Account management is
//! handled elsewhere; this crate only reads the table.

use foodgram_common::{MAX_LENGTH_EMAIL, MAX_LENGTH_NAME_USER};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(MAX_LENGTH_EMAIL))")]
    pub email: String,
    #[sea_orm(unique, column_type = "String(StringLen::N(MAX_LENGTH_NAME_USER))")]
    pub username: String,
    #[sea_orm(column_type = "String(StringLen::N(MAX_LENGTH_NAME_USER))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(MAX_LENGTH_NAME_USER))")]
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe::Entity")]
    Recipe,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
