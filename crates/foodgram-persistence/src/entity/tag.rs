//! Tag entity
//!
//! Tags label recipes; the HTTP layer only reads them.

use foodgram_common::{MAX_LENGTH_COLOR, MAX_LENGTH_FIELD};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(MAX_LENGTH_FIELD))")]
    pub name: String,
    /// `#RRGGBB` hex color
    #[sea_orm(column_type = "String(StringLen::N(MAX_LENGTH_COLOR))", nullable)]
    pub color: Option<String>,
    #[sea_orm(unique, column_type = "String(StringLen::N(MAX_LENGTH_FIELD))")]
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
