//! System state entity - the key-value table the admin snapshot lives in.
//!
//! The whole aggregate is one row; other keys may be added alongside it
//! without schema changes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key-value row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "system_state")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Storage key (e.g., `"microjob_admin_state"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Stored document
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this row was last written
    pub updated_at: DateTime,
}

/// `SystemState` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
