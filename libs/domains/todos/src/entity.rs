use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the todos table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    pub deadline: Option<DateTimeWithTimeZone>,
    pub email: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Todo {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            done: model.done,
            deadline: model.deadline.map(Into::into),
            email: model.email,
            created_at: model.created_at.into(),
        }
    }
}

impl From<crate::models::CreateTodo> for ActiveModel {
    fn from(input: crate::models::CreateTodo) -> Self {
        // UUIDv7 ids are time-ordered, so `id` doubles as a stable tiebreaker
        // for created_at ordering.
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(input.title.trim().to_string()),
            done: Set(false),
            deadline: Set(input.deadline.map(Into::into)),
            // An empty email means the public partition, same as a missing one
            email: Set(input.email.filter(|e| !e.is_empty())),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
