//! SeaORM implementation of InteractionRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, NotSet, QueryOrder, QuerySelect, Set};

use crate::domain::{DomainError, Interaction, InteractionRepository};
use crate::models::interaction::{ActiveModel, Column, Entity as InteractionEntity, Model};

/// SeaORM-based implementation of InteractionRepository
pub struct SeaOrmInteractionRepository {
    db: DatabaseConnection,
}

impl SeaOrmInteractionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Model> for Interaction {
    fn from(m: Model) -> Self {
        Interaction {
            id: m.id,
            question: m.question,
            answer: m.answer,
            timestamp: m.timestamp,
        }
    }
}

#[async_trait]
impl InteractionRepository for SeaOrmInteractionRepository {
    async fn append(&self, question: &str, answer: &str) -> Result<i32, DomainError> {
        let row = ActiveModel {
            id: NotSet,
            question: Set(question.to_string()),
            answer: Set(answer.to_string()),
            timestamp: NotSet,
        };

        let result = InteractionEntity::insert(row).exec(&self.db).await?;

        Ok(result.last_insert_id)
    }

    async fn recent(&self, limit: u64) -> Result<Vec<Interaction>, DomainError> {
        let rows = InteractionEntity::find()
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Interaction::from).collect())
    }
}
