// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{NewUser, User, UserRole};
use crate::domain::repositories::news_repository::RepositoryError;
use crate::domain::repositories::user_repository::{AdminSeedOutcome, UserRepository};
use crate::infrastructure::database::entities::user as user_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;

/// 用户仓库实现
#[derive(Clone)]
pub struct UserRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user_entity::Model> for User {
    fn from(model: user_entity::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role.parse().unwrap_or_default(),
            status: model.status.parse().unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn count_by_role(&self, role: UserRole) -> Result<u64, RepositoryError> {
        Ok(user_entity::Entity::find()
            .filter(user_entity::Column::Role.eq(role.to_string()))
            .count(self.db.as_ref())
            .await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find()
            .filter(user_entity::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create_admin_if_absent(
        &self,
        admin: &NewUser,
    ) -> Result<AdminSeedOutcome, RepositoryError> {
        let txn = self.db.begin().await?;

        let existing_admins = user_entity::Entity::find()
            .filter(user_entity::Column::Role.eq(UserRole::Admin.to_string()))
            .count(&txn)
            .await?;
        if existing_admins > 0 {
            txn.rollback().await?;
            return Ok(AdminSeedOutcome::Skipped { existing_admins });
        }

        let taken = user_entity::Entity::find()
            .filter(
                Condition::any()
                    .add(user_entity::Column::Email.eq(admin.email.as_str()))
                    .add(user_entity::Column::Username.eq(admin.username.as_str())),
            )
            .one(&txn)
            .await?;
        if let Some(user) = taken {
            txn.rollback().await?;
            let field = if user.email == admin.email {
                "email"
            } else {
                "username"
            };
            return Err(RepositoryError::Conflict(format!(
                "an account with the same {} already exists",
                field
            )));
        }

        let now: DateTime<FixedOffset> = Utc::now().into();
        let model = user_entity::ActiveModel {
            id: NotSet,
            username: Set(admin.username.clone()),
            email: Set(admin.email.clone()),
            password_hash: Set(admin.password_hash.clone()),
            role: Set(admin.role.to_string()),
            status: Set(admin.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(AdminSeedOutcome::Created(model.into()))
    }
}
