// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::rss_source::{default_sources, RssSource};
use crate::domain::models::user::{AdminCredentials, NewUser, UserRole, UserStatus};
use crate::domain::repositories::news_repository::RepositoryError;
use crate::domain::repositories::rss_source_repository::{RssSourceRepository, SourceSeedOutcome};
use crate::domain::repositories::user_repository::{AdminSeedOutcome, UserRepository};
use crate::utils::password::hash_password;
use crate::utils::validators::{validate_password, validate_username, ValidationError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

/// 初始化数据错误
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Failed to hash admin password: {0}")]
    Hash(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for BootstrapError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(message) => BootstrapError::Conflict(message),
            other => BootstrapError::Repository(other),
        }
    }
}

/// 默认数据初始化结果
#[derive(Debug)]
pub struct BootstrapReport {
    pub admin: AdminSeedOutcome,
    pub sources: Option<SourceSeedOutcome>,
}

/// 初始化服务
///
/// 负责创建初始管理员和默认 RSS 订阅源。两者都是“只执行一次”的操作，
/// 幂等性由事务内的存在性检查保证。
pub struct BootstrapService<U: UserRepository, S: RssSourceRepository> {
    users: Arc<U>,
    sources: Arc<S>,
}

impl<U: UserRepository, S: RssSourceRepository> BootstrapService<U, S> {
    pub fn new(users: Arc<U>, sources: Arc<S>) -> Self {
        Self { users, sources }
    }

    /// 创建初始管理员
    ///
    /// # 参数
    ///
    /// * `credentials` - 管理员邮箱、用户名与明文密码
    ///
    /// # 返回值
    ///
    /// * `Ok(AdminSeedOutcome::Skipped)` - 已存在管理员
    /// * `Ok(AdminSeedOutcome::Created)` - 新建的管理员
    /// * `Err(BootstrapError::Validation)` - 邮箱、密码或用户名格式不合法
    /// * `Err(BootstrapError::Conflict)` - 邮箱或用户名已被其他账户占用
    pub async fn seed_initial_admin(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<AdminSeedOutcome, BootstrapError> {
        let existing_admins = self.users.count_by_role(UserRole::Admin).await?;
        if existing_admins > 0 {
            info!("Admin account already exists, skipping admin bootstrap");
            return Ok(AdminSeedOutcome::Skipped { existing_admins });
        }

        if credentials.validate().is_err() {
            return Err(ValidationError::InvalidEmail.into());
        }
        validate_password(&credentials.password)?;
        validate_username(&credentials.username)?;

        let password_hash =
            hash_password(&credentials.password).map_err(|e| BootstrapError::Hash(e.to_string()))?;

        let admin = NewUser {
            username: credentials.username.clone(),
            email: credentials.email.clone(),
            password_hash,
            role: UserRole::Admin,
            status: UserStatus::Active,
        };

        let outcome = self.users.create_admin_if_absent(&admin).await?;
        match &outcome {
            AdminSeedOutcome::Created(user) => {
                info!("Initial admin '{}' created ({})", user.username, user.email)
            }
            AdminSeedOutcome::Skipped { .. } => {
                info!("Admin created concurrently, skipping admin bootstrap")
            }
        }
        Ok(outcome)
    }

    /// 写入默认订阅源，已有任意订阅源时跳过
    pub async fn seed_rss_sources(&self) -> Result<SourceSeedOutcome, BootstrapError> {
        let outcome = self.sources.seed_if_empty(&default_sources()).await?;
        match &outcome {
            SourceSeedOutcome::Created(created) => {
                info!("Seeded {} default RSS sources", created.len())
            }
            SourceSeedOutcome::Skipped { existing } => {
                info!("{} RSS sources already present, skipping", existing)
            }
        }
        Ok(outcome)
    }

    pub async fn list_sources(&self) -> Result<Vec<RssSource>, BootstrapError> {
        Ok(self.sources.list().await?)
    }

    /// 初始化默认数据：管理员，以及可选的默认订阅源
    ///
    /// 订阅源写入失败只记录警告，不影响管理员的结果。
    pub async fn seed_default_data(
        &self,
        credentials: &AdminCredentials,
        with_rss_sources: bool,
    ) -> Result<BootstrapReport, BootstrapError> {
        let admin = self.seed_initial_admin(credentials).await?;

        let sources = if with_rss_sources {
            match self.seed_rss_sources().await {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    warn!("Failed to seed default RSS sources: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(BootstrapReport { admin, sources })
    }
}
