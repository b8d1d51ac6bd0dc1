// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{NewUser, User, UserRole};
use crate::domain::repositories::news_repository::RepositoryError;
use async_trait::async_trait;

/// 初始管理员写入结果
#[derive(Debug)]
pub enum AdminSeedOutcome {
    Created(User),
    /// 已存在管理员，跳过
    Skipped { existing_admins: u64 },
}

/// 用户仓库特质
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 统计指定角色的账户数
    async fn count_by_role(&self, role: UserRole) -> Result<u64, RepositoryError>;
    /// 按用户名查找
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    /// 在单个事务中创建初始管理员
    ///
    /// 事务内再次检查管理员是否存在；邮箱或用户名已被占用时返回
    /// [`RepositoryError::Conflict`]。
    async fn create_admin_if_absent(
        &self,
        admin: &NewUser,
    ) -> Result<AdminSeedOutcome, RepositoryError>;
}
