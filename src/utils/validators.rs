// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{3,20}$").expect("valid username pattern"));

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 50;

/// 验证错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid admin email format")]
    InvalidEmail,
    #[error("admin password must contain at least one letter and one number")]
    WeakPassword,
    #[error("invalid admin username format")]
    InvalidUsername,
}

/// 验证用户名
///
/// 3 到 20 个字符，只允许字母、数字和下划线
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_PATTERN.is_match(username) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUsername)
    }
}

/// 验证密码强度
///
/// # 参数
///
/// * `password` - 明文密码
///
/// # 返回值
///
/// * `Ok(())` - 长度在 6 到 50 之间，且同时包含字母和数字
/// * `Err(ValidationError::WeakPassword)` - 不满足上述规则
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) && has_letter && has_digit {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}
