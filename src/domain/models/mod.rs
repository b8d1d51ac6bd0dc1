// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 新闻（news）：新闻记录、候选记录与来源类型
/// - 分页（pagination）：所有列表查询共用的分页清洗规则
/// - 订阅源（rss_source）：RSS 订阅源及默认源
/// - 用户（user）：账户与初始管理员凭据
pub mod news;
pub mod pagination;
pub mod rss_source;
pub mod user;
