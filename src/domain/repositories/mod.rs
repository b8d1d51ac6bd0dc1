// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 新闻仓库（news_repository）：新闻读写、导入会话与事件关联
/// - 订阅源仓库（rss_source_repository）：RSS 订阅源与默认源写入
/// - 用户仓库（user_repository）：账户查询与初始管理员写入
pub mod news_repository;
pub mod rss_source_repository;
pub mod user_repository;
