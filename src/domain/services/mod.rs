// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 身份解析（identity_resolver）：按 GUID / 链接判断候选新闻是否已存在
/// - 导入服务（ingestion_service）：批量导入与 RSS 条目写入
/// - 新闻服务（news_service）：查询、事件关联、增删改与互动计数
/// - 初始化服务（bootstrap_service）：初始管理员与默认订阅源
pub mod bootstrap_service;
pub mod identity_resolver;
pub mod ingestion_service;
pub mod news_service;
