// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::news::{parse_published_at, BulkDocument, News, NewsCandidate};
use crate::domain::repositories::news_repository::{NewsImportSession, NewsImporter};
use crate::domain::services::identity_resolver::{IdentityResolver, Resolution};
use crate::domain::services::news_service::NewsError;
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// 缓冲区达到该数量时写入一批
pub const IMPORT_FLUSH_SIZE: usize = 100;

/// 导入结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: u64,
    pub skipped: u64,
    /// 数据集非空，整次导入被跳过
    pub skipped_entirely: bool,
}

impl ImportReport {
    fn skipped_entirely() -> Self {
        Self {
            skipped_entirely: true,
            ..Default::default()
        }
    }
}

enum CandidateSource {
    File(PathBuf),
    Items(Vec<NewsCandidate>),
}

/// 新闻导入服务
///
/// 负责批量导入与 RSS 条目写入：逐条去重、累积到缓冲区、
/// 按批次原子写入，并保证数据集非空时整次批量导入被跳过。
pub struct IngestionService<R: NewsImporter> {
    repo: Arc<R>,
    /// 串行化同一进程内的导入
    import_guard: Mutex<()>,
}

impl<R: NewsImporter> IngestionService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            import_guard: Mutex::new(()),
        }
    }

    /// 从 JSON 文件批量导入新闻
    ///
    /// # 参数
    ///
    /// * `path` - 批量导入文件路径，顶层只识别 `news_items` 字段
    ///
    /// # 返回值
    ///
    /// * `Ok(ImportReport)` - 导入统计；数据集非空时 `skipped_entirely` 为真
    /// * `Err(NewsError)` - 文件读取、解析或批量写入失败，事务已回滚
    pub async fn import_bulk(&self, path: impl AsRef<Path>) -> Result<ImportReport, NewsError> {
        self.guarded_import(CandidateSource::File(path.as_ref().to_path_buf()))
            .await
    }

    /// 以已解析的候选记录执行与 [`Self::import_bulk`] 相同的导入流程
    pub async fn import_candidates(
        &self,
        candidates: Vec<NewsCandidate>,
    ) -> Result<ImportReport, NewsError> {
        self.guarded_import(CandidateSource::Items(candidates)).await
    }

    /// 写入某个订阅源已解析的条目
    ///
    /// 不做数据集非空检查，只做逐条去重；所有条目标记为 RSS 来源。
    pub async fn ingest_feed_items(
        &self,
        rss_source_id: i32,
        items: Vec<NewsCandidate>,
    ) -> Result<ImportReport, NewsError> {
        let _guard = self.import_guard.lock().await;

        let candidates = items
            .into_iter()
            .map(|mut item| {
                item.source_type = "rss".to_string();
                item.rss_source_id = Some(rss_source_id);
                item
            })
            .collect();

        let session = self.repo.begin_import().await?;
        let report = match run_pipeline(session.as_ref(), candidates).await {
            Ok(report) => report,
            Err(e) => {
                error!("Feed ingestion for source {} aborted: {}", rss_source_id, e);
                return Err(e);
            }
        };
        session.commit().await?;

        record_metrics(&report);
        info!(
            "Ingested feed items for source {}: imported={}, skipped={}",
            rss_source_id, report.imported, report.skipped
        );
        Ok(report)
    }

    /// 初始化全部种子数据
    ///
    /// 目前只执行批量导入；事件生成需要由外部显式触发。
    pub async fn seed_all_data(&self, path: impl AsRef<Path>) -> Result<ImportReport, NewsError> {
        let report = self.import_bulk(path).await?;
        info!("Seed data loaded, event generation must be triggered separately");
        Ok(report)
    }

    async fn guarded_import(&self, source: CandidateSource) -> Result<ImportReport, NewsError> {
        let _guard = self.import_guard.lock().await;
        metrics::counter!("news_import_runs_total").increment(1);

        let session = self.repo.begin_import().await?;
        let existing = session.count_news().await?;
        if existing > 0 {
            info!(
                "News table already holds {} rows, skipping bulk import",
                existing
            );
            return Ok(ImportReport::skipped_entirely());
        }

        let candidates = match source {
            CandidateSource::File(path) => {
                let raw = tokio::fs::read_to_string(&path).await?;
                let document: BulkDocument = serde_json::from_str(&raw)?;
                info!(
                    "Loaded {} news items from {}",
                    document.news_items.len(),
                    path.display()
                );
                document.news_items
            }
            CandidateSource::Items(items) => items,
        };

        let report = match run_pipeline(session.as_ref(), candidates).await {
            Ok(report) => report,
            Err(e) => {
                error!("Bulk import aborted, rolling back: {}", e);
                return Err(e);
            }
        };
        session.commit().await?;

        record_metrics(&report);
        info!(
            "Bulk import finished: imported={}, skipped={}",
            report.imported, report.skipped
        );
        Ok(report)
    }
}

async fn run_pipeline(
    session: &dyn NewsImportSession,
    candidates: Vec<NewsCandidate>,
) -> Result<ImportReport, NewsError> {
    let mut resolver = IdentityResolver::new();
    let mut buffer: Vec<News> = Vec::with_capacity(IMPORT_FLUSH_SIZE);
    let mut report = ImportReport::default();

    for candidate in candidates {
        let published_at = match parse_published_at(&candidate.published_at) {
            Some(at) => at,
            None => {
                warn!(
                    "Invalid published_at '{}' for '{}', using current time",
                    candidate.published_at, candidate.title
                );
                Utc::now().fixed_offset()
            }
        };

        match resolver
            .resolve(session, &candidate.guid, &candidate.link)
            .await
        {
            Ok(Resolution::NotFound) => {}
            Ok(_) => {
                debug!("Skipping duplicate news '{}'", candidate.title);
                report.skipped += 1;
                continue;
            }
            Err(e) => {
                warn!(
                    "Identity lookup failed for '{}', skipping: {}",
                    candidate.title, e
                );
                continue;
            }
        }

        resolver.remember(&candidate.guid, &candidate.link);
        buffer.push(candidate.into_news(published_at));

        if buffer.len() >= IMPORT_FLUSH_SIZE {
            report.imported += flush(session, &mut buffer).await?;
        }
    }

    if !buffer.is_empty() {
        report.imported += flush(session, &mut buffer).await?;
    }

    Ok(report)
}

async fn flush(session: &dyn NewsImportSession, buffer: &mut Vec<News>) -> Result<u64, NewsError> {
    let written = session.write_batch(buffer.as_slice()).await?;
    debug!("Flushed batch of {} news", buffer.len());
    buffer.clear();
    Ok(written)
}

fn record_metrics(report: &ImportReport) {
    metrics::counter!("news_imported_total").increment(report.imported);
    metrics::counter!("news_import_skipped_total").increment(report.skipped);
}
