// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 安装 Prometheus 指标导出器
///
/// 地址无效或端口被占用时只记录警告，指标调用退化为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address '{}': {}", settings.address, e);
            return;
        }
    };

    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    metrics::describe_counter!("news_imported_total", "News rows written by imports");
    metrics::describe_counter!("news_import_skipped_total", "Duplicate candidates skipped during imports");
    metrics::describe_counter!("news_import_runs_total", "Bulk import attempts");
    metrics::describe_counter!("news_association_updates_total", "News rows re-linked to or cleared from events");

    info!("Metrics exporter listening on {}", addr);
}
