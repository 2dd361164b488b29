// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SourceSettings;
use crate::domain::models::cve::CveId;
use crate::engines::traits::{EngineError, FetchRequest};
use url::Url;

/// 构建漏洞详情页地址
///
/// 形如 `{base_url}/cve/{id}/?q={id}`，标识符原样拼入路径和查询串，
/// 仅由 URL 解析器做必要的百分号编码
pub fn cve_page_url(base_url: &str, id: &CveId) -> Result<Url, EngineError> {
    let base = base_url.trim_end_matches('/');
    let raw = format!("{base}/cve/{id}/?q={id}", base = base, id = id.as_str());
    Ok(Url::parse(&raw)?)
}

/// 为指定标识符构建抓取请求
///
/// # 参数
///
/// * `id` - 运维人员输入的标识符
/// * `source` - 目标站点与浏览器请求头配置
pub fn build_fetch_request(id: &CveId, source: &SourceSettings) -> Result<FetchRequest, EngineError> {
    let url = cve_page_url(&source.base_url, id)?;

    let headers = vec![
        ("User-Agent".to_string(), source.user_agent.clone()),
        ("Accept-Language".to_string(), source.accept_language.clone()),
        ("Accept-Encoding".to_string(), source.accept_encoding.clone()),
        ("Connection".to_string(), source.connection.clone()),
        ("Referer".to_string(), source.referer.clone()),
    ];

    Ok(FetchRequest {
        url: url.into(),
        headers,
        timeout: source.timeout(),
    })
}
