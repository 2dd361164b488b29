// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    config::settings::SourceSettings,
    domain::{
        models::{cve::CveId, epss::EpssScore, lookup::LookupOutcome},
        services::{epss_extractor::EpssExtractor, report_service::ReportService},
    },
    engines::{request_builder::build_fetch_request, traits::FetchEngine},
    utils::errors::LookupError,
};
use std::sync::Arc;
use tracing::{info, warn};

/// EPSS 查询用例
///
/// 抓取 → 提取，单次、顺序执行，任何失败都直接返回
pub struct LookupEpssUseCase<E: ?Sized> {
    engine: Arc<E>,
    extractor: EpssExtractor,
    source: SourceSettings,
}

impl<E> LookupEpssUseCase<E>
where
    E: FetchEngine + ?Sized,
{
    pub fn new(engine: Arc<E>, extractor: EpssExtractor, source: SourceSettings) -> Self {
        Self {
            engine,
            extractor,
            source,
        }
    }

    /// 查询指定标识符的 EPSS 分数
    ///
    /// # 返回值
    ///
    /// * `Ok(EpssScore)` - 提取出的分数
    /// * `Err(LookupError)` - 网络错误、非 200 响应或页面中找不到分数
    pub async fn execute(&self, id: &CveId) -> Result<EpssScore, LookupError> {
        let request = build_fetch_request(id, &self.source)?;
        info!(cve = %id, url = %request.url, engine = self.engine.name(), "Fetching vulnerability page");

        let response = self.engine.fetch(&request).await?;
        if !response.is_ok() {
            warn!(cve = %id, status_code = response.status_code, "Unexpected status");
            return Err(LookupError::BadStatus(response.status_code));
        }

        let score = self.extractor.extract(&response.content)?;
        info!(cve = %id, score = %score, "EPSS score extracted");
        Ok(score)
    }

    /// 查询并归类结果
    pub async fn lookup(&self, id: &CveId) -> LookupOutcome {
        let result = self.execute(id).await;
        if let Err(e) = &result {
            warn!(cve = %id, error = %e, "Lookup did not produce a score");
        }
        ReportService::classify(id, result)
    }
}
