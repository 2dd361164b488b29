// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::cve::CveId;
use crate::domain::models::epss::EpssScore;
use crate::domain::models::lookup::LookupOutcome;
use crate::domain::services::epss_extractor::ExtractionError;
use crate::utils::errors::LookupError;

/// 报告服务
///
/// 把一次查询的结果归类为 [`LookupOutcome`]，并渲染成唯一的一行输出
pub struct ReportService;

impl ReportService {
    /// 将查询结果归类
    pub fn classify(id: &CveId, result: Result<EpssScore, LookupError>) -> LookupOutcome {
        match result {
            Ok(score) => LookupOutcome::Found {
                id: id.clone(),
                score,
            },
            Err(LookupError::BadStatus(status)) => LookupOutcome::BadStatus(status),
            Err(LookupError::Fetch(e)) => LookupOutcome::FetchFailed(e.to_string()),
            Err(LookupError::Extraction(ExtractionError::SectionNotFound)) => {
                LookupOutcome::SectionNotFound
            }
            Err(LookupError::Extraction(ExtractionError::ScoreNotFound)) => {
                LookupOutcome::ScoreNotFound
            }
            Err(LookupError::Extraction(e @ ExtractionError::InvalidSelector { .. })) => {
                LookupOutcome::ParseFailed(e.to_string())
            }
        }
    }

    /// 渲染输出消息
    pub fn render(outcome: &LookupOutcome) -> String {
        match outcome {
            LookupOutcome::Found { id, score } => format!("EPSS score for {}: {}", id, score),
            LookupOutcome::ScoreNotFound => "EPSS score span not found.".to_string(),
            LookupOutcome::SectionNotFound => "EPSS section not found.".to_string(),
            LookupOutcome::BadStatus(status) => {
                format!("Failed to retrieve the page. Status code: {}", status)
            }
            LookupOutcome::FetchFailed(reason) => {
                format!("Failed to retrieve the page. Error: {}", reason)
            }
            LookupOutcome::ParseFailed(reason) => {
                format!("Failed to parse the page. Error: {}", reason)
            }
        }
    }

    /// 进程退出码
    pub fn exit_code(outcome: &LookupOutcome) -> u8 {
        match outcome {
            LookupOutcome::Found { .. } => 0,
            LookupOutcome::SectionNotFound => 2,
            LookupOutcome::ScoreNotFound => 3,
            LookupOutcome::BadStatus(_) => 4,
            LookupOutcome::FetchFailed(_) => 5,
            LookupOutcome::ParseFailed(_) => 6,
        }
    }
}
