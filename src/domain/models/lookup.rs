// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::cve::CveId;
use crate::domain::models::epss::EpssScore;

/// 一次查询的最终结局
///
/// 每个变体对应唯一一条输出消息和一个进程退出码
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// 找到分数
    Found { id: CveId, score: EpssScore },
    /// 找到标题但其后没有分数元素
    ScoreNotFound,
    /// 页面中没有 EPSS 标题
    SectionNotFound,
    /// 非 200 响应
    BadStatus(u16),
    /// 网络层失败
    FetchFailed(String),
    /// 提取规则无效
    ParseFailed(String),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found { .. })
    }
}
