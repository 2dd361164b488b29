// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::epss_extractor::ExtractionError;
use crate::engines::traits::EngineError;
use thiserror::Error;

/// 查询错误类型
///
/// 一次查询中所有可能的失败，每一种都终止本次运行，不重试
#[derive(Error, Debug)]
pub enum LookupError {
    /// 非 200 响应
    #[error("Failed to retrieve the page. Status code: {0}")]
    BadStatus(u16),

    /// 网络层错误
    #[error("抓取错误: {0}")]
    Fetch(#[from] EngineError),

    /// 页面中找不到分数
    #[error("提取错误: {0}")]
    Extraction(#[from] ExtractionError),
}
