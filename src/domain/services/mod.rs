// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 提取服务（epss_extractor）：从详情页 HTML 中定位标题并读取分数
/// - 报告服务（report_service）：把查询结果渲染成输出消息和退出码
pub mod epss_extractor;
pub mod report_service;
