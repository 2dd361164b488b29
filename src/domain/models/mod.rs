// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了一次查询涉及的全部实体：
/// - 漏洞标识符（cve）：运维人员输入的原始标识
/// - EPSS 分数（epss）：从页面中提取出的分数文本
/// - 查询结果（lookup）：一次查询的最终结局
///
/// 所有实体都只存在于单次运行之内，没有持久化。
pub mod cve;
pub mod epss;
pub mod lookup;
