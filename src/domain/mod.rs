// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：标识符、分数和查询结局
/// - 服务（services）：分数提取和结果报告
///
/// 领域层不发起任何网络请求，全部是输入决定输出的纯逻辑。
pub mod models;
pub mod services;
