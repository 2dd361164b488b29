// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 把抓取、提取和报告串联成一次查询
pub mod application;

/// 命令行模块
///
/// 解析参数并读取交互输入
pub mod cli;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体、分数提取和结果报告
pub mod domain;

/// 引擎模块
///
/// 构建请求并执行 HTTP 抓取
pub mod engines;

/// 工具模块
///
/// 提供错误类型和日志初始化
pub mod utils;
