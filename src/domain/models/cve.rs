// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 漏洞标识符
///
/// 通常是厂商分配的 CVE 编号，但不做任何格式校验，原样用于拼接请求地址
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CveId(String);

impl CveId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// 从交互输入的一行构建
    ///
    /// 只去掉行尾的换行符，其余空白保持原样
    pub fn from_input_line(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Self(line.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
