// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// EPSS 分数
///
/// 保存页面上的原始文本（去掉首尾空白），不解析为数字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpssScore(String);

impl EpssScore {
    pub fn from_text(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpssScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
