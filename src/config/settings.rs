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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// 默认目标站点
pub const DEFAULT_BASE_URL: &str = "https://www.cvedetails.com";

/// 模拟桌面浏览器的 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.107 Safari/537.36";

/// EPSS 区块标题的原文，末尾空格是页面原样
pub const DEFAULT_HEADING_TEXT: &str = "Exploit prediction scoring system (EPSS) score for ";

/// 应用程序配置设置
///
/// 包含抓取目标、分数提取规则和日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取目标配置
    pub source: SourceSettings,
    /// 提取规则配置
    pub extractor: ExtractorSettings,
    /// 日志配置
    pub log: LogSettings,
}

/// 抓取目标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 站点根地址，不含末尾斜杠
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    pub user_agent: String,
    pub accept_language: String,
    pub accept_encoding: String,
    pub connection: String,
    pub referer: String,
}

impl SourceSettings {
    /// 请求超时时间
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 分数提取规则
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorSettings {
    /// 标题元素的标签名
    pub heading_tag: String,
    /// 标题文本，必须完全相等才算命中
    pub heading_text: String,
    /// 分数元素的标签名
    pub score_tag: String,
    /// 分数元素携带的 class
    pub score_class: String,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// 未设置 RUST_LOG 时使用的过滤规则
    pub level: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            accept_encoding: "gzip, deflate, br".to_string(),
            connection: "keep-alive".to_string(),
            referer: "https://www.google.com/".to_string(),
        }
    }
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            heading_tag: "h2".to_string(),
            heading_text: DEFAULT_HEADING_TEXT.to_string(),
            score_tag: "span".to_string(),
            score_class: "epssbox".to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加内置默认值、`config/default.toml`、`config/{APP_ENVIRONMENT}.toml`
    /// 和 `EPSSRS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Path::new("config"), None)
    }

    /// 从指定目录加载配置
    ///
    /// # 参数
    ///
    /// * `config_dir` - 存放 toml 配置文件的目录
    /// * `env_vars` - 代替进程环境变量的键值表，为 `None` 时读取真实环境
    pub fn load(
        config_dir: &Path,
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let source = SourceSettings::default();
        let extractor = ExtractorSettings::default();

        let builder = Config::builder()
            // Start with default settings
            .set_default("source.base_url", source.base_url)?
            .set_default("source.timeout_secs", source.timeout_secs)?
            .set_default("source.user_agent", source.user_agent)?
            .set_default("source.accept_language", source.accept_language)?
            .set_default("source.accept_encoding", source.accept_encoding)?
            .set_default("source.connection", source.connection)?
            .set_default("source.referer", source.referer)?
            // Default extraction rules
            .set_default("extractor.heading_tag", extractor.heading_tag)?
            .set_default("extractor.heading_text", extractor.heading_text)?
            .set_default("extractor.score_tag", extractor.score_tag)?
            .set_default("extractor.score_class", extractor.score_class)?
            .set_default("log.level", "warn")?
            .add_source(File::with_name(&config_path(config_dir, "default")).required(false))
            .add_source(File::with_name(&config_path(config_dir, &env)).required(false))
            .add_source(
                Environment::with_prefix("EPSSRS")
                    .separator("__")
                    .source(env_vars),
            );

        builder.build()?.try_deserialize()
    }
}

fn config_path(config_dir: &Path, name: &str) -> String {
    config_dir.join(name).to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
