// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::cve::CveId;
use anyhow::{bail, Result};
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// 交互输入的提示语
pub const PROMPT: &str = "CVE-ID : ";

#[derive(Parser, Debug)]
#[command(
    name = "epssrs",
    about = "Look up the EPSS score of a CVE on its vulnerability-detail page",
    version
)]
pub struct Cli {
    /// Vulnerability identifier (e.g. "CVE-2021-44228"); prompted for when omitted
    pub cve_id: Option<String>,

    /// Site root to query instead of the configured one
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// 命令行参数覆盖已加载的配置
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.base_url {
            settings.source.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.source.timeout_secs = timeout;
        }
    }

    /// 实际使用的日志过滤规则
    pub fn log_filter<'a>(&self, settings: &'a Settings) -> &'a str {
        if self.verbose {
            "debug"
        } else {
            &settings.log.level
        }
    }
}

/// 打印提示语并读取一行标识符
///
/// 提示语不换行；输入流在读到任何内容前结束视为错误
pub async fn read_identifier<R, W>(mut input: R, mut output: W) -> Result<CveId>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        bail!("no identifier provided on standard input");
    }

    Ok(CveId::from_input_line(&line))
}
