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

use clap::Parser;
use epssrs::application::use_cases::lookup_epss::LookupEpssUseCase;
use epssrs::cli::{read_identifier, Cli};
use epssrs::config::settings::Settings;
use epssrs::domain::models::cve::CveId;
use epssrs::domain::services::epss_extractor::EpssExtractor;
use epssrs::domain::services::report_service::ReportService;
use epssrs::engines::reqwest_engine::ReqwestEngine;
use epssrs::utils::telemetry;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::debug;

/// 主函数
///
/// 读取标识符，执行一次查询，在 stdout 打印唯一的结果行
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 1. Load configuration
    let mut settings = Settings::new()?;
    cli.apply(&mut settings);

    // 2. Initialize logging
    telemetry::init_telemetry(cli.log_filter(&settings));
    debug!(?settings, "Configuration loaded");

    // 3. Build extraction rules before touching the network
    let extractor = EpssExtractor::new(&settings.extractor)?;

    // 4. Identifier from argv or stdin
    let id = match &cli.cve_id {
        Some(raw) => CveId::new(raw.as_str()),
        None => read_identifier(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?,
    };

    // 5. Fetch, extract, report
    let use_case = LookupEpssUseCase::new(Arc::new(ReqwestEngine), extractor, settings.source);
    let outcome = use_case.lookup(&id).await;

    println!("{}", ReportService::render(&outcome));
    Ok(ExitCode::from(ReportService::exit_code(&outcome)))
}
