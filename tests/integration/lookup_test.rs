// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 查询流程集成测试
///
/// 用真实的 reqwest 引擎访问本地 MockServer，覆盖四种结果消息

#[cfg(test)]
mod tests {
    use super::super::helpers::{detail_page, mount_page};
    use epssrs::application::use_cases::lookup_epss::LookupEpssUseCase;
    use epssrs::config::settings::{ExtractorSettings, SourceSettings};
    use epssrs::domain::models::cve::CveId;
    use epssrs::domain::models::lookup::LookupOutcome;
    use epssrs::domain::services::epss_extractor::EpssExtractor;
    use epssrs::domain::services::report_service::ReportService;
    use epssrs::engines::reqwest_engine::ReqwestEngine;
    use epssrs::engines::traits::FetchEngine;
    use std::sync::Arc;
    use wiremock::MockServer;

    fn use_case(server: &MockServer) -> LookupEpssUseCase<dyn FetchEngine> {
        let source = SourceSettings {
            base_url: server.uri(),
            timeout_secs: 5,
            ..SourceSettings::default()
        };
        let extractor = EpssExtractor::new(&ExtractorSettings::default()).unwrap();
        let engine: Arc<dyn FetchEngine> = Arc::new(ReqwestEngine);
        LookupEpssUseCase::new(engine, extractor, source)
    }

    #[tokio::test]
    async fn test_score_found() {
        let server = MockServer::start().await;
        mount_page(&server, "CVE-2021-44228", 200, detail_page("0.97565")).await;

        let id = CveId::new("CVE-2021-44228");
        let outcome = use_case(&server).lookup(&id).await;

        assert_eq!(
            ReportService::render(&outcome),
            "EPSS score for CVE-2021-44228: 0.97565"
        );
        assert_eq!(ReportService::exit_code(&outcome), 0);
    }

    #[tokio::test]
    async fn test_pages_are_served_as_html() {
        let server = MockServer::start().await;
        mount_page(&server, "CVE-2021-44228", 200, detail_page("0.5")).await;

        let request = epssrs::engines::request_builder::build_fetch_request(
            &CveId::new("CVE-2021-44228"),
            &SourceSettings {
                base_url: server.uri(),
                ..SourceSettings::default()
            },
        )
        .unwrap();
        let response = ReqwestEngine.fetch(&request).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.content_type, "text/html; charset=UTF-8");
    }

    #[tokio::test]
    async fn test_minimal_page_from_scenario() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "CVE-2021-44228",
            200,
            r#"<h2>Exploit prediction scoring system (EPSS) score for </h2><span class="epssbox">0.00043</span>"#.to_string(),
        )
        .await;

        let outcome = use_case(&server)
            .lookup(&CveId::new("CVE-2021-44228"))
            .await;

        assert_eq!(
            ReportService::render(&outcome),
            "EPSS score for CVE-2021-44228: 0.00043"
        );
    }

    #[tokio::test]
    async fn test_section_not_found() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "CVE-2000-0001",
            200,
            "<html><body><h2>Vulnerability details</h2></body></html>".to_string(),
        )
        .await;

        let outcome = use_case(&server).lookup(&CveId::new("CVE-2000-0001")).await;

        assert_eq!(outcome, LookupOutcome::SectionNotFound);
        assert_eq!(ReportService::render(&outcome), "EPSS section not found.");
    }

    #[tokio::test]
    async fn test_score_span_not_found() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            "CVE-2000-0002",
            200,
            "<h2>Exploit prediction scoring system (EPSS) score for </h2><p>n/a</p>".to_string(),
        )
        .await;

        let outcome = use_case(&server).lookup(&CveId::new("CVE-2000-0002")).await;

        assert_eq!(outcome, LookupOutcome::ScoreNotFound);
        assert_eq!(ReportService::render(&outcome), "EPSS score span not found.");
    }

    #[tokio::test]
    async fn test_bad_status() {
        let server = MockServer::start().await;
        mount_page(&server, "CVE-0000-0000", 403, "Forbidden".to_string()).await;

        let outcome = use_case(&server).lookup(&CveId::new("CVE-0000-0000")).await;

        assert_eq!(outcome, LookupOutcome::BadStatus(403));
        assert_eq!(
            ReportService::render(&outcome),
            "Failed to retrieve the page. Status code: 403"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_bad_status() {
        // Nothing mounted: the mock server answers 404
        let server = MockServer::start().await;

        let outcome = use_case(&server).lookup(&CveId::new("CVE-1999-0001")).await;

        assert_eq!(outcome, LookupOutcome::BadStatus(404));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let source = SourceSettings {
            base_url: format!("http://127.0.0.1:{}", port),
            timeout_secs: 2,
            ..SourceSettings::default()
        };
        let extractor = EpssExtractor::new(&ExtractorSettings::default()).unwrap();
        let use_case = LookupEpssUseCase::new(Arc::new(ReqwestEngine), extractor, source);

        let outcome = use_case.lookup(&CveId::new("CVE-2021-44228")).await;

        assert!(matches!(outcome, LookupOutcome::FetchFailed(_)));
        assert!(ReportService::render(&outcome).starts_with("Failed to retrieve the page. Error: "));
        assert_eq!(ReportService::exit_code(&outcome), 5);
    }
}
