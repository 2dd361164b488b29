// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 命令行端到端测试
///
/// 启动编译好的二进制，校验 stdout 上的唯一结果行和退出码

#[cfg(test)]
mod tests {
    use crate::integration::helpers::{detail_page, mount_page};
    use std::process::Stdio;
    use tokio::io::AsyncWriteExt;
    use tokio::process::Command;
    use wiremock::MockServer;

    fn command(server: &MockServer) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_epssrs"));
        cmd.arg("--base-url")
            .arg(server.uri())
            .arg("--timeout")
            .arg("5")
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    #[tokio::test]
    async fn test_identifier_from_argument() {
        let server = MockServer::start().await;
        mount_page(&server, "CVE-2021-44228", 200, detail_page("0.00043")).await;

        let output = command(&server)
            .arg("CVE-2021-44228")
            .stdin(Stdio::null())
            .output()
            .await
            .unwrap();

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "EPSS score for CVE-2021-44228: 0.00043\n"
        );
    }

    #[tokio::test]
    async fn test_identifier_from_prompt() {
        let server = MockServer::start().await;
        mount_page(&server, "CVE-2014-0160", 200, detail_page("0.97")).await;

        let mut child = command(&server).stdin(Stdio::piped()).spawn().unwrap();
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"CVE-2014-0160\n").await.unwrap();
        drop(stdin);

        let output = child.wait_with_output().await.unwrap();

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "CVE-ID : EPSS score for CVE-2014-0160: 0.97\n"
        );
    }

    #[tokio::test]
    async fn test_exit_codes_follow_outcome() {
        let server = MockServer::start().await;
        mount_page(&server, "CVE-1", 200, "<h2>Nothing</h2>".to_string()).await;
        mount_page(
            &server,
            "CVE-2",
            200,
            "<h2>Exploit prediction scoring system (EPSS) score for </h2>".to_string(),
        )
        .await;
        mount_page(&server, "CVE-3", 500, String::new()).await;

        let cases = [
            ("CVE-1", 2, "EPSS section not found.\n"),
            ("CVE-2", 3, "EPSS score span not found.\n"),
            ("CVE-3", 4, "Failed to retrieve the page. Status code: 500\n"),
        ];

        for (cve, code, message) in cases {
            let output = command(&server)
                .arg(cve)
                .stdin(Stdio::null())
                .output()
                .await
                .unwrap();

            assert_eq!(output.status.code(), Some(code), "exit code for {}", cve);
            assert_eq!(String::from_utf8_lossy(&output.stdout), message);
        }
    }

    #[tokio::test]
    async fn test_closed_stdin_is_a_startup_error() {
        let server = MockServer::start().await;

        let output = command(&server)
            .stdin(Stdio::null())
            .output()
            .await
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(String::from_utf8_lossy(&output.stdout), "CVE-ID : ");
    }
}
