use flate2::Compression;
use flate2::write::GzEncoder;
use log_analyzer_core::conf::AnalyzerConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// A well-formed `ui_short` access log line.
pub fn access_line(url: &str, request_time: &str) -> String {
    format!(
        concat!(
            r#"1.169.137.128 -  - [29/Jun/2017:03:50:23 +0300] "GET {} HTTP/1.1" 200 1020 "-" "#,
            r#""Configovod" "-" "1498697423-2118016444-4708-9752777" "712e90144abee9" {}"#,
        ),
        url, request_time
    )
}

/// Seven requests over two URLs: banner `[0.3, 0.4, 0.5]`, photo `[0.1; 4]`.
pub fn banner_and_photo_lines() -> Vec<String> {
    vec![
        access_line("/api/v2/banner", "0.3"),
        access_line("/api/1/photo", "0.1"),
        access_line("/api/v2/banner", "0.4"),
        access_line("/api/1/photo", "0.1"),
        access_line("/api/1/photo", "0.1"),
        access_line("/api/v2/banner", "0.5"),
        access_line("/api/1/photo", "0.1"),
    ]
}

/// Temporary `log/` and `reports/` directories plus a config pointing at them.
pub struct LogWorkspace {
    dir: TempDir,
}

impl LogWorkspace {
    pub fn new() -> Self {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("log")).expect("failed to create log dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root().join("log")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            log_dir: self.log_dir(),
            report_dir: self.report_dir(),
            log_prefix: "nginx-access-ui".to_string(),
            ..AnalyzerConfig::default()
        }
    }

    pub fn write_plain_log(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.log_dir().join(name);
        fs::write(&path, join_lines(lines)).expect("failed to write log");
        path
    }

    pub fn write_gzip_log(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.log_dir().join(name);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder
            .write_all(join_lines(lines).as_bytes())
            .expect("failed to compress log");
        fs::write(&path, encoder.finish().expect("failed to finish gzip"))
            .expect("failed to write log");
        path
    }
}

impl Default for LogWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
