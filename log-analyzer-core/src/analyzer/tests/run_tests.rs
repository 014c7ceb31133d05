use crate::aggregate::tests::test_helpers::{access_line, banner_and_photo_lines};
use crate::analyzer::{AnalyzeError, Analyzer, RunOptions, RunOutcome};
use crate::conf::AnalyzerConfig;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn config_in(root: &Path) -> AnalyzerConfig {
    AnalyzerConfig {
        log_dir: root.join("log"),
        report_dir: root.join("reports"),
        log_prefix: "sample".to_string(),
        ..AnalyzerConfig::default()
    }
}

fn workspace_with_log(name: &str, lines: &[String]) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("log")).unwrap();
    fs::write(dir.path().join("log").join(name), lines.join("\n")).unwrap();
    dir
}

#[test]
fn generates_report_for_newest_log() {
    // Arrange
    let dir = workspace_with_log("sample.log-20170630", &banner_and_photo_lines());
    fs::write(dir.path().join("log/sample.log-20170101"), "").unwrap();
    let analyzer = Analyzer::new(config_in(dir.path()));

    // Act
    let outcome = analyzer.run(&RunOptions::default()).unwrap();

    // Assert
    let RunOutcome::Generated {
        log,
        report,
        summary,
    } = outcome
    else {
        panic!("Expected Generated");
    };
    assert_eq!(log, dir.path().join("log/sample.log-20170630"));
    assert_eq!(report, dir.path().join("reports/report-2017.06.30.html"));
    assert_eq!(summary.total_lines, 7);
    assert_eq!(summary.error_lines, 0);
    assert_eq!(summary.urls, 2);
    assert_eq!(summary.total_request_time, 1.6);

    let html = fs::read_to_string(&report).unwrap();
    assert!(html.contains(r#""url":"/api/v2/banner""#));
    assert!(!html.contains("$table_json"));
}

#[test]
fn existing_report_is_not_regenerated() {
    // Arrange
    let dir = workspace_with_log("sample.log-20170630", &banner_and_photo_lines());
    let analyzer = Analyzer::new(config_in(dir.path()));
    let report = dir.path().join("reports/report-2017.06.30.html");
    fs::create_dir_all(report.parent().unwrap()).unwrap();
    fs::write(&report, "keep me").unwrap();

    // Act
    let outcome = analyzer.run(&RunOptions::default()).unwrap();

    // Assert
    assert!(matches!(outcome, RunOutcome::AlreadyExists { .. }));
    assert_eq!(fs::read_to_string(&report).unwrap(), "keep me");
}

#[test]
fn force_regenerates_existing_report() {
    // Arrange
    let dir = workspace_with_log("sample.log-20170630", &banner_and_photo_lines());
    let analyzer = Analyzer::new(config_in(dir.path()));
    let report = dir.path().join("reports/report-2017.06.30.html");
    fs::create_dir_all(report.parent().unwrap()).unwrap();
    fs::write(&report, "stale").unwrap();

    // Act
    let outcome = analyzer
        .run(&RunOptions {
            force: true,
            ..RunOptions::default()
        })
        .unwrap();

    // Assert
    assert!(matches!(outcome, RunOutcome::Generated { .. }));
    assert_ne!(fs::read_to_string(&report).unwrap(), "stale");
}

#[test]
fn explicit_log_and_report_paths_win() {
    // Arrange
    let dir = workspace_with_log("other.log", &banner_and_photo_lines());
    let analyzer = Analyzer::new(config_in(dir.path()));
    let custom = dir.path().join("custom/out.html");

    // Act
    let outcome = analyzer
        .run(&RunOptions {
            log: Some(dir.path().join("log/other.log")),
            report: Some(custom.clone()),
            force: false,
        })
        .unwrap();

    // Assert
    match outcome {
        RunOutcome::Generated { report, .. } => assert_eq!(report, custom),
        other => panic!("Expected Generated, got {:?}", other),
    }
    assert!(custom.is_file());
}

#[test]
fn missing_log_dir_means_nothing_to_do() {
    // Arrange
    let dir = tempdir().unwrap();
    let analyzer = Analyzer::new(config_in(dir.path()));

    // Act
    let outcome = analyzer.run(&RunOptions::default()).unwrap();

    // Assert
    assert_eq!(
        outcome,
        RunOutcome::NoLogFound {
            log_dir: dir.path().join("log"),
        }
    );
}

#[test]
fn too_many_errors_aborts_without_report() {
    // Arrange
    let mut lines = banner_and_photo_lines();
    lines.extend(["bad".to_string(), "worse".to_string(), "".to_string()]);
    let dir = workspace_with_log("sample.log-20170630", &lines);
    let analyzer = Analyzer::new(AnalyzerConfig {
        max_parse_errors_percent: Some(10.0),
        ..config_in(dir.path())
    });

    // Act
    let err = analyzer.run(&RunOptions::default()).unwrap_err();

    // Assert
    assert!(err.is_too_many_parse_errors());
    assert!(!dir.path().join("reports/report-2017.06.30.html").exists());
}

#[test]
fn unreadable_log_is_reported_with_its_path() {
    // Arrange
    let dir = tempdir().unwrap();
    let analyzer = Analyzer::new(config_in(dir.path()));
    let missing = dir.path().join("log/missing.log");

    // Act
    let err = analyzer
        .run(&RunOptions {
            log: Some(missing.clone()),
            ..RunOptions::default()
        })
        .unwrap_err();

    // Assert
    match err {
        AnalyzeError::OpenLog { path, .. } => assert_eq!(path, missing),
        other => panic!("Expected OpenLog, got {:?}", other),
    }
}

#[test]
fn report_size_caps_rendered_rows() {
    // Arrange
    let lines: Vec<String> = (0..5)
        .map(|i| access_line(&format!("/u{i}"), &format!("{i}.5")))
        .collect();
    let dir = workspace_with_log("sample.log-20170630", &lines);
    let analyzer = Analyzer::new(AnalyzerConfig {
        report_size: 2,
        template: Some(dir.path().join("tpl.html")),
        ..config_in(dir.path())
    });
    fs::write(dir.path().join("tpl.html"), "$table_json").unwrap();

    // Act
    let outcome = analyzer.run(&RunOptions::default()).unwrap();

    // Assert
    let RunOutcome::Generated { report, summary, .. } = outcome else {
        panic!("Expected Generated");
    };
    assert_eq!(summary.urls, 5);
    assert_eq!(summary.rows, 2);

    let table: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
    let urls: Vec<&str> = table
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["url"].as_str().unwrap())
        .collect();
    assert_eq!(urls, vec!["/u4", "/u3"]);
}

#[test]
fn analyze_works_on_any_line_stream() {
    let analyzer = Analyzer::new(AnalyzerConfig::default());

    let (state, stats) = analyzer
        .analyze(banner_and_photo_lines().into_iter().map(Ok))
        .unwrap();

    assert_eq!(state.total_lines, 7);
    assert_eq!(stats.len(), 2);
}
