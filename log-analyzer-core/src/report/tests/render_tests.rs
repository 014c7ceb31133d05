use crate::report::{DEFAULT_PLACEHOLDER, default_template, load_template, rank, render_report};
use crate::stats::UrlStatistic;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn stat(url: &str, time_sum: f64) -> UrlStatistic {
    UrlStatistic {
        url: url.to_string(),
        count: 1,
        count_percent: 0.0,
        time_sum,
        time_percent: 0.0,
        time_avg: time_sum,
        time_max: time_sum,
        time_median: time_sum,
    }
}

fn rendered_table(rendered: &str, before: &str, after: &str) -> Value {
    let json = rendered
        .strip_prefix(before)
        .and_then(|s| s.strip_suffix(after))
        .unwrap_or_else(|| panic!("unexpected rendering: {rendered}"));
    serde_json::from_str(json).unwrap()
}

#[test]
fn renders_top_entries_by_time_sum() {
    // Arrange
    let stats = vec![
        stat("/1", 1.0),
        stat("/5", 5.0),
        stat("/2", 2.0),
        stat("/3", 3.0),
        stat("/0.1", 0.1),
    ];

    // Act
    let rendered = render_report("... $table_json ...", DEFAULT_PLACEHOLDER, &stats, 2).unwrap();

    // Assert
    let table = rendered_table(&rendered, "... ", " ...");
    let sums: Vec<f64> = table
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["time_sum"].as_f64().unwrap())
        .collect();
    assert_eq!(sums, vec![5.0, 3.0]);
}

#[test]
fn ties_keep_emission_order() {
    let stats = vec![stat("/first", 1.0), stat("/big", 2.0), stat("/second", 1.0)];

    let urls: Vec<&str> = rank(&stats, 10).iter().map(|s| s.url.as_str()).collect();

    assert_eq!(urls, vec!["/big", "/first", "/second"]);
}

#[test]
fn report_size_larger_than_stats_keeps_all() {
    let stats = vec![stat("/a", 1.0), stat("/b", 2.0)];

    assert_eq!(rank(&stats, 1000).len(), 2);
}

#[test]
fn empty_stats_render_an_empty_array() {
    let rendered = render_report("[$table_json]", DEFAULT_PLACEHOLDER, &[], 10).unwrap();

    assert_eq!(rendered, "[[]]");
}

#[test]
fn replaces_only_first_placeholder() {
    let rendered = render_report("$table_json|$table_json", DEFAULT_PLACEHOLDER, &[], 10).unwrap();

    assert_eq!(rendered, "[]|$table_json");
}

#[test]
fn template_without_placeholder_is_unchanged() {
    let rendered = render_report("<html></html>", DEFAULT_PLACEHOLDER, &[stat("/a", 1.0)], 10)
        .unwrap();

    assert_eq!(rendered, "<html></html>");
}

#[test]
fn custom_placeholder_is_honored() {
    let rendered = render_report("var t = {{DATA}};", "{{DATA}}", &[], 10).unwrap();

    assert_eq!(rendered, "var t = [];");
}

#[test]
fn embedded_template_has_placeholder() {
    let template = default_template().unwrap();

    assert_eq!(template.matches(DEFAULT_PLACEHOLDER).count(), 1);
}

#[test]
fn load_template_without_path_uses_embedded() {
    assert_eq!(load_template(None).unwrap(), default_template().unwrap());
}

#[test]
fn load_template_reads_external_file() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.html");
    std::fs::write(&path, "<p>$table_json</p>").unwrap();

    // Act
    let template = load_template(Some(&path)).unwrap();

    // Assert
    assert_eq!(template, "<p>$table_json</p>");
}

#[test]
fn load_template_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(load_template(Some(&dir.path().join("missing.html"))).is_err());
}
