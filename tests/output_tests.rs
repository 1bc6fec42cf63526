use benchgraph::aggregator::{aggregate, CardinalityFilter};
use benchgraph::output::{
    chart_file_name, ensure_output_dir, read_report, write_report, write_svg, Report,
};
use pretty_assertions::assert_eq;
use std::path::Path;

const TEST_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;

fn create_test_report() -> Report {
    let lines = [
        "BM_vector_seq_read<Vector, int>/16    100 ns   90 ns   500000",
        "BM_vector_seq_read<Vector, int>/256   800 ns  780 ns    50000",
    ];
    let result = aggregate(lines, &CardinalityFilter::unbounded()).unwrap();
    Report::from_aggregate(&result, "output.txt")
}

#[test]
fn test_chart_file_name_is_deterministic() {
    assert_eq!(
        chart_file_name("BM_vector_seq_read", 4),
        "BM_vector_seq_read_data_size_4.svg"
    );
    assert_eq!(chart_file_name("BM_map_lookup", 64), "BM_map_lookup_data_size_64.svg");
}

#[test]
fn test_ensure_output_dir_creates_nested() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("graphs/container_size_up_to_64");

    ensure_output_dir(&nested).unwrap();

    assert!(nested.is_dir());
}

#[test]
fn test_ensure_output_dir_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path().join("graphs");

    ensure_output_dir(&dir).unwrap();
    // Pre-existing directory is success, not an error
    ensure_output_dir(&dir).unwrap();

    assert!(dir.is_dir());
}

#[test]
fn test_ensure_output_dir_rejects_file_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = temp_dir.path().join("not_a_dir");
    std::fs::write(&file_path, "x").unwrap();

    assert!(ensure_output_dir(&file_path).is_err());
}

#[test]
fn test_ensure_output_dir_rejects_empty_path() {
    assert!(ensure_output_dir(Path::new("")).is_err());
}

#[test]
fn test_write_svg_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("chart.svg");

    write_svg(TEST_SVG, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), TEST_SVG);
}

#[test]
fn test_write_svg_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("a/b/chart.svg");

    write_svg(TEST_SVG, &nested).unwrap();

    assert!(nested.exists());
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("report.json");

    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.source, "output.txt");
    assert_eq!(loaded.sample_count, 2);
    assert_eq!(loaded.functions, vec!["BM_vector_seq_read"]);
    assert_eq!(loaded.sizes_in_bytes, vec![4]);
    assert_eq!(loaded.cardinalities, vec![16, 256]);
    assert_eq!(loaded.samples, report.samples);
}

#[test]
fn test_report_rows_follow_key_order() {
    let report = create_test_report();

    assert_eq!(report.samples.len(), 2);
    assert_eq!(report.samples[0].cardinality, 16);
    assert_eq!(report.samples[0].cpu_time_ns, 90);
    assert_eq!(report.samples[1].cardinality, 256);
    assert_eq!(report.samples[1].cpu_time_ns, 780);
}

#[test]
fn test_report_generated_at_is_rfc3339() {
    let report = create_test_report();

    assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
}

#[test]
fn test_write_report_to_directory_path_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let report = create_test_report();

    assert!(write_report(&report, temp_dir.path()).is_err());
}

#[test]
fn test_read_report_missing_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    assert!(read_report(temp_dir.path().join("missing.json")).is_err());
}
