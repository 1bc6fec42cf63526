use benchgraph::parser::{parse_line, DataType};
use benchgraph::utils::error::ParseError;

#[test]
fn test_parse_well_formed_line() {
    let line = "BM_vector_seq_read<Vector, int>/16    100 ns   90 ns   500000";

    let sample = parse_line(line).unwrap().unwrap();

    assert_eq!(sample.function, "BM_vector_seq_read");
    assert_eq!(sample.container, "Vector");
    assert_eq!(sample.data_size_bytes, 4);
    assert_eq!(sample.cardinality, 16);
    assert_eq!(sample.cpu_time_ns, 90);
}

#[test]
fn test_parse_keeps_cpu_column_not_wall_clock() {
    let line = "BM_vector_seq_read<Vector, size_64>/256   800 ns  780 ns    50000";

    let sample = parse_line(line).unwrap().unwrap();

    // Group 5 (800) is wall clock; the second ns column is CPU time
    assert_eq!(sample.cpu_time_ns, 780);
    assert_eq!(sample.data_size_bytes, 64);
}

#[test]
fn test_parse_nested_container_label() {
    let line = "BM_map_lookup<std::map<int, int>, size_16>/1024    5000 ns   4800 ns   10000";

    let sample = parse_line(line).unwrap().unwrap();

    // The label is captured verbatim, colons and nesting included
    assert_eq!(sample.container, "std::map<int, int>");
    assert_eq!(sample.data_size_bytes, 16);
    assert_eq!(sample.cardinality, 1024);
}

#[test]
fn test_parse_container_with_spaces_and_commas() {
    let line = "BM_read<FixedArray<size_16, 4>, size_16>/64    200 ns   190 ns   80000";

    let sample = parse_line(line).unwrap().unwrap();

    assert_eq!(sample.container, "FixedArray<size_16, 4>");
}

#[test]
fn test_noise_lines_are_skipped() {
    // Typical non-benchmark output around the iterations
    let noise = [
        "",
        "Run on (8 X 2400 MHz CPU s)",
        "----------------------------------------------------------",
        "Benchmark                           Time           CPU Iterations",
        "2026-01-15 10:00:00",
    ];

    for line in noise {
        assert!(parse_line(line).unwrap().is_none(), "matched: {:?}", line);
    }
}

#[test]
fn test_malformed_lines_yield_no_record() {
    let malformed = [
        // Missing " ns" suffix on the first time
        "BM_read<Vector, int>/16    100   90 ns   500000",
        // Missing " ns" suffix on the CPU time
        "BM_read<Vector, int>/16    100 ns   90   500000",
        // Non-numeric cardinality
        "BM_read<Vector, int>/abc    100 ns   90 ns   500000",
        // Wrong separator before the data-type token (no space)
        "BM_read<Vector,int>/16    100 ns   90 ns   500000",
        // No iteration count
        "BM_read<Vector, int>/16    100 ns   90 ns",
        // Leading junk
        "x BM_read<Vector, int>/16    100 ns   90 ns   500000",
        // Trailing junk
        "BM_read<Vector, int>/16    100 ns   90 ns   500000 extra",
    ];

    for line in malformed {
        assert!(parse_line(line).unwrap().is_none(), "matched: {:?}", line);
    }
}

#[test]
fn test_unknown_data_type_token_is_fatal() {
    let line = "BM_read<Vector, size_32>/16    100 ns   90 ns   500000";

    let err = parse_line(line).unwrap_err();

    assert!(matches!(err, ParseError::UnknownDataType(token) if token == "size_32"));
}

#[test]
fn test_numeric_overflow_is_fatal() {
    // Matches the grammar but the cardinality cannot fit in u64
    let line = "BM_read<Vector, int>/99999999999999999999999    100 ns   90 ns   500000";

    assert!(matches!(parse_line(line), Err(ParseError::Number(_))));
}

#[test]
fn test_data_type_sizes() {
    assert_eq!("int".parse::<DataType>().unwrap().size_bytes(), 4);
    assert_eq!("size_16".parse::<DataType>().unwrap().size_bytes(), 16);
    assert_eq!("size_64".parse::<DataType>().unwrap().size_bytes(), 64);
    assert!("float".parse::<DataType>().is_err());
}
