use super::core::*;
use super::duration::*;
use crate::context::{Cause, Context};
use std::time::{Duration, Instant};

fn lines(v: &[&str]) -> Vec<Vec<u8>> {
    v.iter().map(|s| s.as_bytes().to_vec()).collect()
}

// ---- split_lines ----

#[test]
fn test_split_lines_basic() {
    let ctx = Context::new();
    assert_eq!(split_lines(&ctx, b"b\na\nc\n"), Ok(lines(&["b", "a", "c"])));
}

#[test]
fn test_split_lines_no_trailing_newline() {
    let ctx = Context::new();
    assert_eq!(split_lines(&ctx, b"b\na"), Ok(lines(&["b", "a"])));
}

#[test]
fn test_split_lines_keeps_empty_lines() {
    let ctx = Context::new();
    assert_eq!(split_lines(&ctx, b"a\n\nb\n"), Ok(lines(&["a", "", "b"])));
}

#[test]
fn test_split_lines_strips_carriage_return() {
    let ctx = Context::new();
    assert_eq!(split_lines(&ctx, b"a\r\nb\r\n"), Ok(lines(&["a", "b"])));
}

#[test]
fn test_split_lines_empty_input() {
    let ctx = Context::new();
    assert_eq!(split_lines(&ctx, b""), Ok(vec![]));
}

#[test]
fn test_split_lines_done_context() {
    let ctx = Context::new();
    ctx.cancel();
    assert_eq!(split_lines(&ctx, b"a\nb\n"), Err(Cause::Cancelled));
}

// ---- sort_lines ----

#[test]
fn test_sort_lines_every_sorting_algorithm() {
    let ctx = Context::new();
    for algorithm in [Algorithm::Bogo, Algorithm::Slow] {
        let got = sort_lines(algorithm, &ctx, lines(&["c", "a", "", "b"])).unwrap();
        assert_eq!(got, lines(&["", "a", "b", "c"]), "{:?}", algorithm);
    }
}

#[test]
fn test_sort_lines_miracle_on_sorted_input() {
    let ctx = Context::new();
    let got = sort_lines(Algorithm::Miracle, &ctx, lines(&["a", "b"])).unwrap();
    assert_eq!(got, lines(&["a", "b"]));
}

#[test]
fn test_sort_lines_miracle_times_out() {
    let ctx = Context::with_timeout(Duration::from_millis(20));
    let got = sort_lines(Algorithm::Miracle, &ctx, lines(&["b", "a"]));
    assert_eq!(got, Err(Cause::DeadlineExceeded));
}

#[test]
fn test_sort_lines_stalin() {
    let ctx = Context::new();
    let got = sort_lines(Algorithm::Stalin, &ctx, lines(&["a", "", "b"])).unwrap();
    assert_eq!(got, lines(&["a", "b"]));
}

#[test]
fn test_sort_lines_expired_context() {
    let ctx = Context::with_deadline(Instant::now());
    for algorithm in [Algorithm::Bogo, Algorithm::Slow, Algorithm::Miracle, Algorithm::Stalin] {
        let got = sort_lines(algorithm, &ctx, lines(&["b", "a"]));
        assert_eq!(got, Err(Cause::DeadlineExceeded), "{:?}", algorithm);
    }
}

// ---- sort_input ----

#[test]
fn test_sort_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, b"3\n1\n2\n").unwrap();
    let ctx = Context::new();
    let got = sort_input(Algorithm::Slow, &ctx, path.to_str().unwrap()).unwrap();
    assert_eq!(got, lines(&["1", "2", "3"]));
}

#[test]
fn test_sort_input_missing_file() {
    let ctx = Context::new();
    let err = sort_input(Algorithm::Slow, &ctx, "/nonexistent/sortof_input").unwrap_err();
    match &err {
        AppError::Input { name, source } => {
            assert_eq!(name, "/nonexistent/sortof_input");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    let msg = failure_message(&err);
    assert!(msg.starts_with("/nonexistent/sortof_input: "), "got: {}", msg);
    assert!(!msg.contains("os error"), "got: {}", msg);
}

#[test]
fn test_open_inputs_opens_all_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    std::fs::write(&first, b"b\na\n").unwrap();
    std::fs::write(&second, b"d\nc\n").unwrap();
    let names = [first.to_str().unwrap(), "-", second.to_str().unwrap()];
    let opened = open_inputs(&names).unwrap();
    let got: Vec<&str> = opened.iter().map(|input| input.name()).collect();
    assert_eq!(got, names);

    let ctx = Context::new();
    let mut opened = opened.into_iter();
    let sorted = opened.next().unwrap().sort(Algorithm::Slow, &ctx).unwrap();
    assert_eq!(sorted, lines(&["a", "b"]));
}

#[test]
fn test_open_inputs_fails_on_later_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    std::fs::write(&good, b"b\na\n").unwrap();
    let missing = dir.path().join("missing.txt");
    let names = vec![
        good.to_str().unwrap().to_string(),
        missing.to_str().unwrap().to_string(),
    ];
    match open_inputs(&names) {
        Err(AppError::Input { name, source }) => {
            assert_eq!(name, names[1]);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

// ---- failure_message ----

#[test]
fn test_failure_messages_distinguish_causes() {
    assert_eq!(
        failure_message(&AppError::from(Cause::Cancelled)),
        "sorting cancelled by user"
    );
    assert_eq!(
        failure_message(&AppError::from(Cause::DeadlineExceeded)),
        "sorting needs more time than expected"
    );
}

// ---- parse_timeout ----

#[test]
fn test_parse_timeout_units() {
    assert_eq!(parse_timeout("5ns").unwrap(), Timeout::After(Duration::from_nanos(5)));
    assert_eq!(parse_timeout("7us").unwrap(), Timeout::After(Duration::from_micros(7)));
    assert_eq!(parse_timeout("7µs").unwrap(), Timeout::After(Duration::from_micros(7)));
    assert_eq!(parse_timeout("300ms").unwrap(), Timeout::After(Duration::from_millis(300)));
    assert_eq!(parse_timeout("1s").unwrap(), Timeout::After(Duration::from_secs(1)));
    assert_eq!(parse_timeout("11s").unwrap(), Timeout::After(Duration::from_secs(11)));
    assert_eq!(parse_timeout("2m").unwrap(), Timeout::After(Duration::from_secs(120)));
    assert_eq!(parse_timeout("2h").unwrap(), Timeout::After(Duration::from_secs(7200)));
}

#[test]
fn test_parse_timeout_zero() {
    assert_eq!(parse_timeout("0").unwrap(), Timeout::Never);
    assert_eq!(parse_timeout("0s").unwrap(), Timeout::Never);
    assert_eq!(parse_timeout("-0s").unwrap(), Timeout::Never);
}

#[test]
fn test_parse_timeout_fraction_and_compound() {
    assert_eq!(parse_timeout("1.5s").unwrap(), Timeout::After(Duration::from_millis(1500)));
    assert_eq!(parse_timeout(".5s").unwrap(), Timeout::After(Duration::from_millis(500)));
    assert_eq!(parse_timeout("1h30m").unwrap(), Timeout::After(Duration::from_secs(5400)));
    assert_eq!(parse_timeout("1m0.25s").unwrap(), Timeout::After(Duration::from_millis(60_250)));
    assert_eq!(parse_timeout("+10ms").unwrap(), Timeout::After(Duration::from_millis(10)));
}

#[test]
fn test_parse_timeout_rejects_garbage() {
    for bad in ["", "1", "1z", "-", "--1s", "s", ".s", "1s2", "abc", "1.5", "99999999999999999999h"] {
        assert!(parse_timeout(bad).is_err(), "accepted {:?}", bad);
    }
}

#[test]
fn test_parse_timeout_negative_is_expired() {
    assert_eq!(parse_timeout("-1s").unwrap(), Timeout::Expired);
    assert_eq!(parse_timeout("-1.5h").unwrap(), Timeout::Expired);
    assert_eq!(parse_timeout("-5ns").unwrap(), Timeout::Expired);
}

#[test]
fn test_timeout_context() {
    assert_eq!(Timeout::Never.context().deadline(), None);
    assert!(!Timeout::Never.context().is_done());
    let ctx = Timeout::After(Duration::from_secs(60)).context();
    assert!(ctx.deadline().is_some());
    assert!(!ctx.is_done());
    assert_eq!(Timeout::Expired.context().check(), Err(Cause::DeadlineExceeded));
}
