//! End-to-end behavior of the comparator against real files.

mod common;

use std::fs;

use common::Fixture;
use goldmaster::{Config, ErrorKind, Golden, GoldenError, Output, Outcome};

#[test]
fn test_matching_multiline_baseline() {
    let fx = Fixture::new();
    fx.seed("lines", "foo\nbar\nbaz\n");
    assert_eq!(fx.golden.check("lines", "foo\nbar\nbaz\n").unwrap(), Outcome::Matched);
}

#[test]
fn test_mismatch_reports_both_sides_and_diff() {
    let fx = Fixture::new();
    fx.seed("wrong", "expected");

    let err = fx.golden.check("wrong", "wrong").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Mismatch);

    let message = err.to_string();
    assert!(message.contains("mismatch"));
    assert!(message.contains("expected"));
    assert!(message.contains("wrong"));
    assert!(message.contains("--- golden"));
    assert!(message.contains("+++ run"));
    assert!(message.contains("-expected"));
    assert!(message.contains("+wrong"));

    let GoldenError::Mismatch {
        expected, actual, ..
    } = err
    else {
        panic!("expected a mismatch");
    };
    assert_eq!(expected, "expected");
    assert_eq!(actual, "wrong");
}

#[test]
fn test_missing_baseline_then_update_writes_exact_bytes() {
    let fx = Fixture::new();
    let err = fx.golden.check("fresh", "exact bytes\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingBaseline);
    assert!(err.to_string().contains(&fx.path("fresh").display().to_string()));
    assert!(!fx.path("fresh").exists());

    let mut golden = fx.golden.clone();
    golden.set_update(true);
    assert_eq!(golden.check("fresh", "exact bytes\n").unwrap(), Outcome::Updated);
    assert_eq!(fs::read(fx.path("fresh")).unwrap(), b"exact bytes\n");
}

#[test]
fn test_update_then_compare_round_trip() {
    let fx = Fixture::new();
    let mut golden = fx.golden.clone();
    let output = "tabs\there\n\x1b[1mbold\x1b[0m\rprogress\nunicode ✓\n";

    golden.set_update(true);
    golden.check("round/trip", output).unwrap();
    golden.set_update(false);
    assert_eq!(golden.check("round/trip", output).unwrap(), Outcome::Matched);
}

#[test]
fn test_update_replaces_existing_content() {
    let fx = Fixture::new();
    fx.seed("replace", "a much longer previous baseline\n");
    let golden = Golden::new(Config::new(fx.root()).with_update(true));
    golden.check("replace", "short").unwrap();
    assert_eq!(fs::read_to_string(fx.path("replace")).unwrap(), "short");
}

#[test]
fn test_binary_output_matches_text_baseline() {
    let fx = Fixture::new();
    fx.seed("binary", "test");
    assert_eq!(fx.golden.check("binary", b"test").unwrap(), Outcome::Matched);
    assert_eq!(
        fx.golden.check("binary", Output::Bytes(b"test")).unwrap(),
        Outcome::Matched
    );
}

#[test]
fn test_invalid_utf8_is_visible_not_dropped() {
    let fx = Fixture::new();
    fx.seed("bytes", "ab");
    let err = fx.golden.check("bytes", b"a\xffb").unwrap_err();
    let GoldenError::Mismatch { actual, .. } = err else {
        panic!("expected a mismatch");
    };
    assert_eq!(actual, "a\u{fffd}b");
}

#[test]
fn test_empty_output() {
    let fx = Fixture::new();
    fx.seed("empty", "");
    assert_eq!(fx.golden.check("empty", "").unwrap(), Outcome::Matched);

    let err = fx.golden.check("empty", "\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Mismatch);

    fx.seed("not-empty", "x");
    let err = fx.golden.check("not-empty", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Mismatch);
}

#[test]
fn test_trailing_newline_is_significant() {
    let fx = Fixture::new();
    fx.seed("newline", "line\n");
    let err = fx.golden.check("newline", "line").unwrap_err();
    assert!(err.to_string().contains("No newline at end of file"));
}

#[test]
fn test_control_characters_show_in_failure() {
    let fx = Fixture::new();
    fx.seed("controls", "col1 col2\n");
    let err = fx.golden.check("controls", "col1\tcol2\n").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("+col1\\tcol2"));
    assert!(message.contains("-col1 col2"));
}

#[test]
fn test_crlf_baseline_is_normalized() {
    let fx = Fixture::new();
    fx.seed("windows", "one\r\ntwo\r\n");
    assert_eq!(fx.golden.check("windows", "one\ntwo\n").unwrap(), Outcome::Matched);
}

#[test]
fn test_root_override_applies_to_one_call() {
    let fx = Fixture::new();
    let other = tempfile::tempdir().unwrap();
    std::fs::write(other.path().join("case.golden"), "from override").unwrap();
    fx.seed("case", "from default");

    assert_eq!(
        fx.golden
            .check_in("case", "from override", Some(other.path()))
            .unwrap(),
        Outcome::Matched
    );
    assert_eq!(fx.golden.root(), fx.root());
    assert_eq!(fx.golden.check("case", "from default").unwrap(), Outcome::Matched);
}

#[test]
fn test_update_with_root_override_writes_there() {
    let fx = Fixture::new();
    let other = tempfile::tempdir().unwrap();
    let golden = Golden::new(Config::new(fx.root()).with_update(true));
    golden
        .check_in("elsewhere/case", "out", Some(other.path()))
        .unwrap();
    assert!(other.path().join("elsewhere/case.golden").exists());
    assert!(!fx.path("elsewhere/case").exists());
}

#[test]
fn test_update_mode_is_read_per_call() {
    let fx = Fixture::new();
    let mut golden = fx.golden.clone();

    golden.set_update(true);
    golden.check("toggle", "v1").unwrap();
    golden.set_update(false);
    assert_eq!(golden.check("toggle", "v2").unwrap_err().kind(), ErrorKind::Mismatch);
    golden.set_update(true);
    golden.check("toggle", "v2").unwrap();
    golden.set_update(false);
    assert_eq!(golden.check("toggle", "v2").unwrap(), Outcome::Matched);
}

#[test]
fn test_independent_instances_do_not_share_settings() {
    let fx = Fixture::new();
    let writer = Golden::new(Config::new(fx.root()).with_update(true));
    let reader = Golden::new(Config::new(fx.root()));

    writer.check("shared", "data").unwrap();
    assert!(!reader.update_mode());
    assert_eq!(reader.check("shared", "data").unwrap(), Outcome::Matched);
}

#[test]
fn test_io_errors_pass_through() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.path("is_a_dir")).unwrap();
    let err = fx.golden.check("is_a_dir", "x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_baselines_lists_recorded_names() {
    let fx = Fixture::new();
    let golden = Golden::new(Config::new(fx.root()).with_update(true));
    golden.check("b/second", "2").unwrap();
    golden.check("a_first", "1").unwrap();
    assert_eq!(
        golden.baselines(None).unwrap(),
        vec!["a_first".to_string(), "b/second".to_string()]
    );
}

#[test]
fn test_assert_passes_on_match() {
    let fx = Fixture::new();
    fx.seed("assert_ok", "same");
    fx.golden.assert("assert_ok", "same");
}

#[test]
#[should_panic(expected = "golden file mismatch")]
fn test_assert_panics_on_mismatch() {
    let fx = Fixture::new();
    fx.seed("assert_bad", "before");
    fx.golden.assert("assert_bad", "after");
}

#[test]
#[should_panic(expected = "does not exist")]
fn test_assert_panics_on_missing_baseline() {
    let fx = Fixture::new();
    fx.golden.assert("never_recorded", "anything");
}

#[test]
fn test_crlf_in_output_is_compared_as_is() {
    let fx = Fixture::new();
    let mut golden = fx.golden.clone();
    golden.set_update(true);
    golden.check("crlf_run", "a\r\nb\r\n").unwrap();
    golden.set_update(false);

    // Only the stored side is normalized, so a run that emits CRLF is flagged.
    let err = golden.check("crlf_run", "a\r\nb\r\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Mismatch);
    assert_eq!(golden.check("crlf_run", "a\nb\n").unwrap(), Outcome::Matched);
}
