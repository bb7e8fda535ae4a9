use super::*;
use crate::rules::test_support::{TestContext, write_source};

fn check(content: &str) -> Vec<Finding> {
    let (_dir, file) = write_source("Blink.h", content);
    let ctx = TestContext::new();
    ReservedDefineRule::new().check_file(&file, content, &ctx.get())
}

#[test]
fn define_of_keyword_is_reported_with_exact_line() {
    let findings = check("// pins\n\n#define HIGH 1\n");

    assert_eq!(findings.len(), 1);
    assert!(findings[0].is_failed());
    assert_eq!(findings[0].line, Some(3));
    assert!(findings[0].message.contains("`HIGH`"));
}

#[test]
fn define_of_ordinary_name_is_fine() {
    assert!(check("#define LED_PIN 13\n#define BLINK_MS 500\n").is_empty());
}

#[test]
fn one_finding_per_occurrence() {
    let findings = check("#ifndef X\n#define LOW 0\n#endif\n#define HIGH 1\n#define LOW 0\n");

    let lines: Vec<Option<usize>> = findings.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![Some(2), Some(4), Some(5)]);
}

#[test]
fn line_numbers_track_the_match_not_the_first_mention() {
    let content = "// HIGH is a level\nint x = 0;\n#define HIGH 1\n";
    let findings = check(content);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, Some(3));
}

#[test]
fn define_at_start_of_file_is_seen() {
    let findings = check("#define INPUT 0\n");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, Some(1));
}

#[test]
fn indented_define_is_seen() {
    assert_eq!(check("  #define OUTPUT 1\n").len(), 1);
}

#[test]
fn define_glued_to_a_word_is_ignored() {
    assert!(check("x#define HIGH 1\n").is_empty());
}

#[test]
fn keyword_match_is_case_sensitive() {
    assert!(check("#define high 1\n#define Low 0\n").is_empty());
}

#[test]
fn evaluate_adds_corpus_pass_when_clean() {
    let (_dir, file) = write_source("Clean.cpp", "#define LED_PIN 13\n");
    let ctx = TestContext::new();

    let findings = ReservedDefineRule::new().evaluate(&[file], &ctx.get());

    assert_eq!(findings.len(), 1);
    assert!(findings[0].is_passed());
    assert_eq!(findings[0].file, None);
}

#[test]
fn evaluate_omits_corpus_pass_when_any_file_fails() {
    let (_dir, bad) = write_source("Bad.cpp", "#define HIGH 1\n");
    let (_dir2, good) = write_source("Good.cpp", "#define LED 13\n");
    let ctx = TestContext::new();

    let findings = ReservedDefineRule::new().evaluate(&[good, bad], &ctx.get());

    assert_eq!(findings.len(), 1);
    assert!(findings[0].is_failed());
}

#[test]
fn custom_keyword_table_is_honoured() {
    let (_dir, file) = write_source("Blink.h", "#define HIGH 1\n#define MY_WORD 2\n");
    let ctx = TestContext::with_keywords("keyword,category\nMY_WORD,custom\n");

    let findings = ReservedDefineRule::new().evaluate(&[file], &ctx.get());

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, Some(2));
}

#[test]
fn unavailable_keyword_table_fails_once() {
    let (_dir, a) = write_source("A.h", "#define HIGH 1\n");
    let (_dir2, b) = write_source("B.h", "#define LOW 1\n");
    let ctx = TestContext::with_keywords_error("no header\n");

    let findings = ReservedDefineRule::new().evaluate(&[a, b], &ctx.get());

    assert_eq!(findings.len(), 1);
    assert!(findings[0].is_failed());
    assert!(findings[0].message.contains("keyword table"));
}

#[test]
fn name_on_the_next_line_is_not_a_define() {
    assert!(check("#define\nHIGH 1\n").is_empty());
    assert_eq!(check("#define \t HIGH 1\n").len(), 1);
}
