use std::fs;

use tempfile::TempDir;

use super::*;

fn classify(text: &str) -> std::result::Result<CppStandard, ArchitectureError> {
    ProjectMetadata::from_text(text).classify()
}

#[test]
fn wildcard_architecture_is_cpp11() {
    assert_eq!(classify("name=Blink\narchitectures=*\n"), Ok(CppStandard::Cpp11));
}

#[test]
fn renesas_portenta_is_cpp17() {
    assert_eq!(
        classify("architectures=renesas_portenta\n"),
        Ok(CppStandard::Cpp17)
    );
}

#[test]
fn mbed_opta_is_cpp14() {
    assert_eq!(classify("architectures=mbed_opta\n"), Ok(CppStandard::Cpp14));
}

#[test]
fn mbed_portenta_is_cpp14() {
    assert_eq!(classify("architectures=mbed_portenta\n"), Ok(CppStandard::Cpp14));
}

#[test]
fn no_marker_is_not_specified() {
    assert_eq!(
        classify("name=Blink\narchitectures=avr\n"),
        Err(ArchitectureError::NotSpecified)
    );
    assert_eq!(classify(""), Err(ArchitectureError::NotSpecified));
}

#[test]
fn several_markers_are_ambiguous() {
    let result = classify("architectures=renesas_portenta,mbed_portenta\n");
    assert_eq!(
        result,
        Err(ArchitectureError::Ambiguous(vec![
            ArchitectureMarker::RenesasPortenta,
            ArchitectureMarker::MbedPortenta,
        ]))
    );
}

#[test]
fn ambiguous_message_still_reads_not_specified() {
    let err = classify("architectures=mbed_opta,mbed_portenta").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("The architecture is not specified"));
    assert!(message.contains("mbed_opta, mbed_portenta"));
}

#[test]
fn escaped_wildcard_is_not_a_marker() {
    assert_eq!(
        classify("architectures=\\*\n"),
        Err(ArchitectureError::NotSpecified)
    );
}

#[test]
fn standard_display() {
    assert_eq!(CppStandard::Cpp11.to_string(), "C++11");
    assert_eq!(CppStandard::Cpp14.to_string(), "C++14");
    assert_eq!(CppStandard::Cpp17.to_string(), "C++17");
}

#[test]
fn properties_parse_key_values() {
    let meta = ProjectMetadata::from_text(
        "# comment\nname=Blink Helper\nversion = 1.2.0\n\nsentence=a=b\n",
    );
    assert_eq!(meta.property("name"), Some("Blink Helper"));
    assert_eq!(meta.property("version"), Some("1.2.0"));
    assert_eq!(meta.property("sentence"), Some("a=b"));
    assert_eq!(meta.property("missing"), None);
}

#[test]
fn load_reads_properties_from_root() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(PROPERTIES_FILE), "architectures=mbed_opta\n").unwrap();

    let meta = ProjectMetadata::load(dir.path()).unwrap();
    assert_eq!(meta.classify(), Ok(CppStandard::Cpp14));
    assert!(meta.path().ends_with(PROPERTIES_FILE));
}

#[test]
fn load_missing_file_is_file_access_error() {
    let dir = TempDir::new().unwrap();
    let err = ProjectMetadata::load(dir.path()).unwrap_err();
    assert_eq!(err.error_type(), "FileAccess");
    assert!(err.to_string().contains(PROPERTIES_FILE));
}
