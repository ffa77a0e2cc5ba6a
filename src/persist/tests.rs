use super::*;
use crate::error::{EditorError, FileOperation};
use std::fs;
use tempfile::tempdir;

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(1, "A", 10.0).unwrap();
    catalog.add(2, "B", 20.5).unwrap();
    catalog
}

fn assert_load_fails(format: Format, path: &Path) {
    match load(format, path) {
        Err(EditorError::FileOperation {
            operation: FileOperation::Loading,
            filename,
            ..
        }) => assert_eq!(filename, path),
        other => panic!("expected a loading failure, got {other:?}"),
    }
}

fn malformed_cause(err: EditorError) -> MalformedProject {
    match err {
        EditorError::FileOperation { source, .. } => *source
            .downcast::<MalformedProject>()
            .expect("cause should be a MalformedProject"),
        other => panic!("expected a file operation error, got {other:?}"),
    }
}

#[test]
fn format_from_path_and_name() {
    assert_eq!(Format::from_path(Path::new("a/b.json")).unwrap(), Format::Json);
    assert_eq!(Format::from_path(Path::new("b.XML")).unwrap(), Format::Xml);
    assert!(matches!(
        Format::from_path(Path::new("b.yaml")),
        Err(EditorError::InvalidFormat { format }) if format == "yaml"
    ));
    assert!(matches!(
        Format::from_path(Path::new("noext")),
        Err(EditorError::InvalidFormat { .. })
    ));
    assert_eq!(" Json ".parse::<Format>().unwrap(), Format::Json);
}

#[test]
fn json_round_trip_into_fresh_catalog_is_deep_equal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    let original = sample_catalog();

    save(&original, Format::Json, &path, &ProjectSettings::default()).unwrap();

    let mut restored = Catalog::new();
    restored.replace_all(load(Format::Json, &path).unwrap());
    assert_eq!(restored, original);
    let ids: Vec<i64> = restored.iter().map(Track::id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn json_file_has_string_keys_mirroring_track_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    let settings = ProjectSettings {
        pretty_json: false,
        ..ProjectSettings::default()
    };
    save(&sample_catalog(), Format::Json, &path, &settings).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "tracks": {
                "1": {"track_id": 1, "title": "A", "duration": 10.0},
                "2": {"track_id": 2, "title": "B", "duration": 20.5}
            }
        })
    );
}

#[test]
fn xml_round_trip_into_fresh_catalog_matches_within_tolerance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.xml");
    let mut original = sample_catalog();
    original.add(3, "Rock & <Roll>", 0.1 + 0.2).unwrap();
    original.add(4, "", 0.0).unwrap();

    save(&original, Format::Xml, &path, &ProjectSettings::default()).unwrap();
    let loaded = load(Format::Xml, &path).unwrap();

    assert_eq!(loaded.len(), original.len());
    for (got, want) in loaded.iter().zip(original.iter()) {
        assert_eq!(got.id(), want.id());
        assert_eq!(got.title(), want.title());
        assert!((got.duration() - want.duration()).abs() < 1e-9);
    }
}

#[test]
fn xml_file_uses_attributes_and_text_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.xml");
    save(&sample_catalog(), Format::Xml, &path, &ProjectSettings::default()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("<project>"));
    assert!(text.contains("<tracks>"));
    assert!(text.contains(r#"<track id="1" duration="10">A</track>"#));
    assert!(text.contains(r#"<track id="2" duration="20.5">B</track>"#));
}

#[test]
fn xml_missing_duration_defaults_to_zero() {
    let tracks = xml::decode(
        r#"<project><tracks><track id="5">Quiet</track><track id="6"/></tracks></project>"#,
    )
    .unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title(), "Quiet");
    assert_eq!(tracks[0].duration(), 0.0);
    assert_eq!(tracks[1].title(), "");
}

#[test]
fn loading_missing_file_fails_with_file_operation_error() {
    let dir = tempdir().unwrap();
    assert_load_fails(Format::Json, &dir.path().join("absent.json"));
    assert_load_fails(Format::Xml, &dir.path().join("absent.xml"));
}

#[test]
fn loading_unparsable_files_fails_with_file_operation_error() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("bad.json");
    let xml = dir.path().join("bad.xml");
    fs::write(&json, "{ not json").unwrap();
    fs::write(&xml, "<project><tracks><track id=\"1\">x</tracks></project>").unwrap();

    assert_load_fails(Format::Json, &json);
    assert_load_fails(Format::Xml, &xml);
}

#[test]
fn json_missing_field_or_wrong_type_is_a_load_failure() {
    let dir = tempdir().unwrap();
    let cases = [
        r#"{"tracks": {"1": {"track_id": 1, "title": "A"}}}"#,
        r#"{"tracks": {"1": {"track_id": "one", "title": "A", "duration": 1.0}}}"#,
        r#"{"tracks": {"1": {"track_id": 1, "title": "A", "duration": "long"}}}"#,
        r#"{"songs": {}}"#,
    ];
    for (i, body) in cases.iter().enumerate() {
        let path = dir.path().join(format!("case{i}.json"));
        fs::write(&path, body).unwrap();
        assert_load_fails(Format::Json, &path);
    }
}

#[test]
fn json_key_must_agree_with_track_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mismatch.json");
    fs::write(
        &path,
        r#"{"tracks": {"1": {"track_id": 2, "title": "A", "duration": 1.0}}}"#,
    )
    .unwrap();

    let cause = malformed_cause(load(Format::Json, &path).unwrap_err());
    assert_eq!(
        cause,
        MalformedProject::KeyMismatch {
            key: "1".to_string(),
            track_id: 2
        }
    );
}

#[test]
fn negative_duration_in_file_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("neg.xml");
    fs::write(
        &path,
        r#"<project><tracks><track id="1" duration="-3">A</track></tracks></project>"#,
    )
    .unwrap();

    let cause = malformed_cause(load(Format::Xml, &path).unwrap_err());
    assert!(matches!(cause, MalformedProject::InvalidDuration { id: 1, .. }));
}

#[test]
fn xml_structural_errors_are_reported() {
    assert_eq!(
        *xml::decode(r#"<project><tracks><track duration="1">A</track></tracks></project>"#)
            .unwrap_err()
            .downcast::<MalformedProject>()
            .unwrap(),
        MalformedProject::MissingAttribute { attribute: "id" }
    );
    assert!(matches!(
        *xml::decode(r#"<project><tracks><track id="x">A</track></tracks></project>"#)
            .unwrap_err()
            .downcast::<MalformedProject>()
            .unwrap(),
        MalformedProject::InvalidNumber { attribute: "id", .. }
    ));
    assert!(matches!(
        *xml::decode(r#"<library><tracks/></library>"#)
            .unwrap_err()
            .downcast::<MalformedProject>()
            .unwrap(),
        MalformedProject::UnexpectedElement { .. }
    ));
    assert_eq!(
        *xml::decode("").unwrap_err().downcast::<MalformedProject>().unwrap(),
        MalformedProject::MissingRoot
    );
    assert_eq!(
        *xml::decode("<project/><project/>")
            .unwrap_err()
            .downcast::<MalformedProject>()
            .unwrap(),
        MalformedProject::MultipleRoots {
            found: "project".to_string()
        }
    );
}

#[test]
fn tracks_under_a_second_root_fail_the_whole_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("two_roots.xml");
    fs::write(
        &path,
        concat!(
            r#"<project><tracks><track id="1">A</track></tracks></project>"#,
            r#"<project><tracks><track id="2">B</track></tracks></project>"#,
        ),
    )
    .unwrap();

    let cause = malformed_cause(load(Format::Xml, &path).unwrap_err());
    assert!(matches!(cause, MalformedProject::MultipleRoots { .. }));
}

#[test]
fn saving_into_missing_directory_fails_with_file_operation_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("project.json");

    let err = save(&sample_catalog(), Format::Json, &path, &ProjectSettings::default())
        .unwrap_err();
    assert!(matches!(
        err,
        EditorError::FileOperation {
            operation: FileOperation::Saving,
            ..
        }
    ));
}

#[test]
fn saving_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");
    fs::write(&path, "old contents that are much longer than the new ones will be").unwrap();

    save(&Catalog::new(), Format::Json, &path, &ProjectSettings::default()).unwrap();
    assert!(load(Format::Json, &path).unwrap().is_empty());
}
