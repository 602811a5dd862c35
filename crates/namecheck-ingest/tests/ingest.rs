//! Tests for extraction, discovery and master-list loading.

use std::fs;
use std::path::{Path, PathBuf};

use namecheck_ingest::{
    Extractor, FileExtractor, IngestError, MasterSource, discover_documents, expand_inputs,
    load_master_names, read_master_file,
};
use namecheck_model::TextPair;

fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, bytes).expect("write file");
    path
}

fn master_lines(count: usize) -> String {
    (1..=count).map(|i| format!("(민간)현장{i:02}\n")).collect()
}

#[test]
fn csv_cells_are_located_by_row_and_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(
        dir.path(),
        "weekly.csv",
        "\u{feff}공사명,비고\n(LH)오산세교, \n,\"부산미음동물류, 2공구\"\n".as_bytes(),
    );

    let pairs = FileExtractor.extract(&path).expect("extract csv");
    assert_eq!(
        pairs,
        vec![
            TextPair::new("R1 C1", "공사명"),
            TextPair::new("R1 C2", "비고"),
            TextPair::new("R2 C1", "(LH)오산세교"),
            TextPair::new("R3 C2", "부산미음동물류, 2공구"),
        ]
    );
}

#[test]
fn legacy_encoded_csv_is_decoded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (encoded, _, _) = encoding_rs::EUC_KR.encode("공사명\n(LH)오산세교\n");
    let path = write(dir.path(), "legacy.csv", &encoded);

    let pairs = FileExtractor.extract(&path).expect("extract csv");
    assert_eq!(pairs[1], TextPair::new("R2 C1", "(LH)오산세교"));
}

#[test]
fn text_lines_keep_their_numbers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(dir.path(), "notes.TXT", "첫 줄\n\n  (LH)오산세교  \r\n".as_bytes());

    let pairs = FileExtractor.extract(&path).expect("extract text");
    assert_eq!(
        pairs,
        vec![TextPair::new("L1", "첫 줄"), TextPair::new("L3", "(LH)오산세교")]
    );
}

#[test]
fn unsupported_format_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(dir.path(), "scan.pdf", b"%PDF-1.7");
    let err = FileExtractor.extract(&path).expect_err("pdf is unsupported");
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn discovery_recurses_and_sorts() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "b.csv", b"x");
    write(dir.path(), "a.txt", b"x");
    write(dir.path(), "sub/c.csv", b"x");
    write(dir.path(), "sub/ignored.pdf", b"x");

    let files = discover_documents(dir.path()).expect("discover");
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("a.txt"),
            PathBuf::from("b.csv"),
            PathBuf::from("sub").join("c.csv"),
        ]
    );
}

#[test]
fn discovery_requires_a_directory() {
    let err = discover_documents(Path::new("/definitely/not/here")).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn explicit_files_are_kept_even_if_unsupported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pdf = write(dir.path(), "scan.pdf", b"x");
    let csv = write(dir.path(), "a.csv", b"x");

    let inputs = vec![pdf.clone(), dir.path().to_path_buf(), csv.clone()];
    let documents = expand_inputs(&inputs).expect("expand");
    assert_eq!(documents, vec![pdf, csv]);
}

#[test]
fn missing_input_is_an_error() {
    let err = expand_inputs(&[PathBuf::from("/definitely/not/here.csv")]).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn master_file_one_name_per_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(dir.path(), "master.txt", master_lines(12).as_bytes());

    let load = load_master_names(Some(&path));
    assert_eq!(load.source, MasterSource::File(path));
    assert!(load.warning.is_none());
    assert_eq!(load.names.len(), 12);
    assert_eq!(load.names[0], "(민간)현장01");
}

#[test]
fn master_csv_uses_first_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let body: String = (1..=10).map(|i| format!("(CM)현장{i},note\n")).collect();
    let path = write(dir.path(), "master.csv", body.as_bytes());

    let names = read_master_file(&path).expect("read master");
    assert_eq!(names.len(), 10);
    assert_eq!(names[9], "(CM)현장10");
}

#[test]
fn short_master_file_falls_back_to_embedded_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(dir.path(), "master.txt", master_lines(3).as_bytes());

    let load = load_master_names(Some(&path));
    assert_eq!(load.source, MasterSource::Embedded);
    assert_eq!(load.names, namecheck_ingest::default_master_names());
    let warning = load.warning.expect("fallback reason");
    assert!(warning.contains("has 3 names"), "{warning}");
}

#[test]
fn unreadable_master_file_falls_back_to_embedded_list() {
    let load = load_master_names(Some(Path::new("/definitely/not/here.txt")));
    assert_eq!(load.source, MasterSource::Embedded);
    assert!(load.warning.is_some());
}
