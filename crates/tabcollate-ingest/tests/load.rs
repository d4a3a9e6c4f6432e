//! Tests for folder loading and same-header merging.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tabcollate_ingest::{
    IngestError, LoadOptions, Result, TableSource, load, load_from, write_collection,
};
use tabcollate_model::{Cell, Table};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

fn id_val_file(ids: &[u32]) -> String {
    let mut contents = String::from("id,val\n");
    for id in ids {
        contents.push_str(&format!("{id},row{id}\n"));
    }
    contents
}

#[test]
fn merges_files_with_identical_headers() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.csv", &id_val_file(&[1, 2]));
    write(dir.path(), "b.csv", &id_val_file(&[3, 4, 5]));
    write(dir.path(), "c.csv", &id_val_file(&[6]));

    let collection = load(dir.path(), &LoadOptions::default()).expect("load folder");

    assert_eq!(collection.identifiers(), vec!["a.csv"]);
    assert_eq!(collection.row_counts(), vec![6]);
    let (rows, header) = collection.get(0).expect("merged entry");
    assert_eq!(header, &vec![Cell::text("id"), Cell::text("val")]);
    let ids: Vec<f64> = rows.iter().filter_map(|row| row[0].as_number()).collect();
    assert_eq!(ids, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(collection.report().summary(), "1 Sheets 6 Total Rows");
}

#[test]
fn keeps_files_with_different_headers_apart() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.csv", &id_val_file(&[1, 2]));
    write(dir.path(), "b.csv", "id,value\n7,x\n8,y\n");
    write(dir.path(), "c.csv", &id_val_file(&[3]));

    let collection = load(dir.path(), &LoadOptions::default()).expect("load folder");

    assert_eq!(collection.identifiers(), vec!["b.csv", "a.csv"]);
    assert_eq!(collection.row_counts(), vec![2, 3]);
    let headers = collection.headers();
    assert_eq!(headers[0], &vec![Cell::text("id"), Cell::text("value")]);
    assert_eq!(headers[1], &vec![Cell::text("id"), Cell::text("val")]);
    let unmerged: Vec<&str> = collection.report().unmerged_files().collect();
    assert_eq!(unmerged, vec!["b.csv"]);
}

#[test]
fn empty_directory_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    let err = load(dir.path(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyDirectory { .. }));
}

#[test]
fn missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let err = load(&dir.path().join("absent"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn unreadable_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.csv", &id_val_file(&[1, 2]));
    fs::write(dir.path().join("b.bin"), b"id,val\n\xff\xfe\xfd,1\n").unwrap();
    write(dir.path(), "c.csv", "name,score\nann,3\nbob,4\n");

    let collection = load(dir.path(), &LoadOptions::default()).expect("load folder");

    let mut names = collection.identifiers();
    names.sort_unstable();
    assert_eq!(names, vec!["a.csv", "c.csv"]);
    let skipped = &collection.report().skipped;
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].file, "b.bin");
}

#[test]
fn folder_of_unusable_files_fails() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "blank.csv", ",,\n,,\n");
    fs::write(dir.path().join("binary.dat"), b"\xff\xfe").unwrap();
    let err = load(dir.path(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::NoTables { .. }));
}

#[test]
fn invalid_options_fail_before_reading() {
    let dir = TempDir::new().unwrap();
    let options = LoadOptions::new().with_clean(
        tabcollate_model::CleanOptions::new().with_row_sparseness(3.0),
    );
    let err = load(dir.path(), &options).unwrap_err();
    assert!(matches!(err, IngestError::InvalidOptions(_)));
}

#[test]
fn exports_collection_as_csv() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in");
    fs::create_dir(&input).unwrap();
    write(&input, "a.csv", "id,share\n1,\"1,200\"\n2,50%\n");

    let collection = load(&input, &LoadOptions::default()).expect("load folder");
    let out = dir.path().join("out");
    let written = write_collection(&collection, &out).expect("export");

    assert_eq!(written, vec![out.join("a.csv")]);
    let contents = fs::read_to_string(out.join("a.csv")).unwrap();
    assert_eq!(contents, "id,share\n1,1200\n2,0.5\n");
}

struct MemorySource {
    files: BTreeMap<PathBuf, Option<Table>>,
}

impl TableSource for MemorySource {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn read_table(&self, path: &Path) -> Result<Table> {
        match self.files.get(path) {
            Some(Some(table)) => Ok(table.clone()),
            _ => Err(IngestError::UnreadableFile {
                path: path.to_path_buf(),
                message: "not tabular".to_string(),
            }),
        }
    }
}

#[test]
fn loads_from_injected_source() {
    let mut files = BTreeMap::new();
    files.insert(
        PathBuf::from("mem/2_q2.csv"),
        Some(Table::from_text(vec![
            vec!["Sales", "", ""],
            vec!["region", "units", "share"],
            vec!["north", "10", "40%"],
        ])),
    );
    files.insert(
        PathBuf::from("mem/1_q1.csv"),
        Some(Table::from_text(vec![
            vec!["region", "units", "share"],
            vec!["south", "1,000", "60%"],
        ])),
    );
    files.insert(PathBuf::from("mem/3_broken"), None);
    let source = MemorySource { files };

    let collection =
        load_from(&source, Path::new("mem"), &LoadOptions::default()).expect("load source");

    assert_eq!(collection.identifiers(), vec!["1_q1.csv"]);
    let (rows, header) = collection.get(0).unwrap();
    assert_eq!(header[0], Cell::text("region"));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1], Cell::Number(1000.0));
    assert_eq!(rows[1][2], Cell::Number(0.4));
    assert_eq!(collection.report().skipped[0].file, "3_broken");
}
