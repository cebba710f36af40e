//! End-to-end scenarios exercising the public surface of `scopedfile`.

use scopedfile::{FileError, FileHandle, ScopedFile, with_file};
use scopedfile_test::fixture::{scratch_dir, scratch_path};

#[test]
fn write_then_read_back_in_one_scope() {
    let dir = scratch_dir();
    let path = scratch_path(&dir, "out.txt");

    let mut file = ScopedFile::open(&path, "w+").expect("failed to open out.txt");
    file.write("Hello, World!\n").expect("failed to write");
    let text = file.read(64).expect("failed to read");
    assert_eq!(text, "Hello, World!\n");
    file.release();
    assert!(!file.is_open());
}

#[test]
fn read_only_open_of_missing_path_fails_with_not_found() {
    let dir = scratch_dir();
    let path = scratch_path(&dir, "missing.txt");

    let err = ScopedFile::open(&path, "r").unwrap_err();
    assert!(matches!(err, FileError::NotFound(p) if p == path));
    assert!(!path.exists());
}

#[test]
fn creating_modes_create_the_file_before_first_use() {
    let dir = scratch_dir();
    for (name, mode) in [("w.txt", "w"), ("a.txt", "a"), ("rw.txt", "w+")] {
        let path = scratch_path(&dir, name);
        let file = ScopedFile::open(&path, mode).expect("open with a creating mode");
        assert!(path.exists(), "mode {mode} must create the file");
        drop(file);
    }
}

#[test]
fn write_on_a_read_only_handle_fails_without_closing_it() {
    let dir = scratch_dir();
    let path = scratch_path(&dir, "readonly.txt");
    std::fs::write(&path, "content").expect("failed to seed the file");

    let mut file = ScopedFile::open(&path, "r").expect("failed to open");
    let err = file.write("nope").unwrap_err();
    assert!(matches!(err, FileError::NotWritable { .. }));
    assert!(file.is_open());
    assert_eq!(file.read(7).expect("failed to read"), "content");
}

#[test]
fn invalid_mode_fails_at_construction_without_filesystem_access() {
    let dir = scratch_dir();
    let path = scratch_path(&dir, "never.txt");

    let err = FileHandle::new(&path, "x").unwrap_err();
    match err {
        FileError::InvalidMode(value) => assert_eq!(value, "x"),
        other => panic!("expected InvalidMode, got {other:?}"),
    }
    assert!(!path.exists(), "an invalid mode must not touch the filesystem");
}

#[test]
fn release_is_idempotent_across_explicit_and_scope_exit() {
    let dir = scratch_dir();
    let path = scratch_path(&dir, "idempotent.txt");

    let mut file = ScopedFile::open(&path, "w").expect("failed to open");
    file.write("once\n").expect("failed to write");
    file.release();
    file.release();
    drop(file);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "once\n");
}

#[test]
fn with_file_releases_on_the_error_path() {
    let dir = scratch_dir();
    let path = scratch_path(&dir, "closure.txt");

    with_file(&path, "w", |file| file.write("first\n")).expect("write scope failed");
    let err = with_file(&path, "r", |file| file.write("second\n")).unwrap_err();
    assert!(matches!(err, FileError::NotWritable { .. }));

    // The failed scope released its descriptor and wrote nothing.
    let text = with_file(&path, "r", |file| file.read_default()).expect("read scope failed");
    assert_eq!(text, "first\n");
}

#[test]
fn append_scopes_accumulate_across_instances() {
    let dir = scratch_dir();
    let path = scratch_path(&dir, "log.txt");

    for line in ["one\n", "two\n", "three\n"] {
        with_file(&path, "a", |file| file.write(line)).expect("append scope failed");
    }

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");
}
