use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::tempdir;
use vault_sweep::{find_naked_urls, scan_tree, MatchSet};

/// Create a note (and its parent directories) and fsync it.
fn write_note(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    let mut f = fs::File::create(path).expect("create note");
    f.write_all(content.as_bytes()).expect("write note");
    f.sync_all().expect("sync note");
}

#[test]
fn finds_naked_urls_recursively() {
    let td = tempdir().unwrap();
    let root = td.path();
    write_note(&root.join("a.md"), "https://example.com/a\n");
    write_note(&root.join("deep/nested/b.md"), "\n  http://example.org/b  \n\n");
    write_note(&root.join("c.md"), "# Heading\nhttps://example.com/c\n");
    write_note(&root.join("blank.md"), "   \n\n");

    let found = find_naked_urls(root, "md");
    let expected: MatchSet = [root.join("a.md"), root.join("deep/nested/b.md")]
        .into_iter()
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn only_files_with_the_note_extension_are_read() {
    let td = tempdir().unwrap();
    let root = td.path();
    write_note(&root.join("link.txt"), "https://example.com");
    write_note(&root.join("link.MD"), "https://example.com");
    write_note(&root.join("link.md"), "https://example.com");
    // A directory named like a note is not a candidate.
    fs::create_dir_all(root.join("folder.md")).unwrap();

    let found = find_naked_urls(root, "md");
    assert_eq!(found.len(), 1);
    assert!(found.contains(&root.join("link.md")));

    let txt = find_naked_urls(root, "txt");
    assert_eq!(txt.into_iter().collect::<Vec<_>>(), vec![root.join("link.txt")]);
}

#[test]
fn rescanning_unchanged_tree_gives_same_set() {
    let td = tempdir().unwrap();
    let root = td.path();
    for i in 0..10 {
        let body = if i % 3 == 0 { "notes\n".to_string() } else { format!("https://x.test/{i}") };
        write_note(&root.join(format!("d{}/n{i}.md", i % 4)), &body);
    }
    let first = find_naked_urls(root, "md");
    let second = find_naked_urls(root, "md");
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn invalid_utf8_note_is_skipped_not_fatal() {
    let td = tempdir().unwrap();
    let root = td.path();
    fs::write(root.join("binary.md"), [0xff, 0xfe, 0x00, 0x68]).unwrap();
    write_note(&root.join("ok.md"), "https://example.com");

    let found = find_naked_urls(root, "md");
    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![root.join("ok.md")]);
}

#[test]
fn custom_predicate_sees_full_content() {
    let td = tempdir().unwrap();
    let root = td.path();
    write_note(&root.join("long.md"), &"word ".repeat(10_000));
    write_note(&root.join("short.md"), "word");

    let found = scan_tree(root, "md", |c| c.len() > 1000);
    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![root.join("long.md")]);
}

#[cfg(unix)]
#[test]
fn unreadable_note_and_directory_are_skipped() {
    use std::os::unix::fs::PermissionsExt;

    // Root ignores permission bits, so the files would still be readable.
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let td = tempdir().unwrap();
    let root = td.path();
    let locked_file = root.join("locked.md");
    write_note(&locked_file, "https://example.com/locked");
    fs::set_permissions(&locked_file, fs::Permissions::from_mode(0o000)).unwrap();

    let locked_dir = root.join("private");
    write_note(&locked_dir.join("inner.md"), "https://example.com/inner");
    fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o000)).unwrap();

    write_note(&root.join("open.md"), "https://example.com/open");

    let found = find_naked_urls(root, "md");

    fs::set_permissions(&locked_file, fs::Permissions::from_mode(0o644)).unwrap();
    fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![root.join("open.md")]);
}

#[cfg(unix)]
#[test]
fn symlinked_note_is_read_through_but_linked_dirs_are_not_walked() {
    use std::os::unix::fs::symlink;

    let td = tempdir().unwrap();
    let store = td.path().join("store");
    let vault = td.path().join("vault");
    write_note(&store.join("real.md"), "https://example.com");
    write_note(&store.join("nested/inner.md"), "https://example.com/inner");
    fs::create_dir_all(&vault).unwrap();
    symlink(store.join("real.md"), vault.join("linked.md")).unwrap();
    symlink(store.join("nested"), vault.join("linked_dir")).unwrap();
    symlink(store.join("missing.md"), vault.join("dangling.md")).unwrap();

    let found = find_naked_urls(&vault, "md");
    assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![vault.join("linked.md")]);
}
