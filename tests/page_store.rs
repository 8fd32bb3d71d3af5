use flatwiki::errors::WikiError;
use flatwiki::services::PageStore;
use flatwiki::types::Page;
use tempfile::TempDir;

#[test]
fn save_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = PageStore::new(dir.path().to_path_buf());

    let page = Page::new("TestPage", b"hello world".to_vec());
    store.save(&page).unwrap();

    let loaded = store.load("TestPage").unwrap();
    assert_eq!(loaded.title, "TestPage");
    assert_eq!(loaded.body, b"hello world");
}

#[test]
fn save_writes_expected_file() {
    let dir = TempDir::new().unwrap();
    let store = PageStore::new(dir.path().to_path_buf());

    store.save(&Page::new("Foo", b"bar".to_vec())).unwrap();

    let on_disk = std::fs::read(dir.path().join("Foo.txt")).unwrap();
    assert_eq!(on_disk, b"bar");
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = PageStore::new(dir.path().to_path_buf());
    store.save(&Page::new("Secret", b"shh".to_vec())).unwrap();

    let mode = std::fs::metadata(dir.path().join("Secret.txt"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn load_missing_page_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = PageStore::new(dir.path().to_path_buf());

    match store.load("Missing") {
        Err(WikiError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn unsafe_titles_are_rejected() {
    let dir = TempDir::new().unwrap();
    let store = PageStore::new(dir.path().to_path_buf());

    for title in ["../escape", "a/b", "", "two words", "dot.txt"] {
        assert!(
            matches!(store.load(title), Err(WikiError::InvalidTitle)),
            "load accepted title {:?}",
            title
        );
        assert!(
            matches!(
                store.save(&Page::new(title, b"x".to_vec())),
                Err(WikiError::InvalidTitle)
            ),
            "save accepted title {:?}",
            title
        );
    }

    // Nothing may have been written outside or inside the data directory
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn save_overwrites_previous_body() {
    let dir = TempDir::new().unwrap();
    let store = PageStore::new(dir.path().to_path_buf());

    store.save(&Page::new("Draft", b"first".to_vec())).unwrap();
    store.save(&Page::new("Draft", b"second".to_vec())).unwrap();

    assert_eq!(store.load("Draft").unwrap().body, b"second");
}

#[test]
fn concurrent_saves_leave_one_complete_body() {
    let dir = TempDir::new().unwrap();
    let store = PageStore::new(dir.path().to_path_buf());

    let bodies: [&[u8]; 2] = [&[b'a'; 4096], &[b'b'; 4096]];
    let handles: Vec<_> = bodies
        .iter()
        .map(|body| {
            let store = store.clone();
            let body = body.to_vec();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    store.save(&Page::new("Contended", body.clone())).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Last writer wins; the file must be exactly one of the two bodies
    let final_body = store.load("Contended").unwrap().body;
    assert!(
        bodies.iter().any(|body| final_body == *body),
        "file was corrupted by interleaved writes"
    );
}
