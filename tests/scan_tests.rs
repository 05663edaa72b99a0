use std::fs;

use photo_carousel::Carousel;
use photo_carousel::error::Error;
use photo_carousel::scan::{ScanOptions, scan_pages};
use tempfile::tempdir;

#[test]
fn scan_sorts_and_filters() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    fs::write(root.join("b.JPG"), b"x").unwrap();
    fs::write(root.join("a.png"), b"x").unwrap();
    fs::write(root.join("notes.txt"), b"x").unwrap();
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("c.webp"), b"x").unwrap();
    fs::create_dir_all(root.join(".cache")).unwrap();
    fs::write(root.join(".cache").join("thumb.jpg"), b"x").unwrap();

    let pages = scan_pages(root, &ScanOptions::default()).unwrap();
    assert_eq!(
        pages,
        vec![
            root.join("a.png"),
            root.join("b.JPG"),
            root.join("sub").join("c.webp"),
        ]
    );
}

#[test]
fn non_recursive_scan_stays_at_root() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("top.jpg"), b"x").unwrap();
    fs::create_dir_all(root.join("deep")).unwrap();
    fs::write(root.join("deep").join("low.jpg"), b"x").unwrap();

    let opts = ScanOptions {
        recursive: false,
        ..ScanOptions::default()
    };
    let pages = scan_pages(root, &opts).unwrap();
    assert_eq!(pages, vec![root.join("top.jpg")]);
}

#[test]
fn custom_extensions_are_honoured() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("a.jpg"), b"x").unwrap();
    fs::write(root.join("b.heic"), b"x").unwrap();

    let opts = ScanOptions {
        exts: Some(vec!["heic".to_string()]),
        ..ScanOptions::default()
    };
    assert_eq!(scan_pages(root, &opts).unwrap(), vec![root.join("b.heic")]);
}

#[test]
fn missing_root_is_bad_dir() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope");
    let err = scan_pages(&missing, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, Error::BadDir(_)));
}

#[test]
fn empty_library_is_an_error() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("readme.md"), b"x").unwrap();
    let err = scan_pages(tmp.path(), &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyCollection));
}

#[test]
fn scanned_pages_feed_a_carousel() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    for name in ["1.jpg", "2.jpg", "3.jpg"] {
        fs::write(root.join(name), b"x").unwrap();
    }

    let pages = scan_pages(root, &ScanOptions::default()).unwrap();
    let mut carousel = Carousel::new(pages).unwrap();
    carousel.move_to_previous_page();
    assert_eq!(carousel.current_index(), Some(2));
    assert_eq!(carousel.cached_item_at(1), &root.join("3.jpg"));
    assert_eq!(carousel.cached_item_at(2), &root.join("1.jpg"));
}
