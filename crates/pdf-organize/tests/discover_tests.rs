mod common;

use common::*;
use pdf_organize::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn names(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_sort_key_numeric_prefixes() {
    assert_eq!(sort_key("1) File.pdf").number, 1);
    assert_eq!(sort_key("2. File.pdf").number, 2);
    assert_eq!(sort_key("10-File.pdf").number, 10);
    assert_eq!(sort_key("File.pdf").number, UNNUMBERED);
}

#[test]
fn test_natural_order_of_names() {
    let mut names = vec!["10-Appendix", "Zeta", "2. Scope", "alpha", "1) Intro"];
    sort_naturally(&mut names, |name| name.to_string());
    assert_eq!(names, vec!["1) Intro", "2. Scope", "10-Appendix", "alpha", "Zeta"]);
}

#[test]
fn test_classifier_kinds() {
    let classifier = Classifier::default();
    assert_eq!(classifier.classify(Path::new("a.PDF")), DocumentKind::Pdf);
    assert_eq!(classifier.classify(Path::new("scan.jpeg")), DocumentKind::Image);
    assert_eq!(classifier.classify(Path::new("memo.docx")), DocumentKind::WordDoc);
    assert_eq!(classifier.classify(Path::new("deck.pptx")), DocumentKind::SlideDeck);
    assert_eq!(classifier.classify(Path::new("notes.md")), DocumentKind::MarkdownText);
    assert_eq!(classifier.classify(Path::new("setup.exe")), DocumentKind::Unsupported);
    assert_eq!(classifier.classify(Path::new("README")), DocumentKind::Unsupported);
}

#[test]
fn test_classifier_system_files_ignore_case() {
    let classifier = Classifier::default();
    for name in [".DS_Store", "desktop.ini", "Thumbs.db", "THUMBS.DB", "Desktop.INI"] {
        assert_eq!(
            classifier.classify(Path::new(name)),
            DocumentKind::SystemFile,
            "{name}"
        );
    }
}

#[test]
fn test_classifier_disabled_formats_are_unsupported() {
    let classifier = Classifier::new(FormatSupport {
        word_docs: false,
        slide_decks: true,
        text: false,
    });
    assert_eq!(classifier.classify(Path::new("a.txt")), DocumentKind::Unsupported);
    assert_eq!(classifier.classify(Path::new("a.docx")), DocumentKind::Unsupported);
    assert_eq!(classifier.classify(Path::new("a.pptx")), DocumentKind::SlideDeck);
}

#[test]
fn test_discover_sorts_subdirectories() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("B")).unwrap();
    fs::create_dir(root.path().join("1_A")).unwrap();
    fs::create_dir(root.path().join(".hidden")).unwrap();
    fs::write(root.path().join("loose.pdf"), b"x").unwrap();

    let categories = discover_categories(root.path(), None).unwrap();
    assert_eq!(names(&categories), vec!["1_A", "B"]);
    assert_eq!(categories[0].path, root.path().join("1_A"));
}

#[test]
fn test_discover_flat_root_is_single_category() {
    let root = TempDir::new().unwrap();
    let source = root.path().join("Receipts");
    fs::create_dir(&source).unwrap();
    fs::write(source.join("a.pdf"), b"x").unwrap();

    let categories = discover_categories(&source, None).unwrap();
    assert_eq!(names(&categories), vec!["Receipts"]);
    assert_eq!(categories[0].path, source);
}

#[test]
fn test_discover_skips_excluded_output() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("Letters")).unwrap();
    fs::create_dir(root.path().join("out")).unwrap();

    let out = root.path().join("out");
    let categories = discover_categories(root.path(), Some(&out)).unwrap();
    assert_eq!(names(&categories), vec!["Letters"]);
}

#[test]
fn test_discover_missing_root_fails() {
    let root = TempDir::new().unwrap();
    let result = discover_categories(&root.path().join("missing"), None);
    assert!(matches!(result, Err(OrganizeError::Walk { .. })));
}

fn build_tree(root: &Path) {
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".DS_Store"), b"x").unwrap();
    fs::write(root.join(".git").join("config"), b"x").unwrap();
    fs::write(root.join("a.exe"), b"x").unwrap();
    write_test_pdf(&root.join("2 b.pdf"), 1);
    write_test_png(&root.join("1 a.png"));
    fs::write(root.join("sub").join("3 c.txt"), b"hello").unwrap();
}

#[test]
fn test_enumerate_flattens_and_sets_aside() {
    let root = TempDir::new().unwrap();
    build_tree(root.path());
    let category = Category {
        name: "Mixed".to_string(),
        path: root.path().to_path_buf(),
    };

    let mut set_aside = Vec::new();
    let mut log = RunLog::new();
    let files = enumerate_category(&category, &Classifier::default(), None, &mut set_aside, &mut log);

    let file_names: Vec<_> = files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(file_names, vec!["1 a.png", "2 b.pdf", "3 c.txt"]);
    assert_eq!(files[2].kind, DocumentKind::MarkdownText);

    let reasons: Vec<_> = set_aside.iter().map(|e| e.reason.to_string()).collect();
    assert_eq!(
        reasons,
        vec!["System file", "System file", "Unsupported format: .exe"]
    );
}

#[test]
fn test_enumerate_is_deterministic() {
    let root = TempDir::new().unwrap();
    build_tree(root.path());
    let category = Category {
        name: "Mixed".to_string(),
        path: root.path().to_path_buf(),
    };
    let classifier = Classifier::default();

    let mut first_aside = Vec::new();
    let mut second_aside = Vec::new();
    let mut log = RunLog::new();
    let first = enumerate_category(&category, &classifier, None, &mut first_aside, &mut log);
    let second = enumerate_category(&category, &classifier, None, &mut second_aside, &mut log);

    assert_eq!(first, second);
    assert_eq!(first_aside, second_aside);
}

#[test]
fn test_enumerate_skips_excluded_directory() {
    let root = TempDir::new().unwrap();
    let out = root.path().join("out");
    fs::create_dir(&out).unwrap();
    write_test_pdf(&out.join("old.pdf"), 1);
    write_test_pdf(&root.path().join("new.pdf"), 1);

    let category = Category {
        name: "Root".to_string(),
        path: root.path().to_path_buf(),
    };
    let mut set_aside = Vec::new();
    let mut log = RunLog::new();
    let files = enumerate_category(
        &category,
        &Classifier::default(),
        Some(&out),
        &mut set_aside,
        &mut log,
    );

    assert_eq!(files.len(), 1);
    assert!(files[0].path.ends_with("new.pdf"));
    assert!(set_aside.is_empty());
}
