use depthwalk::output::{OutputFormat, format_paths, write_paths_to_file};
use depthwalk::select::{
    SelectAny, SelectGlob, SelectNames, SelectRegex, Selector, select_dots, select_vcs,
    select_vcs_dirs, select_vcs_files,
};
use depthwalk::{EntryPredicate, WalkBuilder, WalkError, WalkOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
/// Names among `names` that `selector` accepts, in sorted order.
fn selected(names: &[&str], selector: impl EntryPredicate + 'static) -> Vec<String> {
    let dir = tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), "").unwrap();
    }
    WalkBuilder::new(dir.path())
        .sort(true)
        .return_relative(true)
        .filter_files(selector)
        .build()
        .unwrap()
        .map(|p| p.unwrap().to_string_lossy().into_owned())
        .collect()
}
#[test]
fn test_select_names() {
    let names = [
        "foo.txt", "bar.png", ".gh", "barfoo.txt", "foo.png", ".ghignore", "foo", "FOO.TXT",
    ];
    let s = SelectNames::new(["foo.txt", "bar.png", ".gh"]);
    assert_eq!(selected(&names, s), vec![".gh", "bar.png", "foo.txt"]);
}
#[test]
fn test_select_names_case_insensitive() {
    let names = ["FOO.TXT", ".GH", "BaR.pNG", "foo.png", ".ghignore"];
    assert!(SelectNames::new(["FOO.txt"]).is_case_sensitive());
    let s = SelectNames::new(["FOO.txt", "bar.png", ".gh"]).case_insensitive();
    assert!(!s.is_case_sensitive());
    assert_eq!(selected(&names, s), vec![".GH", "BaR.pNG", "FOO.TXT"]);
}
#[test]
fn test_select_names_eq() {
    let s = SelectNames::new(["foo.txt", "bar.png", ".gh"]);
    assert_eq!(s, SelectNames::new([".gh", "foo.txt", "bar.png"]));
    assert_ne!(s, SelectNames::new([".gh", "foo.txt", "bar.png"]).case_insensitive());
    assert_ne!(s, SelectNames::new([".gh", "foo.txt", "bar.png", "quux.pdf"]));
    assert_ne!(s, SelectNames::new([".gh", "foo.txt"]));
    assert_eq!(
        SelectNames::new(["FOO", "BaR"]).case_insensitive(),
        SelectNames::new(["foo", "bar"]).case_insensitive()
    );
    let lowered: Vec<_> = SelectNames::new(["FOO.txt", "bar.PNG"])
        .case_insensitive()
        .names()
        .map(str::to_string)
        .collect();
    assert_eq!(lowered, vec!["bar.png", "foo.txt"]);
}
#[test]
fn test_select_glob() {
    let names = [
        "foo.txt", ".txt", "foo.txtual", "foo", "txt", "foo.bar.txt", "foo.txt.bar",
    ];
    let s = SelectGlob::new("*.txt").unwrap();
    assert_eq!(s.pattern(), "*.txt");
    assert_eq!(selected(&names, s), vec![".txt", "foo.bar.txt", "foo.txt"]);
}
#[test]
fn test_select_glob_braces_are_literal() {
    let names = ["{a,b}", "a", "b", "{x}"];
    let s = SelectGlob::new("{a,b}").unwrap();
    assert_eq!(selected(&names, s), vec!["{a,b}"]);
    let s = SelectGlob::new("{*}").unwrap();
    assert_eq!(selected(&names, s), vec!["{a,b}", "{x}"]);
    let s = SelectGlob::new("[{]*").unwrap();
    assert_eq!(selected(&names, s), vec!["{a,b}", "{x}"]);
    let s = SelectGlob::new("[!{]").unwrap();
    assert_eq!(selected(&names, s), vec!["a", "b"]);
}
#[cfg(unix)]
#[test]
fn test_select_glob_backslash_is_literal() {
    let names = ["x\\y", "xy", "x*y"];
    let s = SelectGlob::new("x\\y").unwrap();
    assert_eq!(selected(&names, s), vec!["x\\y"]);
    let s = SelectGlob::new("x\\*").unwrap();
    assert_eq!(selected(&names, s), vec!["x\\y"]);
}
#[test]
fn test_select_regex_is_unanchored() {
    let names = [
        "abab", "abab.txt", "foo.abab", "ab", "foo.ab", "baba", "abababab", "xababababy",
    ];
    let s = SelectRegex::new("(abab)+").unwrap();
    assert_eq!(s.as_str(), "(abab)+");
    assert_eq!(
        selected(&names, s),
        vec!["abab", "abab.txt", "abababab", "foo.abab", "xababababy"]
    );
}
#[test]
fn test_invalid_patterns() {
    let err = SelectRegex::new("(unclosed").unwrap_err();
    assert!(matches!(err, WalkError::Pattern { ref pattern, .. } if pattern == "(unclosed"));
    let err = SelectGlob::new("[unclosed").unwrap_err();
    assert!(matches!(err, WalkError::Pattern { .. }));
}
#[test]
fn test_select_any_flattens() {
    let a = SelectNames::new(["a"]) | SelectNames::new(["b"]);
    assert_eq!(a.selectors().len(), 2);
    let b = SelectGlob::new("*.c").unwrap() | SelectGlob::new("*.h").unwrap();
    let both = a | b;
    assert_eq!(both.selectors().len(), 4);
    let names = ["a", "b", "c", "x.c", "x.h", "x.o"];
    assert_eq!(selected(&names, both), vec!["a", "b", "x.c", "x.h"]);
    assert_eq!(SelectAny::default().or(select_dots()).selectors().len(), 1);
}
#[test]
fn test_select_dots() {
    let names = [".hidden", "visible", "dot.in.middle", ".x"];
    assert_eq!(selected(&names, select_dots()), vec![".hidden", ".x"]);
}
#[test]
fn test_select_vcs_files() {
    let names = [".gitignore", ".hgtags", "foo,v", ",v", "README", ".gitkeep"];
    assert_eq!(
        selected(&names, select_vcs_files()),
        vec![".gitignore", ".hgtags", "foo,v"]
    );
}
#[test]
fn test_exclude_vcs_from_walk() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
    fs::create_dir_all(dir.path().join("CVS")).unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join(".git/HEAD"), "ref").unwrap();
    fs::write(dir.path().join(".gitignore"), "target").unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    let paths: Vec<PathBuf> = WalkBuilder::new(dir.path())
        .sort(true)
        .return_relative(true)
        .exclude(select_vcs())
        .build()
        .unwrap()
        .map(|p| p.unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![PathBuf::from("src"), PathBuf::from("src/main.rs")]
    );
    let dirs_only: Vec<PathBuf> = WalkBuilder::new(dir.path())
        .sort(true)
        .return_relative(true)
        .exclude_dirs(select_vcs_dirs())
        .build()
        .unwrap()
        .map(|p| p.unwrap())
        .collect();
    assert_eq!(dirs_only[0], PathBuf::from(".gitignore"));
    assert_eq!(dirs_only.len(), 3);
}
#[test]
fn test_selector_matches_directly() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "").unwrap();
    let glob = SelectGlob::new("*.toml").unwrap();
    let names = SelectNames::new(["cargo.toml"]);
    let mut seen = Vec::new();
    let walk = WalkBuilder::new(dir.path())
        .filter_files(move |e: &depthwalk::DirEntry| {
            assert!(glob.matches(e));
            assert!(!names.matches(e));
            true
        })
        .build()
        .unwrap();
    for p in walk {
        seen.push(p.unwrap());
    }
    assert_eq!(seen, vec![dir.path().join("Cargo.toml")]);
}
#[test]
fn test_options_defaults() {
    let options = WalkOptions::default();
    assert_eq!(options.root, PathBuf::from("."));
    assert!(options.topdown);
    assert!(options.dirs);
    assert!(!options.include_root);
    assert!(!options.sort);
    assert!(!options.return_relative);
    let builder = WalkBuilder::current_dir();
    assert_eq!(builder.options().root, PathBuf::new());
}
#[test]
fn test_output_formats() {
    let paths = vec![PathBuf::from("a"), PathBuf::from("a/b.txt")];
    assert_eq!(
        format_paths(&paths, OutputFormat::Lines, false).unwrap(),
        "a\na/b.txt\n"
    );
    assert_eq!(
        format_paths(&paths, OutputFormat::Null, false).unwrap(),
        "a\0a/b.txt\0"
    );
    assert_eq!(
        format_paths(&paths, OutputFormat::Json, false).unwrap(),
        r#"["a","a/b.txt"]"#
    );
    assert_eq!(OutputFormat::Json.extension(), "json");
}
#[test]
fn test_write_paths_to_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out.json");
    let paths = vec![PathBuf::from("x")];
    write_paths_to_file(&paths, OutputFormat::Json, &target, true).unwrap();
    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("\"x\""));
    let err = write_paths_to_file(&paths, OutputFormat::Lines, dir.path().join("no/such"), false)
        .unwrap_err();
    assert!(err.path().is_some());
}
