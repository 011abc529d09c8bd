use repocat::output::{self, OutputFormat};
use repocat::{FileContent, RepocatBuilder, RepocatError, build_document, repocat};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn test() {}").unwrap();
    let result = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert!(result.tree.contains("main.rs"));
    assert!(result.tree.contains("src/"));
    assert_eq!(result.files.len(), 2);
    assert!(result.files.iter().all(|f| f.content.is_text()));
}

#[test]
fn integration_exact_tree_rendering() {
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    fs::write(repo.join("a.txt"), "alpha").unwrap();
    fs::create_dir(repo.join("sub")).unwrap();
    fs::write(repo.join("sub/c.txt"), "gamma").unwrap();
    fs::write(repo.join("z.txt"), "omega").unwrap();
    let result = repocat(RepocatBuilder::new(&repo).build()).unwrap();
    assert_eq!(
        result.tree,
        "repo/\n\
         ├── a.txt\n\
         ├── sub/\n\
         │   └── c.txt\n\
         └── z.txt"
    );
}

#[test]
fn integration_ignored_extension_scenario() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hi").unwrap();
    fs::write(dir.path().join("b.log"), "log line").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "c").unwrap();
    let options = RepocatBuilder::new(dir.path())
        .ignore_types(vec![".log".into()])
        .build();
    let result = repocat(options).unwrap();
    assert!(result.tree.contains("a.txt"));
    assert!(result.tree.contains("sub/"));
    assert!(result.tree.contains("c.txt"));
    assert!(!result.tree.contains("b.log"));
    let rel_paths: Vec<_> = result.files.iter().map(|f| f.rel_path.as_path()).collect();
    assert_eq!(rel_paths, vec![Path::new("a.txt"), Path::new("sub/c.txt")]);
    assert_eq!(result.files[0].content, FileContent::Text("hi".into()));
}

#[test]
fn integration_include_dir_scenario() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/x.py"), "print('x')").unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/y.md"), "# y").unwrap();
    let options = RepocatBuilder::new(dir.path()).include_dir("src").build();
    let result = repocat(options).unwrap();
    assert!(result.tree.contains("src/"));
    assert!(result.tree.contains("x.py"));
    assert!(!result.tree.contains("docs"));
    assert!(!result.tree.contains("y.md"));
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].rel_path, Path::new("src/x.py"));
}

#[test]
fn integration_empty_repository() {
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    let result = repocat(RepocatBuilder::new(&repo).build()).unwrap();
    assert_eq!(result.tree, "repo/");
    assert!(result.files.is_empty());
}

#[test]
fn integration_empty_subdirectory_renders_childless() {
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    fs::write(repo.join("a.txt"), "a").unwrap();
    fs::create_dir(repo.join("empty")).unwrap();
    let result = repocat(RepocatBuilder::new(&repo).build()).unwrap();
    assert_eq!(result.tree, "repo/\n├── a.txt\n└── empty/");
    assert_eq!(result.files.len(), 1);
}

#[test]
fn integration_deterministic_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "c").unwrap();
    let first = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    let second = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(first.tree, second.tree);
    let first_text = output::format_document(&build_document(&first), OutputFormat::Text);
    let second_text = output::format_document(&build_document(&second), OutputFormat::Text);
    assert_eq!(first_text, second_text);
}

#[test]
fn integration_binary_placeholder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("blob.txt"), [0u8, 1, 2, 3]).unwrap();
    let result = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.files[0].content, FileContent::Binary);
    let text = output::format_document(&build_document(&result), OutputFormat::Text);
    assert!(text.contains("[Binary file, content omitted]"));
    assert!(!text.contains('\u{0}'));
}

#[test]
fn integration_oversize_placeholder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("big.txt"), "A".repeat(5000)).unwrap();
    let options = RepocatBuilder::new(dir.path())
        .max_file_size(Some(100))
        .build();
    let result = repocat(options).unwrap();
    assert_eq!(result.files[0].content, FileContent::Oversize);
}

#[test]
fn integration_empty_file_is_text() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    let result = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.files[0].content, FileContent::Text(String::new()));
}

#[test]
fn integration_hidden_entries_excluded() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.txt"), "secret").unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/config"), "[core]").unwrap();
    fs::write(dir.path().join("visible.txt"), "ok").unwrap();
    let result = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert!(!result.tree.contains(".hidden.txt"));
    assert!(!result.tree.contains(".git"));
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].rel_path, Path::new("visible.txt"));
}

#[test]
fn integration_output_file_excluded_from_own_repo() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("output.txt"), "previous run").unwrap();
    let options = RepocatBuilder::new(dir.path())
        .output_file(dir.path().join("output.txt"))
        .build();
    let result = repocat(options).unwrap();
    assert!(!result.tree.contains("output.txt"));
    assert_eq!(result.files.len(), 1);
}

#[test]
fn integration_gitignore_layering() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
    fs::write(dir.path().join("app.log"), "log").unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();

    let with = repocat(RepocatBuilder::new(dir.path()).use_gitignore(true).build()).unwrap();
    assert!(!with.tree.contains("app.log"));
    assert!(with.tree.contains("main.rs"));

    let without = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert!(without.tree.contains("app.log"));
}

#[test]
fn integration_nested_gitignore_applies_below_its_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/.gitignore"), "*.tmp\n").unwrap();
    fs::write(dir.path().join("sub/scratch.tmp"), "x").unwrap();
    fs::write(dir.path().join("keep.tmp"), "y").unwrap();
    let result = repocat(RepocatBuilder::new(dir.path()).use_gitignore(true).build()).unwrap();
    assert!(!result.tree.contains("scratch.tmp"));
    assert!(result.tree.contains("keep.tmp"));
}

#[test]
fn integration_settings_preset() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Cargo.lock"), "[[package]]").unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();

    let ignoring = repocat(
        RepocatBuilder::new(dir.path())
            .ignore_settings(true)
            .build(),
    )
    .unwrap();
    assert!(!ignoring.tree.contains("Cargo.lock"));
    assert!(ignoring.tree.contains("main.rs"));

    let keeping = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert!(keeping.tree.contains("Cargo.lock"));
}

#[test]
fn integration_invalid_root() {
    let dir = tempdir().unwrap();
    let err = repocat(RepocatBuilder::new(dir.path().join("no_such_dir")).build()).unwrap_err();
    assert!(matches!(err, RepocatError::InvalidRoot(_)));
}

#[test]
fn integration_document_written_as_text() {
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    fs::write(repo.join("a.txt"), "hi").unwrap();
    let out = dir.path().join("snapshot.txt");
    let result = repocat(
        RepocatBuilder::new(&repo)
            .output_file(out.clone())
            .build(),
    )
    .unwrap();
    let document = build_document(&result);
    output::write_document(&document, OutputFormat::from_path(&out), &out).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Repository Documentation: repo\n"));
    assert!(text.contains("Directory/File Tree Begins -->"));
    assert!(text.contains("[File Begins] a.txt"));
    assert!(text.contains("[File Ends] a.txt"));
    assert!(text.contains("<-- File Content Ends"));
}

#[test]
fn integration_document_written_as_markdown() {
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    fs::write(repo.join("main.rs"), "fn main() {}").unwrap();
    let out = dir.path().join("snapshot.md");
    let result = repocat(
        RepocatBuilder::new(&repo)
            .output_file(out.clone())
            .build(),
    )
    .unwrap();
    let document = build_document(&result);
    output::write_document(&document, OutputFormat::from_path(&out), &out).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("# Repository Documentation: repo\n"));
    assert!(text.contains("## Directory/File Tree Begins -->"));
    assert!(text.contains("### [File Begins] main.rs"));
    assert!(text.contains("```rust\nfn main() {}\n```"));
}

#[cfg(unix)]
#[test]
fn integration_symlink_cycle_terminates() {
    use std::os::unix::fs::symlink;
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    fs::create_dir(repo.join("sub")).unwrap();
    fs::write(repo.join("sub/a.txt"), "a").unwrap();
    symlink(&repo, repo.join("sub/loop")).unwrap();
    let result = repocat(RepocatBuilder::new(&repo).build()).unwrap();
    assert!(result.tree.contains("sub/"));
    assert!(result.tree.contains("a.txt"));
    assert!(!result.tree.contains("loop"));
}

#[cfg(unix)]
#[test]
fn integration_broken_symlink_gets_placeholder() {
    use std::os::unix::fs::symlink;
    let dir = tempdir().unwrap();
    symlink(dir.path().join("missing.txt"), dir.path().join("broken.txt")).unwrap();
    let result = repocat(RepocatBuilder::new(dir.path()).build()).unwrap();
    assert!(result.tree.contains("broken.txt"));
    assert_eq!(result.files.len(), 1);
    assert!(matches!(
        result.files[0].content,
        FileContent::Unreadable(_)
    ));
}

#[cfg(unix)]
#[test]
fn integration_unreadable_directory_stays_childless() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    fs::write(repo.join("a.txt"), "a").unwrap();
    let locked = repo.join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("secret.txt"), "s").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users can read the directory regardless of its mode.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }
    let result = repocat(RepocatBuilder::new(&repo).build());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let result = result.unwrap();
    assert_eq!(result.tree, "repo/\n├── a.txt\n└── locked/");
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].rel_path, Path::new("a.txt"));
}

#[cfg(unix)]
#[test]
fn integration_unreadable_root_is_fatal() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    fs::write(repo.join("a.txt"), "a").unwrap();
    fs::set_permissions(&repo, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&repo).is_ok() {
        fs::set_permissions(&repo, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }
    let err = repocat(RepocatBuilder::new(&repo).build());
    fs::set_permissions(&repo, fs::Permissions::from_mode(0o755)).unwrap();
    assert!(matches!(err.unwrap_err(), RepocatError::Io { .. }));
}
