use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run_refile(root: &Path, args: &[&std::ffi::OsStr]) -> std::process::Output {
    let me = assert_cmd::cargo::cargo_bin!("refile");
    Command::new(me)
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .expect("spawn binary")
}

#[test]
fn scatter_then_gather_via_binary() {
    let td = tempdir().unwrap();
    let source = td.path().join("source");
    fs::create_dir_all(source.join("Vacation")).unwrap();
    fs::write(source.join("Vacation/beach.png"), b"sand").unwrap();
    let target = td.path().join("flat");

    let out = run_refile(
        td.path(),
        &[
            "scatter".as_ref(),
            "--source".as_ref(),
            source.as_os_str(),
            "--target".as_ref(),
            target.as_os_str(),
        ],
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(out.status.success(), "scatter should succeed: {stdout}");
    assert!(stdout.contains("1 file(s) moved"), "got: {stdout}");
    assert!(target.join("Vacation_beach.png").exists());

    let out = run_refile(
        td.path(),
        &[
            "gather".as_ref(),
            "--flat".as_ref(),
            target.as_os_str(),
            "--original".as_ref(),
            source.as_os_str(),
        ],
    );
    assert!(out.status.success(), "gather should succeed");
    assert_eq!(
        fs::read(source.join("Vacation/beach.png")).unwrap(),
        b"sand"
    );
}

#[test]
fn scatter_outside_root_fails_with_access_denied() {
    let outer = tempdir().unwrap();
    let root = outer.path().join("root");
    let source = root.join("source");
    fs::create_dir_all(source.join("A")).unwrap();
    fs::write(source.join("A/f.txt"), b"x").unwrap();
    let escape = outer.path().join("escape");

    let out = run_refile(
        &root,
        &[
            "scatter".as_ref(),
            "--source".as_ref(),
            source.as_os_str(),
            "--target".as_ref(),
            escape.as_os_str(),
        ],
    );
    assert!(!out.status.success(), "escape must fail the process");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("access denied"), "got: {stderr}");
    assert!(!escape.exists());
}

#[test]
fn scatter_with_filters_via_binary() {
    let td = tempdir().unwrap();
    let source = td.path().join("source");
    fs::create_dir_all(source.join("Pics")).unwrap();
    fs::write(source.join("Pics/photo.jpg"), vec![0u8; 64]).unwrap();
    fs::write(source.join("Pics/note.txt"), vec![0u8; 64]).unwrap();
    let target = td.path().join("flat");

    let out = run_refile(
        td.path(),
        &[
            "scatter".as_ref(),
            "--source".as_ref(),
            source.as_os_str(),
            "--target".as_ref(),
            target.as_os_str(),
            "--ext".as_ref(),
            ".JPG".as_ref(),
            "--min-size".as_ref(),
            "10".as_ref(),
        ],
    );
    assert!(out.status.success());
    assert!(target.join("Pics_photo.jpg").exists());
    assert!(source.join("Pics/note.txt").exists());
}
