use refile::{PathGuard, ScatterFilter, scatter};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn guard_for(root: &Path) -> PathGuard {
    PathGuard::new(root).expect("guard should build for an existing root")
}

#[test]
fn min_size_scenario_moves_only_large_file() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("source");
    fs::create_dir_all(source.join("Vacation"))?;
    fs::create_dir_all(source.join("Work"))?;
    fs::write(source.join("Vacation/beach.png"), vec![0u8; 10])?;
    fs::write(source.join("Work/notes.txt"), vec![0u8; 2])?;

    let target = td.path().join("target");
    let filter = ScatterFilter {
        min_size: Some(5),
        ..Default::default()
    };
    let report = scatter(&guard_for(td.path()), &source, &target, &filter)?;

    assert_eq!(report.files_moved, 1);
    assert!(target.join("Vacation_beach.png").exists());
    assert!(!target.join("Work_notes.txt").exists());
    assert!(source.join("Work/notes.txt").exists());
    Ok(())
}

#[test]
fn size_bounds_inclusive_at_both_ends() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("source");
    fs::create_dir_all(source.join("A"))?;
    fs::write(source.join("A/at-min.bin"), vec![0u8; 100])?;
    fs::write(source.join("A/under-min.bin"), vec![0u8; 99])?;
    fs::write(source.join("A/at-max.bin"), vec![0u8; 200])?;
    fs::write(source.join("A/over-max.bin"), vec![0u8; 201])?;

    let target = td.path().join("target");
    let filter = ScatterFilter {
        min_size: Some(100),
        max_size: Some(200),
        ..Default::default()
    };
    let report = scatter(&guard_for(td.path()), &source, &target, &filter)?;

    assert_eq!(report.files_moved, 2);
    assert!(target.join("A_at-min.bin").exists());
    assert!(target.join("A_at-max.bin").exists());
    assert!(source.join("A/under-min.bin").exists());
    assert!(source.join("A/over-max.bin").exists());
    Ok(())
}

#[test]
fn extension_filter_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("source");
    fs::create_dir_all(source.join("Pics"))?;
    fs::write(source.join("Pics/photo.jpg"), b"jpg")?;
    fs::write(source.join("Pics/readme.txt"), b"txt")?;

    let target = td.path().join("target");
    let filter = ScatterFilter {
        extensions: vec![".JPG".to_string()],
        ..Default::default()
    };
    let report = scatter(&guard_for(td.path()), &source, &target, &filter)?;

    assert_eq!(report.files_moved, 1);
    assert!(target.join("Pics_photo.jpg").exists());
    assert!(source.join("Pics/readme.txt").exists());
    Ok(())
}

#[test]
fn missing_source_reports_and_returns_zero() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("nope");
    let target = td.path().join("target");

    let report = scatter(
        &guard_for(td.path()),
        &source,
        &target,
        &ScatterFilter::default(),
    )?;

    assert_eq!(report.files_moved, 0);
    assert!(!target.exists(), "target must not be created for a missing source");
    assert!(report.log.iter().any(|l| l.contains("does not exist")));
    Ok(())
}

#[test]
fn target_is_created_when_absent() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("source");
    fs::create_dir_all(source.join("A"))?;
    fs::write(source.join("A/f.txt"), b"x")?;

    let target = td.path().join("brand/new/target");
    let report = scatter(
        &guard_for(td.path()),
        &source,
        &target,
        &ScatterFilter::default(),
    )?;

    assert_eq!(report.files_moved, 1);
    assert!(target.join("A_f.txt").exists());
    Ok(())
}

#[test]
fn only_one_level_of_nesting_is_traversed() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("source");
    fs::create_dir_all(source.join("A/deeper"))?;
    fs::write(source.join("A/shallow.txt"), b"move me")?;
    fs::write(source.join("A/deeper/too-deep.txt"), b"stay")?;
    // Files directly in the source are not inside any subfolder.
    fs::write(source.join("loose.txt"), b"stay")?;

    let target = td.path().join("target");
    let report = scatter(
        &guard_for(td.path()),
        &source,
        &target,
        &ScatterFilter::default(),
    )?;

    assert_eq!(report.files_moved, 1);
    assert!(target.join("A_shallow.txt").exists());
    assert!(source.join("A/deeper/too-deep.txt").exists());
    assert!(source.join("loose.txt").exists());
    Ok(())
}

#[test]
fn zero_matches_is_a_valid_outcome() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let source = td.path().join("source");
    fs::create_dir_all(source.join("A"))?;
    fs::write(source.join("A/tiny.txt"), b"x")?;

    let filter = ScatterFilter {
        min_size: Some(1_000_000),
        ..Default::default()
    };
    let report = scatter(
        &guard_for(td.path()),
        &source,
        &td.path().join("target"),
        &filter,
    )?;
    assert_eq!(report.files_moved, 0);
    Ok(())
}
