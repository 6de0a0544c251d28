use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("assemblyinfo-updater").expect("binary exists")
}

#[test]
fn help_displays_usage() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--setversion"));
}

#[test]
fn missing_folder_prints_guidance() {
    bin()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: The first parameter must be the folder path!",
        ))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn nonexistent_folder_names_the_path_and_touches_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("no-such-project");

    bin()
        .arg(&missing)
        .args(["--setversion", "1.2.3.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The folder path doesn't exist"))
        .stdout(predicate::str::contains("no-such-project"))
        .stdout(predicate::str::contains("Finding").not());

    assert!(!missing.exists());
}

#[test]
fn setversion_rewrites_files_with_timestamped_progress() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("App/Properties/AssemblyInfo.cs");
    fs::create_dir_all(file.parent().expect("parent")).expect("mkdir");
    fs::write(
        &file,
        "[assembly: AssemblyVersion(\"1.0.0.0\")]\n\
         other line\n\
         [assembly: AssemblyFileVersion(\"1.0.0.0\")]\n",
    )
    .expect("seed");

    bin()
        .arg(temp.path())
        .args(["--SETVERSION", "2.0.0.0", "--unknown", "ignored"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"\[\d{2}:\d{2}:\d{2}\] Finding AssemblyInfo\.cs files")
                .expect("regex"),
        )
        .stdout(predicate::str::contains("Updating"))
        .stdout(predicate::str::contains("AssemblyInfo.cs files updated successfully."));

    let lines: Vec<String> = fs::read_to_string(&file)
        .expect("read back")
        .lines()
        .map(str::to_owned)
        .collect();
    assert_eq!(
        lines,
        vec![
            "[assembly: AssemblyVersion(\"2.0.0.0\")]",
            "other line",
            "[assembly: AssemblyFileVersion(\"2.0.0.0\")]",
        ]
    );
}

#[test]
fn scan_without_setversion_leaves_content_alone() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("AssemblyInfo.cs");
    let original = "[assembly: AssemblyVersion(\"1.0.0.0\")]\n";
    fs::write(&file, original).expect("seed");

    bin()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 AssemblyInfo.cs file(s)."));

    assert_eq!(fs::read_to_string(&file).expect("read back"), original);
}

#[cfg(unix)]
#[test]
fn rewrite_failure_is_reported_with_failing_exit_code() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("Locked/AssemblyInfo.cs");
    fs::create_dir_all(file.parent().expect("parent")).expect("mkdir");
    fs::write(&file, "[assembly: AssemblyVersion(\"1.0.0.0\")]\n").expect("seed");
    fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).expect("chmod");

    // Root ignores permission bits, so the write would succeed.
    if fs::OpenOptions::new().write(true).open(&file).is_ok() {
        return;
    }

    bin()
        .arg(temp.path())
        .args(["--setversion", "2.0.0.0"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "An error occurred while trying to update version in AssemblyInfo.cs files",
        ))
        .stdout(predicate::str::contains("Locked"))
        .stdout(predicate::str::contains("updated successfully").not());
}
