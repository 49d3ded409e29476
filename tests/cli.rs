//! End-to-end tests of the `create-lmod-wrapper` binary.

#![allow(deprecated)] // cargo_bin still works, just deprecated for custom build-dir

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LMODEL_DAT: &str = "\
relxill        11  0.    1.e20    c_lmodrelxill  add  0
a          \"\"     0.998  -0.998  -0.998  0.998  0.998  0.01
Incl       deg    30.    3.0    3.0    87.0   87.0   1

relxilllp      10  0.    1.e20    c_lmodrelxilllp  add  0
h          GM/c^2 15.    1.0    1.0   1000.  1000.  0.01

xillver        7   0.    1.e20    c_lmodxillver  add  0
gamma      \"\"     2.     1.0    1.0     3.4    3.4    0.01
";

fn create_lmod_wrapper() -> Command {
    Command::cargo_bin("create-lmod-wrapper").expect("Failed to find create-lmod-wrapper binary")
}

/// Writes `content` as `lmodel.dat` in a fresh directory.
fn definition_dir(content: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("lmodel.dat"), content).expect("Failed to write lmodel.dat");
    dir
}

fn generate(dir: &Path, output: &str) -> assert_cmd::assert::Assert {
    create_lmod_wrapper()
        .current_dir(dir)
        .args(["lmodel.dat", output])
        .assert()
}

#[test]
fn generates_two_wrappers() {
    let dir = definition_dir("some text c_lmodfoo other text\n\nsome text c_lmodbar other text");

    generate(dir.path(), "wrapper.cpp")
        .success()
        .stdout(predicate::str::contains(
            " *** creating wrapper.cpp by parsing lmodel.dat:",
        ))
        .stdout(predicate::str::contains("    - foo\n    - bar\n"));

    let source = fs::read_to_string(dir.path().join("wrapper.cpp")).unwrap();
    assert!(source.starts_with("/*\n   *** AUTOMATICALLY CREATED"));
    assert!(source.contains(
        "extern \"C\" void lmodfoo(const double *energy, int Nflux, const double *parameter, \
         int spectrum, double *flux, double *fluxError, const char *init) \n{\n    \
         xspec_C_wrapper_eval_model(ModelName::foo, parameter, flux, Nflux, energy);\n} \n"
    ));
    assert!(source.contains(
        "xspec_C_wrapper_eval_model(ModelName::bar, parameter, flux, Nflux, energy);"
    ));
    assert!(source.find("void lmodfoo(").unwrap() < source.find("void lmodbar(").unwrap());
}

#[test]
fn progress_lines_match_generated_functions() {
    let dir = definition_dir(LMODEL_DAT);

    let output = generate(dir.path(), "wrapper.cpp").success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let progress: Vec<_> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("    - "))
        .collect();

    let source = fs::read_to_string(dir.path().join("wrapper.cpp")).unwrap();
    assert_eq!(progress, vec!["relxill", "relxilllp", "xillver"]);
    assert_eq!(source.matches("extern \"C\" void ").count(), progress.len());

    let positions: Vec<_> = progress
        .iter()
        .map(|name| source.find(&format!("void lmod{name}(")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn malformed_block_is_reported_and_skipped() {
    let content = format!("{LMODEL_DAT}\nbroken       3  0.  1.e20  c_other  add 0\npar 1\n");
    let dir = definition_dir(&content);

    generate(dir.path(), "wrapper.cpp")
        .success()
        .stdout(predicate::str::contains(
            " *** error ***: could not parse the following model definition\nbroken",
        ));

    let source = fs::read_to_string(dir.path().join("wrapper.cpp")).unwrap();
    assert_eq!(source.matches("extern \"C\" void ").count(), 3);
    assert!(!source.contains("broken"));
}

#[test]
fn output_is_deterministic() {
    let dir = definition_dir(LMODEL_DAT);

    generate(dir.path(), "first.cpp").success();
    generate(dir.path(), "second.cpp").success();
    generate(dir.path(), "first.cpp").success();

    let first = fs::read(dir.path().join("first.cpp")).unwrap();
    let second = fs::read(dir.path().join("second.cpp")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn overwrites_existing_output() {
    let dir = definition_dir("m c_lmodfoo add 0");
    fs::write(dir.path().join("wrapper.cpp"), "stale contents ".repeat(1_000)).unwrap();

    generate(dir.path(), "wrapper.cpp").success();

    let source = fs::read_to_string(dir.path().join("wrapper.cpp")).unwrap();
    assert!(!source.contains("stale"));
    assert!(source.ends_with("} \n"));
}

#[test]
fn no_arguments_prints_usage() {
    create_lmod_wrapper()
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: create-lmod-wrapper [lmodel.dat] [xspec_wrapper.cpp]",
        ));
}

#[test]
fn one_argument_prints_usage_and_writes_nothing() {
    let dir = definition_dir(LMODEL_DAT);

    create_lmod_wrapper()
        .current_dir(dir.path())
        .arg("lmodel.dat")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn extra_arguments_print_usage() {
    let dir = definition_dir(LMODEL_DAT);

    create_lmod_wrapper()
        .current_dir(dir.path())
        .args(["lmodel.dat", "wrapper.cpp", "extra"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    assert!(!dir.path().join("wrapper.cpp").exists());
}

#[test]
fn help_flag_is_not_special() {
    create_lmod_wrapper()
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    create_lmod_wrapper()
        .current_dir(dir.path())
        .args(["lmodel.dat", "wrapper.cpp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: failed to read definition file lmodel.dat",
        ));

    assert!(!dir.path().join("wrapper.cpp").exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = definition_dir(LMODEL_DAT);

    generate(dir.path(), "missing/wrapper.cpp")
        .failure()
        .stderr(predicate::str::contains("failed to write wrapper file"));
}
