use assert_cmd::Command;
use predicates::{prelude::predicate, str::PredicateStrExt};

#[test]
fn test_authors() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("crustaspic")?
        .args(["authors", "--logging-level", "off"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("crustaspic "))
        .stdout(predicate::str::contains("Lonca"));
    Ok(())
}

#[test]
fn test_problems() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("crustaspic")?
        .args(["problems", "--logging-level", "off"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[EE-CF,EE-AD,EE-CO,EE-GR,EE-PR,EE-ST,EE-SST,EE-ID,EE-EG,CE-CF"))
        .stdout(predicate::str::ends_with("DS-ID,DS-EG]").trim());
    Ok(())
}

#[test]
fn test_no_command() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("crustaspic")?.assert().failure();
    Ok(())
}

#[test]
fn test_unknown_command() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("crustaspic")?.arg("foo").assert().failure();
    Ok(())
}

#[test]
fn test_help_goes_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("crustaspic")?
        .args(["help", "solve"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("with-certificate"));
    Ok(())
}
