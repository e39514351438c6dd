use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_wordlist(dir: impl AsRef<Path>, name: &str, words: &[&str]) -> Result<std::path::PathBuf> {
    let path = dir.as_ref().join(name);
    fs::write(&path, words.join("\n"))?;
    Ok(path)
}

#[test]
fn test_finds_full_anagrams() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "words.txt", &["cat", "act", "tac", "dog", "tacx"])?;

    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "-f"])
        .arg(&wordlist)
        .arg("cat")
        .assert()
        .success()
        .stdout(predicate::str::contains("cat\n"))
        .stdout(predicate::str::contains("act\n"))
        .stdout(predicate::str::contains("tac\n"))
        .stdout(predicate::str::contains("dog").not())
        .stdout(predicate::str::contains("tacx").not());
    Ok(())
}

#[test]
fn test_sub_anagrams_and_sorting() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "words.txt", &["taco", "ox", "cat", "dune"])?;

    // Distinct lengths make the sorted order fully deterministic
    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "--sub", "-s", "-f"])
        .arg(&wordlist)
        .arg("catbox")
        .assert()
        .success()
        .stdout("ox\ncat\ntaco\n");
    Ok(())
}

#[test]
fn test_reverse_sort() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "words.txt", &["taco", "ox", "cat"])?;

    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "--sub", "-s", "-r", "-f"])
        .arg(&wordlist)
        .arg("catbox")
        .assert()
        .success()
        .stdout("taco\ncat\nox\n");
    Ok(())
}

#[test]
fn test_count_truncates_results() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "words.txt", &["taco", "ox", "cat"])?;

    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "--sub", "-s", "-c", "2", "-f"])
        .arg(&wordlist)
        .arg("catbox")
        .assert()
        .success()
        .stdout("ox\ncat\n");
    Ok(())
}

#[test]
fn test_min_size_filter() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "words.txt", &["taco", "ox", "cat"])?;

    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "--sub", "-s", "--min", "3", "-f"])
        .arg(&wordlist)
        .arg("catbox")
        .assert()
        .success()
        .stdout("cat\ntaco\n");
    Ok(())
}

#[test]
fn test_no_matches_prints_nothing() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "words.txt", &["cat", "act", "tac"])?;

    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "--min", "4", "-f"])
        .arg(&wordlist)
        .arg("cat")
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn test_missing_wordlist_fails() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("nonexistent.txt");

    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "-f"])
        .arg(&missing)
        .arg("cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    Ok(())
}

#[test]
fn test_empty_delimiter_is_a_usage_error() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "words.txt", &["cat"])?;

    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "--delimiter", "", "-f"])
        .arg(&wordlist)
        .arg("cat")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("delimiter"));
    Ok(())
}

#[test]
fn test_custom_delimiter() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("words.csv");
    fs::write(&path, "cat,act,tac,dog")?;

    Command::cargo_bin("anagrammer-cli")?
        .args(["-q", "--delimiter", ",", "-f"])
        .arg(&path)
        .arg("cat")
        .assert()
        .success()
        .stdout(predicate::str::contains("act\n"))
        .stdout(predicate::str::contains("dog").not());
    Ok(())
}
