use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn setup(test: &CliTest) -> Result<()> {
    test.write_language(
        "en",
        r#"{ "mainTitle": "Block IDE", "BKY_SERIAL_A": "Serial A", "BKY_SERIAL_B": "Serial B" }"#,
    )?;
    test.write_language(
        "de",
        r#"{ "BKY_SERIAL_B": "Seriell B", "OLD_KEY": "alt", "mainTitle": "Block-IDE" }"#,
    )?;
    test.write_language(
        "fr",
        r#"{ "mainTitle": "IDE", "BKY_SERIAL_A": "Série A", "BKY_SERIAL_B": "Série B" }"#,
    )?;
    test.write_language("ko", r#"{ "mainTitle": "블록 IDE" }"#)
}

#[test]
fn test_sync_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    let before = test.read_language("de")?;

    let output = test.command().arg("sync").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        stdout(&output),
        "Master ui_en.json: 3 keys\n\
         \x20 ~ ui_de.json: +1 added, -1 removed\n\
         \x20 ✓ ui_fr.json: in sync\n\
         \n\
         Would sync 1 of 2 files: +1 added, -1 removed\n\
         Run with --apply to write these changes.\n"
    );
    assert_eq!(test.read_language("de")?, before);

    Ok(())
}

#[test]
fn test_sync_apply_rewrites_in_master_order() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test.command().args(["sync", "--apply"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Synced 1 of 2 files: +1 added, -1 removed"));

    assert_eq!(
        test.read_language("de")?,
        "{\n  \"mainTitle\": \"Block-IDE\",\n  \"BKY_SERIAL_A\": \"[TODO] Serial A\",\n  \"BKY_SERIAL_B\": \"Seriell B\"\n}\n"
    );
    // Korean is excluded by default.
    assert_eq!(test.read_language("ko")?, r#"{ "mainTitle": "블록 IDE" }"#);

    let again = test.command().args(["sync", "--apply"]).output()?;
    assert!(stdout(&again).contains("2 files already in sync"));

    Ok(())
}

#[test]
fn test_sync_skips_malformed_target() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_language("it", "{ oops")?;

    let output = test.command().args(["sync", "--apply"]).output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: skipped ui_it.json"));
    assert_eq!(test.read_language("it")?, "{ oops");

    Ok(())
}

#[test]
fn test_sync_missing_master_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_language("de", "{}")?;

    let output = test.command().arg("sync").output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to sync against master \"en\""), "stderr: {}", err);
    assert!(err.contains("File not found"), "stderr: {}", err);

    Ok(())
}

#[test]
fn test_sync_with_other_master_and_verbose() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test.command().args(["sync", "--master", "ko", "-v"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("Master ui_ko.json: 1 key\n"));
    assert!(out.contains("ui_en.json: +0 added, -2 removed"));
    assert!(out.contains("      - BKY_SERIAL_A\n"));

    Ok(())
}

#[test]
fn test_sync_rejects_invalid_master() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test.command().args(["sync", "--master", "../en"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid master language code"));
    Ok(())
}
