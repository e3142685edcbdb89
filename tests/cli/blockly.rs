use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const BLOCKLY_ROOT: &str = "translations/blockly_core";

const CONFIG: &str = r#"{
  "storeRoot": "translations/blockly_core",
  "filePrefix": "blockly_",
  "syncExclude": []
}"#;

fn blockly_file(code: &str) -> String {
    format!("{}/blockly_{}.json", BLOCKLY_ROOT, code)
}

fn setup(test: &CliTest) -> Result<()> {
    test.write_file(".locsyncrc.json", CONFIG)?;
    test.write_file(
        &blockly_file("en"),
        r#"{
  "BKY_ESP32CAM_FLIP": "📷 Camera Screen Setting Type %1 Enable %2",
  "BKY_ESP32CAM_FLIP_ENABLE_ON": "On",
  "BKY_ESP32CAM_FLIP_ENABLE_OFF": "Off"
}"#,
    )?;
    test.write_file(&blockly_file("ja"), r#"{ "BKY_ESP32CAM_FLIP_ENABLE_ON": "オン" }"#)?;
    test.write_file(
        &blockly_file("de"),
        r#"{ "BKY_ESP32CAM_FLIP": "📷 Kamerabildschirmeinstellung Typ %1 Aktivieren %2", "BKY_ESP32CAM_FLIP_ENABLE_ON": "An" }"#,
    )
}

#[test]
fn test_fill_only_copies_listed_keys_without_overwriting() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    let de_before = test.read_file(&blockly_file("de"))?;

    let output = test
        .command()
        .args([
            "sync",
            "--fill-only",
            "--key",
            "BKY_ESP32CAM_FLIP",
            "--key",
            "BKY_ESP32CAM_FLIP_ENABLE_ON",
            "--apply",
        ])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        stdout(&output),
        "Master blockly_en.json: 3 keys\n\
         \x20 ✓ blockly_de.json: in sync\n\
         \x20 ~ blockly_ja.json: +1 added, -0 removed\n\
         \n\
         Synced 1 of 2 files: +1 added, -0 removed\n"
    );

    let ja: serde_json::Value = serde_json::from_str(&test.read_file(&blockly_file("ja"))?)?;
    assert_eq!(
        ja,
        json!({
            "BKY_ESP32CAM_FLIP_ENABLE_ON": "オン",
            "BKY_ESP32CAM_FLIP": "📷 Camera Screen Setting Type %1 Enable %2"
        })
    );
    assert_eq!(test.read_file(&blockly_file("de"))?, de_before);

    Ok(())
}

#[test]
fn test_fill_only_warns_about_unknown_key() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .command()
        .args(["sync", "--fill-only", "--key", "BKY_ESP32CAM_MISSING"])
        .output()?;

    assert!(output.status.success());
    assert!(
        stderr(&output).contains("warning: key BKY_ESP32CAM_MISSING not found in blockly_en.json")
    );
    assert!(stdout(&output).contains("2 files already in sync"));

    Ok(())
}

#[test]
fn test_merge_into_blockly_store() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(
        "flip.json",
        r#"{ "ja": { "BKY_ESP32CAM_FLIP": "📷 カメラ画面設定 タイプ %1 有効化 %2" } }"#,
    )?;

    let output = test.command().args(["merge", "--seed", "flip.json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("Added 1 translations to ja\n"));

    assert_eq!(
        test.read_file(&blockly_file("ja"))?,
        "{\n  \"BKY_ESP32CAM_FLIP_ENABLE_ON\": \"オン\",\n  \"BKY_ESP32CAM_FLIP\": \"📷 カメラ画面設定 タイプ %1 有効化 %2\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_file_prefix_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(&format!("{}/ui_en.json", BLOCKLY_ROOT), r#"{ "A": "a" }"#)?;
    test.write_file(&format!("{}/ui_fr.json", BLOCKLY_ROOT), "{}")?;

    let output = test
        .command()
        .args(["sync", "--file-prefix", "ui_"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("Master ui_en.json: 1 key\n"));
    assert!(out.contains("ui_fr.json: +1 added, -0 removed"));
    assert!(!out.contains("blockly_"));

    Ok(())
}

#[test]
fn test_invalid_file_prefix_is_rejected() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .command()
        .args(["audit", "--file-prefix", "../ui_"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid file prefix"));

    Ok(())
}
