use anyhow::Result;
use radioref_sdruno::{CsvPipeline, EtlEngine, LocalStorage, ProfileConfig};
use std::fs;
use tempfile::TempDir;

/// The fixed settings the converter has always shipped with.
const DEFAULT_PROFILE: &str = r#"
[input]
path = "ctid_1855_1751041884.csv"

[output]
path = "converted_output.csv"

[filter]
modulations = ["AM", "FM", "NFM"]
"#;

const EXPORT: &str = "\
Frequency Output,FCC Callsign,Description,Mode,Tag
121.5,,Guard,AM,Aircraft
146.94,W1XYZ,Club Repeater,FM,Ham
162.55,,Weather,WX,
";

#[test]
fn test_profile_paths_resolve_against_profile_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let profile_path = temp_dir.path().join("sdruno-profile.toml");
    fs::write(&profile_path, DEFAULT_PROFILE)?;
    fs::write(temp_dir.path().join("ctid_1855_1751041884.csv"), EXPORT)?;

    let profile = ProfileConfig::from_file(&profile_path)?;
    let storage = LocalStorage::new(temp_dir.path());
    let report = EtlEngine::new(CsvPipeline::new(storage, profile)).run()?;

    assert_eq!(report.summary.rows_read, 3);
    assert_eq!(report.summary.rows_written, 2);

    let written = fs::read_to_string(temp_dir.path().join("converted_output.csv"))?;
    assert_eq!(
        written.lines().collect::<Vec<_>>(),
        vec![
            "121500000,Y,AM,Guard,,AM,12K,AntA,",
            "146940000,Y,FM,Club Repeater,,NFM,12K,AntA,",
        ]
    );
    Ok(())
}

#[test]
fn test_profile_ham_only_with_callsign() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let profile_path = temp_dir.path().join("ham.toml");
    fs::write(
        &profile_path,
        r#"
[input]
path = "export.csv"

[output]
path = "out/ham.csv"

[filter]
ham_only = true

[transform]
add_callsign = true
"#,
    )?;
    fs::write(temp_dir.path().join("export.csv"), EXPORT)?;

    let profile = ProfileConfig::from_file(&profile_path)?;
    let storage = LocalStorage::new(temp_dir.path());
    let report = EtlEngine::new(CsvPipeline::new(storage, profile)).run()?;

    assert_eq!(report.summary.rows_written, 1);
    assert_eq!(report.summary.skipped_not_ham, 2);
    let written = fs::read_to_string(temp_dir.path().join("out/ham.csv"))?;
    assert_eq!(written, "146940000,Y,FM,Club Repeater W1XYZ,,NFM,12K,AntA,\r\n");
    Ok(())
}

#[test]
fn test_missing_profile_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ProfileConfig::from_file(temp_dir.path().join("nope.toml")).is_err());
}
