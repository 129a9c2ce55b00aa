use anyhow::{Context, Result};
use keisho_checkers::ContractRecord;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loads contract records from a JSON file, or from every JSON file under
/// a directory. Files are visited in sorted order so node ids, and with
/// them path output, stay stable across runs.
pub fn load_contract_records(path: &Path) -> Result<Vec<ContractRecord>> {
    if path.is_file() {
        load_record_file(path)
    } else if path.is_dir() {
        let mut records = Vec::new();
        for file in find_record_files(path)? {
            records.extend(load_record_file(&file)?);
        }
        Ok(records)
    } else {
        anyhow::bail!("Project path does not exist: {}", path.display())
    }
}

fn find_record_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn load_record_file(path: &Path) -> Result<Vec<ContractRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse contract records: {}", path.display()))
}
