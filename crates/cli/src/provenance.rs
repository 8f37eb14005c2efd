use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a report: the parameters and the inputs it was computed from.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

/// Write `<report>.provenance.json` next to a report: git commit, library version, params, inputs.
pub fn write_sidecar<P: AsRef<Path>>(report: P, payload: Payload) -> Result<PathBuf> {
    let report = report.as_ref();
    let path = sidecar_path(report);
    let doc = json!({
        "code_rev": current_git_rev(),
        "stabbing_version": stabbing::VERSION,
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": [report.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(report: &Path) -> PathBuf {
    let mut name = report
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    report.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_report() {
        let base = Path::new("/tmp/out/walk.json");
        assert_eq!(sidecar_path(base), Path::new("/tmp/out/walk.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_inputs() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("r.json");
        fs::write(&report, "{}").unwrap();
        let payload = Payload::new(json!({"radius": 1.0})).with_input("centers.csv");
        let path = write_sidecar(&report, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["inputs"][0], "centers.csv");
        assert_eq!(parsed["params"]["radius"], 1.0);
        assert_eq!(parsed["outputs"][0], report.to_string_lossy().as_ref());
    }
}
