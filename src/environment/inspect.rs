//! Parsing of the runtime's JSON output

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One row of `container ls --format json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContainerSummary {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Names", default)]
    pub names: String,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Status", default)]
    pub status: String,
}

impl ContainerSummary {
    pub fn is_running(&self) -> bool {
        self.state.eq_ignore_ascii_case("running")
    }

    /// `Names` is a comma separated list
    pub fn has_name(&self, name: &str) -> bool {
        self.names
            .split(',')
            .any(|candidate| candidate.trim().trim_start_matches('/') == name)
    }
}

/// One entry of `inspect --format '{{json .Mounts}}'`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Mount {
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Source", default)]
    pub source: String,
    #[serde(rename = "Destination", default)]
    pub destination: String,
}

/// The runtime prints one JSON object per line
pub fn parse_container_list(output: &str) -> Result<Vec<ContainerSummary>> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<ContainerSummary>(line).map_err(Into::into))
        .collect()
}

pub fn parse_mounts(output: &str) -> Result<Vec<Mount>> {
    let Some(line) = output.lines().map(str::trim).find(|line| !line.is_empty()) else {
        return Ok(Vec::new());
    };

    let mounts: Option<Vec<Mount>> = serde_json::from_str(line)?;
    Ok(mounts.unwrap_or_default())
}

/// Whether `path` is bind-mounted into the container
pub fn has_bind_mount(mounts: &[Mount], path: &Path) -> bool {
    mounts
        .iter()
        .any(|mount| mount.kind == "bind" && Path::new(&mount.source) == path)
}
