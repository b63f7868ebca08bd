use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Directory, DirectoryError};
use crate::types::{Candidate, TeamMember};

/// On-disk roster layout shared by every supported format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Toml,
    Json,
    Yaml,
}

impl RosterFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(RosterFormat::Toml),
            "json" => Some(RosterFormat::Json),
            "yaml" | "yml" => Some(RosterFormat::Yaml),
            _ => None,
        }
    }

    fn parse(self, contents: &str) -> Result<Roster, String> {
        match self {
            RosterFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            RosterFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            RosterFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// Directory backed by a roster file, read once at construction
#[derive(Debug, Clone)]
pub struct FileDirectory {
    path: PathBuf,
    roster: Roster,
}

impl FileDirectory {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, DirectoryError> {
        let path = path.into();
        let format = RosterFormat::from_path(&path)
            .ok_or_else(|| DirectoryError::UnsupportedFormat(path.clone()))?;

        let contents = std::fs::read_to_string(&path).map_err(|source| DirectoryError::Io {
            path: path.clone(),
            source,
        })?;

        let roster = format
            .parse(&contents)
            .map_err(|message| DirectoryError::Parse {
                path: path.clone(),
                message,
            })?;

        check_unique(roster.candidates.iter().map(|c| c.id), "candidate")?;
        check_unique(roster.team.iter().map(|m| m.id), "team member")?;

        tracing::debug!(
            path = %path.display(),
            candidates = roster.candidates.len(),
            team = roster.team.len(),
            "Loaded roster"
        );

        Ok(Self { path, roster })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn check_unique(ids: impl Iterator<Item = u32>, kind: &'static str) -> Result<(), DirectoryError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DirectoryError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

impl Directory for FileDirectory {
    fn list_candidates(&self) -> Result<Vec<Candidate>, DirectoryError> {
        Ok(self.roster.candidates.clone())
    }

    fn list_team_members(&self) -> Result<Vec<TeamMember>, DirectoryError> {
        Ok(self.roster.team.clone())
    }

    fn source_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
