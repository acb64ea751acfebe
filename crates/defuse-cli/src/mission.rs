//! Mission definitions: which module pools a bomb draws from, plus any
//! edgework known in advance. Missions are RON files; the bundled ones live
//! in this crate's `missions/` directory.

use std::path::Path;

use serde::Deserialize;

use crate::error::CliError;

/// One bomb to defuse.
#[derive(Debug, Clone, Deserialize)]
pub struct Mission {
    pub name: String,
    /// Starting timer in minutes, when the mission fixes it.
    #[serde(default)]
    pub start_time_mins: Option<u32>,
    /// Strike limit, when the mission fixes it.
    #[serde(default)]
    pub max_strikes: Option<u32>,
    /// Modules always present, one copy each.
    #[serde(default)]
    pub fixed: Vec<String>,
    /// Module pools the operator selects from.
    pub pools: Vec<PoolSpec>,
}

/// One pool-selection prompt: the candidate module names and how many
/// modules the pool contributes. A count of zero reads until an empty line.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolSpec {
    pub modules: Vec<String>,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl Mission {
    /// The default session: one open-ended pool over everything solvable.
    pub fn freeplay() -> Self {
        Mission {
            name: "Freeplay".to_string(),
            start_time_mins: None,
            max_strikes: None,
            fixed: Vec::new(),
            pools: vec![PoolSpec {
                modules: defuse_modules::pools::all_solvable()
                    .iter()
                    .map(|entry| entry.name.to_string())
                    .collect(),
                count: 0,
            }],
        }
    }
}

/// Load a mission from a RON file.
pub fn load(path: &Path) -> Result<Mission, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::MissionRead {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|err| CliError::MissionParse {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })
}
