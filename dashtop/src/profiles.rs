//! Connection profiles: a JSON map of profile name -> { url, tls_ca } stored
//! at $XDG_CONFIG_HOME/dashtop/profiles.json (~/.config fallback).

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, io, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProfileEntry {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_ca: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileEntry>,
    #[serde(default)]
    pub version: u32,
}

pub fn profiles_path() -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs_next::config_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dashtop")
        .join("profiles.json")
}

/// Missing or unreadable file yields an empty set; the next save rewrites it.
pub fn load_profiles() -> ProfilesFile {
    fs::read_to_string(profiles_path())
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn save_profiles(pf: &ProfilesFile) -> io::Result<()> {
    let path = profiles_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(pf).map_err(io::Error::other)?;
    fs::write(path, json)
}

/// Outcome of combining CLI arguments with stored profiles.
pub enum ResolveProfile {
    /// Use the runtime inputs as given. (url, tls_ca)
    Direct(String, Option<String>),
    /// Loaded from an existing profile entry. (url, tls_ca)
    Loaded(String, Option<String>),
    /// Profile name given but nothing stored under it and no URL to save.
    Unknown(String),
    /// Neither a URL nor a usable profile.
    None,
}

pub struct ProfileRequest {
    pub profile_name: Option<String>,
    pub url: Option<String>,
    pub tls_ca: Option<String>,
}

impl ProfileRequest {
    pub fn resolve(self, pf: &ProfilesFile) -> ResolveProfile {
        match (self.url, self.profile_name) {
            // An explicit URL always wins; the caller may persist it under the
            // profile name afterwards.
            (Some(url), _) => ResolveProfile::Direct(url, self.tls_ca),
            (None, Some(name)) => match pf.profiles.get(&name) {
                Some(entry) => ResolveProfile::Loaded(entry.url.clone(), entry.tls_ca.clone()),
                None => ResolveProfile::Unknown(name),
            },
            (None, None) => ResolveProfile::None,
        }
    }
}
