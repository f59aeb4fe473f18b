use anyhow::{Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SnapshotSettings;
use crate::domain::RawTournament;
use crate::errors::{snapshot_context, with_parse_context};

/// File-based store: raw weekly files in, one processed database out
pub struct SnapshotStore {
    data_dir: PathBuf,
    raw_dir: PathBuf,
    database_key: String,
}

impl SnapshotStore {
    /// Create a new store instance
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        Self::with_settings(data_dir, &SnapshotSettings::default())
    }

    pub fn from_settings(settings: &SnapshotSettings) -> Result<Self> {
        Self::with_settings(&settings.data_dir, settings)
    }

    fn with_settings<P: AsRef<Path>>(data_dir: P, settings: &SnapshotSettings) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let raw_dir = data_dir.join(settings.raw_subdir);

        fs::create_dir_all(&raw_dir).context("Failed to create raw data directory")?;

        Ok(Self {
            data_dir,
            raw_dir,
            database_key: settings.database_key.to_string(),
        })
    }

    pub fn raw_dir(&self) -> &Path {
        &self.raw_dir
    }

    /// Save data under `<data_dir>/<key>.json`
    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.build_path(key);
        self.write_json(&file_path, data)
            .with_context(|| snapshot_context("save", key))?;

        info!("Saved snapshot: {}", file_path.display());
        Ok(())
    }

    /// Load data saved under `key`, if any
    pub fn load<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_path(key);
        let data = self
            .read_json_opt(&file_path)
            .with_context(|| snapshot_context("load", key))?;

        if data.is_some() {
            info!("Loaded snapshot: {}", file_path.display());
        }
        Ok(data)
    }

    pub fn save_database<T: Serialize>(&self, database: &T) -> Result<()> {
        self.save(&self.database_key, database)
    }

    pub fn load_database<T: for<'de> Deserialize<'de>>(&self) -> Result<Option<T>> {
        self.load(&self.database_key)
    }

    // --- Raw Tournament Files ---

    /// Load every `week-<N>.json` file, ordered by week number.
    ///
    /// Files without a `week_number` field take it from the file name. Player
    /// names are cleaned on the way in.
    pub fn load_raw_tournaments(&self) -> Result<Vec<RawTournament>> {
        let pattern = week_file_pattern()?;
        let mut tournaments = Vec::new();

        for entry in fs::read_dir(&self.raw_dir).context("Failed to list raw data directory")? {
            let path = entry?.path();
            let Some(week) = week_from_path(&pattern, &path) else {
                debug!("Skipping non-tournament file: {}", path.display());
                continue;
            };

            match self.read_raw(&path, week)? {
                Some(raw) => tournaments.push(raw),
                None => warn!("Raw file vanished while loading: {}", path.display()),
            }
        }

        tournaments.sort_by_key(|t| (t.week_number, t.date));
        info!("Loaded {} raw tournaments from {}", tournaments.len(), self.raw_dir.display());
        Ok(tournaments)
    }

    /// Load one raw tournament file from anywhere on disk
    pub fn load_raw_file<P: AsRef<Path>>(path: P) -> Result<RawTournament> {
        let path = path.as_ref();
        let pattern = week_file_pattern()?;
        let week = week_from_path(&pattern, path).unwrap_or(0);

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read raw tournament {}", path.display()))?;
        parse_raw(&json, path, week)
    }

    // --- Helper Methods ---

    fn build_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    fn read_raw(&self, path: &Path, week: u32) -> Result<Option<RawTournament>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        parse_raw(&json, path, week).map(Some)
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        fs::write(path, json).context("Failed to write snapshot file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}

fn parse_raw(json: &str, path: &Path, week: u32) -> Result<RawTournament> {
    let mut raw: RawTournament = with_parse_context(serde_json::from_str(json), "raw tournament")
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if raw.week_number == 0 {
        raw.week_number = week;
    }
    raw.normalize_names();
    Ok(raw)
}

fn week_file_pattern() -> Result<Regex> {
    Regex::new(r"^week-(\d+)\.json$").context("Invalid week file pattern")
}

fn week_from_path(pattern: &Regex, path: &Path) -> Option<u32> {
    let name = path.file_name()?.to_str()?;
    pattern.captures(name)?.get(1)?.as_str().parse().ok()
}
