use crate::errors::AppError;
use crate::models::{ActivityRecord, Journal, NewEntry};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;

#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    journal: Journal,
}

impl RecordStore {
    // Missing file means a fresh journal; unparseable content is fatal.
    pub async fn open(path: PathBuf) -> Result<Self, AppError> {
        let journal = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| AppError::CorruptStore(err.to_string()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Journal::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, journal })
    }

    pub async fn upsert(&mut self, entry: NewEntry) -> Result<ActivityRecord, AppError> {
        self.upsert_at(entry, Local::now()).await
    }

    // One record per calendar day: a second write for the same day replaces
    // the first, timestamp included. The in-memory map is rolled back when
    // the durable write fails.
    pub async fn upsert_at(
        &mut self,
        entry: NewEntry,
        now: DateTime<Local>,
    ) -> Result<ActivityRecord, AppError> {
        let record = ActivityRecord {
            date: day_key(now),
            timestamp: now,
            steps: entry.steps,
            walking: entry.walking,
            money_spent: entry.money_spent,
            learned: entry.learned.trim().to_string(),
            goals: entry.goals.trim().to_string(),
        };

        let previous = self.journal.days.insert(record.date.clone(), record.clone());
        if let Err(err) = persist(&self.path, &self.journal).await {
            match previous {
                Some(prior) => self.journal.days.insert(record.date.clone(), prior),
                None => self.journal.days.remove(&record.date),
            };
            return Err(err);
        }

        Ok(record)
    }

    pub fn get_by_key(&self, key: &str) -> Option<&ActivityRecord> {
        self.journal.days.get(key)
    }

    pub fn all(&self) -> BTreeMap<String, ActivityRecord> {
        self.journal.days.clone()
    }
}

pub fn day_key(moment: DateTime<Local>) -> String {
    moment.date_naive().format("%Y-%m-%d").to_string()
}

pub fn resolve_data_path() -> PathBuf {
    env::var("JOURNAL_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/activities.json"))
}

async fn persist(path: &Path, journal: &Journal) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(journal).map_err(AppError::storage)?;
    // Write-then-rename so the slot is replaced in one step.
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, payload).await?;
    fs::rename(&staging, path).await?;
    Ok(())
}
