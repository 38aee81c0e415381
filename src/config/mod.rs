use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";

pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("RACEDAY_DATA_DIR")
                .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
                .into(),
        }
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    pub fn events_file(&self) -> PathBuf {
        self.data_dir.join("events.json")
    }

    pub fn bookings_file(&self) -> PathBuf {
        self.data_dir.join("bookings.json")
    }

    pub fn payments_file(&self) -> PathBuf {
        self.data_dir.join("payments.json")
    }
}
