use crate::core::calculator::DEFAULT_STANDARD_WORKDAY_MINUTES;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Length of a regular workday; anything above it is overtime.
    #[serde(default = "default_standard_workday")]
    pub standard_workday_minutes: u32,
    /// Seed new months with Monday-Friday only.
    #[serde(default = "default_skip_weekends")]
    pub skip_weekends: bool,
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

/// Keys every up-to-date configuration file carries.
pub const CONFIG_KEYS: [&str; 4] = [
    "database",
    "standard_workday_minutes",
    "skip_weekends",
    "report_title",
];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_standard_workday() -> u32 {
    DEFAULT_STANDARD_WORKDAY_MINUTES
}
fn default_skip_weekends() -> bool {
    true
}
fn default_report_title() -> String {
    "Hours report".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            standard_workday_minutes: default_standard_workday(),
            skip_weekends: default_skip_weekends(),
            report_title: default_report_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.rovertime)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rovertime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rovertime.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rovertime.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.standard_workday_minutes == 0 || self.standard_workday_minutes > 24 * 60 {
            return Err(AppError::Config(format!(
                "standard_workday_minutes must be between 1 and 1440 (found {})",
                self.standard_workday_minutes
            )));
        }
        Ok(())
    }

    /// Keys absent from the file at `path` (their defaults are in effect).
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: Value = serde_yaml::from_str(&content)?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
