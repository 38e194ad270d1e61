use crate::core::records::ColumnNames;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::resolve_from;
use crate::utils::time::{parse_duration, parse_time_options};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV file holding the register.
    pub sheet_file: String,
    /// chrono layout of the date column in the sheet.
    #[serde(default = "default_table_date_layout")]
    pub table_date_layout: String,
    pub holidays_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacations_file: Option<String>,
    #[serde(default = "default_workday_duration")]
    pub workday_duration: String,
    #[serde(default = "default_started_options")]
    pub started_options: Vec<String>,
    #[serde(default)]
    pub columns: ColumnNames,
    /// Columns that must exist in the sheet; defaults to every mapped column.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_columns: Vec<String>,

    /// Directory of the loaded file; relative paths resolve against it.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// Parsed, validated values needed to generate records.
#[derive(Debug, Clone)]
pub struct WorkdaySettings {
    pub workday_duration: Duration,
    pub started_options: Vec<NaiveTime>,
}

fn default_table_date_layout() -> String {
    "%Y-%m-%d".to_string()
}
fn default_workday_duration() -> String {
    "8h".to_string()
}
fn default_started_options() -> Vec<String> {
    vec!["09:00:00".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_file: "register.csv".to_string(),
            table_date_layout: default_table_date_layout(),
            holidays_file: "holidays.txt".to_string(),
            vacations_file: None,
            workday_duration: default_workday_duration(),
            started_options: default_started_options(),
            columns: ColumnNames::default(),
            required_columns: Vec::new(),
            base_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rregister")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rregister.yml")
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "can not read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut cfg = Self::from_yaml(&content)?;
        cfg.base_dir = path.parent().map(Path::to_path_buf);
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("can not parse configuration: {}", e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("can not serialize configuration: {}", e)))
    }

    /// Write a default configuration file, refusing to overwrite unless `force`.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, Self::default().to_yaml()?)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    pub fn sheet_path(&self) -> PathBuf {
        self.resolve(&self.sheet_file)
    }

    pub fn holidays_path(&self) -> PathBuf {
        self.resolve(&self.holidays_file)
    }

    /// `None` when no vacations file is configured.
    pub fn vacations_path(&self) -> Option<PathBuf> {
        self.vacations_file
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .map(|f| self.resolve(f))
    }

    fn resolve(&self, file: &str) -> PathBuf {
        resolve_from(self.base_dir.as_deref(), file)
    }

    /// Explicit `required_columns`, or every mapped column name.
    pub fn required_columns(&self) -> Vec<String> {
        if self.required_columns.is_empty() {
            self.columns.mapped().into_iter().map(str::to_string).collect()
        } else {
            self.required_columns.clone()
        }
    }

    pub fn workday_settings(&self) -> AppResult<WorkdaySettings> {
        let workday_duration = parse_duration(&self.workday_duration).ok_or_else(|| {
            AppError::InvalidDuration(format!(
                "can not parse workday duration '{}'",
                self.workday_duration
            ))
        })?;
        if workday_duration <= Duration::zero() {
            return Err(AppError::InvalidDuration(format!(
                "workday duration must be positive, got '{}'",
                self.workday_duration
            )));
        }

        if self.started_options.is_empty() {
            return Err(AppError::Config("started_options is empty".into()));
        }
        let started_options = parse_time_options(&self.started_options)?;

        Ok(WorkdaySettings {
            workday_duration,
            started_options,
        })
    }

    /// Full validation used by `config --check` and before any sheet write.
    pub fn validate(&self) -> AppResult<WorkdaySettings> {
        if self.sheet_file.trim().is_empty() {
            return Err(AppError::Config("sheet_file is empty".into()));
        }
        if self.holidays_file.trim().is_empty() {
            return Err(AppError::Config("holidays_file is empty".into()));
        }
        if self.columns.date.is_empty() {
            return Err(AppError::Config("columns.date must be mapped".into()));
        }

        let probe = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or_default();
        let mut rendered = String::new();
        let formatted = write!(rendered, "{}", probe.format(&self.table_date_layout)).is_ok();
        if !formatted
            || NaiveDate::parse_from_str(&rendered, &self.table_date_layout).ok() != Some(probe)
        {
            return Err(AppError::Config(format!(
                "table_date_layout '{}' can not round-trip a date",
                self.table_date_layout
            )));
        }

        self.workday_settings()
    }
}
