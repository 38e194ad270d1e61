#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rrg() -> Command {
    cargo_bin_cmd!("rregister")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub const HEADER: &str = "Date,Started,Finished,Duration,Comment,Month";

/// A fresh directory inside the system temp dir holding a config, a
/// holidays file and a register sheet.
pub struct Fixture {
    pub dir: PathBuf,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let mut dir = env::temp_dir();
        dir.push(format!("rregister_{}", name));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).expect("create fixture dir");
        Self { dir }
    }

    /// Default layout: sheet with one row on Thu 2023-12-28, New Year's Day as holiday.
    pub fn standard(name: &str) -> Self {
        let fx = Self::new(name);
        fx.write_config("");
        fx.write("holidays.txt", "2024-01-01\n");
        fx.write(
            "register.csv",
            &format!("{HEADER}\n2023-12-28,09:00:00,17:00:00,08:00:00,,December\n"),
        );
        fx
    }

    pub fn write(&self, file: &str, content: &str) -> PathBuf {
        let p = self.dir.join(file);
        fs::write(&p, content).expect("write fixture file");
        p
    }

    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.dir.join(file)).expect("read fixture file")
    }

    /// Base configuration plus `extra` YAML lines.
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let yaml = format!(
            "sheet_file: register.csv\n\
             holidays_file: holidays.txt\n\
             workday_duration: 8h\n\
             started_options:\n  - \"09:00:00\"\n\
             {extra}"
        );
        self.write("config.yml", &yaml)
    }

    pub fn config_path(&self) -> String {
        self.dir.join("config.yml").to_string_lossy().to_string()
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}
