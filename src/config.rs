use std::collections::{BTreeSet, HashSet};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use chrono::{NaiveDate, Weekday};
use dotenvy::dotenv;

use crate::report::SubmissionPolicy;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting
    pub rate_per_min: u32,

    pub log_dir: String,

    // Pagination
    pub default_page_size: u32,
    pub max_page_size: u32,

    /// Range used when a request names neither `days` nor `from/to`.
    pub default_range_days: u32,
    /// Longest range a request may ask for.
    pub max_range_days: u32,

    pub submission_policy: SubmissionPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            api_prefix: lookup("API_PREFIX").unwrap_or_else(|| "/api/v1".to_string()),
            rate_per_min: parse_or(&lookup, "RATE_PER_MIN", 1000)?,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            default_page_size: parse_or(&lookup, "DEFAULT_PAGE_SIZE", 10)?,
            max_page_size: parse_or(&lookup, "MAX_PAGE_SIZE", 100)?,
            default_range_days: parse_or(&lookup, "DEFAULT_RANGE_DAYS", 30)?,
            max_range_days: parse_or(&lookup, "MAX_RANGE_DAYS", 366)?,
            submission_policy: SubmissionPolicy {
                locked_weekdays: parse_list::<Weekday, HashSet<_>>(
                    &lookup,
                    "LOCKED_WEEKDAYS",
                    "Fri",
                )?,
                holidays: parse_list::<NaiveDate, BTreeSet<_>>(&lookup, "HOLIDAYS", "")?,
                edit_window_days: parse_or(&lookup, "EDIT_WINDOW_DAYS", 0)?,
            },
        };

        if config.max_page_size == 0 {
            bail!("MAX_PAGE_SIZE must be at least 1");
        }
        if config.default_page_size == 0 {
            bail!("DEFAULT_PAGE_SIZE must be at least 1");
        }
        if config.default_range_days == 0 {
            bail!("DEFAULT_RANGE_DAYS must be at least 1");
        }
        if config.default_range_days > config.max_range_days {
            bail!("DEFAULT_RANGE_DAYS must not exceed MAX_RANGE_DAYS");
        }

        Ok(config)
    }

    pub fn clamp_page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size)
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} has invalid value {raw:?}: {e}")),
        None => Ok(default),
    }
}

fn parse_list<T, C>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<C>
where
    T: FromStr,
    T::Err: std::fmt::Debug,
    C: FromIterator<T>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>()
                .map_err(|e| anyhow!("{key} has invalid entry {item:?}: {e:?}"))
        })
        .collect()
}
