use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use bank_holidays::fetch::{
    DEFAULT_ENDPOINT,
    DEFAULT_MAX_BODY_BYTES,
};

/// Voice skill answering "when is the next UK public holiday"
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config{
    /// Address the skill endpoint listens on
    #[arg(long, env = "HOLIDAY_SKILL_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Whole-UK bank holiday document; region documents live beside it
    #[arg(long, env = "HOLIDAY_SKILL_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Give up on the holiday endpoint after this many seconds
    #[arg(long, env = "HOLIDAY_SKILL_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Refuse holiday documents bigger than this
    #[arg(long, env = "HOLIDAY_SKILL_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Only answer requests addressed to this skill
    #[arg(long, env = "HOLIDAY_SKILL_APPLICATION_ID")]
    pub application_id: Option<String>,
}

impl Config{
    #[must_use] pub fn timeout(&self) -> Duration{
        Duration::from_secs(self.timeout_secs)
    }
}
