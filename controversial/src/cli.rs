//! Command-line arguments of the `controversial` binary.

use crate::error::Error;
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_COUNT: i64 = 5;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print youtube channel's controversial videos")]
pub struct Cli {
    /// channel's name
    #[arg(value_name = "channel")]
    pub channel: String,

    /// amount of videos to print
    #[arg(
        long,
        value_name = "count",
        default_value_t = DEFAULT_COUNT,
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// seconds to wait for each API response
    #[arg(
        long,
        value_name = "secs",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl Cli {
    /// The requested count, if it is positive.
    pub fn count(&self) -> Result<usize, Error> {
        usize::try_from(self.count)
            .ok()
            .filter(|&count| count > 0)
            .ok_or(Error::InvalidCount(self.count))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
