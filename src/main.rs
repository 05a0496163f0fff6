mod args;
mod config;
mod entry;
mod error;
mod filter;
mod http;
mod input;
mod job;
mod logger;
mod output;
mod shutdown;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
