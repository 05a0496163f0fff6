use clap::Parser;

use crate::error::{AppError, AppResult};

use super::FuzzArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<FuzzArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    FuzzArgs::try_parse_from(args).map_err(AppError::from)
}
