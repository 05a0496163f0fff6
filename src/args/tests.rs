use super::*;
use crate::args::defaults::DEFAULT_KEYWORD;
use crate::args::parsers::{parse_bool_env, parse_duration_arg, parse_size_arg};
use crate::args::test_support::parse_test_args;
use crate::error::{AppError, AppResult};
use std::time::Duration;

mod options;
mod sizes;
