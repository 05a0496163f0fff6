use std::io::Write;

use clap::{CommandFactory, FromArgMatches};

use super::plan::{RunPlan, build_plan};
use crate::args::FuzzArgs;
use crate::error::{AppError, AppResult, ValidationError};

fn plan_from(args: &[&str]) -> AppResult<RunPlan> {
    let matches = FuzzArgs::command().try_get_matches_from(args)?;
    let args = FuzzArgs::from_arg_matches(&matches)?;
    build_plan(args, &matches)
}

fn wordlist() -> Result<tempfile::NamedTempFile, String> {
    let mut file = tempfile::NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"admin\nlogin\n")
        .map_err(|err| err.to_string())?;
    Ok(file)
}

fn path_of(file: &tempfile::NamedTempFile) -> Result<String, String> {
    file.path()
        .to_str()
        .map(str::to_owned)
        .ok_or_else(|| "Non UTF-8 temp path".to_owned())
}

#[test]
fn plan_builds_template_and_default_matchers() -> Result<(), String> {
    let list = wordlist()?;
    let path = path_of(&list)?;
    let plan = plan_from(&["fuzzsift", "-u", "http://x/FUZZ", "-w", &path])
        .map_err(|err| err.to_string())?;
    if plan.template().url() != "http://x/FUZZ" || plan.template().keyword() != "FUZZ" {
        return Err("Unexpected template".to_owned());
    }
    if plan.chain().matchers().len() != 1 || !plan.chain().filters().is_empty() {
        return Err("Expected only the default matcher".to_owned());
    }
    Ok(())
}

#[test]
fn plan_requires_url_and_wordlist() -> Result<(), String> {
    let list = wordlist()?;
    let path = path_of(&list)?;
    match plan_from(&["fuzzsift", "-w", &path]) {
        Err(AppError::Validation(ValidationError::MissingUrl)) => {}
        Err(err) => return Err(format!("Unexpected error: {}", err)),
        Ok(_) => return Err("Expected missing URL".to_owned()),
    }
    match plan_from(&["fuzzsift", "-u", "http://x/FUZZ"]) {
        Err(AppError::Validation(ValidationError::MissingWordlist)) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected missing wordlist".to_owned()),
    }
}

#[test]
fn plan_rejects_unused_keyword() -> Result<(), String> {
    let list = wordlist()?;
    let path = path_of(&list)?;
    match plan_from(&["fuzzsift", "-u", "http://x/admin", "-w", &path]) {
        Err(AppError::Validation(ValidationError::KeywordNotUsed { keyword })) if keyword == "FUZZ" => {}
        Err(err) => return Err(format!("Unexpected error: {}", err)),
        Ok(_) => return Err("Expected unused keyword to be rejected".to_owned()),
    }
    plan_from(&[
        "fuzzsift",
        "-u",
        "http://x/",
        "-w",
        &path,
        "-H",
        "X-Token: FUZZ",
    ])
    .map(drop)
    .map_err(|err| format!("Header keyword should count as used: {}", err))
}

#[test]
fn plan_rejects_output_format_without_output() -> Result<(), String> {
    let list = wordlist()?;
    let path = path_of(&list)?;
    match plan_from(&["fuzzsift", "-u", "http://x/FUZZ", "-w", &path, "--of", "json"]) {
        Err(AppError::Validation(ValidationError::OutputFormatRequiresOutput)) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected --of without -o to fail".to_owned()),
    }
}

#[test]
fn plan_surfaces_invalid_predicates() -> Result<(), String> {
    let list = wordlist()?;
    let path = path_of(&list)?;
    match plan_from(&["fuzzsift", "-u", "http://x/FUZZ", "-w", &path, "--mc", "2xx"]) {
        Err(AppError::Filter(err)) if err.to_string().contains("-fc / -mc") => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected invalid matcher to fail".to_owned()),
    }
}

#[test]
fn plan_uses_config_file() -> Result<(), String> {
    let list = wordlist()?;
    let path = path_of(&list)?;
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let config_path = dir.path().join("fuzzsift.toml");
    let config = format!(
        "url = \"http://x/api/FUZZ\"\nwordlist = {:?}\n\n[matchers]\nstatus = \"200\"\n",
        path
    );
    std::fs::write(&config_path, config).map_err(|err| err.to_string())?;
    let config_arg = config_path
        .to_str()
        .ok_or_else(|| "Non UTF-8 config path".to_owned())?;

    let plan = plan_from(&["fuzzsift", "--config", config_arg, "--fc", "404"])
        .map_err(|err| err.to_string())?;
    if plan.template().url() != "http://x/api/FUZZ" {
        return Err(format!("Unexpected URL: {}", plan.template().url()));
    }
    let matchers: Vec<String> = plan.chain().matchers().iter().map(|m| m.repr()).collect();
    if matchers != vec!["Response status: 200".to_owned()] {
        return Err(format!("Unexpected matchers: {:?}", matchers));
    }
    if plan.chain().filters().len() != 1 {
        return Err("Expected the CLI filter".to_owned());
    }
    Ok(())
}
