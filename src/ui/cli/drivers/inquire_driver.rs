use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};
use std::fmt::Display;
use std::str::FromStr;

pub struct InquireDriver;

fn check_bounds<T: PartialOrd + Display>(x: &T, min: Option<&T>, max: Option<&T>) -> Validation {
    match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => {
            Validation::Invalid(format!("Must be between {lo} and {hi}").into())
        }
        (Some(lo), None) if x < lo => Validation::Invalid(format!("Must be ≥ {lo}").into()),
        (None, Some(hi)) if x > hi => Validation::Invalid(format!("Must be ≤ {hi}").into()),
        _ => Validation::Valid,
    }
}

fn ask_bounded<T>(title: &str, help: &str, default: T, min: Option<T>, max: Option<T>) -> Result<T>
where
    T: Copy + PartialOrd + Display + FromStr + 'static,
{
    Ok(CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help)
        .with_validator(move |x: &T| Ok(check_bounds(x, min.as_ref(), max.as_ref())))
        .prompt()?)
}

impl PromptDriver for InquireDriver {
    fn select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize> {
        let mut select = Select::new(title, options.to_vec());
        if let Some(help) = help {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        ask_bounded(title, help, default, min, max)
    }
}
