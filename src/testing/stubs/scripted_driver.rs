use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Scripted {
    Pick(usize),
    Yes(bool),
    Text(String),
    Int(u64),
    Num(f64),
    /// Accepts whatever default the prompt offers.
    Default,
}

/// Answers prompts from a fixed script, in order.
///
/// With [`ScriptedDriver::answering_defaults`], scalar prompts take their
/// default once the script has nothing queued for them.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Scripted>>,
    defaults_when_idle: bool,
}

impl ScriptedDriver {
    pub fn new(answers: Vec<Scripted>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            defaults_when_idle: false,
        }
    }

    pub fn answering_defaults(mut self) -> Self {
        self.defaults_when_idle = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next_scalar(&self, title: &str) -> Result<Scripted> {
        let mut answers = self.answers.borrow_mut();
        let idle = matches!(answers.front(), None | Some(Scripted::Pick(_)));
        if idle && self.defaults_when_idle {
            return Ok(Scripted::Default);
        }
        match answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("script ran out at '{title}'"),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn select(&self, title: &str, _help: Option<&str>, options: &[String]) -> Result<usize> {
        match self.answers.borrow_mut().pop_front() {
            Some(Scripted::Pick(i)) => Ok(i),
            Some(Scripted::Default) if !options.is_empty() => Ok(0),
            other => bail!("expected a pick for '{title}', script has {other:?}"),
        }
    }

    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next_scalar(title)? {
            Scripted::Yes(b) => Ok(b),
            Scripted::Default => Ok(default),
            other => bail!("expected a bool for '{title}', script has {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        match self.next_scalar(title)? {
            Scripted::Text(s) => Ok(s),
            Scripted::Default => Ok(default.to_string()),
            other => bail!("expected text for '{title}', script has {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        _min: Option<u64>,
        _max: Option<u64>,
    ) -> Result<u64> {
        match self.next_scalar(title)? {
            Scripted::Int(n) => Ok(n),
            Scripted::Default => Ok(default),
            other => bail!("expected an integer for '{title}', script has {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        match self.next_scalar(title)? {
            Scripted::Num(x) => Ok(x),
            Scripted::Default => Ok(default),
            other => bail!("expected a number for '{title}', script has {other:?}"),
        }
    }
}
