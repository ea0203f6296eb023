//! Command-line argument parsing
//!
//! `maskfield [--config PATH] [--check CHECK]... [--json] <FIELD> [KEYS]...`
//!
//! Each KEYS argument is typed into the field one character at a time.
//! Bracketed names stand for editing keys: `<bs>`, `<del>`, `<left>`,
//! `<right>`, `<home>`, `<end>`, `<all>` (select all), `<clear>`. A literal
//! `<` is written `<<`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::editable::{MoveTarget, TextEditMsg};
use crate::field::Check;

/// Type into a masked field and validate the result
#[derive(Parser, Debug)]
#[command(name = "maskfield", version, about = "Type into a masked field and validate it")]
pub struct CliArgs {
    /// Field name from the fields file
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Keystrokes to type, in order
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Fields file (defaults to ~/.config/maskfield/fields.yaml)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Checks to run after typing (default: all)
    #[arg(long = "check", value_enum, value_name = "CHECK")]
    pub checks: Vec<CheckArg>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Check names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckArg {
    NonEmpty,
    Range,
    Pattern,
    All,
}

impl From<CheckArg> for Check {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::NonEmpty => Check::NonEmpty,
            CheckArg::Range => Check::Range,
            CheckArg::Pattern => Check::EqualsOrPattern,
            CheckArg::All => Check::All,
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub field: String,
    pub config_path: Option<PathBuf>,
    pub keystrokes: Vec<TextEditMsg>,
    pub checks: Vec<Check>,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let mut keystrokes = Vec::new();
        for keys in &self.keys {
            keystrokes.extend(parse_keystrokes(keys)?);
        }

        let checks = if self.checks.is_empty() {
            vec![Check::All]
        } else {
            self.checks.into_iter().map(Check::from).collect()
        };

        Ok(RunConfig {
            field: self.field,
            config_path: self.config,
            keystrokes,
            checks,
            json: self.json,
        })
    }
}

fn named_key(name: &str) -> Option<TextEditMsg> {
    let msg = match name {
        "bs" => TextEditMsg::DeleteBackward,
        "del" => TextEditMsg::DeleteForward,
        "left" => TextEditMsg::Move(MoveTarget::Left),
        "right" => TextEditMsg::Move(MoveTarget::Right),
        "home" => TextEditMsg::Move(MoveTarget::Start),
        "end" => TextEditMsg::Move(MoveTarget::End),
        "all" => TextEditMsg::SelectAll,
        "clear" => TextEditMsg::Clear,
        _ => return None,
    };
    Some(msg)
}

/// Parse a keystroke script into editing messages
pub fn parse_keystrokes(script: &str) -> Result<Vec<TextEditMsg>, String> {
    let mut msgs = Vec::new();
    let mut chars = script.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            msgs.push(TextEditMsg::InsertChar(ch));
            continue;
        }
        if chars.peek() == Some(&'<') {
            chars.next();
            msgs.push(TextEditMsg::InsertChar('<'));
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '>' {
                closed = true;
                break;
            }
            name.push(c);
        }
        if !closed {
            return Err(format!("Unclosed key <{} in {:?}", name, script));
        }

        let msg = named_key(&name).ok_or_else(|| format!("Unknown key <{}> in {:?}", name, script))?;
        msgs.push(msg);
    }

    Ok(msgs)
}
