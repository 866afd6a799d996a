//! Input timelines for headless runs
//!
//! A timeline is a whitespace separated list of steps:
//!
//! | step            | effect                                          |
//! |-----------------|-------------------------------------------------|
//! | `w`, `w+d*20`   | hold the listed keys for N frames (default 1)   |
//! | `_`, `wait*30`  | hold nothing for N frames                       |
//! | `@projects`     | select a section from the navigation bar        |
//! | `#laptop`       | click a hotspot                                 |
//! | `!start`        | press "start exploring" on the loading screen   |
//! | `!load`         | end the loading screen immediately              |
//! | `!mute`, `!close`, `!controls`, `!follow`, `!end` | shell toggles     |
//!
//! Lines starting with `//` are ignored. Held keys are replaced, not merged,
//! by each key step, so two interact steps in a row need a `_` between them
//! to produce two presses.

use crate::session::{FrameReport, Portfolio};
use crate::{PortfolioError, Result};
use folio_core::Key;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Start,
    Load,
    Mute,
    Close,
    Controls,
    Follow,
    End,
}

impl FromStr for ShellAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "start" => Ok(ShellAction::Start),
            "load" => Ok(ShellAction::Load),
            "mute" => Ok(ShellAction::Mute),
            "close" => Ok(ShellAction::Close),
            "controls" => Ok(ShellAction::Controls),
            "follow" => Ok(ShellAction::Follow),
            "end" => Ok(ShellAction::End),
            other => Err(format!("unknown action '!{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Hold { keys: Vec<Key>, frames: u32 },
    Section(String),
    Click(String),
    Shell(ShellAction),
}

/// Summary of a timeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScriptOutcome {
    pub frames: u64,
    /// Hotspot ids reached with the interact key, in order
    pub interactions: Vec<String>,
    pub last_frame: Option<FrameReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self> {
        let mut steps = Vec::new();
        let tokens = source
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .flat_map(str::split_whitespace);

        for (index, token) in tokens.enumerate() {
            let step = parse_step(token)
                .map_err(|message| PortfolioError::script(index + 1, message))?;
            steps.push(step);
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Total frames the hold steps will run
    pub fn frame_count(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Hold { frames, .. } => u64::from(*frames),
                _ => 0,
            })
            .sum()
    }

    /// Play the timeline against a session with a fixed frame interval
    pub fn run(&self, portfolio: &mut Portfolio, dt: f32) -> Result<ScriptOutcome> {
        let mut outcome = ScriptOutcome::default();

        for (index, step) in self.steps.iter().enumerate() {
            match step {
                Step::Hold { keys, frames } => {
                    portfolio.set_keys(keys.iter().copied());
                    for _ in 0..*frames {
                        let report = portfolio.frame(dt);
                        if let Some(id) = &report.interacted {
                            outcome.interactions.push(id.clone());
                        }
                        outcome.frames += 1;
                        outcome.last_frame = Some(report);
                    }
                }
                Step::Section(section) => portfolio.change_section(section.as_str()),
                Step::Click(id) => portfolio
                    .click_hotspot(id)
                    .map_err(|e| PortfolioError::script(index + 1, e.to_string()))?,
                Step::Shell(action) => apply(portfolio, *action),
            }
        }

        portfolio.release_all();
        Ok(outcome)
    }
}

impl FromStr for Script {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        Script::parse(s)
    }
}

fn apply(portfolio: &mut Portfolio, action: ShellAction) {
    match action {
        ShellAction::Start => portfolio.start_exploring(),
        ShellAction::Load => portfolio.finish_loading(),
        ShellAction::Mute => {
            portfolio.toggle_mute();
        }
        ShellAction::Close => portfolio.close_info(),
        ShellAction::Controls => {
            portfolio.toggle_controls();
        }
        ShellAction::Follow => {
            portfolio.toggle_follow();
        }
        ShellAction::End => portfolio.end(),
    }
}

fn parse_step(token: &str) -> std::result::Result<Step, String> {
    if let Some(section) = token.strip_prefix('@') {
        return non_empty(section, "section").map(Step::Section);
    }
    if let Some(id) = token.strip_prefix('#') {
        return non_empty(id, "hotspot").map(Step::Click);
    }
    if let Some(action) = token.strip_prefix('!') {
        return action.parse().map(Step::Shell);
    }

    let (body, frames) = match token.rsplit_once('*') {
        Some((body, count)) => {
            let frames = count
                .parse::<u32>()
                .map_err(|_| format!("invalid frame count '{}'", count))?;
            (body, frames)
        }
        None => (token, 1),
    };

    if body == "_" || body == "wait" {
        return Ok(Step::Hold {
            keys: Vec::new(),
            frames,
        });
    }

    let keys = body
        .split('+')
        .map(|name| name.parse::<Key>().map_err(|e| e.to_string()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Step::Hold { keys, frames })
}

fn non_empty(value: &str, what: &str) -> std::result::Result<String, String> {
    if value.is_empty() {
        Err(format!("missing {} name", what))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_steps() {
        let script = Script::parse("w*10 w+d _*3 space").unwrap();
        assert_eq!(
            script.steps(),
            &[
                Step::Hold {
                    keys: vec![Key::KeyW],
                    frames: 10
                },
                Step::Hold {
                    keys: vec![Key::KeyW, Key::KeyD],
                    frames: 1
                },
                Step::Hold {
                    keys: vec![],
                    frames: 3
                },
                Step::Hold {
                    keys: vec![Key::Space],
                    frames: 1
                },
            ]
        );
        assert_eq!(script.frame_count(), 15);
    }

    #[test]
    fn test_parse_shell_steps() {
        let script = Script::parse("!start @projects #laptop !close").unwrap();
        assert_eq!(
            script.steps(),
            &[
                Step::Shell(ShellAction::Start),
                Step::Section("projects".to_string()),
                Step::Click("laptop".to_string()),
                Step::Shell(ShellAction::Close),
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        let script = Script::parse("// walk forward\nw*2\n  // done\n").unwrap();
        assert_eq!(script.steps().len(), 1);
    }

    #[test]
    fn test_errors_name_the_step() {
        let err = Script::parse("w*2 jumpjet").unwrap_err();
        assert!(matches!(err, PortfolioError::Script { step: 2, .. }), "got {err}");

        assert!(Script::parse("w*x").is_err());
        assert!(Script::parse("!dance").is_err());
        assert!(Script::parse("@").is_err());
    }
}
