//! Terminal multi-select backing the interactive artifact choice.

use adl_core::platform::Chooser;
use anyhow::Result;
use std::io::IsTerminal;

pub struct TerminalChooser;

impl Chooser for TerminalChooser {
    fn choose(&self, label: &str, options: &[String]) -> Result<Vec<usize>> {
        let picked = dialoguer::MultiSelect::new()
            .with_prompt(label)
            .items(options)
            .interact()?;
        Ok(picked)
    }
}

/// True when both stdin and stdout are terminals.
pub fn can_prompt() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}
