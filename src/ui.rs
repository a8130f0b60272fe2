//! Interactive terminal menu for tree experimentation.
//!
//! Line-oriented loop: one hotkey per line, values prompted separately.
//! Malformed input is reported and the loop reprompts; EOF ends the session.

use std::io::{self, Write};

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::cli::output;
use crate::config::Settings;
use crate::tree::display::render_levels;
use crate::tree::{Balancing, Tree};

/// Recoverable input errors; the loop reports them and reprompts.
#[derive(Error, Debug)]
pub enum UiError {
    #[error("input must be a single character")]
    NotSingleChar,

    #[error("invalid choice: {0:?}")]
    UnknownHotkey(char),

    #[error("invalid input (not an integer): {0:?}")]
    NotAnInteger(String),
}

/// Blank entries render as spacing, single characters before the colon are
/// the hotkeys.
const MENU_OPTIONS: &[&str] = &[
    "m: menu",
    "t: display tree",
    "",
    "a: add value",
    "d: delete value",
    "f: test membership",
    "",
    "q: quit",
];

pub struct TerminalUi {
    tree: Tree,
    settings: Settings,
}

impl TerminalUi {
    pub fn new(balancing: Balancing, settings: Settings) -> Self {
        match balancing {
            Balancing::Plain => info!("running in BST mode"),
            Balancing::Avl => info!("running in AVL mode"),
        }
        Self {
            tree: Tree::new(balancing),
            settings,
        }
    }

    /// Runs the menu loop until `q` or EOF on stdin.
    pub fn run(&mut self) -> io::Result<()> {
        self.display_menu();
        loop {
            let Some(line) = read_line("menu")? else {
                break;
            };
            let choice = match parse_choice(&line, &menu_hotkeys()) {
                Ok(choice) => choice,
                Err(e) => {
                    output::error(&e);
                    continue;
                }
            };
            debug!(?choice, "menu selection");
            match choice {
                'm' => self.display_menu(),
                't' => self.display_tree(),
                'a' => self.add_value()?,
                'd' => self.delete_value()?,
                'f' => self.test_membership()?,
                'q' => break,
                other => {
                    error!("menu case {other:?} is missing, aborting");
                    break;
                }
            }
        }
        Ok(())
    }

    fn display_menu(&self) {
        println!("{}", "*".repeat(self.settings.menu_width));
        for opt in MENU_OPTIONS {
            println!("\t{opt}");
        }
        println!("{}", "~".repeat(self.settings.menu_width));
    }

    /// Shows the tree's structure and content.
    fn display_tree(&self) {
        if self.tree.is_empty() {
            println!("\n  Tree is empty\n");
            return;
        }
        let slots = self.tree.level_order_with_gaps();
        println!();
        print!("{}", render_levels(&slots, &self.settings.gap_marker));
        println!();
        print!("{}", self.tree.to_tree_string());
        println!();
        println!("Size:      {}", self.tree.size());
        println!("Height:    {}", self.tree.height());
        println!("Inorder:   [{}]", self.tree.inorder().iter().join(", "));
        println!("Preorder:  [{}]", self.tree.preorder().iter().join(", "));
        println!("Postorder: [{}]", self.tree.postorder().iter().join(", "));
        println!(
            "BFS star:  [{}]",
            slots
                .iter()
                .map(|slot| match slot {
                    Some(value) => value.to_string(),
                    None => self.settings.gap_marker.clone(),
                })
                .join(", ")
        );
        println!();
    }

    fn add_value(&mut self) -> io::Result<()> {
        let Some(line) = read_line("Enter value to be added")? else {
            return Ok(());
        };
        match parse_int(&line) {
            Ok(value) => self.tree.add(value),
            Err(e) => output::error(&e),
        }
        Ok(())
    }

    fn delete_value(&mut self) -> io::Result<()> {
        let Some(line) = read_line("Enter value to be deleted")? else {
            return Ok(());
        };
        match parse_int(&line) {
            Ok(value) => self.tree.delete(value),
            Err(e) => output::error(&e),
        }
        Ok(())
    }

    fn test_membership(&self) -> io::Result<()> {
        let Some(line) = read_line("Enter search value")? else {
            return Ok(());
        };
        match parse_int(&line) {
            Ok(value) => {
                let verdict = if self.tree.is_member(value) {
                    "a member"
                } else {
                    "a non-member"
                };
                println!("\n  {value} is {verdict}\n");
            }
            Err(e) => output::error(&e),
        }
        Ok(())
    }
}

/// Prompts and reads one line from stdin; None at EOF.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    output::prompt(prompt);
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        // keep the shell prompt on its own line after ^D
        println!();
        io::stdout().flush()?;
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

/// Hotkeys derived from the option list: single characters before the colon.
fn menu_hotkeys() -> Vec<char> {
    MENU_OPTIONS
        .iter()
        .filter_map(|opt| {
            let (key, _) = opt.split_once(':')?;
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(hotkey), None) => Some(hotkey),
                _ => None,
            }
        })
        .collect()
}

fn parse_choice(input: &str, hotkeys: &[char]) -> Result<char, UiError> {
    let mut chars = input.chars();
    let (Some(first), None) = (chars.next(), chars.next()) else {
        return Err(UiError::NotSingleChar);
    };
    if !hotkeys.contains(&first) {
        return Err(UiError::UnknownHotkey(first));
    }
    Ok(first)
}

fn parse_int(input: &str) -> Result<i64, UiError> {
    input
        .trim()
        .parse()
        .map_err(|_| UiError::NotAnInteger(input.to_string()))
}
