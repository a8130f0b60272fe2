//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;

use crate::tree::Balancing;

/// Terminal playground for binary search trees: plain BST and self-balancing AVL
#[derive(Parser, Debug)]
#[command(name = "treelab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tree mode (overrides the configured default)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,
}

/// Tree variant selectable at startup.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain binary search tree
    Bst,
    /// Self-balancing AVL tree
    Avl,
}

impl From<Mode> for Balancing {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Bst => Balancing::Plain,
            Mode::Avl => Balancing::Avl,
        }
    }
}
