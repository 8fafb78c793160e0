//! Reading network lists.
//!
//! - [`reader`] - line-oriented CIDR list parsing

mod reader;

use std::fmt;

pub use reader::{read_network_file, read_networks};

/// Which input list a network came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListKind {
    Include,
    Exclude,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ListKind::Include => write!(f, "include"),
            ListKind::Exclude => write!(f, "exclude"),
        }
    }
}
