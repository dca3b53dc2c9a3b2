// SPDX-License-Identifier: MIT OR ISC
use std::path::Path;

use clap::ValueEnum;

use crate::types::Winners;

/// The language of the lines printed to stdout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "ru")]
    Russian,
}
impl Locale {
    pub fn add_your_name(self, path: &Path) -> String {
        match self {
            Locale::English => format!("Add your name to {}", path.display()),
            Locale::Russian => format!("Добавь своё имя в {}", path.display()),
        }
    }
    pub fn removed(self, name: &str, path: &Path) -> String {
        match self {
            Locale::English => format!(
                "We removed \"{name}\". Now add your name on any line of {}", path.display()),
            Locale::Russian => format!(
                "Мы удалили \"{name}\". Теперь добавь своё имя в любой строке {}", path.display()),
        }
    }
    pub fn winners(self, w: &Winners) -> String {
        let names = w.names.join(", ");
        match self {
            Locale::English => format!("Winners: {names}\n\twith result: {}", w.count),
            Locale::Russian => format!("Победители: {names}\n\tс результатом: {}", w.count),
        }
    }
    pub fn no_winners(self) -> &'static str {
        match self {
            Locale::English => "No winners :(",
            Locale::Russian => "Победителей нет :(",
        }
    }
}
