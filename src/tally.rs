// SPDX-License-Identifier: MIT OR ISC
use std::collections::HashMap;

use crate::introspector::{Introspector, TallyComputed, TallyResult};
use crate::messages::Locale;
use crate::types::{normalize, Winners};

struct Group {
    /// The normalized name
    key: String,
    /// How many entries normalize to this key
    count: u64,
}

/// Occurrence count per normalized name, kept in order of first appearance.
pub struct Tally {
    groups: Vec<Group>,
}
impl Tally {
    pub fn new<'s>(names: impl IntoIterator<Item = &'s str>) -> Self {
        let mut group_idx_by_key: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<Group> = Vec::new();
        for name in names {
            let key = normalize(name);
            if let Some(&idx) = group_idx_by_key.get(&key) {
                groups[idx].count += 1;
            } else {
                group_idx_by_key.insert(key.clone(), groups.len());
                groups.push(Group{ key, count: 1 });
            }
        }
        Tally { groups }
    }

    /// Number of occurrences of a name, after normalizing it.
    pub fn count(&self, name: &str) -> u64 {
        let key = normalize(name);
        self.groups.iter().find(|g|g.key == key).map(|g|g.count).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.groups.iter().map(|g|(g.key.as_str(), g.count))
    }

    /// Every name which shares the highest count. None if nothing was counted.
    pub fn winners(&self) -> Option<Winners> {
        let max = self.groups.iter().map(|g|g.count).max()?;
        Some(Winners{
            names: self.groups.iter()
                .filter(|g|g.count == max)
                .map(|g|g.key.clone())
                .collect(),
            count: max,
        })
    }
}

/// Count the names and work out the winners.
pub fn compute_winners<'a, 's>(
    names: impl IntoIterator<Item = &'s str>,
    is: &mut Introspector<'a>,
) -> Option<Winners> {
    let tally = Tally::new(names);
    is.event(||TallyComputed{
        groups: tally.iter().map(|(k, c)|(k.to_owned(), c)).collect(),
    });
    let winners = tally.winners();
    is.event(||TallyResult{ winners: winners.clone() });
    winners
}

/// Count the names, returning the winners along with the line printed to the user.
pub fn winners_report<'a, 's>(
    names: impl IntoIterator<Item = &'s str>,
    locale: Locale,
    is: &mut Introspector<'a>,
) -> (Option<Winners>, String) {
    let winners = compute_winners(names, is);
    let line = match &winners {
        Some(w) => locale.winners(w),
        None => locale.no_winners().to_owned(),
    };
    (winners, line)
}

/// Render the winners of the names as the line printed to the user.
pub fn report<'a, 's>(
    names: impl IntoIterator<Item = &'s str>,
    locale: Locale,
    is: &mut Introspector<'a>,
) -> String {
    winners_report(names, locale, is).1
}
