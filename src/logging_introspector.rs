// SPDX-License-Identifier: MIT OR ISC
use crate::introspector::{
    Introspector,
    NamesLoaded,
    BlankLinesDropped,
    NameEvicted,
    NamesSaved,
    TallyComputed,
    TallyResult,
};

/// An introspector which forwards every event to `tracing`.
pub fn new<'a>() -> Introspector<'a> {
    let mut is = Introspector::default();
    is.subscribe((), |(),e:&NamesLoaded|{
        tracing::debug!(
            path = %e.path.display(),
            lines_read = e.lines_read,
            names_kept = e.names_kept,
            "Loaded names"
        );
    });
    is.subscribe((), |(),e:&BlankLinesDropped|{
        if e.line_numbers.is_empty() {
            return;
        }
        tracing::debug!(count = e.line_numbers.len(), lines = ?e.line_numbers, "Dropped blank lines");
    });
    is.subscribe((), |(),e:&NameEvicted|{
        tracing::info!(
            name = %e.name,
            index = e.index,
            of = e.list_len,
            "Evicted name"
        );
    });
    is.subscribe((), |(),e:&NamesSaved|{
        tracing::debug!(
            path = %e.path.display(),
            names_written = e.names_written,
            mode = ?e.mode,
            "Saved names"
        );
    });
    is.subscribe((), |(),e:&TallyComputed|{
        for (name, count) in &e.groups {
            tracing::debug!("    - {name}: {count}");
        }
    });
    is.subscribe((), |(),e:&TallyResult|{
        match &e.winners {
            Some(w) => tracing::debug!(winners = ?w.names, count = w.count, "Tally complete"),
            None => tracing::debug!("Tally complete, no names left"),
        }
    });
    is
}
