// SPDX-License-Identifier: MIT OR ISC
#![allow(non_camel_case_types)] // better_any derive needs this

use std::collections::HashMap;
use std::any::TypeId;
use std::path::PathBuf;

use better_any::{Tid, TidAble, TidExt};

use crate::types::{SaveMode, Winners};

/// A marker trait for each struct that can be used as an introspector event.
pub trait Event<'a>: Tid<'a> {}

/// The names file has been read and filtered.
#[derive(Tid)]
pub struct NamesLoaded {
    pub path: PathBuf,
    /// Number of lines in the file, blank ones included
    pub lines_read: usize,
    /// Number of names which survived filtering
    pub names_kept: usize,
}
impl<'a> Event<'a> for NamesLoaded {}

#[derive(Tid)]
pub struct BlankLinesDropped {
    /// 1-based line numbers of every blank or whitespace-only line
    pub line_numbers: Vec<usize>,
}
impl<'a> Event<'a> for BlankLinesDropped {}

#[derive(Tid)]
pub struct NameEvicted {
    pub index: usize,
    pub name: String,
    /// Length of the list before the eviction
    pub list_len: usize,
}
impl<'a> Event<'a> for NameEvicted {}

#[derive(Tid)]
pub struct NamesSaved {
    pub path: PathBuf,
    pub names_written: usize,
    pub mode: SaveMode,
}
impl<'a> Event<'a> for NamesSaved {}

#[derive(Tid)]
pub struct TallyComputed {
    /// Each normalized name with its number of occurrences, in order of first appearance
    pub groups: Vec<(String, u64)>,
}
impl<'a> Event<'a> for TallyComputed {}

#[derive(Tid)]
pub struct TallyResult {
    /// None if there were no names to count
    pub winners: Option<Winners>,
}
impl<'a> Event<'a> for TallyResult {}

type Handler<'a> = Box<dyn FnMut(&dyn Event<'a>) + 'a>;

/// Dispatches events to whoever subscribed to their type.
/// Events are only constructed if someone is listening.
#[derive(Default)]
pub struct Introspector<'a> {
    handlers: HashMap<TypeId, Vec<Handler<'a>>>,
}
impl<'a> Introspector<'a> {
    /// Call `f` with `c` for every event of type `R`.
    pub fn subscribe<C: 'static, R: Event<'a> + 'a>(&mut self, mut c: C, f: fn(c: &mut C, &R)) {
        let handler: Handler<'a> = Box::new(move |e: &dyn Event<'a>| {
            match e.downcast_ref::<R>() {
                Some(e) => f(&mut c, e),
                None => tracing::warn!("Unable to downcast introspector event"),
            }
        });
        self.handlers.entry(R::id()).or_default().push(handler);
    }
    pub fn event<R: Event<'a>>(&mut self, f: impl FnOnce() -> R) {
        let Some(handlers) = self.handlers.get_mut(&R::id()) else {
            return;
        };
        let r = f();
        let r: &dyn Event<'a> = &r;
        for h in handlers {
            h(r);
        }
    }
}
