// SPDX-License-Identifier: MIT OR ISC
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::DrawError;
use crate::introspector::Introspector;
use crate::messages::Locale;
use crate::store::{evict_random, NameStore};
use crate::tally;
use crate::types::{Eviction, NameList, Winners};

/// What happened during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// None if the file held no names
    pub eviction: Option<Eviction>,
    /// The names left in the file after the run
    pub remaining: NameList,
    /// The winners among the remaining names
    pub winners: Option<Winners>,
}

/// One pass over the names file: load, evict, save, report.
pub struct Draw<'a> {
    store: NameStore,
    locale: Locale,
    is: Introspector<'a>,
}
impl<'a> Draw<'a> {
    pub fn new(store: NameStore, locale: Locale, is: Introspector<'a>) -> Self {
        Draw{ store, locale, is }
    }

    /// Run the draw, writing the user-facing lines to `out`.
    ///
    /// If the file has no names it is left alone and the user is asked to add one.
    /// Otherwise a random name is removed and announced before the file is rewritten.
    /// Either way the winners among what is left are reported last.
    pub fn run<R: Rng + ?Sized, W: Write>(
        &mut self,
        rng: &mut R,
        out: &mut W,
    ) -> Result<Outcome, DrawError> {
        let mut names = self.store.load(&mut self.is)?;
        let path = self.store.path();

        let eviction = match evict_random(&mut names, rng, &mut self.is) {
            None => {
                writeln!(out, "{}", self.locale.add_your_name(path)).map_err(DrawError::Output)?;
                None
            }
            Some(ev) => {
                writeln!(out, "{}", self.locale.removed(&ev.name, path)).map_err(DrawError::Output)?;
                self.store.save(&names, &mut self.is)?;
                Some(ev)
            }
        };

        let (winners, line) = tally::winners_report(names.iter(), self.locale, &mut self.is);
        writeln!(out, "{line}").map_err(DrawError::Output)?;

        Ok(Outcome{ eviction, remaining: names, winners })
    }
}

/// A generator which always produces the same draws for the same phrase.
///
/// The phrase is hashed with BLAKE2b-512 and the first 32 bytes become the seed.
pub fn seeded_rng(phrase: &str) -> StdRng {
    use blake2::{Blake2b512, Digest};
    let mut hasher = Blake2b512::new();
    hasher.update(phrase.as_bytes());
    let hash: [u8; 64] = hasher.finalize().into();
    let mut seed = [0_u8; 32];
    seed.copy_from_slice(&hash[..32]);
    StdRng::from_seed(seed)
}

/// A generator seeded from the operating system, different on every run.
pub fn os_rng() -> StdRng {
    StdRng::from_os_rng()
}
