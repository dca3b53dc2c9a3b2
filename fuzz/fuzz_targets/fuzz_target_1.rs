#![no_main]

use namedraw::{evict_random, logging_introspector, Introspector, NameList, Tally};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Arbitrary,Debug)]
struct DrawBin {
    seed: u64,
    lines: Vec<String>,
}

fuzz_target!(|data: DrawBin| {
    main_fun(&data)
});

fn main_fun(data: &DrawBin) {
    let verbose = std::env::args().any(|a|a == "-v");
    let mut is = if verbose {
        logging_introspector::new()
    } else {
        Introspector::default()
    };

    let mut names: NameList = data.lines.iter().map(|l|l.as_str()).collect();
    assert!(names.iter().all(|n|!n.trim().is_empty()));
    let before = names.clone();

    let mut rng = StdRng::seed_from_u64(data.seed);
    match evict_random(&mut names, &mut rng, &mut is) {
        None => {
            assert!(before.is_empty());
        }
        Some(ev) => {
            assert!(ev.index < before.len());
            assert_eq!(names.len(), before.len() - 1);
            assert_eq!(ev.name, before.as_slice()[ev.index]);
        }
    }

    let tally = Tally::new(names.iter());
    match tally.winners() {
        None => assert!(names.is_empty()),
        Some(w) => {
            assert!(!w.names.is_empty());
            assert!(w.count >= 1);
            for (name, count) in tally.iter() {
                assert!(count <= w.count);
                assert_eq!(count == w.count, w.names.iter().any(|n|n == name));
            }
            let total: u64 = tally.iter().map(|(_, c)|c).sum();
            assert_eq!(total, names.len() as u64);
        }
    }
}
