//! The static structure tables.
//!
//! The synthemes were compiled by hand and the synthematic totals were taken
//! from Greg Egan's diagram of the Tutte–Coxeter graph on John Baez's page
//! about the outer automorphism of S6: <https://math.ucr.edu/home/baez/six.html>

use std::sync::OnceLock;

use crate::model::{Catalog, Duad, Syntheme, Total};

fn syntheme(name: char, pairs: [(u8, u8); 3]) -> Syntheme {
    Syntheme {
        name,
        duads: [
            Duad::new(pairs[0].0, pairs[0].1),
            Duad::new(pairs[1].0, pairs[1].1),
            Duad::new(pairs[2].0, pairs[2].1),
        ],
    }
}

impl Catalog {
    /// Returns the complete catalog: all 15 synthemes and all 6 synthematic
    /// totals, built once with process lifetime and never mutated.
    #[must_use]
    pub fn full() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog {
            synthemes: [
                syntheme('A', [(1, 2), (3, 4), (5, 6)]),
                syntheme('B', [(1, 2), (3, 5), (4, 6)]),
                syntheme('C', [(1, 2), (3, 6), (4, 5)]),
                syntheme('D', [(1, 3), (2, 4), (5, 6)]),
                syntheme('E', [(1, 3), (2, 5), (4, 6)]),
                syntheme('F', [(1, 3), (2, 6), (4, 5)]),
                syntheme('G', [(1, 4), (2, 3), (5, 6)]),
                syntheme('H', [(1, 4), (2, 5), (3, 6)]),
                syntheme('I', [(1, 4), (2, 6), (3, 5)]),
                syntheme('J', [(1, 5), (2, 3), (4, 6)]),
                syntheme('K', [(1, 5), (2, 4), (3, 6)]),
                syntheme('L', [(1, 5), (2, 6), (3, 4)]),
                syntheme('M', [(1, 6), (2, 3), (4, 5)]),
                syntheme('N', [(1, 6), (2, 4), (3, 5)]),
                syntheme('O', [(1, 6), (2, 5), (3, 4)]),
            ],
            totals: [
                Total { name: "t1", synthemes: ['A', 'F', 'H', 'J', 'N'] },
                Total { name: "t2", synthemes: ['A', 'E', 'I', 'K', 'M'] },
                Total { name: "t3", synthemes: ['B', 'D', 'H', 'L', 'M'] },
                Total { name: "t4", synthemes: ['B', 'F', 'G', 'K', 'O'] },
                Total { name: "t5", synthemes: ['C', 'E', 'G', 'L', 'N'] },
                Total { name: "t6", synthemes: ['C', 'D', 'I', 'J', 'O'] },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn fifteen_synthemes_in_letter_order() {
        let catalog = Catalog::full();
        let names: Vec<char> = catalog.synthemes.iter().map(|s| s.name).collect();
        let expected: Vec<char> = ('A'..='O').collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn lookup_by_name() {
        let catalog = Catalog::full();
        assert_eq!(catalog.syntheme('H').map(|s| s.name), Some('H'));
        assert_eq!(catalog.total("t4").map(|t| t.synthemes), Some(['B', 'F', 'G', 'K', 'O']));
        assert!(catalog.syntheme('P').is_none());
        assert!(catalog.total("t7").is_none());
    }

    #[test]
    fn every_syntheme_partitions_the_ground_set() {
        for s in &Catalog::full().synthemes {
            let mut seen = [false; 7];
            for d in &s.duads {
                for e in [d.low(), d.high()] {
                    assert!((1..=6).contains(&e), "{}: element {} out of range", s.name, e);
                    assert!(!seen[e as usize], "{}: element {} repeated", s.name, e);
                    seen[e as usize] = true;
                }
            }
        }
    }

    #[test]
    fn synthemes_pairwise_distinct() {
        let catalog = Catalog::full();
        for (i, a) in catalog.synthemes.iter().enumerate() {
            for b in &catalog.synthemes[i + 1..] {
                let mut da = a.duads;
                let mut db = b.duads;
                da.sort_unstable();
                db.sort_unstable();
                assert_ne!(da, db, "synthemes {} and {} coincide", a.name, b.name);
            }
        }
    }

    #[test]
    fn each_syntheme_appears_in_exactly_two_totals() {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for t in &Catalog::full().totals {
            for &s in &t.synthemes {
                *counts.entry(s).or_insert(0) += 1;
            }
        }
        assert_eq!(counts.len(), 15);
        for (name, count) in counts {
            assert_eq!(count, 2, "syntheme {} appears in {} totals", name, count);
        }
    }

    #[test]
    fn each_total_covers_all_fifteen_duads() {
        let catalog = Catalog::full();
        for t in &catalog.totals {
            let mut duads = Vec::new();
            for &name in &t.synthemes {
                let s = catalog.syntheme(name);
                assert!(s.is_some(), "{}: unknown syntheme {}", t.name, name);
                if let Some(s) = s {
                    duads.extend_from_slice(&s.duads);
                }
            }
            duads.sort_unstable();
            duads.dedup();
            // 5 synthemes x 3 duads with no repeats = all 15 duads of {1..6}.
            assert_eq!(duads.len(), 15, "{} does not cover all duads", t.name);
        }
    }
}
