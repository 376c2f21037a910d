//! Cross-algorithm behavioural properties of the generator core.
//!
//! Exercised through the real registry so every builtin algorithm is
//! covered: determinism, discard equivalence, interleaving independence,
//! bounded-rand uniformity, and shuffle permutation preservation.

use proptest::prelude::*;
use randflow_algorithms::{count, open, open_id};
use randflow_core::{Lifecycle, RandError};

const NAMES: [&str; 4] = ["jkiss", "mt19937", "mwc256", "mwc8222"];

#[test]
fn same_seed_same_stream() {
    for name in NAMES {
        let mut a = open(name).unwrap();
        let mut b = open(name).unwrap();
        a.seed_with(&[0xfeed, 0xface]).unwrap();
        b.seed_with(&[0xfeed, 0xface]).unwrap();
        for i in 0..5000 {
            assert_eq!(
                a.next32().unwrap(),
                b.next32().unwrap(),
                "{} diverged at word {}",
                name,
                i
            );
        }
    }
}

#[test]
fn entropy_seeded_streams_differ() {
    for name in NAMES {
        let mut a = open(name).unwrap();
        let mut b = open(name).unwrap();
        a.seed().unwrap();
        b.seed().unwrap();
        let va: Vec<u32> = (0..4).map(|_| a.next32().unwrap()).collect();
        let vb: Vec<u32> = (0..4).map(|_| b.next32().unwrap()).collect();
        assert_ne!(va, vb, "{} entropy seeding repeated a stream", name);
    }
}

#[test]
fn interleaved_generators_are_independent() {
    // Draws on one generator must not perturb another, regardless of the
    // order in which they were opened and seeded.
    let seed = [0xaaaa_5555u32, 0x5555_aaaa];
    let mut g1 = open("mwc256").unwrap();
    let mut g2 = open("mt19937").unwrap();
    let mut g3 = open("jkiss").unwrap();
    let mut g4 = open("mwc256").unwrap();
    let mut g5 = open("jkiss").unwrap();

    g3.seed_with(&seed).unwrap();
    g4.seed_with(&seed).unwrap();
    g1.seed_with(&seed).unwrap();
    g5.seed_with(&seed).unwrap();
    g2.seed_with(&seed).unwrap();

    let v1 = g1.next32().unwrap();
    g2.next32().unwrap();
    let v2 = g5.next32().unwrap();
    assert_eq!(v2, g3.next32().unwrap());
    assert_eq!(v1, g4.next32().unwrap());
}

#[test]
fn discard_equals_drawing_and_dropping() {
    for name in NAMES {
        // Counts straddling the buffer boundary of every algorithm.
        for n in [0usize, 1, 255, 256, 257, 623, 624, 1000, 2000] {
            let mut a = open(name).unwrap();
            let mut b = open(name).unwrap();
            a.seed_value(0x5eed).unwrap();
            b.seed_value(0x5eed).unwrap();
            for _ in 0..n {
                a.next32().unwrap();
            }
            b.discard(n).unwrap();
            assert_eq!(
                a.next32().unwrap(),
                b.next32().unwrap(),
                "{} discard({}) diverged",
                name,
                n
            );
        }
    }
}

#[test]
fn sixty_four_bit_draws_are_word_pairs() {
    for name in NAMES {
        let mut a = open(name).unwrap();
        let mut b = open(name).unwrap();
        a.seed_value(99).unwrap();
        b.seed_value(99).unwrap();
        for _ in 0..1000 {
            let hi = b.next32().unwrap();
            let lo = b.next32().unwrap();
            assert_eq!(a.next64().unwrap(), (u64::from(hi) << 32) | u64::from(lo));
        }
    }
}

#[test]
fn rand_is_uniform_over_52() {
    // Chi-square goodness of fit, 52,000 draws over 52 bins; the 0.001
    // critical value at 51 degrees of freedom is 86.7.
    let mut g = open("jkiss").unwrap();
    g.seed_value(1234).unwrap();
    let mut counts = [0u32; 52];
    for _ in 0..52_000 {
        counts[g.rand(52).unwrap() as usize] += 1;
    }
    let expected = 1000.0;
    let chi2: f64 = counts
        .iter()
        .map(|&c| {
            let d = f64::from(c) - expected;
            d * d / expected
        })
        .sum();
    assert!(chi2 < 86.7, "chi-square {} rejects uniformity", chi2);
}

#[test]
fn shuffle_ordered_pairs_are_equally_likely() {
    // Dealing 2 of 5: all 20 ordered pairs should be uniform. Chi-square
    // 0.001 critical value at 19 degrees of freedom is 43.8.
    let mut g = open("jkiss").unwrap();
    g.seed_value(0xcafe).unwrap();
    let mut counts = [[0u32; 5]; 5];
    let trials = 40_000;
    for _ in 0..trials {
        let mut v = [0usize, 1, 2, 3, 4];
        g.shuffle(&mut v, 2).unwrap();
        counts[v[0]][v[1]] += 1;
    }
    let expected = f64::from(trials) / 20.0;
    let mut chi2 = 0.0;
    for (a, row) in counts.iter().enumerate() {
        for (b, &c) in row.iter().enumerate() {
            if a == b {
                assert_eq!(c, 0);
                continue;
            }
            let d = f64::from(c) - expected;
            chi2 += d * d / expected;
        }
    }
    assert!(chi2 < 43.8, "chi-square {} rejects pair uniformity", chi2);
}

#[test]
fn lifecycle_is_observable_through_registry_opens() {
    let mut g = open_id(2).unwrap();
    assert_eq!(g.lifecycle(), Lifecycle::Allocated);
    assert_eq!(g.next32(), Err(RandError::NotSeeded));
    g.seed_value(1).unwrap();
    assert_eq!(g.lifecycle(), Lifecycle::Seeded);
    g.reseed_value(2).unwrap();
    assert_eq!(g.lifecycle(), Lifecycle::Reseeded);
    assert_eq!(count(), 4);
}

proptest! {
    #[test]
    fn prop_determinism(seed in proptest::collection::vec(any::<u32>(), 1..40), id in 1usize..=4) {
        let mut a = open_id(id).unwrap();
        let mut b = open_id(id).unwrap();
        a.seed_with(&seed).unwrap();
        b.seed_with(&seed).unwrap();
        for _ in 0..64 {
            prop_assert_eq!(a.next32().unwrap(), b.next32().unwrap());
        }
    }

    #[test]
    fn prop_discard_equivalence(n in 0usize..1500, id in 1usize..=4) {
        let mut a = open_id(id).unwrap();
        let mut b = open_id(id).unwrap();
        a.seed_value(42).unwrap();
        b.seed_value(42).unwrap();
        for _ in 0..n {
            a.next32().unwrap();
        }
        b.discard(n).unwrap();
        prop_assert_eq!(a.next32().unwrap(), b.next32().unwrap());
    }

    #[test]
    fn prop_rand_bounded(limit in 1u32..=0xFFFF, seed in any::<u32>()) {
        let mut g = open("jkiss").unwrap();
        g.seed_value(seed).unwrap();
        for _ in 0..32 {
            prop_assert!(g.rand(limit).unwrap() < limit);
        }
    }

    #[test]
    fn prop_shuffle_preserves_multiset(
        len in 2usize..64,
        count_frac in 0.0f64..=1.0,
        seed in any::<u32>(),
    ) {
        let count = ((len as f64) * count_frac) as usize;
        let mut g = open("jkiss").unwrap();
        g.seed_value(seed).unwrap();
        let mut v: Vec<usize> = (0..len).collect();
        g.shuffle(&mut v, count).unwrap();
        let mut sorted = v.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..len).collect::<Vec<usize>>());
    }
}
