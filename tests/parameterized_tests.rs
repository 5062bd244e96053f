use palinscan::fixture::{plant_palindrome, random_letters, repeating_cycle, three_blocks};
use palinscan::{
    BestMatch, MirrorScan, PalindromeScan, PriorityOrder, PriorityScan, PriorityScanConfig,
    ScanReport, to_original_range,
};

fn scan_outward(input: &str) -> ScanReport {
    PriorityScan::scan_with_config(
        &PriorityScanConfig {
            order: PriorityOrder::OutwardOrder,
        },
        input,
    )
}

// All scan configurations under test: MirrorScan plus both PriorityScan
// visiting orders.
fn scanners() -> Vec<(&'static str, fn(&str) -> ScanReport)> {
    vec![
        ("mirror", MirrorScan::scan as fn(&str) -> ScanReport),
        ("priority_two_pointer", PriorityScan::scan),
        ("priority_outward", scan_outward),
    ]
}

// Brute-force O(n^2) oracle: expand around every center, keep the maximal
// palindrome with the earliest start index. Returns (start, len) in symbol
// indices.
fn oracle(input: &str) -> (usize, usize) {
    let s: Vec<char> = input.chars().collect();
    let n = s.len();
    let mut best = (0usize, if n == 0 { 0 } else { 1 });
    let mut consider = |mut lo: isize, mut hi: usize| {
        while lo >= 0 && hi < n && s[lo as usize] == s[hi] {
            lo -= 1;
            hi += 1;
        }
        let start = (lo + 1) as usize;
        let len = hi - start;
        if len > best.1 || (len == best.1 && start < best.0) {
            best = (start, len);
        }
    };
    for c in 0..n {
        consider(c as isize, c);
        consider(c as isize, c + 1);
    }
    best
}

fn oracle_substring(input: &str) -> (String, usize) {
    let s: Vec<char> = input.chars().collect();
    let (start, len) = oracle(input);
    (s[start..start + len].iter().collect(), start)
}

fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.iter().eq(chars.iter().rev())
}

fn run_matches_oracle(name: &str, scan: fn(&str) -> ScanReport, input: &str) {
    let (expected, expected_start) = oracle_substring(input);
    let report = scan(input);
    assert_eq!(
        (report.palindrome.as_str(), report.start),
        (expected.as_str(), expected_start),
        "{name} disagrees with oracle on {input:?}"
    );
}

#[test]
fn concrete_scenarios() {
    let cases = [
        ("", ""),
        (" ", " "),
        ("aa", "aa"),
        ("aba", "aba"),
        ("babad", "bab"), // canonical: earliest start index wins over "aba"
        ("cbbd", "bb"),
        ("racecar", "racecar"),
    ];
    for (name, scan) in scanners() {
        for (input, expected) in cases {
            assert_eq!(
                scan(input).palindrome,
                expected,
                "{name} failed on {input:?}"
            );
        }
    }
}

#[test]
fn exhaustive_small_cases_match_oracle() {
    // Every string over {a, b} up to length 10 and over {a, b, c} up to
    // length 6: all configurations must return exactly the oracle's
    // (substring, start), settling the early-termination tie questions by
    // enumeration.
    let alphabets: [&[char]; 2] = [&['a', 'b'], &['a', 'b', 'c']];
    let max_lens = [10usize, 6];

    for (alphabet, max_len) in alphabets.iter().zip(max_lens) {
        let k = alphabet.len();
        for len in 0..=max_len {
            let total = k.pow(len as u32);
            for mut code in 0..total {
                let mut s = String::with_capacity(len);
                for _ in 0..len {
                    s.push(alphabet[code % k]);
                    code /= k;
                }
                for (name, scan) in scanners() {
                    run_matches_oracle(name, scan, &s);
                }
            }
        }
    }
}

#[test]
fn random_inputs_match_oracle() {
    for (seed, len, small_alphabet) in [
        (1u64, 50usize, false),
        (2, 137, false),
        (3, 500, false),
        (4, 2000, false),
        (5, 300, true),
        (6, 1200, true),
    ] {
        // Small alphabets produce longer, denser palindromes.
        let input = if small_alphabet {
            random_letters(seed, len)
                .chars()
                .map(|c| if (c as u8) % 2 == 0 { 'a' } else { 'b' })
                .collect::<String>()
        } else {
            random_letters(seed, len)
        };
        for (name, scan) in scanners() {
            run_matches_oracle(name, scan, &input);
        }
    }
}

#[test]
fn all_configurations_agree_exactly() {
    let inputs = [
        random_letters(7, 1000),
        three_blocks(900),
        repeating_cycle(1000),
        plant_palindrome(8, 800, "abcddcba"),
        "aaaaaaaaXbcdefghi".to_string(),
        "abaxcdc".to_string(),
    ];
    for input in &inputs {
        let mirror = MirrorScan::scan(input);
        for (name, scan) in scanners() {
            let report = scan(input);
            assert_eq!(
                (report.palindrome.clone(), report.start),
                (mirror.palindrome.clone(), mirror.start),
                "{name} diverges on input of length {}",
                input.len()
            );
        }
    }
}

#[test]
fn results_are_valid_contiguous_palindromes() {
    for seed in 0..8u64 {
        let input = random_letters(seed, 400);
        let symbols: Vec<char> = input.chars().collect();
        for (name, scan) in scanners() {
            let report = scan(&input);
            assert!(is_palindrome(&report.palindrome), "{name}: not a palindrome");
            let len = report.palindrome.chars().count();
            let slice: String = symbols[report.start..report.start + len].iter().collect();
            assert_eq!(slice, report.palindrome, "{name}: not a slice of the input");
        }
    }
}

#[test]
fn planted_palindromes_are_found() {
    for (seed, pal) in [(10u64, "racecar"), (11, "abccba"), (12, "xyzyzyx")] {
        assert!(is_palindrome(pal));
        let input = plant_palindrome(seed, 500, pal);
        for (name, scan) in scanners() {
            let found = scan(&input).palindrome.chars().count();
            assert!(
                found >= pal.chars().count(),
                "{name} found only {found} symbols with {pal:?} planted"
            );
        }
    }
}

#[test]
fn inverse_mapping_round_trips() {
    for seed in 0..4u64 {
        let input = random_letters(seed, 600);
        for (name, scan) in scanners() {
            let report = scan(&input);
            let len = report.palindrome.chars().count();
            // Re-derive transformed coordinates from the returned range and
            // map them back: the round trip must be exact.
            let best = BestMatch {
                center: 2 * report.start + len,
                radius: len,
            };
            assert_eq!(
                to_original_range(&best, input.chars().count()),
                (report.start, len),
                "{name}: inverse mapping did not round-trip"
            );
        }
    }
}

#[test]
fn mirror_comparisons_stay_linear_on_run_adversary() {
    // a^n b^n c^n is the adversary for expansion reuse: without the mirror
    // seed the overlapping in-run palindromes cost O(n^2) comparisons.
    let mut prev: Option<(usize, u64)> = None;
    for n in [600usize, 1200, 2400, 4800] {
        let comps = MirrorScan::scan(&three_blocks(n)).counters.comparisons;
        if let Some((prev_n, prev_comps)) = prev {
            let size_ratio = n as f64 / prev_n as f64;
            let comp_ratio = comps as f64 / prev_comps as f64;
            assert!(
                comp_ratio <= size_ratio * 1.5,
                "mirror comparisons grew {comp_ratio:.2}x for a {size_ratio:.2}x size step"
            );
        }
        prev = Some((n, comps));
    }
}

#[test]
fn priority_comparisons_stay_linear_when_palindromes_stay_short() {
    // On the period-3 cycle the best radius is pinned at 1, so the
    // early-termination rule caps every expansion after a couple of pairs.
    // A regression here means the termination bookkeeping broke.
    for order in [PriorityOrder::TwoPointer, PriorityOrder::OutwardOrder] {
        let config = PriorityScanConfig { order };
        let mut prev: Option<(usize, u64)> = None;
        for n in [600usize, 1200, 2400, 4800] {
            let report = PriorityScan::scan_with_config(&config, &repeating_cycle(n));
            let comps = report.counters.comparisons;
            if let Some((prev_n, prev_comps)) = prev {
                let size_ratio = n as f64 / prev_n as f64;
                let comp_ratio = comps as f64 / prev_comps as f64;
                assert!(
                    comp_ratio <= size_ratio * 1.5,
                    "{order:?} comparisons grew {comp_ratio:.2}x for a {size_ratio:.2}x size step"
                );
            }
            prev = Some((n, comps));
        }
    }
}

#[test]
fn counters_reset_between_calls() {
    for (name, scan) in scanners() {
        let big = scan(&random_letters(20, 5000)).counters;
        let small = scan("cbbd").counters;
        assert!(
            small.comparisons < big.comparisons,
            "{name}: counters accumulated across calls"
        );
        assert_eq!(small, scan("cbbd").counters, "{name}: snapshots unstable");
    }
}
