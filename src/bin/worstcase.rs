// Adversarial growth tables: how the comparison counters of both algorithms
// scale across doubling input sizes on the run adversary (a^n b^n c^n) and
// the period-3 cycle, with a linear/quadratic verdict per step and a
// side-by-side ratio table.

use std::time::Instant;

use palinscan::fixture::{repeating_cycle, three_blocks};
use palinscan::{MirrorScan, PalindromeScan, PriorityScan};

const SIZES: [usize; 7] = [100, 200, 400, 800, 1600, 3200, 6400];

fn growth_table<S: PalindromeScan>(label: &str, make: fn(usize) -> String) {
    println!("========================================");
    println!("{}: {label}", S::NAME.to_uppercase());
    println!("========================================");
    println!();
    println!(
        "{:<15} {:<15} {:<15} {:<20} {:<15}",
        "Input Size", "Comparisons", "Size Ratio", "Comparison Ratio", "Time (ms)"
    );
    println!("{}", "-".repeat(83));

    let mut prev: Option<(usize, u64)> = None;
    for &n in &SIZES {
        let input = make(n);
        let t0 = Instant::now();
        let report = S::scan(&input);
        let time_ms = t0.elapsed().as_millis();
        let comps = report.counters.comparisons;

        match prev {
            Some((prev_n, prev_comps)) if prev_comps > 0 => {
                let size_ratio = n as f64 / prev_n as f64;
                let comp_ratio = comps as f64 / prev_comps as f64;
                let verdict = if comp_ratio > size_ratio * 1.5 {
                    "QUADRATIC!"
                } else if comp_ratio <= size_ratio * 1.2 {
                    "linear"
                } else {
                    ""
                };
                println!(
                    "{:<15} {:<15} {:<15.2} {:<20.2} {:<15} {verdict}",
                    n, comps, size_ratio, comp_ratio, time_ms
                );
            }
            _ => println!(
                "{:<15} {:<15} {:<15} {:<20} {:<15}",
                n, comps, "baseline", "baseline", time_ms
            ),
        }
        prev = Some((n, comps));
    }

    println!();
    println!("Analysis:");
    println!("  O(n):  comparison ratio tracks the size ratio (~2.0x per doubling)");
    println!("  O(n^2): comparison ratio tracks its square (~4.0x per doubling)");
    println!();
}

fn side_by_side(label: &str, make: fn(usize) -> String) {
    println!("========================================");
    println!("SIDE-BY-SIDE: {label}");
    println!("========================================");
    println!();
    println!(
        "{:<12} | {:<22} | {:<22} | {:<12}",
        "Input Size", "Priority Comparisons", "Mirror Comparisons", "Ratio (P/M)"
    );
    println!("{}", "-".repeat(78));

    for &n in &SIZES {
        let input = make(n);
        let p = PriorityScan::scan(&input).counters.comparisons;
        let m = MirrorScan::scan(&input).counters.comparisons;
        let ratio = p as f64 / m as f64;
        let flag = if ratio > 2.0 {
            "(!)"
        } else if ratio < 1.5 {
            "ok"
        } else {
            ""
        };
        println!("{:<12} | {:<22} | {:<22} | {:<12.2} {flag}", n, p, m, ratio);
    }
    println!();
}

fn main() {
    println!("Adversarial comparison-count scaling\n");

    growth_table::<MirrorScan>("ThreeBlocks (a^n b^n c^n)", three_blocks);
    growth_table::<PriorityScan>("ThreeBlocks (a^n b^n c^n)", three_blocks);
    growth_table::<PriorityScan>("Period-3 cycle (abcabc...)", repeating_cycle);

    side_by_side("ThreeBlocks (a^n b^n c^n)", three_blocks);
    side_by_side("Period-3 cycle (abcabc...)", repeating_cycle);

    println!("Mirror reuse keeps MirrorScan linear everywhere; PriorityScan is");
    println!("linear while palindromes stay short and superlinear across long");
    println!("uniform runs, where its capped expansions overlap.");
}
