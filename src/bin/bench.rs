// Comparative report harness: runs both algorithms over literal vectors and
// seeded random inputs, then writes a combined CSV plus a text report per
// algorithm under output/.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::time::Instant;

use palinscan::fixture::random_letters;
use palinscan::{MirrorScan, PalindromeScan, PriorityScan, ScanReport, transformed_len};

const CSV_HEADER: &str = "algorithm,original_length,transformed_length,comparisons,\
outer_iterations,mirror_reuses,position_checks,early_terminations,\
palindrome_length,time_ms,input_string,palindrome_found";

fn escape_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn truncated(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

fn run_case<S: PalindromeScan>(
    input: &str,
    csv: &mut impl Write,
    txt: &mut impl Write,
) -> std::io::Result<()> {
    let n = input.chars().count();
    println!("\nProcessing input of length: {n}");
    if n <= 100 {
        println!("Input string: \"{input}\"");
    }

    let t0 = Instant::now();
    let ScanReport {
        palindrome,
        start,
        counters,
    } = S::scan(input);
    let time_ms = t0.elapsed().as_millis();

    let plen = palindrome.chars().count();
    println!("Found palindrome of length {plen} at index {start}");
    if plen <= 100 {
        println!("Palindrome: \"{palindrome}\"");
    } else {
        println!("Palindrome (truncated): \"{}\"", truncated(&palindrome, 100));
    }
    println!(
        "Time: {time_ms} ms, Comparisons: {}, Outer: {}",
        counters.comparisons, counters.outer_iterations
    );

    writeln!(
        csv,
        "{},{},{},{},{},{},{},{},{},{},{},{}",
        escape_csv(S::NAME),
        n,
        transformed_len(n),
        counters.comparisons,
        counters.outer_iterations,
        counters.mirror_reuses,
        counters.position_checks,
        counters.early_terminations,
        plen,
        time_ms,
        escape_csv(&truncated(input, 1000)),
        escape_csv(&truncated(&palindrome, 1000)),
    )?;

    writeln!(txt, "======================================")?;
    writeln!(txt, "Input Length: {n}")?;
    writeln!(txt, "Input String: {}", truncated(input, 200))?;
    writeln!(txt, "Result Length: {plen} (start index {start})")?;
    writeln!(txt, "Time: {time_ms} ms")?;
    writeln!(txt, "Comparisons: {}", counters.comparisons)?;
    writeln!(txt, "Outer Iterations: {}", counters.outer_iterations)?;
    writeln!(txt, "Mirror Reuses: {}", counters.mirror_reuses)?;
    writeln!(txt, "Position Checks: {}", counters.position_checks)?;
    writeln!(txt, "Early Terminations: {}", counters.early_terminations)?;
    writeln!(txt, "Palindrome: {}", truncated(&palindrome, 200))?;
    writeln!(txt, "======================================\n")?;

    Ok(())
}

fn run_all<S: PalindromeScan>(
    tests: &[String],
    csv: &mut impl Write,
    txt_path: &str,
) -> std::io::Result<()> {
    println!("\n========== RUNNING {} ==========", S::NAME.to_uppercase());
    let mut txt = BufWriter::new(File::create(txt_path)?);
    for input in tests {
        run_case::<S>(input, csv, &mut txt)?;
    }
    txt.flush()
}

fn main() -> std::io::Result<()> {
    fs::create_dir_all("output")?;

    let mut tests: Vec<String> = ["", " ", "aa", "aba", "babad", "cbbd", "racecar"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for (seed, len) in [
        (1u64, 10_000usize),
        (2, 50_000),
        (3, 100_000),
        (4, 200_000),
        (5, 1_000_000),
    ] {
        tests.push(random_letters(seed, len));
    }

    let mut csv = BufWriter::new(File::create("output/benchmark_results.csv")?);
    writeln!(csv, "{CSV_HEADER}")?;

    run_all::<MirrorScan>(&tests, &mut csv, "output/mirror.txt")?;
    run_all::<PriorityScan>(&tests, &mut csv, "output/priority.txt")?;
    csv.flush()?;

    println!("\n========================================");
    println!("Benchmark complete!");
    println!("Generated files:");
    println!("  output/benchmark_results.csv");
    println!("  output/mirror.txt");
    println!("  output/priority.txt");
    Ok(())
}
