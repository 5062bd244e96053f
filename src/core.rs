/// One cell of the interleaved (transformed) sequence.
///
/// The sentinel is its own enum variant rather than a reserved character, so
/// no input symbol can collide with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sym {
    Sentinel,
    Chr(char),
}

/// Build the odd-length interleaved sequence `sentinel, s[0], sentinel,
/// s[1], ..., sentinel` of length `2*len + 1`. Every palindrome in the
/// original sequence, even or odd length, has a single center here.
pub fn transform(symbols: &[char]) -> Vec<Sym> {
    let mut t = Vec::with_capacity(2 * symbols.len() + 1);
    t.push(Sym::Sentinel);
    for &c in symbols {
        t.push(Sym::Chr(c));
        t.push(Sym::Sentinel);
    }
    t
}

/// Length of the interleaved sequence for an input of `original_len` symbols.
pub fn transformed_len(original_len: usize) -> usize {
    2 * original_len + 1
}

/// Per-call operation counters. Zeroed at the start of every scan; a scan
/// only ever increments them, so each report is a self-contained snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    /// Symbol pairs tested during expansion, including the pair that breaks
    /// the expansion loop.
    pub comparisons: u64,
    /// Outer loop steps: centers visited in order for MirrorScan, pointer
    /// steps for PriorityScan.
    pub outer_iterations: u64,
    /// MirrorScan only: seeds taken from the mirrored center inside the
    /// rightmost-reaching boundary.
    pub mirror_reuses: u64,
    /// PriorityScan only: centers actually expanded.
    pub position_checks: u64,
    /// PriorityScan only: scans cut short because no remaining center could
    /// beat the best (includes the exactness short-circuit).
    pub early_terminations: u64,
}

/// Best palindrome found so far, in transformed coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestMatch {
    pub center: usize,
    pub radius: usize,
}

/// Result of one scan: the palindrome, its starting symbol index in the
/// original sequence, and the counters for that call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub palindrome: String,
    pub start: usize,
    pub counters: ScanCounters,
}

/// Trait describing a longest-palindromic-substring scan.
pub trait PalindromeScan {
    /// Short name used by the report harness.
    const NAME: &'static str;

    /// Run the full scan and return the palindrome plus counters.
    fn scan(input: &str) -> ScanReport;

    /// Convenience when only the substring is wanted.
    fn longest_palindrome(input: &str) -> String {
        Self::scan(input).palindrome
    }
}

/// Which visiting order `PriorityScan` uses for centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityOrder {
    /// Fixed precomputed order `mid, mid-1, mid+1, mid-2, mid+2, ...`.
    OutwardOrder,
    /// Independent left/right pointers, visiting whichever side has the
    /// larger theoretical radius.
    TwoPointer,
}

/// Configuration for the `PriorityScan` algorithm.
#[derive(Debug, Clone)]
pub struct PriorityScanConfig {
    pub order: PriorityOrder,
}

impl Default for PriorityScanConfig {
    fn default() -> Self {
        PriorityScanConfig {
            order: PriorityOrder::TwoPointer,
        }
    }
}

/// Map a best match in transformed coordinates back to the original
/// sequence: `(start, len)` in symbol indices.
///
/// The span `[center - radius, center + radius]` of a maximal or cap-bounded
/// expansion always ends on sentinel cells: sentinel pairs never mismatch,
/// and both the sequence ends and the theoretical cap are sentinel-aligned.
/// The palindrome therefore holds exactly `radius` symbols starting at
/// `(center - radius) / 2`.
pub fn to_original_range(best: &BestMatch, original_len: usize) -> (usize, usize) {
    if best.radius == 0 {
        return (0, 0);
    }
    let l = best.center - best.radius;
    let r = best.center + best.radius;
    debug_assert!(l % 2 == 0 && r % 2 == 0, "span must be sentinel-aligned");

    let start = l / 2;
    let end = (r / 2 - 1).min(original_len.saturating_sub(1));

    // The clamp-to-odd derivation must agree: the first and last odd indices
    // in [l, r] are the real symbols of the palindrome.
    #[cfg(debug_assertions)]
    {
        let first_odd = if l % 2 == 1 { l } else { l + 1 };
        let last_odd = if r % 2 == 1 { r } else { r - 1 };
        debug_assert_eq!(start, (first_odd - 1) / 2);
        debug_assert_eq!(end, (last_odd - 1) / 2);
        debug_assert_eq!(end + 1 - start, best.radius);
    }

    (start, end + 1 - start)
}

/// Shared entry logic for both algorithms: empty and single-symbol inputs
/// short-circuit, everything else runs `scan` over the transformed sequence
/// with fresh counters.
pub(crate) fn scan_with<F>(input: &str, scan: F) -> ScanReport
where
    F: FnOnce(&[Sym], &mut ScanCounters) -> BestMatch,
{
    let mut counters = ScanCounters::default();
    let symbols: Vec<char> = input.chars().collect();

    match symbols.len() {
        0 => ScanReport {
            palindrome: String::new(),
            start: 0,
            counters,
        },
        1 => ScanReport {
            palindrome: input.to_string(),
            start: 0,
            counters,
        },
        len => {
            let t = transform(&symbols);
            let best = scan(&t, &mut counters);
            let (start, plen) = to_original_range(&best, len);
            ScanReport {
                palindrome: symbols[start..start + plen].iter().collect(),
                start,
                counters,
            }
        }
    }
}
