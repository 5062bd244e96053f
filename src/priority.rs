// PriorityScan: explanatory notes
//
// Instead of sweeping centers left to right, this scan visits centers in an
// order driven by each center's theoretical radius: the largest palindrome a
// center could possibly host, bounded purely by its distance to the nearer
// end of the transformed sequence. Centers near the middle have the highest
// potential, so the scan starts at the midpoint and works outward, and it can
// stop as soon as no remaining center's potential beats the best palindrome
// already found.
//
// The radius table starts at the theoretical values and each visited entry is
// overwritten with the actual radius found there, so an entry only ever
// decreases. Expansion at a center is capped by its theoretical radius; when
// the actual radius reaches that cap the center provably cannot be beaten by
// anything unvisited, and the scan returns on the spot.
//
// Tie handling: the canonical result is the maximal palindrome with the
// earliest start index, matching MirrorScan exactly. Centers left of the best
// can still take over on an equal radius (their start is earlier), so the
// left side stays live while its theoretical radius is >= the best, whereas
// the right side needs a strict improvement to matter. The same asymmetry
// guards the exactness short-circuit after a right-side visit.
//
// Two visiting orders are provided:
// - TwoPointer (default): independent left/right pointers from the midpoint,
//   always visiting the side with the larger theoretical radius (tie favors
//   the right pointer). Each visit advances the visited pointer, so a pointer
//   always rests on an unvisited center and its table entry is a true
//   theoretical bound; termination checks both sides against the best.
// - OutwardOrder: one fixed precomputed order mid, mid-1, mid+1, mid-2,
//   mid+2, ... Theoretical radii are non-increasing along that order, so a
//   single failed viability test terminates the whole scan.
//
// On inputs with long uniform runs the capped expansions still overlap
// (there is no mirror reuse here), so worst-case comparisons are superlinear;
// on inputs whose palindromes stay short the early termination keeps the
// scan linear. The worstcase binary puts numbers on both regimes.

use crate::core::{
    self, BestMatch, PalindromeScan, PriorityOrder, PriorityScanConfig, ScanCounters, ScanReport,
    Sym,
};

/// Best-case-driven center expansion scan.
pub struct PriorityScan;

impl PriorityScan {
    /// Run with an explicit configuration selecting the visiting order.
    pub fn scan_with_config(config: &PriorityScanConfig, input: &str) -> ScanReport {
        match config.order {
            PriorityOrder::TwoPointer => core::scan_with(input, Self::two_pointer),
            PriorityOrder::OutwardOrder => core::scan_with(input, Self::outward_order),
        }
    }

    // Theoretical radius of every transformed center: distance to the nearer
    // sequence edge. No palindrome at i can exceed it.
    fn theoretical_radii(n: usize) -> Vec<usize> {
        (0..n).map(|i| i.min(n - 1 - i)).collect()
    }

    // Expand around `center`, never past `cap`. The cap is at most the
    // theoretical radius, which keeps both probes in bounds without explicit
    // checks.
    fn expand(t: &[Sym], center: usize, cap: usize, counters: &mut ScanCounters) -> usize {
        debug_assert!(cap <= center.min(t.len() - 1 - center));
        let mut radius = 0usize;
        while radius < cap {
            counters.comparisons += 1;
            if t[center - radius - 1] == t[center + radius + 1] {
                radius += 1;
            } else {
                break;
            }
        }
        radius
    }

    // Canonical best update: strict improvement, or an equal radius from an
    // earlier center (earlier start index).
    fn improves(best: &BestMatch, center: usize, found: usize) -> bool {
        found > best.radius || (found == best.radius && center < best.center)
    }

    fn two_pointer(t: &[Sym], counters: &mut ScanCounters) -> BestMatch {
        let n = t.len();
        let mut table = Self::theoretical_radii(n);
        let mut best = BestMatch::default();
        let mid = n / 2;

        // Both pointers start on the midpoint; the first visit advances both.
        let mut left = mid as isize;
        let mut right = mid;

        while left >= 0 || right < n {
            counters.outer_iterations += 1;

            let left_theo = (left >= 0).then(|| table[left as usize]);
            let right_theo = (right < n).then(|| table[right]);

            // The left side can still win a tie (earlier start); the right
            // side has to beat the best outright.
            let left_viable = left_theo.is_some_and(|theo| theo >= best.radius);
            let right_viable = right_theo.is_some_and(|theo| theo > best.radius);

            if !left_viable && !right_viable {
                counters.early_terminations += 1;
                break;
            }

            let go_right = match (left_viable, right_viable) {
                (true, true) => right_theo >= left_theo,
                (false, true) => true,
                _ => false,
            };
            let c = if go_right { right } else { left as usize };
            let theo = table[c];

            counters.position_checks += 1;
            let found = Self::expand(t, c, theo, counters);
            table[c] = found;

            if Self::improves(&best, c, found) {
                best = BestMatch { center: c, radius: found };
            }

            if found == theo {
                // Remaining centers on the visited side are strictly weaker.
                // After a right-side visit the left side may still tie from
                // an earlier start, so it has to be ruled out first.
                let left_can_tie = go_right && left_theo.is_some_and(|lt| lt >= found);
                if !left_can_tie {
                    counters.early_terminations += 1;
                    return best;
                }
            }

            if left == c as isize {
                left -= 1;
            }
            if right == c {
                right += 1;
            }
        }

        best
    }

    fn outward_order(t: &[Sym], counters: &mut ScanCounters) -> BestMatch {
        let n = t.len();
        let mut table = Self::theoretical_radii(n);
        let mut best = BestMatch::default();
        let mid = n / 2;

        let mut order = Vec::with_capacity(n);
        order.push(mid);
        for d in 1..=mid {
            order.push(mid - d);
            order.push(mid + d);
        }

        for &c in &order {
            counters.outer_iterations += 1;
            let theo = table[c];

            // Theoretical radii never increase along this order, so the
            // first center that cannot improve the best (on radius, or on an
            // equal-radius earlier start) ends the scan outright.
            if !Self::improves(&best, c, theo) {
                counters.early_terminations += 1;
                break;
            }

            counters.position_checks += 1;
            let found = Self::expand(t, c, theo, counters);
            table[c] = found;

            if Self::improves(&best, c, found) {
                best = BestMatch { center: c, radius: found };
            }

            if found == theo {
                // Every unvisited center has a theoretical radius <= found,
                // and the only one that can equal it sits right of the best.
                counters.early_terminations += 1;
                return best;
            }
        }

        best
    }
}

impl PalindromeScan for PriorityScan {
    const NAME: &'static str = "priority";

    fn scan(input: &str) -> ScanReport {
        Self::scan_with_config(&PriorityScanConfig::default(), input)
    }
}
