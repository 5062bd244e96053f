use crate::core::{self, BestMatch, PalindromeScan, ScanCounters, ScanReport, Sym};

/// Manacher-style scan: a single left-to-right pass over the transformed
/// sequence, maintaining the rightmost-reaching palindrome boundary and
/// seeding each new center from its mirror inside that boundary. The mirror
/// seed is what bounds total comparisons to O(n); every center is still
/// visited exactly once and its radius is final the moment the outer index
/// passes it.
pub struct MirrorScan;

impl MirrorScan {
    fn scan_transformed(t: &[Sym], counters: &mut ScanCounters) -> BestMatch {
        let n = t.len();
        let mut radius = vec![0usize; n];
        let mut center = 0usize;
        let mut right = 0usize;
        let mut best = BestMatch::default();

        for i in 0..n {
            counters.outer_iterations += 1;

            if i < right {
                // Inside the known boundary the mirrored center already
                // tells us a lower bound, capped by how far the boundary
                // itself reaches past i.
                let mirror = 2 * center - i;
                radius[i] = radius[mirror].min(right - i);
                counters.mirror_reuses += 1;
            }

            // Extend past the seeded radius. Each pair tested costs one
            // comparison, including the pair that ends the loop.
            while radius[i] + 1 <= i && i + radius[i] + 1 < n {
                counters.comparisons += 1;
                if t[i - radius[i] - 1] == t[i + radius[i] + 1] {
                    radius[i] += 1;
                } else {
                    break;
                }
            }

            if i + radius[i] > right {
                center = i;
                right = i + radius[i];
            }

            // Strict improvement only: the first center reaching a given
            // radius wins, which is the earliest start index.
            if radius[i] > best.radius {
                best = BestMatch {
                    center: i,
                    radius: radius[i],
                };
            }
        }

        best
    }
}

impl PalindromeScan for MirrorScan {
    const NAME: &'static str = "mirror";

    fn scan(input: &str) -> ScanReport {
        core::scan_with(input, Self::scan_transformed)
    }
}
