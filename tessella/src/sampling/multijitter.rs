//! Correlated multi-jittered point sets.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{canonical, clamp_unit, Point};

/// Generates `n * m` stratified points.
///
/// The unit square is split into `n` rows and `m` columns. Each (row, column) cell holds
/// exactly one point, and the x coordinates fill each of the `n * m` fine x strata exactly
/// once (likewise y). The returned order is shuffled.
///
/// Random numbers are drawn in a fixed order: jitter, x permutation, y permutation, then
/// the final shuffle. A seeded `rng` therefore reproduces the same set.
pub fn multijitter<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Vec<Point> {
    if n == 0 || m == 0 {
        return Vec::new();
    }
    let nf = n as f32;
    let mf = m as f32;

    let mut points = Vec::with_capacity(n * m);
    for j in 0..n {
        for i in 0..m {
            let x = (i as f32 + (j as f32 + canonical(rng)) / nf) / mf;
            let y = (j as f32 + (i as f32 + canonical(rng)) / mf) / nf;
            points.push(Point::new(clamp_unit(x), clamp_unit(y)));
        }
    }

    // x values move between rows within a column
    for j in 0..n {
        for i in 0..m {
            let k = j + ((canonical(rng) * (n - j) as f32) as usize).min(n - j - 1);
            let a = j * m + i;
            let b = k * m + i;
            let tmp = points[a].x;
            points[a].x = points[b].x;
            points[b].x = tmp;
        }
    }

    // y values move between columns within a row
    for i in 0..m {
        for j in 0..n {
            let k = i + ((canonical(rng) * (m - i) as f32) as usize).min(m - i - 1);
            let a = j * m + i;
            let b = j * m + k;
            let tmp = points[a].y;
            points[a].y = points[b].y;
            points[b].y = tmp;
        }
    }

    points.shuffle(rng);
    points
}
