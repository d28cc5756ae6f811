use lab3_core::MAX_POWER;

/// Row `a` of the Eulerian triangle: `A(a, j)` for `j` in `0..max(a, 1)`.
///
/// Row 0 is `[1]`. The row sums to `a!`, which fits in 128 bits for every
/// `a <= MAX_POWER`.
pub fn eulerian(a: u32) -> Vec<u128> {
    debug_assert!(a <= MAX_POWER);
    (1..=a as usize).fold(vec![1], |prev, n| {
        (0..n)
            .map(|k| {
                let stay = prev.get(k).copied().unwrap_or_default() * (k as u128 + 1);
                let rise = k
                    .checked_sub(1)
                    .and_then(|k| prev.get(k))
                    .copied()
                    .unwrap_or_default()
                    * (n - k) as u128;
                stay + rise
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_rows() {
        assert!(eulerian(0) == vec![1]);
        assert!(eulerian(1) == vec![1]);
        assert!(eulerian(2) == vec![1, 1]);
        assert!(eulerian(3) == vec![1, 4, 1]);
        assert!(eulerian(4) == vec![1, 11, 11, 1]);
        assert!(eulerian(5) == vec![1, 26, 66, 26, 1]);
    }

    #[test]
    fn rows_sum_to_factorial() {
        for a in 1..=MAX_POWER {
            let factorial = (1..=a as u128).product::<u128>();
            assert!(eulerian(a).iter().sum::<u128>() == factorial);
        }
    }
}
