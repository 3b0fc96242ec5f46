//! Enumeration of choices

use num_traits::PrimInt;
use polybound_core::check;

/// Visit every way of picking one option from each group
///
/// Group `i` has `counts[i]` options. `visitor` sees one slice per
/// combination, where element `i` is the chosen option of group `i`.
/// Combinations arrive in lexicographic order, the last group varying
/// fastest, so `visitor` runs `counts.iter().product()` times. Every count
/// must be positive; no groups means no visits.
///
/// ```rust
/// use polybound_poly::choose_one_from_each_group;
///
/// let mut seen = Vec::new();
/// choose_one_from_each_group(&[2u8, 2], |c| seen.push(c.to_vec()));
/// assert_eq!(seen, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
pub fn choose_one_from_each_group<I, F>(counts: &[I], mut visitor: F)
where
    I: PrimInt,
    F: FnMut(&[I]),
{
    if counts.is_empty() {
        return;
    }
    check!(
        counts.iter().all(|&c| c > I::zero()),
        "choose_one_from_each_group: every group needs at least one option"
    );

    let mut choice = vec![I::zero(); counts.len()];
    loop {
        visitor(&choice);

        // Odometer step: bump the last digit, carrying leftwards.
        let mut i = counts.len() - 1;
        loop {
            choice[i] = choice[i] + I::one();
            if choice[i] < counts[i] {
                break;
            }
            if i == 0 {
                return;
            }
            choice[i] = I::zero();
            i -= 1;
        }
    }
}
