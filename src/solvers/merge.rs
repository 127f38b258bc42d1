use super::Configuration;

/// Promotes packs of smaller sizes into extra packs of a bigger size.
///
/// `sizes` must be descending. Positions are visited from the second smallest
/// up to the second largest; at position `i` the shipped amount of every
/// strictly smaller size is folded into `total / sizes[i]` more packs of
/// `sizes[i]` once it reaches one such pack. The smaller sizes are then
/// absorbed largest first, see [`absorb`].
///
/// A fold that would leave `quantity` uncovered is not applied. On
/// configurations coming from the greedy division this never happens, the
/// dropped remainder is always below the slack added by the padding pack.
pub fn merge_packs(quantity: u64, sizes: &[u64], configuration: &mut Configuration) {
    for i in (1..sizes.len().saturating_sub(1)).rev() {
        let size = sizes[i];
        let smaller = &sizes[i + 1..];
        let total = shipped_by(smaller, configuration);
        if total < size as u128 {
            continue;
        }
        let mut merged = configuration.clone();
        merged.add(size, (total / size as u128) as u64);
        absorb(total, smaller, &mut merged);
        if merged.covers(quantity) {
            *configuration = merged;
        }
    }
}

fn shipped_by(sizes: &[u64], configuration: &Configuration) -> u128 {
    sizes
        .iter()
        .map(|&size| configuration.count(size) as u128 * size as u128)
        .sum()
}

// zeroes every size whose whole contribution still fits into `amount`;
// a size that does not fit keeps its count and the walk goes on
fn absorb(amount: u128, sizes: &[u64], configuration: &mut Configuration) {
    let mut amount = amount;
    for &size in sizes {
        let contribution = configuration.count(size) as u128 * size as u128;
        if contribution <= amount {
            amount -= contribution;
            configuration.set(size, 0);
        }
    }
}
