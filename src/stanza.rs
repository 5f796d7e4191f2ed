//! Stanza partitioning for ordered line sequences.
//!
//! Two strategies: regular stanzas when the line count divides evenly by a
//! conventional stanza length, irregular randomized groupings otherwise.
//! Both take the random source as an argument so tests can seed it.

use rand::Rng;

use crate::error::{Error, Result};

/// Stanza lengths eligible for the regular strategy.
pub const STANZA_DIVISORS: [usize; 9] = [4, 5, 6, 7, 8, 9, 10, 12, 14];

/// Smallest stanza the irregular strategy will produce.
pub const MIN_GROUP_SIZE: usize = 4;

/// Fewest groups the irregular strategy will produce.
const MIN_GROUP_COUNT: usize = 3;

/// Produce randomized group sizes, each at least [`MIN_GROUP_SIZE`], summing
/// exactly to `total`.
///
/// Every group starts at the minimum size; the remainder is distributed one
/// line at a time to uniformly random groups. Totals of 12 or fewer cannot
/// form at least three such groups and return
/// [`Error::InvalidSizing`](crate::error::Error::InvalidSizing).
pub fn random_group_sizes<R: Rng>(total: usize, rng: &mut R) -> Result<Vec<usize>> {
    if total <= MIN_GROUP_COUNT * MIN_GROUP_SIZE {
        return Err(Error::InvalidSizing { total });
    }

    let upper = total / MIN_GROUP_SIZE;
    let group_count = if upper > MIN_GROUP_COUNT {
        rng.gen_range(MIN_GROUP_COUNT..upper)
    } else {
        // Totals of 13 through 15 only admit exactly three groups.
        MIN_GROUP_COUNT
    };

    let mut sizes = vec![MIN_GROUP_SIZE; group_count];
    let mut sum = MIN_GROUP_SIZE * group_count;
    while sum < total {
        let idx = rng.gen_range(0..sizes.len());
        sizes[idx] += 1;
        sum += 1;
    }
    Ok(sizes)
}

/// Arrange lines into stanzas, rendered flat with one empty string between
/// consecutive stanzas and none after the last.
///
/// When the line count divides evenly by one of [`STANZA_DIVISORS`], a
/// divisor is chosen at random and the stanzas are regular. Otherwise the
/// groupings come from [`random_group_sizes`], which fails for indivisible
/// line counts of 12 or fewer.
pub fn stanzify<R: Rng>(lines: Vec<String>, rng: &mut R) -> Result<Vec<String>> {
    let len = lines.len();
    let divisors: Vec<usize> = STANZA_DIVISORS
        .iter()
        .copied()
        .filter(|&d| len % d == 0)
        .collect();

    let sizes = if divisors.is_empty() {
        random_group_sizes(len, rng)?
    } else {
        let divisor = divisors[rng.gen_range(0..divisors.len())];
        vec![divisor; len / divisor]
    };

    let group_count = sizes.len();
    let mut output = Vec::with_capacity(len + group_count.saturating_sub(1));
    let mut lines = lines.into_iter();
    for (i, size) in sizes.into_iter().enumerate() {
        output.extend(lines.by_ref().take(size));
        if i + 1 < group_count {
            output.push(String::new());
        }
    }
    Ok(output)
}
