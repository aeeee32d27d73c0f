// Minimum loss over a series of yearly prices.
//
// The prices are paired with their year (position) and sorted by price, ties
// broken by year. Walking neighbouring pairs in that order, a pair counts when
// the higher-priced entry comes from an earlier year than the lower-priced
// one. The answer is the smallest price gap among the counted pairs.
//
// Since the walk is in ascending price order the gap is never negative: it is
// the distance between rank-adjacent prices, not a signed profit.
use shared::models::PriceYear;
use std::ops::Sub;

/// The neighbouring pair (in price order) that produced the minimum loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LossPair<T> {
    pub lower: PriceYear<T>,
    pub higher: PriceYear<T>,
    pub loss: T,
}

/// Returns the minimum loss, or `None` when no neighbouring pair counts
/// (including empty and single-element input).
///
/// `T` must be able to hold the difference between any two of the prices;
/// the subtraction is not checked. For `i64` prices use
/// [`find_minimum_loss_i64`], which widens before subtracting.
pub fn find_minimum_loss<T>(prices: &[T]) -> Option<T>
where
    T: Copy + Ord + Sub<Output = T>,
{
    find_minimum_loss_pair(prices).map(|pair| pair.loss)
}

/// Same scan as [`find_minimum_loss`], keeping the pair that won. When several
/// pairs share the minimum, the first one in price order is kept.
pub fn find_minimum_loss_pair<T>(prices: &[T]) -> Option<LossPair<T>>
where
    T: Copy + Ord + Sub<Output = T>,
{
    let mut price_year_pairs: Vec<PriceYear<T>> = prices
        .iter()
        .enumerate()
        .map(|(year, &price)| PriceYear::new(price, year))
        .collect();

    price_year_pairs.sort();

    let mut best: Option<LossPair<T>> = None;

    for window in price_year_pairs.windows(2) {
        let (prev, current) = (window[0], window[1]);

        if current.year < prev.year {
            let loss = current.price - prev.price;
            if best.map_or(true, |b| loss < b.loss) {
                best = Some(LossPair {
                    lower: prev,
                    higher: current,
                    loss,
                });
            }
        }
    }

    best
}

/// Minimum loss over `i64` prices. The scan runs on `i128`, which holds the
/// gap between any two `i64` values (up to 2^64 - 1).
pub fn find_minimum_loss_i64(prices: &[i64]) -> Option<LossPair<i128>> {
    let widened: Vec<i128> = prices.iter().map(|&p| i128::from(p)).collect();
    find_minimum_loss_pair(&widened)
}
