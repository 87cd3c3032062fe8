use common::TransactionDto;
use rust_decimal::Decimal;

/// Slice colors, assigned by position in the breakdown.
pub const PALETTE: [&str; 10] = [
    "#4f46e5", // indigo
    "#16a34a", // green
    "#9333ea", // purple
    "#e11d48", // crimson
    "#d97706", // amber
    "#0369a1", // blue
    "#4338ca", // royal purple
    "#15803d", // forest green
    "#be185d", // pink
    "#334155", // slate
];

/// One entry of the spending breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// Backend label, or `Uncategorized` for transactions without one.
    pub category: String,
    /// Absolute value of the summed amounts in this category.
    pub total: Decimal,
    pub color: &'static str,
}

/// Groups transactions by category and sums their amounts.
///
/// Labels are used exactly as the backend returns them. Only a missing or
/// empty label is folded into `Uncategorized`. Each group
/// reports the magnitude of its signed sum, so income and expenses both show
/// up as positive slices. Entries keep the order in which their category was
/// first seen, and colors cycle through [`PALETTE`] by position.
pub fn category_breakdown(transactions: &[TransactionDto]) -> Vec<CategorySlice> {
    let mut groups: Vec<(&str, Decimal)> = Vec::new();

    for transaction in transactions {
        let key = transaction.category_key();
        match groups.iter_mut().find(|(seen, _)| *seen == key) {
            Some((_, sum)) => *sum += transaction.amount,
            None => groups.push((key, transaction.amount)),
        }
    }

    groups
        .into_iter()
        .enumerate()
        .map(|(index, (category, sum))| CategorySlice {
            category: category.to_string(),
            total: sum.abs(),
            color: PALETTE[index % PALETTE.len()],
        })
        .collect()
}
