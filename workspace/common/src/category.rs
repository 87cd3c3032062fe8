/// Spending categories understood by the dashboard.
///
/// The first nine are the labels a user can pick when adding a transaction.
/// `Uncategorized` labels transactions that carry no category at all. The
/// backend may store labels outside this set; those are kept as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Income,
    Housing,
    Transport,
    Groceries,
    Utilities,
    Shopping,
    Restaurants,
    Travel,
    Subscriptions,
    Uncategorized,
}

impl Category {
    /// Categories offered in the transaction form, in display order.
    pub const SELECTABLE: [Category; 9] = [
        Category::Income,
        Category::Housing,
        Category::Transport,
        Category::Groceries,
        Category::Utilities,
        Category::Shopping,
        Category::Restaurants,
        Category::Travel,
        Category::Subscriptions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Housing => "Housing",
            Category::Transport => "Transport",
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Restaurants => "Restaurants",
            Category::Travel => "Travel",
            Category::Subscriptions => "Subscriptions",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_labels_are_unique_and_exclude_uncategorized() {
        let labels: Vec<&str> = Category::SELECTABLE.iter().map(Category::label).collect();
        assert_eq!(labels.len(), 9);
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label));
        }
        assert!(!labels.contains(&Category::Uncategorized.label()));
    }
}
