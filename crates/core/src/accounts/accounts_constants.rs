use super::accounts_model::AccountCategory;

/// Breakdown key and display name for each account category.
///
/// These keys are used for the asset breakdown of the net position.
pub fn category_key(category: AccountCategory) -> &'static str {
    match category {
        AccountCategory::Checking => "checking",
        AccountCategory::Savings => "savings",
        AccountCategory::Credit => "credit",
        AccountCategory::Investment => "investments",
    }
}

/// Returns the display name for a given account category.
pub fn category_display_name(category: AccountCategory) -> &'static str {
    match category {
        AccountCategory::Checking => "Checking",
        AccountCategory::Savings => "Savings",
        AccountCategory::Credit => "Credit Cards",
        AccountCategory::Investment => "Investments",
    }
}

/// Returns true if the category carries debt when its balance is negative.
pub fn is_liability_category(category: AccountCategory) -> bool {
    category == AccountCategory::Credit
}
