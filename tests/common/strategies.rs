use proptest::prelude::*;

/// Scope names registered on the product fixture that need no input
pub const INPUT_FREE_SCOPES: [&str; 3] = ["active", "inStock", "paged"];

/// Strategy for generating lists of resolvable, input-free scope names
pub fn resolvable_scope_list_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(INPUT_FREE_SCOPES.to_vec()), 0..8)
}

/// Strategy for generating scope names the fixture does not define
pub fn unknown_scope_name_strategy() -> impl Strategy<Value = String> {
    "unknown[A-Z][a-zA-Z]{0,12}"
}
