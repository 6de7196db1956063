//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ledgernote_core` linkage.
//! - Print a deterministic summary of a freshly seeded session.

use ledgernote_core::StoreRegistry;

fn main() {
    println!("ledgernote_core ping={}", ledgernote_core::ping());
    println!("ledgernote_core version={}", ledgernote_core::core_version());

    let mut registry = StoreRegistry::new();
    println!("notes={}", registry.notes().len());
    let totals = registry.transactions().totals();
    println!(
        "transactions={} income={:.2} expense={:.2} balance={:.2}",
        registry.transactions().len(),
        totals.income,
        totals.expense,
        totals.balance()
    );
    println!("authenticated={}", registry.auth().is_authenticated());
}
