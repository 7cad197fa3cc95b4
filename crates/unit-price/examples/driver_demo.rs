//! Unified Driver Demo
//!
//! Runs one comparison through the TUI driver and the WASM driver, then the
//! shared driver checks against both.
//!
//! Run with: cargo run --example driver_demo --features tui

use unit_price::core::{FieldId, FieldKind, Slot};
use unit_price::driver::{
    run_full_suite, verify_comparison, verify_edit_rules, verify_focus_progression,
    verify_initial_state, verify_small_difference, verify_tie, verify_unit_prices,
    ComparatorDriver, TuiDriver,
};
use unit_price::wasm::WasmDriver;

fn show<D: ComparatorDriver>(name: &str, driver: &mut D) {
    driver.fill(FieldId::new(Slot::A, FieldKind::Price), "1 00 0");
    driver.fill(FieldId::new(Slot::A, FieldKind::Amount), "4");
    driver.fill(FieldId::new(Slot::B, FieldKind::Price), "9 00");
    driver.fill(FieldId::new(Slot::B, FieldKind::Amount), "3");

    println!("{name}:");
    for slot in Slot::ALL {
        let mark = if driver.is_winner(slot) { " ✓" } else { "" };
        println!(
            "   {}: {} / {} = {}{mark}",
            slot.label(),
            driver.field_text(FieldId::new(slot, FieldKind::Price)),
            driver.field_text(FieldId::new(slot, FieldKind::Amount)),
            driver.unit_price_text(slot)
        );
    }
    println!("   {}", driver.message());
}

fn verify_all<D: ComparatorDriver>(name: &str, make: impl Fn() -> D) {
    let checks: [(&str, fn(&mut D)); 7] = [
        ("verify_initial_state", verify_initial_state),
        ("verify_focus_progression", verify_focus_progression),
        ("verify_edit_rules", verify_edit_rules),
        ("verify_unit_prices", verify_unit_prices),
        ("verify_comparison", verify_comparison),
        ("verify_tie", verify_tie),
        ("verify_small_difference", verify_small_difference),
    ];
    for (label, check) in checks {
        print!("  ✓ {label} on {name} ... ");
        check(&mut make());
        println!("PASSED");
    }
    print!("  Running run_full_suite() on {name} ... ");
    run_full_suite(&mut make());
    println!("PASSED");
}

fn main() {
    println!("Unit price comparator: same checks, different drivers");
    println!();

    show("TuiDriver", &mut TuiDriver::new());
    show("WasmDriver", &mut WasmDriver::new());

    println!();
    verify_all("TuiDriver", TuiDriver::new);
    verify_all("WasmDriver", WasmDriver::new);
    println!();
    println!("All unified checks passed on both drivers");
}
