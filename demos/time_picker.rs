//! Time Picker Walkthrough
//!
//! This example drives the presenter from the command line.
//!
//! Key concepts:
//! - Mounting with a prefill literal and reading back rejected keys
//! - Feeding keys one at a time and watching the display update
//! - The `{value, context}` debug snapshot
//!
//! Run with: cargo run --example time_picker -- 1 1 : 4 3 p
//! Set RUST_LOG=timepicker=trace to see every transition.

use stillwater::validation::Validation;
use timepicker::core::State;
use timepicker::presenter::{Presenter, PresenterConfig};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let keys: Vec<String> = std::env::args().skip(1).collect();
    let config = if keys.is_empty() {
        PresenterConfig::default()
    } else {
        PresenterConfig::empty()
    };

    println!("=== Time Picker ===\n");

    let mut presenter = Presenter::new(config);
    if let Validation::Failure(rejected) = presenter.mount() {
        println!("Prefill was only partially accepted:");
        for key in rejected.iter() {
            println!("  - {key}");
        }
        println!();
    }
    print_state(&presenter, "mount");

    for key in &keys {
        presenter.on_key(key);
        print_state(&presenter, key);
    }

    match presenter.debug_json() {
        Ok(json) => println!("\nSnapshot: {json}"),
        Err(err) => eprintln!("\nSnapshot unavailable: {err}"),
    }
}

fn print_state(presenter: &Presenter, key: &str) {
    println!(
        "{key:>10} | {:<9} | {:<15} | Valid: {}",
        presenter.display(),
        presenter.state().name(),
        presenter.validity_label()
    );
}
