//! Token-path search over JSON graph snapshots.
//!
//! Binary crate entry point. All CLI logic is in the `cli` module; the engine
//! lives in the `tokenpath` library crate.

// mimalloc keeps the many short-lived path strings cheap to allocate and free.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod cli;

fn main() {
    cli::run();
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
