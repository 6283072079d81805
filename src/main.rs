//! Planner Frontend Entry Point

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    planner_ui::boot();
}
