use std::process;

fn main() {
    if let Err(e) = stencil::cli::run() {
        stencil::ui::print_error(&e.to_string());
        process::exit(1);
    }
}
