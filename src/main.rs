//! `gltform` - inspect and write the `.gltform` platform dotfile.

use gltform::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
