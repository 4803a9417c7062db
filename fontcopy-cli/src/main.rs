//! Binary entrypoint for fontcopy-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = fontcopy_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
