mod proxy;
mod recorder;

fn main() {
    let argv: Vec<String> = std::env::args().collect();

    match proxy::run(&argv) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            // Launch failure: the real tool never ran.
            eprintln!("cctrace: {:#}", err);
            std::process::exit(127);
        }
    }
}
