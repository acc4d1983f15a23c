use coworking_paris::pipeline;

fn main() {
    if let Err(e) = pipeline::run() {
        eprintln!("❌ Crawl failed: {e}");
        std::process::exit(1);
    }
}
