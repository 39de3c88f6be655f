use percolation_sim::app;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = app::run(&args) {
        println!("❌ Error: {}", e);
        println!("{}", app::USAGE);
        std::process::exit(1);
    }
}
