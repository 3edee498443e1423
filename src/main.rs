use herofig::ui::output;

fn main() {
    if let Err(err) = herofig::cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
