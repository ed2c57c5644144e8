fn main() -> Result<(), Box<dyn std::error::Error>> {
    tsmapper_cli::run()
}
