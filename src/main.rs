fn main() -> Result<(), Box<dyn std::error::Error>> {
    mixdesk::runtime::run()
}
