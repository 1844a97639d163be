fn main() -> anyhow::Result<()> {
    snipref::init();

    snipref::cli::run()
}
