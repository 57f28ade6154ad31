fn main() -> anyhow::Result<()> {
    resource_host::run()
}
