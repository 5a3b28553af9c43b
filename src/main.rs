fn main() -> anyhow::Result<()> {
    tagger::run()?;
    Ok(())
}
