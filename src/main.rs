use anyhow::Result;

fn main() -> Result<()> {
    vitrine::run()?;
    Ok(())
}
