use uk_members_scrape::member::create_lords_csv;

fn main() -> anyhow::Result<()> {
    println!("Creating lords.csv from the cached Lords pages");
    create_lords_csv()?;
    println!("Ran successfully");
    Ok(())
}
