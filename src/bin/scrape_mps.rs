use uk_members_scrape::member::create_mps_csv;

fn main() -> anyhow::Result<()> {
    println!("Creating mps.csv from the cached Commons pages");
    create_mps_csv()?;
    println!("Ran successfully");
    Ok(())
}
