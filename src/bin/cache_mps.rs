use uk_members_scrape::member::update_mps_page_cache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Downloading Commons listing pages into the page cache");
    update_mps_page_cache().await?;
    println!("Ran successfully");
    Ok(())
}
