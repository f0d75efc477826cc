use uk_members_scrape::member::update_lords_page_cache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Downloading Lords listing pages into the page cache");
    update_lords_page_cache().await?;
    println!("Ran successfully");
    Ok(())
}
