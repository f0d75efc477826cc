//! Parse the listing pages on members.parliament.uk giving the current MPs and Lords.
//!
//! The general approach is to have a directory (the page cache) containing the raw
//! listing HTML, and generated mps.csv / lords.csv files. There are two stages:
//! * Download the paginated listing one page at a time. After downloading each page, it is
//!   parsed and, if it contains member cards, placed in the page cache. The first page with
//!   no cards is past the end of the listing. This is update_mps_page_cache() / update_lords_page_cache().
//! * Take all the cached pages, parse each in page order, and write one CSV row per
//!   member card. This is create_mps_csv() / create_lords_csv().
//!
//! This means that each page is parsed twice (who cares - it doesn't take long and is infrequent).
//! The only reason to point this out is that it is somewhat unintuitive. It has the advantage that
//! a failed or truncated download never overwrites the old, working, cached page.

use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::anyhow;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use crate::member::{House, Lord, MP};
use crate::parse_util::{collapse_whitespace, download_to_file, split_name};

/// Cache directory for raw listing pages.
pub const PAGE_CACHE: &'static str = "data/page_cache";
pub const MPS_CSV: &'static str = "mps.csv";
pub const LORDS_CSV: &'static str = "lords.csv";

const COMMONS_LIST_URL: &'static str = "https://members.parliament.uk/members/commons";
const LORDS_LIST_URL: &'static str = "https://members.parliament.uk/members/lords";

// 650 MPs and roughly 800 Lords at 20 cards per page. The caps only stop a
// runaway loop if the site stops producing an empty page past the end.
const MAX_COMMONS_PAGES: usize = 40;
const MAX_LORDS_PAGES: usize = 50;

const POLITE_DELAY: Duration = Duration::from_millis(500);

/// Where the raw HTML for the given house and 1-based page index is cached.
fn page_path(house: House, page: usize) -> PathBuf {
    PathBuf::from(PAGE_CACHE).join(format!("{}-page-{}.html", house.to_string().to_lowercase(), page))
}

/// The fields common to both houses on a member card. The indicator label below the
/// portrait is the constituency for an MP and the peerage type for a Lord.
struct MemberCard {
    member_id: String,
    full_name: String,
    party: String,
    indicator: String,
}

fn mp_from_card(card: MemberCard) -> MP {
    let (first_name, last_name) = split_name(&card.full_name);
    MP {
        member_id: card.member_id,
        full_name: card.full_name,
        first_name,
        last_name,
        constituency: card.indicator,
        party: card.party,
    }
}

fn lord_from_card(card: MemberCard) -> Lord {
    let (first_name, last_name) = split_name(&card.full_name);
    Lord {
        member_id: card.member_id,
        full_name: card.full_name,
        first_name,
        last_name,
        membership_type: card.indicator,
        party: card.party,
    }
}

/// Parse one listing page into member cards, in document order. A typical card looks like
/// ```text
/// <a class="card card-member" href="/member/172/contact">
///   <div class="card-inner">
///     <div class="content">
///       <div class="primary-info">Ms Diane Abbott</div>
///       <div class="secondary-info">Labour</div>
///     </div>
///     <div class="indicators">
///       <div class="indicator indicator-label">Hackney North and Stoke Newington</div>
///     </div>
///   </div>
/// </a>
/// ```
/// A card missing any of these sub-elements produces empty strings for those fields,
/// not an error - the occasional member genuinely has no indicator label.
fn parse_listing_html(html: &str) -> Vec<MemberCard> {
    static MEMBER_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"/member/(\d+)").unwrap());
    let html = Html::parse_document(html);
    let select_card = Selector::parse("a.card-member").unwrap();
    let select_name = Selector::parse(".primary-info").unwrap();
    let select_party = Selector::parse(".secondary-info").unwrap();
    let select_indicator = Selector::parse(".indicator-label").unwrap();
    let mut cards = Vec::new();
    for card in html.select(&select_card) {
        let text_of = |selector: &Selector| {
            card.select(selector).next()
                .map(|e| collapse_whitespace(&e.text().join(" ")))
                .unwrap_or_default()
        };
        let member_id = card.value().attr("href")
            .and_then(|href| MEMBER_ID.captures(href))
            .map(|c| c[1].to_string())
            .unwrap_or_default();
        cards.push(MemberCard {
            member_id,
            full_name: text_of(&select_name),
            party: text_of(&select_party),
            indicator: text_of(&select_indicator),
        });
    }
    cards
}

fn parse_listing_page(path: &Path) -> anyhow::Result<Vec<MemberCard>> {
    Ok(parse_listing_html(&std::fs::read_to_string(path)?))
}

/// Download, check, and persist the listing pages for one house. First of the two stages.
async fn update_page_cache(house: House, base_url: &str, max_pages: usize) -> anyhow::Result<()> {
    std::fs::create_dir_all(PAGE_CACHE)?;
    let client = reqwest::Client::new();
    let mut page = 1;
    loop {
        if page > max_pages {
            println!("Warning: stopped the {} list at {} pages without seeing an empty page.", house, max_pages);
            return Ok(());
        }
        let url = format!("{}?page={}", base_url, page);
        let file = download_to_file(&client, &url).await?;
        let members = parse_listing_page(file.path())?.len();
        if members == 0 {
            println!("Page {} of the {} list has no members - finished.", page, house);
            break;
        }
        println!("Page {} of the {} list : {} members", page, house, members);
        file.persist(page_path(house, page))?;
        page += 1;
        tokio::time::sleep(POLITE_DELAY).await;
    }
    // Remove pages a previous, longer run may have left behind.
    while page_path(house, page).exists() {
        std::fs::remove_file(page_path(house, page))?;
        page += 1;
    }
    Ok(())
}

/// Download the Commons listing pages into the page cache.
pub async fn update_mps_page_cache() -> anyhow::Result<()> {
    update_page_cache(House::Commons, COMMONS_LIST_URL, MAX_COMMONS_PAGES).await
}

/// Download the Lords listing pages into the page cache.
pub async fn update_lords_page_cache() -> anyhow::Result<()> {
    update_page_cache(House::Lords, LORDS_LIST_URL, MAX_LORDS_PAGES).await
}

/// All member cards cached for the given house, in page then document order.
fn cached_cards(house: House, cache_command: &str) -> anyhow::Result<Vec<MemberCard>> {
    let mut cards = Vec::new();
    let mut page = 1;
    loop {
        let path = page_path(house, page);
        if !path.exists() {
            if page == 1 {
                return Err(anyhow!("No cached {} listing pages in {} - run {} first.", house, PAGE_CACHE, cache_command));
            }
            break;
        }
        println!("Processing {}", path.display());
        cards.extend(parse_listing_page(&path)?);
        page += 1;
    }
    Ok(cards)
}

/// Write the rows to a CSV file, header first, overwriting anything already there.
fn write_csv<T: Serialize>(rows: &[T], path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create mps.csv from the pages downloaded by update_mps_page_cache(). Second of the two stages.
pub fn create_mps_csv() -> anyhow::Result<()> {
    let mps: Vec<MP> = cached_cards(House::Commons, "cache_mps")?.into_iter().map(mp_from_card).collect();
    write_csv(&mps, Path::new(MPS_CSV))?;
    println!("Wrote {} MPs to {}", mps.len(), MPS_CSV);
    Ok(())
}

/// Create lords.csv from the pages downloaded by update_lords_page_cache(). Second of the two stages.
pub fn create_lords_csv() -> anyhow::Result<()> {
    let lords: Vec<Lord> = cached_cards(House::Lords, "cache_lords")?.into_iter().map(lord_from_card).collect();
    write_csv(&lords, Path::new(LORDS_CSV))?;
    println!("Wrote {} Lords to {}", lords.len(), LORDS_CSV);
    Ok(())
}
