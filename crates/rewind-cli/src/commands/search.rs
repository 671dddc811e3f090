//! Search, sort and page through cached scores.

use anyhow::Result;
use rewind_core::score::format_score_card;
use rewind_core::{Config, PlayerFilter, ScoreSession, SortKey, SortOrder, SortSpec};

use crate::cli_utils;

pub fn run(
    config: &Config,
    query: Option<&str>,
    sort: Option<SortKey>,
    desc: bool,
    users: &[String],
    page: usize,
    json: bool,
) -> Result<()> {
    let cache = cli_utils::open_cache(config)?;
    let scores = cli_utils::load_scores(&cache)?;

    let order = if desc {
        SortOrder::Descending
    } else {
        config.default_order
    };
    let spec = SortSpec::new(sort.unwrap_or(config.default_sort), order);

    let mut session = ScoreSession::new(scores)
        .with_page_size(config.page_size)
        .with_sort(spec);
    session.set_players(users.iter().cloned().collect::<PlayerFilter>());
    session.search(query.unwrap_or_default());
    session.goto_page(page);

    if json {
        let output = serde_json::json!({
            "page": session.page_label(),
            "total": session.scores().len(),
            "sort": spec,
            "scores": session.page(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for score in session.page() {
        println!("{}", format_score_card(score));
        println!();
    }
    eprintln!(
        "{} scores, sorted by {} ({}), page {}",
        session.scores().len(),
        spec.key,
        spec.order.name(),
        session.page_label()
    );
    Ok(())
}
