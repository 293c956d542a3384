use chrono::{DateTime, Utc};
use freegame_core::Deal;

/// Print deals to stdout, either as pretty JSON or as a table.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn print_deals(deals: &[Deal], json: bool, now: DateTime<Utc>) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(deals)?);
    } else {
        print!("{}", render_table(deals, now));
    }
    Ok(())
}

fn status_label(deal: &Deal, now: DateTime<Utc>) -> &'static str {
    if deal.is_active_at(now) {
        "active"
    } else if deal.is_upcoming_at(now) {
        "upcoming"
    } else {
        "ended"
    }
}

fn fmt_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

pub(crate) fn render_table(deals: &[Deal], now: DateTime<Utc>) -> String {
    if deals.is_empty() {
        return "no free games found\n".to_owned();
    }

    let mut out = format!(
        "{:<10}{:<18}{:<18}{:<40}LINK\n",
        "STATUS", "START (UTC)", "END (UTC)", "TITLE"
    );
    for deal in deals {
        let title = if deal.title.chars().count() > 38 {
            format!("{}...", deal.title.chars().take(35).collect::<String>())
        } else {
            deal.title.clone()
        };
        out.push_str(&format!(
            "{:<10}{:<18}{:<18}{:<40}{}\n",
            status_label(deal, now),
            fmt_timestamp(deal.start),
            fmt_timestamp(deal.end),
            title,
            deal.link
        ));
    }
    out
}
