use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A temporarily free game offered by a storefront, normalized so that
/// deals from different sources can be aggregated side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// Discount in percent. Sources only emit fully discounted items, so this
    /// is always [`Deal::FULL_DISCOUNT`] in practice.
    pub discount: u8,
    pub title: String,
    /// Canonical product page, e.g.
    /// `"https://www.epicgames.com/store/en-US/product/celeste"`.
    pub link: String,
    /// Cover art URL. Empty when the source offered no suitable image.
    pub image: String,
    /// Start of the promotion window (UTC).
    pub start: DateTime<Utc>,
    /// End of the promotion window (UTC).
    pub end: DateTime<Utc>,
}

impl Deal {
    pub const FULL_DISCOUNT: u8 = 100;

    /// Returns `true` if the promotion window contains `now`.
    ///
    /// The window is half-open: a deal ending at `now` is no longer active.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }

    /// Returns `true` if the promotion has not started yet at `now`.
    #[must_use]
    pub fn is_upcoming_at(&self, now: DateTime<Utc>) -> bool {
        now < self.start
    }
}
