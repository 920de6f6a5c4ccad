//! Opening hours of the shop and the "open now" status shown in the footer.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpeningHours {
    /// São Paulo has no DST since 2019, a fixed offset is enough.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    /// Last hour (inclusive) in which the shop is open: 23 means "until midnight".
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
    #[serde(default = "default_closed_weekdays")]
    pub closed_weekdays: Vec<Weekday>,
    /// Period of the status re-check in the footer
    #[serde(default = "default_poll_secs")]
    pub poll_secs: u32,
}

fn default_utc_offset() -> i32 {
    -3
}

fn default_open_hour() -> u32 {
    17
}

fn default_close_hour() -> u32 {
    23
}

fn default_closed_weekdays() -> Vec<Weekday> {
    vec![Weekday::Sun]
}

fn default_poll_secs() -> u32 {
    60
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset(),
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            closed_weekdays: default_closed_weekdays(),
            poll_secs: default_poll_secs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopStatus {
    Checking,
    Open,
    Closed,
}

impl ShopStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShopStatus::Checking => "Verificando...",
            ShopStatus::Open => "Aberto",
            ShopStatus::Closed => "Fechado",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ShopStatus::Checking => "status-checking",
            ShopStatus::Open => "status-open",
            ShopStatus::Closed => "status-closed",
        }
    }
}

impl OpeningHours {
    /// Status at a given instant. An offset chrono cannot represent counts as closed.
    pub fn status_at(&self, now: DateTime<Utc>) -> ShopStatus {
        let Some(offset) = FixedOffset::east_opt(self.utc_offset_hours * 3600) else {
            return ShopStatus::Closed;
        };
        let local = now.with_timezone(&offset);

        if self.closed_weekdays.contains(&local.weekday()) {
            return ShopStatus::Closed;
        }
        if (self.open_hour..=self.close_hour).contains(&local.hour()) {
            ShopStatus::Open
        } else {
            ShopStatus::Closed
        }
    }

    pub fn status_now(&self) -> ShopStatus {
        self.status_at(Utc::now())
    }
}
