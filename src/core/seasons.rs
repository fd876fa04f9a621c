//! The season calendar: four fixed quarters of the year.

use chrono::{Datelike, NaiveDate};

/// A named quarter. `from` and `to` are inclusive (month, day) bounds.
#[derive(Debug, Clone, Copy)]
pub struct Season {
    pub id: u32,
    pub name: &'static str,
    pub from: (u32, u32),
    pub to: (u32, u32),
}

/// All seasons in calendar order.
pub const SEASONS: &[Season] = &[
    Season {
        id: 1,
        name: "The Awakening",
        from: (1, 1),
        to: (3, 31),
    },
    Season {
        id: 2,
        name: "Rise of Power",
        from: (4, 1),
        to: (6, 30),
    },
    Season {
        id: 3,
        name: "Dark Shadow",
        from: (7, 1),
        to: (9, 30),
    },
    Season {
        id: 4,
        name: "Eternal Destiny",
        from: (10, 1),
        to: (12, 31),
    },
];

/// Looks up a season by id.
pub fn season_by_id(id: u32) -> Option<&'static Season> {
    SEASONS.iter().find(|season| season.id == id)
}

/// The season whose date range contains the given date.
pub fn season_for_date(date: NaiveDate) -> &'static Season {
    let month_day = (date.month(), date.day());
    SEASONS
        .iter()
        .find(|season| month_day >= season.from && month_day <= season.to)
        .unwrap_or(&SEASONS[0])
}
