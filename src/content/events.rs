//! Weddings and events: venues, packages and open dates.

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Venue {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub capacity: u32,
    pub area_m2: u32,
    pub image: &'static str,
    /// Keys under `events.features.*`
    pub feature_keys: &'static [&'static str],
}

pub const VENUES: &[Venue] = &[
    Venue {
        id: "ballroom",
        name_key: "events.venues.ballroom.name",
        description_key: "events.venues.ballroom.description",
        capacity: 200,
        area_m2: 320,
        image: "/events/ballroom-01.jpg",
        feature_keys: &[
            "events.features.stage",
            "events.features.danceFloor",
            "events.features.airConditioning",
            "events.features.bar",
        ],
    },
    Venue {
        id: "garden",
        name_key: "events.venues.garden.name",
        description_key: "events.venues.garden.description",
        capacity: 120,
        area_m2: 600,
        image: "/events/garden-01.jpg",
        feature_keys: &["events.features.terrace", "events.features.garden"],
    },
    Venue {
        id: "chamber",
        name_key: "events.venues.chamber.name",
        description_key: "events.venues.chamber.description",
        capacity: 50,
        area_m2: 90,
        image: "/events/chamber-01.jpg",
        feature_keys: &[
            "events.features.projector",
            "events.features.privateEntrance",
            "events.features.airConditioning",
        ],
    },
];

#[derive(Debug, Clone)]
pub struct WeddingPackage {
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub price_key: &'static str,
}

pub const WEDDING_PACKAGES: &[WeddingPackage] = &[
    WeddingPackage {
        name_key: "events.packages.classic.name",
        description_key: "events.packages.classic.description",
        price_key: "events.packages.classic.price",
    },
    WeddingPackage {
        name_key: "events.packages.premium.name",
        description_key: "events.packages.premium.description",
        price_key: "events.packages.premium.price",
    },
    WeddingPackage {
        name_key: "events.packages.exclusive.name",
        description_key: "events.packages.exclusive.description",
        price_key: "events.packages.exclusive.price",
    },
];

/// `events.services.<id>.{name,description}`
pub const ADDITIONAL_SERVICES: &[&str] = &["photography", "music", "decoration", "accommodation"];

pub const GALLERY: &[&str] = &[
    "/events/wedding-01.jpg",
    "/events/wedding-02.jpg",
    "/events/wedding-03.jpg",
    "/events/wedding-04.jpg",
    "/events/wedding-05.jpg",
    "/events/wedding-06.jpg",
];

/// Dates still open for receptions, as (year, month, day).
const AVAILABLE_DATES: &[(i32, u32, u32)] = &[
    (2025, 6, 5),
    (2025, 6, 12),
    (2025, 6, 19),
    (2025, 6, 26),
    (2025, 7, 3),
    (2025, 7, 10),
    (2025, 7, 17),
    (2025, 7, 24),
    (2025, 8, 7),
    (2025, 8, 14),
    (2025, 8, 21),
    (2025, 8, 28),
];

pub fn available_dates() -> Vec<NaiveDate> {
    AVAILABLE_DATES
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_dates_all_valid_and_sorted() {
        let dates = available_dates();
        assert_eq!(dates.len(), AVAILABLE_DATES.len());
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_venue_ids_unique() {
        let mut ids: Vec<_> = VENUES.iter().map(|v| v.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), VENUES.len());
    }
}
