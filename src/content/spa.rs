//! Spa & wellness catalogue. Text lives in the dictionaries under `spa.*`.

/// Attractions listed in the home page teaser, as `spa.attractions.<id>` keys.
pub const ATTRACTIONS: &[&str] = &["pool", "jacuzzi", "massage", "saltCave"];

#[derive(Debug, Clone)]
pub struct TreatmentCategory {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub price_range_key: &'static str,
    pub duration_key: &'static str,
}

pub const TREATMENTS: &[TreatmentCategory] = &[
    TreatmentCategory {
        id: "massage",
        name_key: "spa.treatments.massage.name",
        description_key: "spa.treatments.massage.description",
        price_range_key: "spa.treatments.massage.priceRange",
        duration_key: "spa.treatments.massage.duration",
    },
    TreatmentCategory {
        id: "face",
        name_key: "spa.treatments.face.name",
        description_key: "spa.treatments.face.description",
        price_range_key: "spa.treatments.face.priceRange",
        duration_key: "spa.treatments.face.duration",
    },
    TreatmentCategory {
        id: "rituals",
        name_key: "spa.treatments.rituals.name",
        description_key: "spa.treatments.rituals.description",
        price_range_key: "spa.treatments.rituals.priceRange",
        duration_key: "spa.treatments.rituals.duration",
    },
];

#[derive(Debug, Clone)]
pub struct FeaturedService {
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub price_key: &'static str,
    pub duration_key: &'static str,
    pub image: &'static str,
}

pub const FEATURED_SERVICES: &[FeaturedService] = &[
    FeaturedService {
        name_key: "spa.services.aromatherapy.name",
        description_key: "spa.services.aromatherapy.description",
        price_key: "spa.services.aromatherapy.price",
        duration_key: "spa.services.aromatherapy.duration",
        image: "/spa/spa-03.jpeg",
    },
    FeaturedService {
        name_key: "spa.services.hotStones.name",
        description_key: "spa.services.hotStones.description",
        price_key: "spa.services.hotStones.price",
        duration_key: "spa.services.hotStones.duration",
        image: "/spa/spa-05.jpeg",
    },
    FeaturedService {
        name_key: "spa.services.facial.name",
        description_key: "spa.services.facial.description",
        price_key: "spa.services.facial.price",
        duration_key: "spa.services.facial.duration",
        image: "/spa/spa-07.jpeg",
    },
];

/// `spa.saltRoomBenefits.<id>.{title,description}`
pub const SALT_ROOM_BENEFITS: &[&str] = &["respiratory", "immunity", "stress"];

/// `spa.saltRoomPrices.<id>.{title,price}`
pub const SALT_ROOM_PRICES: &[&str] = &["individual", "family", "fivepack"];

/// `spa.beautyServices.<id>.{title,description,price}`
pub const BEAUTY_SERVICES: &[&str] = &["classic", "hybrid", "japanese", "extension"];

pub const INTRO_IMAGE: &str = "/spa/spa-15.jpeg";
pub const WELLNESS_IMAGE: &str = "/spa/spa-02.jpeg";
pub const SALT_ROOM_IMAGE: &str = "/spa/spa-1.png";
pub const BEAUTY_IMAGE: &str = "/spa/spa-2.png";
pub const TEASER_IMAGES: &[&str] = &["/spa/spa-1.png", "/spa/spa-13.jpg"];
