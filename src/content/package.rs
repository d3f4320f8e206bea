//! Package details shown alongside every CMS offer.
//!
//! These are house-wide package terms, not part of the offer documents, so
//! they live in code with one copy per language.

use crate::i18n::Language;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmenityIcon {
    Coffee,
    Utensils,
    Spa,
    Wifi,
    Check,
    Clock,
}

impl AmenityIcon {
    pub fn css_class(&self) -> &'static str {
        match self {
            AmenityIcon::Coffee => "icon icon-coffee",
            AmenityIcon::Utensils => "icon icon-utensils",
            AmenityIcon::Spa => "icon icon-spa",
            AmenityIcon::Wifi => "icon icon-wifi",
            AmenityIcon::Check => "icon icon-check",
            AmenityIcon::Clock => "icon icon-clock",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Amenity {
    pub name: &'static str,
    pub icon: AmenityIcon,
}

#[derive(Debug, Clone)]
pub struct Review {
    pub author: &'static str,
    /// 1 to 5 stars
    pub rating: u8,
    pub text: &'static str,
}

#[derive(Debug, Clone)]
pub struct RelatedOffer {
    pub name: &'static str,
    pub slug: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone)]
pub struct PackageDetails {
    pub duration: &'static str,
    /// (year, month, day)
    pub valid_until: (i32, u32, u32),
    pub room_type: &'static str,
    pub max_guests: u32,
    pub savings_percent: u8,
    pub amenities: &'static [Amenity],
    pub highlights: &'static [&'static str],
    pub terms: &'static [&'static str],
    pub reviews: &'static [Review],
    pub related_offers: &'static [RelatedOffer],
    pub gallery: &'static [&'static str],
}

impl PackageDetails {
    /// Details for a language; languages without their own copy get Polish.
    pub fn for_language(language: Language) -> &'static PackageDetails {
        match language.code() {
            "en" => &ENGLISH_PACKAGE,
            _ => &POLISH_PACKAGE,
        }
    }

    pub fn valid_until(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.valid_until;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

const GALLERY: &[&str] = &[
    "/room/room-01.jpg",
    "/spa/spa-14.jpg",
    "/restaurant/rest-03.jpg",
    "/outdoor/out-02.jpg",
];

pub static POLISH_PACKAGE: PackageDetails = PackageDetails {
    duration: "3 dni / 2 noce",
    valid_until: (2025, 12, 31),
    room_type: "Pokój Deluxe",
    max_guests: 2,
    savings_percent: 15,
    amenities: &[
        Amenity { name: "Śniadanie w formie bufetu", icon: AmenityIcon::Coffee },
        Amenity { name: "Kolacja w restauracji hotelowej", icon: AmenityIcon::Utensils },
        Amenity { name: "Dostęp do strefy SPA & Wellness", icon: AmenityIcon::Spa },
        Amenity { name: "Bezpłatne Wi-Fi", icon: AmenityIcon::Wifi },
        Amenity { name: "Parking", icon: AmenityIcon::Check },
        Amenity { name: "Późne wymeldowanie", icon: AmenityIcon::Clock },
    ],
    highlights: &[
        "Romantyczna kolacja przy świecach",
        "Butelka wina powitalnego w pokoju",
        "Masaż relaksacyjny dla dwojga (60 min)",
        "Dostęp do basenu i strefy saun",
        "Zniżka 15% na dodatkowe zabiegi SPA",
    ],
    terms: &[
        "Oferta ważna w wybrane dni tygodnia",
        "Rezerwacja z minimum 7-dniowym wyprzedzeniem",
        "Pełna płatność wymagana przy rezerwacji",
        "Brak możliwości zwrotu w przypadku anulowania",
    ],
    reviews: &[
        Review {
            author: "Anna i Marek",
            rating: 5,
            text: "Wspaniały weekend! Obsługa na najwyższym poziomie, a pakiet zawierał wszystko, czego potrzebowaliśmy do relaksu.",
        },
        Review {
            author: "Katarzyna",
            rating: 4,
            text: "Bardzo dobry stosunek jakości do ceny. Szczególnie podobał nam się masaż i kolacja.",
        },
    ],
    related_offers: &[
        RelatedOffer { name: "Pakiet Rodzinny", slug: "pakiet-rodzinny", image: "/outdoor/out-04.jpg" },
        RelatedOffer { name: "Weekend SPA", slug: "weekend-spa", image: "/spa/spa-14.jpg" },
    ],
    gallery: GALLERY,
};

pub static ENGLISH_PACKAGE: PackageDetails = PackageDetails {
    duration: "3 days / 2 nights",
    valid_until: (2025, 12, 31),
    room_type: "Deluxe Room",
    max_guests: 2,
    savings_percent: 15,
    amenities: &[
        Amenity { name: "Buffet breakfast", icon: AmenityIcon::Coffee },
        Amenity { name: "Dinner at the hotel restaurant", icon: AmenityIcon::Utensils },
        Amenity { name: "Access to the SPA & Wellness area", icon: AmenityIcon::Spa },
        Amenity { name: "Free Wi-Fi", icon: AmenityIcon::Wifi },
        Amenity { name: "Parking", icon: AmenityIcon::Check },
        Amenity { name: "Late check-out", icon: AmenityIcon::Clock },
    ],
    highlights: &[
        "Romantic candlelit dinner",
        "Bottle of welcome wine in the room",
        "Relaxing massage for two (60 min)",
        "Access to the pool and sauna area",
        "15% off additional SPA treatments",
    ],
    terms: &[
        "Offer valid on selected days of the week",
        "Booking at least 7 days in advance",
        "Full payment required at booking",
        "Non-refundable in case of cancellation",
    ],
    reviews: &[
        Review {
            author: "Anna & Marek",
            rating: 5,
            text: "A wonderful weekend! Top-class service, and the package had everything we needed to relax.",
        },
        Review {
            author: "Katarzyna",
            rating: 4,
            text: "Great value for money. We especially enjoyed the massage and the dinner.",
        },
    ],
    related_offers: &[
        RelatedOffer { name: "Family Package", slug: "pakiet-rodzinny", image: "/outdoor/out-04.jpg" },
        RelatedOffer { name: "SPA Weekend", slug: "weekend-spa", image: "/spa/spa-14.jpg" },
    ],
    gallery: GALLERY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_language() {
        assert_eq!(PackageDetails::for_language(Language::POLISH).room_type, "Pokój Deluxe");
        assert_eq!(PackageDetails::for_language(Language::ENGLISH).room_type, "Deluxe Room");
    }

    #[test]
    fn test_valid_until_is_a_real_date() {
        for language in Language::all() {
            let details = PackageDetails::for_language(language);
            assert_eq!(details.valid_until(), NaiveDate::from_ymd_opt(2025, 12, 31));
        }
    }

    #[test]
    fn test_translations_have_matching_shape() {
        assert_eq!(POLISH_PACKAGE.amenities.len(), ENGLISH_PACKAGE.amenities.len());
        assert_eq!(POLISH_PACKAGE.highlights.len(), ENGLISH_PACKAGE.highlights.len());
        assert_eq!(POLISH_PACKAGE.terms.len(), ENGLISH_PACKAGE.terms.len());
        assert_eq!(POLISH_PACKAGE.reviews.len(), ENGLISH_PACKAGE.reviews.len());
    }

    #[test]
    fn test_review_ratings_in_range() {
        for review in POLISH_PACKAGE.reviews.iter().chain(ENGLISH_PACKAGE.reviews) {
            assert!((1..=5).contains(&review.rating));
        }
    }
}
