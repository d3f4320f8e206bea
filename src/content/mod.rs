//! Static supplementary content that is not managed in the CMS.
//!
//! Anything user-visible is either stored per language here (`package`) or
//! referenced by dictionary key (`spa`, `events`, `business`).

pub mod business;
pub mod events;
pub mod package;
pub mod spa;

pub use package::{Amenity, AmenityIcon, PackageDetails, RelatedOffer, Review};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionary, Language};

    /// Every dictionary key referenced from static content must resolve in
    /// every language.
    fn referenced_keys() -> Vec<String> {
        let mut keys = Vec::new();

        keys.extend(spa::ATTRACTIONS.iter().map(|id| format!("spa.attractions.{}", id)));
        for category in spa::TREATMENTS {
            keys.extend(
                [
                    category.name_key,
                    category.description_key,
                    category.price_range_key,
                    category.duration_key,
                ]
                .map(String::from),
            );
        }
        for service in spa::FEATURED_SERVICES {
            keys.extend(
                [
                    service.name_key,
                    service.description_key,
                    service.price_key,
                    service.duration_key,
                ]
                .map(String::from),
            );
        }
        for id in spa::SALT_ROOM_BENEFITS {
            keys.push(format!("spa.saltRoomBenefits.{}.title", id));
            keys.push(format!("spa.saltRoomBenefits.{}.description", id));
        }
        for id in spa::SALT_ROOM_PRICES {
            keys.push(format!("spa.saltRoomPrices.{}.title", id));
            keys.push(format!("spa.saltRoomPrices.{}.price", id));
        }
        for id in spa::BEAUTY_SERVICES {
            keys.push(format!("spa.beautyServices.{}.title", id));
            keys.push(format!("spa.beautyServices.{}.description", id));
            keys.push(format!("spa.beautyServices.{}.price", id));
        }

        for venue in events::VENUES {
            keys.push(venue.name_key.to_string());
            keys.push(venue.description_key.to_string());
            keys.extend(venue.feature_keys.iter().map(|k| k.to_string()));
        }
        for package in events::WEDDING_PACKAGES {
            keys.extend([package.name_key, package.description_key, package.price_key].map(String::from));
        }
        for id in events::ADDITIONAL_SERVICES {
            keys.push(format!("events.services.{}.name", id));
            keys.push(format!("events.services.{}.description", id));
        }

        for room in business::CONFERENCE_ROOMS {
            keys.push(room.name_key.to_string());
            keys.push(room.description_key.to_string());
        }
        keys.extend(business::EQUIPMENT.iter().map(|id| format!("business.equipment.{}", id)));

        keys
    }

    #[test]
    fn test_all_referenced_keys_resolve() {
        for language in Language::all() {
            let dictionary = Dictionary::embedded(language);
            for key in referenced_keys() {
                assert!(
                    dictionary.get(&key).is_some(),
                    "{}: missing dictionary key {}",
                    language,
                    key
                );
            }
        }
    }
}
