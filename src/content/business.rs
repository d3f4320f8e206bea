//! Conference and business facilities.

#[derive(Debug, Clone)]
pub struct ConferenceRoom {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub capacity: u32,
    pub area_m2: u32,
    pub image: &'static str,
}

pub const CONFERENCE_ROOMS: &[ConferenceRoom] = &[
    ConferenceRoom {
        id: "theater",
        name_key: "business.rooms.theater.name",
        description_key: "business.rooms.theater.description",
        capacity: 150,
        area_m2: 220,
        image: "/conference/theater-01.jpg",
    },
    ConferenceRoom {
        id: "cozy",
        name_key: "business.rooms.cozy.name",
        description_key: "business.rooms.cozy.description",
        capacity: 30,
        area_m2: 55,
        image: "/conference/cozy-01.jpg",
    },
    ConferenceRoom {
        id: "boardroom",
        name_key: "business.rooms.boardroom.name",
        description_key: "business.rooms.boardroom.description",
        capacity: 12,
        area_m2: 35,
        image: "/conference/boardroom-01.jpg",
    },
];

/// `business.equipment.<id>`
pub const EQUIPMENT: &[&str] = &[
    "projector",
    "sound",
    "wifi",
    "flipchart",
    "videoconference",
    "catering",
];

pub const TEASER_IMAGES: &[&str] = &["/conference/theater-01.jpg", "/conference/cozy-01.jpg"];
