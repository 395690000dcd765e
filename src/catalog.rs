//! Static catalog data
//!
//! Salons, at-home artists, services, reviews and the booking checklist are
//! bundled constants. Nothing here is loaded from disk or the network, and
//! nothing is ever mutated.

use crate::types::{BookingStatus, Gender, ServiceCategory};

/// A bookable service, either at a salon or at home.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Duration label as displayed, e.g. `45 min`
    pub duration: &'static str,
    /// Price in whole rupees
    pub price: u32,
    /// Pre-discount price, when the service is on offer
    pub original_price: Option<u32>,
    pub category: ServiceCategory,
}

impl Service {
    /// Discount in percent against the original price, if any
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .filter(|orig| *orig > self.price)
            .map(|orig| ((orig - self.price) * 100 + orig / 2) / orig)
    }
}

/// Home/explore category chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub gender: Gender,
}

/// A fixed-location salon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Salon {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub rating: f32,
    pub review_count: u32,
    pub distance: &'static str,
    pub is_open: bool,
    pub offer: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

/// Salon staff member
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stylist {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
}

/// Review left for a salon stylist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalonReview {
    pub id: &'static str,
    pub stylist_id: &'static str,
    pub user_name: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub service: &'static str,
    pub date: &'static str,
    pub has_photo: bool,
}

/// Before/after portfolio entry for an artist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeforeAfter {
    pub id: &'static str,
    pub service: &'static str,
}

/// At-home service provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Artist {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
    pub review_count: u32,
    pub years_exp: u32,
    pub on_time_percent: u32,
    pub distance: &'static str,
    pub distance_km: f32,
    /// Flat surcharge for travelling to the customer
    pub travel_fee: u32,
    /// Cart total below which the booking cannot continue
    pub minimum_booking: u32,
    pub is_available: bool,
    pub services: &'static [Service],
    pub before_after: &'static [BeforeAfter],
}

impl Artist {
    /// Look up one of this artist's services
    pub fn service(&self, id: &str) -> Option<&'static Service> {
        self.services.iter().find(|s| s.id == id)
    }
}

/// Review left for an at-home artist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtistReview {
    pub id: &'static str,
    pub artist_id: &'static str,
    pub user_name: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub service: &'static str,
    pub date: &'static str,
    pub helpful: u32,
    pub has_before_after: bool,
}

/// Requirement the customer acknowledges before an at-home visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Candidate appointment time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: &'static str,
    pub available: bool,
}

/// Entry on the bookings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub id: &'static str,
    pub salon_name: &'static str,
    pub service: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub price: u32,
    pub status: BookingStatus,
}

// ============================================================================
// Salons
// ============================================================================

pub static SALONS: &[Salon] = &[
    Salon {
        id: "s1",
        name: "The Gentlemen's Lounge",
        address: "12 MG Road, Indiranagar",
        rating: 4.8,
        review_count: 324,
        distance: "1.2 km",
        is_open: true,
        offer: Some("20% OFF"),
        tags: &["Verified", "Premium"],
        featured: true,
    },
    Salon {
        id: "s2",
        name: "Glow Studio",
        address: "45 Brigade Road, Ashok Nagar",
        rating: 4.6,
        review_count: 198,
        distance: "2.5 km",
        is_open: true,
        offer: Some("Flat 150 OFF"),
        tags: &["Verified"],
        featured: true,
    },
    Salon {
        id: "s3",
        name: "Urban Fade Barbers",
        address: "8 Church Street, Shanthala Nagar",
        rating: 4.7,
        review_count: 256,
        distance: "3.1 km",
        is_open: false,
        offer: None,
        tags: &["Walk-ins"],
        featured: true,
    },
    Salon {
        id: "s4",
        name: "Blush & Bloom",
        address: "22 100 Feet Road, Koramangala",
        rating: 4.5,
        review_count: 143,
        distance: "0.8 km",
        is_open: true,
        offer: None,
        tags: &["Verified", "Bridal"],
        featured: false,
    },
    Salon {
        id: "s5",
        name: "Sharp Edge Studio",
        address: "3 Residency Road, Richmond Town",
        rating: 4.3,
        review_count: 87,
        distance: "1.9 km",
        is_open: true,
        offer: Some("Free Beard Trim"),
        tags: &["Budget"],
        featured: false,
    },
    Salon {
        id: "s6",
        name: "Serenity Spa & Salon",
        address: "67 HSR Layout, Sector 2",
        rating: 4.9,
        review_count: 412,
        distance: "4.4 km",
        is_open: false,
        offer: None,
        tags: &["Premium", "Spa"],
        featured: false,
    },
];

pub static SALON_SERVICES: &[Service] = &[
    Service {
        id: "m1",
        name: "Classic Haircut",
        description: "Precision cut with wash and styling.",
        duration: "30 min",
        price: 299,
        original_price: Some(399),
        category: ServiceCategory::Men,
    },
    Service {
        id: "m2",
        name: "Beard Sculpting",
        description: "Shape, trim and hot towel finish.",
        duration: "20 min",
        price: 199,
        original_price: None,
        category: ServiceCategory::Men,
    },
    Service {
        id: "m3",
        name: "Charcoal Facial",
        description: "Deep-cleansing facial for oily skin.",
        duration: "45 min",
        price: 799,
        original_price: Some(999),
        category: ServiceCategory::Men,
    },
    Service {
        id: "w1",
        name: "Layered Cut & Blow Dry",
        description: "Face-framing layers with a bouncy finish.",
        duration: "60 min",
        price: 899,
        original_price: None,
        category: ServiceCategory::Women,
    },
    Service {
        id: "w2",
        name: "Global Hair Colour",
        description: "Ammonia-free colour, root to tip.",
        duration: "120 min",
        price: 2499,
        original_price: Some(2999),
        category: ServiceCategory::Women,
    },
    Service {
        id: "w3",
        name: "Gel Manicure",
        description: "Long-lasting gel polish with cuticle care.",
        duration: "45 min",
        price: 699,
        original_price: None,
        category: ServiceCategory::Women,
    },
    Service {
        id: "p1",
        name: "Groom's Essentials",
        description: "Haircut, beard styling and facial.",
        duration: "90 min",
        price: 1199,
        original_price: Some(1499),
        category: ServiceCategory::Packages,
    },
    Service {
        id: "p2",
        name: "Pamper Day",
        description: "Hair spa, manicure and pedicure.",
        duration: "150 min",
        price: 2199,
        original_price: Some(2799),
        category: ServiceCategory::Packages,
    },
];

pub static STYLISTS: &[Stylist] = &[
    Stylist {
        id: "a1",
        name: "Rahul",
        specialty: "Fades & Beards",
        rating: 4.9,
    },
    Stylist {
        id: "a2",
        name: "Ananya",
        specialty: "Colour Specialist",
        rating: 4.8,
    },
    Stylist {
        id: "a3",
        name: "Vikram",
        specialty: "Classic Cuts",
        rating: 4.6,
    },
    Stylist {
        id: "a4",
        name: "Meera",
        specialty: "Skin & Nails",
        rating: 4.7,
    },
];

pub static SALON_REVIEWS: &[SalonReview] = &[
    SalonReview {
        id: "r1",
        stylist_id: "a1",
        user_name: "Arjun K.",
        rating: 5,
        text: "Best fade I've had in years. Rahul really listens.",
        service: "Classic Haircut",
        date: "2 days ago",
        has_photo: true,
    },
    SalonReview {
        id: "r2",
        stylist_id: "a2",
        user_name: "Priya S.",
        rating: 5,
        text: "The colour came out exactly like the reference photo.",
        service: "Global Hair Colour",
        date: "1 week ago",
        has_photo: true,
    },
    SalonReview {
        id: "r3",
        stylist_id: "a3",
        user_name: "Karan M.",
        rating: 4,
        text: "Good cut, had to wait ten minutes past my slot.",
        service: "Classic Haircut",
        date: "2 weeks ago",
        has_photo: false,
    },
    SalonReview {
        id: "r4",
        stylist_id: "a4",
        user_name: "Sneha R.",
        rating: 5,
        text: "Gel manicure lasted three weeks without chipping.",
        service: "Gel Manicure",
        date: "3 weeks ago",
        has_photo: false,
    },
    SalonReview {
        id: "r5",
        stylist_id: "a1",
        user_name: "Dev P.",
        rating: 4,
        text: "Beard sculpting was sharp. A bit pricey.",
        service: "Beard Sculpting",
        date: "1 month ago",
        has_photo: false,
    },
];

pub static CATEGORIES: &[Category] = &[
    Category { id: "mc1", name: "Haircut", gender: Gender::Male },
    Category { id: "mc2", name: "Beard", gender: Gender::Male },
    Category { id: "mc3", name: "Facial", gender: Gender::Male },
    Category { id: "mc4", name: "Massage", gender: Gender::Male },
    Category { id: "mc5", name: "Colour", gender: Gender::Male },
    Category { id: "fc1", name: "Hair", gender: Gender::Female },
    Category { id: "fc2", name: "Nails", gender: Gender::Female },
    Category { id: "fc3", name: "Makeup", gender: Gender::Female },
    Category { id: "fc4", name: "Skin", gender: Gender::Female },
    Category { id: "fc5", name: "Bridal", gender: Gender::Female },
];

pub static BOOKINGS: &[Booking] = &[
    Booking {
        id: "b1",
        salon_name: "Glow Studio",
        service: "Layered Cut & Blow Dry",
        date: "Sat, 24 Oct",
        time: "11:00 AM",
        price: 899,
        status: BookingStatus::Upcoming,
    },
    Booking {
        id: "b2",
        salon_name: "The Gentlemen's Lounge",
        service: "Classic Haircut",
        date: "Mon, 5 Oct",
        time: "4:30 PM",
        price: 299,
        status: BookingStatus::Completed,
    },
    Booking {
        id: "b3",
        salon_name: "Urban Fade Barbers",
        service: "Beard Sculpting",
        date: "Tue, 22 Sep",
        time: "10:00 AM",
        price: 199,
        status: BookingStatus::Cancelled,
    },
];

// ============================================================================
// At-home artists
// ============================================================================

const NISHA_SERVICES: &[Service] = &[
    Service {
        id: "h1",
        name: "HD Bridal Makeup",
        description: "Airbrush base, lashes and draping for the big day.",
        duration: "180 min",
        price: 8999,
        original_price: Some(11999),
        category: ServiceCategory::Bridal,
    },
    Service {
        id: "h2",
        name: "Party Makeup",
        description: "Soft glam with lashes and hairstyling.",
        duration: "75 min",
        price: 2499,
        original_price: None,
        category: ServiceCategory::Bridal,
    },
    Service {
        id: "h3",
        name: "Blow Dry & Curls",
        description: "Volume blow dry finished with soft curls.",
        duration: "45 min",
        price: 799,
        original_price: Some(999),
        category: ServiceCategory::Hair,
    },
    Service {
        id: "h4",
        name: "Hydra Facial",
        description: "Cleanse, exfoliate and hydrate in one session.",
        duration: "60 min",
        price: 1499,
        original_price: None,
        category: ServiceCategory::Skin,
    },
    Service {
        id: "h5",
        name: "Pre-Bridal Glow Package",
        description: "Facial, body polish, manicure and pedicure.",
        duration: "240 min",
        price: 5999,
        original_price: Some(7499),
        category: ServiceCategory::Packages,
    },
];

const ROHAN_SERVICES: &[Service] = &[
    Service {
        id: "h6",
        name: "Haircut at Home",
        description: "Cut, wash and style without leaving home.",
        duration: "40 min",
        price: 499,
        original_price: None,
        category: ServiceCategory::Hair,
    },
    Service {
        id: "h7",
        name: "Beard Grooming",
        description: "Trim, line-up and beard oil treatment.",
        duration: "25 min",
        price: 299,
        original_price: None,
        category: ServiceCategory::Hair,
    },
    Service {
        id: "h8",
        name: "De-Tan Cleanup",
        description: "Tan removal and quick cleanup.",
        duration: "35 min",
        price: 599,
        original_price: Some(749),
        category: ServiceCategory::Skin,
    },
];

const TANVI_SERVICES: &[Service] = &[
    Service {
        id: "h9",
        name: "Gel Extensions",
        description: "Full set of sculpted gel extensions.",
        duration: "90 min",
        price: 1999,
        original_price: Some(2499),
        category: ServiceCategory::Nails,
    },
    Service {
        id: "h10",
        name: "Spa Pedicure",
        description: "Soak, scrub, massage and polish.",
        duration: "50 min",
        price: 899,
        original_price: None,
        category: ServiceCategory::Nails,
    },
    Service {
        id: "h11",
        name: "Nail Art (per hand)",
        description: "Hand-painted designs on a gel base.",
        duration: "30 min",
        price: 499,
        original_price: None,
        category: ServiceCategory::Nails,
    },
];

const KABIR_SERVICES: &[Service] = &[Service {
    id: "h12",
    name: "Deep Tissue Massage",
    description: "Full body massage focusing on tension areas.",
    duration: "60 min",
    price: 1799,
    original_price: None,
    category: ServiceCategory::Skin,
}];

pub static ARTISTS: &[Artist] = &[
    Artist {
        id: "ah1",
        name: "Nisha Kapoor",
        specialty: "Bridal & Party Makeup",
        rating: 4.9,
        review_count: 212,
        years_exp: 8,
        on_time_percent: 98,
        distance: "2.1 km away",
        distance_km: 2.1,
        travel_fee: 149,
        minimum_booking: 999,
        is_available: true,
        services: NISHA_SERVICES,
        before_after: &[
            BeforeAfter { id: "ba1", service: "HD Bridal Makeup" },
            BeforeAfter { id: "ba2", service: "Party Makeup" },
        ],
    },
    Artist {
        id: "ah2",
        name: "Rohan Mehta",
        specialty: "Men's Grooming",
        rating: 4.7,
        review_count: 98,
        years_exp: 5,
        on_time_percent: 95,
        distance: "3.4 km away",
        distance_km: 3.4,
        travel_fee: 99,
        minimum_booking: 499,
        is_available: true,
        services: ROHAN_SERVICES,
        before_after: &[BeforeAfter { id: "ba3", service: "Beard Grooming" }],
    },
    Artist {
        id: "ah3",
        name: "Tanvi Rao",
        specialty: "Nail Artist",
        rating: 4.8,
        review_count: 156,
        years_exp: 6,
        on_time_percent: 97,
        distance: "1.5 km away",
        distance_km: 1.5,
        travel_fee: 0,
        minimum_booking: 799,
        is_available: true,
        services: TANVI_SERVICES,
        before_after: &[],
    },
    Artist {
        id: "ah4",
        name: "Kabir Singh",
        specialty: "Massage Therapist",
        rating: 4.5,
        review_count: 41,
        years_exp: 3,
        on_time_percent: 92,
        distance: "6.8 km away",
        distance_km: 6.8,
        travel_fee: 199,
        minimum_booking: 1499,
        is_available: false,
        services: KABIR_SERVICES,
        before_after: &[],
    },
];

pub static ARTIST_REVIEWS: &[ArtistReview] = &[
    ArtistReview {
        id: "ar1",
        artist_id: "ah1",
        user_name: "Ritika J.",
        rating: 5,
        text: "Nisha did my wedding makeup and it stayed flawless all night.",
        service: "HD Bridal Makeup",
        date: "1 week ago",
        helpful: 24,
        has_before_after: true,
    },
    ArtistReview {
        id: "ar2",
        artist_id: "ah1",
        user_name: "Aisha K.",
        rating: 5,
        text: "Arrived early and set up in ten minutes.",
        service: "Party Makeup",
        date: "2 weeks ago",
        helpful: 11,
        has_before_after: false,
    },
    ArtistReview {
        id: "ar3",
        artist_id: "ah1",
        user_name: "Pooja N.",
        rating: 4,
        text: "Lovely curls, though they dropped by evening.",
        service: "Blow Dry & Curls",
        date: "1 month ago",
        helpful: 3,
        has_before_after: false,
    },
    ArtistReview {
        id: "ar4",
        artist_id: "ah2",
        user_name: "Siddharth V.",
        rating: 5,
        text: "Saved me a trip to the barber. Clean work.",
        service: "Haircut at Home",
        date: "3 days ago",
        helpful: 8,
        has_before_after: false,
    },
    ArtistReview {
        id: "ar5",
        artist_id: "ah2",
        user_name: "Nikhil B.",
        rating: 3,
        text: "Decent trim, left some hair on the floor.",
        service: "Beard Grooming",
        date: "3 weeks ago",
        helpful: 2,
        has_before_after: false,
    },
    ArtistReview {
        id: "ar6",
        artist_id: "ah3",
        user_name: "Kavya D.",
        rating: 5,
        text: "The nail art was even better than the inspiration photo.",
        service: "Nail Art (per hand)",
        date: "5 days ago",
        helpful: 15,
        has_before_after: true,
    },
];

// ============================================================================
// Booking flow constants
// ============================================================================

pub static ENVIRONMENT_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "space",
        label: "Clear workspace",
        description: "A 6x6 ft area with room for a chair and kit.",
    },
    ChecklistItem {
        id: "power",
        label: "Power outlet nearby",
        description: "A working socket within 2 m for tools.",
    },
    ChecklistItem {
        id: "light",
        label: "Good lighting",
        description: "Natural light or a bright lamp near the seat.",
    },
    ChecklistItem {
        id: "water",
        label: "Water access",
        description: "A tap or bucket of clean water for rinsing.",
    },
    ChecklistItem {
        id: "chair",
        label: "Sturdy chair",
        description: "A stable, armless chair at normal height.",
    },
];

pub static TIME_SLOTS: &[TimeSlot] = &[
    TimeSlot { label: "9:00 AM", available: true },
    TimeSlot { label: "9:30 AM", available: true },
    TimeSlot { label: "10:00 AM", available: true },
    TimeSlot { label: "10:30 AM", available: true },
    TimeSlot { label: "11:00 AM", available: true },
    TimeSlot { label: "11:30 AM", available: true },
    TimeSlot { label: "12:00 PM", available: true },
    TimeSlot { label: "12:30 PM", available: false },
    TimeSlot { label: "2:00 PM", available: true },
    TimeSlot { label: "2:30 PM", available: true },
    TimeSlot { label: "3:00 PM", available: true },
    TimeSlot { label: "3:30 PM", available: false },
    TimeSlot { label: "4:00 PM", available: true },
    TimeSlot { label: "4:30 PM", available: true },
    TimeSlot { label: "5:00 PM", available: true },
    TimeSlot { label: "5:30 PM", available: true },
];

/// Number of consecutive days, starting today, offered for booking
pub const BOOKING_WINDOW_DAYS: u32 = 14;

// ============================================================================
// Lookups
// ============================================================================

/// Find a salon by id, falling back to the first salon for unknown ids.
pub fn salon_or_default(id: &str) -> &'static Salon {
    SALONS.iter().find(|s| s.id == id).unwrap_or(&SALONS[0])
}

/// Find an artist by id, falling back to the first artist for unknown ids.
pub fn artist_or_default(id: &str) -> &'static Artist {
    ARTISTS.iter().find(|a| a.id == id).unwrap_or(&ARTISTS[0])
}

/// Find an artist by exact id
pub fn find_artist(id: &str) -> Option<&'static Artist> {
    ARTISTS.iter().find(|a| a.id == id)
}

/// Featured salons, in catalog order
pub fn featured_salons() -> impl Iterator<Item = &'static Salon> {
    SALONS.iter().filter(|s| s.featured)
}

/// Nearby (non-featured) salons, in catalog order
pub fn nearby_salons() -> impl Iterator<Item = &'static Salon> {
    SALONS.iter().filter(|s| !s.featured)
}

/// Reviews left for one artist
pub fn artist_reviews(artist_id: &str) -> Vec<&'static ArtistReview> {
    ARTIST_REVIEWS
        .iter()
        .filter(|r| r.artist_id == artist_id)
        .collect()
}

/// Look up a time slot by its label
pub fn time_slot(label: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|s| s.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let salon_ids: HashSet<_> = SALONS.iter().map(|s| s.id).collect();
        assert_eq!(salon_ids.len(), SALONS.len());

        let artist_ids: HashSet<_> = ARTISTS.iter().map(|a| a.id).collect();
        assert_eq!(artist_ids.len(), ARTISTS.len());

        let service_ids: HashSet<_> = ARTISTS
            .iter()
            .flat_map(|a| a.services.iter())
            .chain(SALON_SERVICES.iter())
            .map(|s| s.id)
            .collect();
        let service_count =
            ARTISTS.iter().map(|a| a.services.len()).sum::<usize>() + SALON_SERVICES.len();
        assert_eq!(service_ids.len(), service_count);
    }

    #[test]
    fn test_sixteen_slots_with_two_unavailable() {
        assert_eq!(TIME_SLOTS.len(), 16);
        let unavailable: Vec<_> = TIME_SLOTS
            .iter()
            .filter(|s| !s.available)
            .map(|s| s.label)
            .collect();
        assert_eq!(unavailable, vec!["12:30 PM", "3:30 PM"]);
    }

    #[test]
    fn test_unknown_ids_fall_back_to_first_entry() {
        assert_eq!(salon_or_default("nope").id, SALONS[0].id);
        assert_eq!(artist_or_default("nope").id, ARTISTS[0].id);
        assert!(find_artist("nope").is_none());
    }

    #[test]
    fn test_discount_percent() {
        let svc = SALON_SERVICES[0];
        // 299 against 399 is 25.06%
        assert_eq!(svc.discount_percent(), Some(25));
        assert_eq!(SALON_SERVICES[1].discount_percent(), None);
    }

    #[test]
    fn test_categories_cover_both_genders() {
        assert!(CATEGORIES.iter().any(|c| c.gender == Gender::Male));
        assert!(CATEGORIES.iter().any(|c| c.gender == Gender::Female));
    }

    #[test]
    fn test_artist_reviews_belong_to_artist() {
        for review in artist_reviews("ah1") {
            assert_eq!(review.artist_id, "ah1");
        }
        assert!(artist_reviews("ah4").is_empty());
    }
}
