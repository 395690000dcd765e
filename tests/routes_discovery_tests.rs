//! Tests for routing and catalog discovery
//!
//! These tests verify:
//! - Route resolution and bottom-nav visibility
//! - Salon search including the empty-result view
//! - Category chips, artist availability and review statistics

use salontui::catalog::{artist_or_default, salon_or_default, ARTISTS, SALON_REVIEWS};
use salontui::discovery::{
    artist_categories, available_artists, average_rating, categories_for, filter_reviews,
    rating_distribution, search_salons, SearchResults,
};
use salontui::routes::{NavTab, Route, BOTTOM_NAV_TABS};
use salontui::types::{Gender, ServiceCategory};

// =============================================================================
// Routes
// =============================================================================

#[test]
fn test_known_routes_resolve() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse("/salon/s4"), Route::Salon("s4".into()));
    assert_eq!(Route::parse("/booking/s4"), Route::SalonBooking("s4".into()));
    assert_eq!(Route::parse("/artist/ah2"), Route::Artist("ah2".into()));
    assert_eq!(
        Route::parse("/at-home-booking/ah2"),
        Route::AtHomeBooking("ah2".into())
    );
    assert_eq!(Route::parse("/offers/"), Route::Offers);
}

#[test]
fn test_unknown_paths_are_not_found() {
    for path in ["/salon", "/salon/", "/salon/s1/extra", "/unknown", "salon/s1", ""] {
        assert!(
            matches!(Route::parse(path), Route::NotFound(_)),
            "{path:?} should not resolve"
        );
    }
}

#[test]
fn test_bottom_nav_hidden_on_detail_routes() {
    for path in ["/salon/s1", "/booking/s1", "/artist/ah1", "/at-home-booking/ah1"] {
        assert!(!Route::parse(path).shows_bottom_nav(), "{path}");
    }
    for path in ["/", "/bookings", "/offers", "/explore", "/profile", "/at-home", "/x"] {
        assert!(Route::parse(path).shows_bottom_nav(), "{path}");
    }
}

#[test]
fn test_nav_tabs_round_trip() {
    assert_eq!(BOTTOM_NAV_TABS.len(), 5);
    for tab in BOTTOM_NAV_TABS {
        assert_eq!(tab.route().nav_tab(), Some(*tab));
    }
    assert_eq!(NavTab::AtHome.route(), Route::AtHome);
}

#[test]
fn test_unknown_detail_ids_fall_back_to_first_entry() {
    assert_eq!(salon_or_default("nope").id, "s1");
    assert_eq!(artist_or_default("nope").id, ARTISTS[0].id);
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_matches_name_and_address_case_insensitive() {
    let by_name = search_salons("GLOW");
    assert_eq!(by_name.salons().len(), 1);
    assert_eq!(by_name.salons()[0].id, "s2");

    let by_address = search_salons("koramangala");
    assert_eq!(by_address.salons()[0].id, "s4");
}

#[test]
fn test_empty_search_lists_everything() {
    assert_eq!(search_salons("").salons().len(), 6);
}

#[test]
fn test_search_keeps_surrounding_spaces() {
    assert_eq!(search_salons("studio").salons().len(), 2);
    assert!(search_salons("studio ").is_empty());
    assert_eq!(search_salons("glow ").salons()[0].id, "s2");
    assert_eq!(
        search_salons("   ").empty_message().as_deref(),
        Some("No salons found for \"   \"")
    );
}

#[test]
fn test_search_without_matches_yields_empty_view() {
    let results = search_salons("xyzzy");
    assert!(results.is_empty());
    assert!(results.salons().is_empty());
    assert_eq!(
        results,
        SearchResults::Empty {
            query: "xyzzy".into()
        }
    );
    assert_eq!(
        results.empty_message().as_deref(),
        Some("No salons found for \"xyzzy\"")
    );
}

// =============================================================================
// Categories, Artists and Reviews
// =============================================================================

#[test]
fn test_category_chips_follow_gender() {
    let male = categories_for(Gender::Male);
    let female = categories_for(Gender::Female);
    assert_eq!(male.len(), 5);
    assert_eq!(female.len(), 5);
    assert!(male.iter().all(|c| c.gender == Gender::Male));
    assert!(female.iter().all(|c| c.id.starts_with("fc")));
}

#[test]
fn test_unavailable_artists_are_hidden() {
    let artists = available_artists();
    assert!(artists.iter().all(|a| a.is_available));
    assert!(!artists.iter().any(|a| a.id == "ah4"));
}

#[test]
fn test_artist_categories_sorted_and_distinct() {
    let categories = artist_categories(artist_or_default("ah1"));
    let mut sorted = categories.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(categories, sorted);
    assert!(categories.contains(&ServiceCategory::Hair));
}

#[test]
fn test_review_filter_and_statistics() {
    let rahul = filter_reviews(SALON_REVIEWS, Some("a1"));
    assert_eq!(rahul.len(), 2);
    assert_eq!(filter_reviews(SALON_REVIEWS, None).len(), SALON_REVIEWS.len());
    assert!(filter_reviews(SALON_REVIEWS, Some("zz")).is_empty());

    assert_eq!(average_rating([5, 4]), "4.5");
    assert_eq!(average_rating(Vec::<u8>::new()), "0.0");

    let buckets = rating_distribution([5, 5, 4, 1]);
    assert_eq!(buckets.len(), 5);
    assert_eq!(buckets[0].stars, 5);
    assert_eq!(buckets[0].count, 2);
    assert_eq!(buckets[0].percent, 50);
    assert_eq!(buckets[4].stars, 1);
    assert_eq!(buckets[4].percent, 25);
}
