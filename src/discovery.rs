//! Search, filtering and review statistics over the catalog.

use crate::catalog::{Artist, Category, Salon, SalonReview, Service, ARTISTS, CATEGORIES, SALONS};
use crate::types::{Gender, ServiceCategory};
use std::collections::BTreeSet;

/// Outcome of a salon search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults<'a> {
    /// At least one salon matched
    Matches(Vec<&'a Salon>),
    /// Nothing matched; the view shows an empty-state message
    Empty { query: String },
}

impl<'a> SearchResults<'a> {
    /// Matching salons (empty slice for no results)
    pub fn salons(&self) -> &[&'a Salon] {
        match self {
            Self::Matches(salons) => salons,
            Self::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Message for the empty-result view, if any
    pub fn empty_message(&self) -> Option<String> {
        match self {
            Self::Matches(_) => None,
            Self::Empty { query } => Some(format!("No salons found for \"{}\"", query)),
        }
    }
}

/// Search salons whose name or address contains `query`, ignoring case.
///
/// The query is matched as typed, surrounding spaces included. An empty
/// query lists every salon.
pub fn search_salons(query: &str) -> SearchResults<'static> {
    search_in(SALONS, query)
}

/// [`search_salons`] over an arbitrary salon list
pub fn search_in<'a>(salons: &'a [Salon], query: &str) -> SearchResults<'a> {
    let needle = query.to_lowercase();
    let matches: Vec<&Salon> = salons
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.address.to_lowercase().contains(&needle)
        })
        .collect();

    if matches.is_empty() {
        SearchResults::Empty {
            query: query.to_string(),
        }
    } else {
        SearchResults::Matches(matches)
    }
}

/// Home screen category chips for a gender tab
pub fn categories_for(gender: Gender) -> Vec<&'static Category> {
    CATEGORIES.iter().filter(|c| c.gender == gender).collect()
}

/// Toggle a single-choice filter: picking the selected value clears it.
pub fn toggle_selection<T: PartialEq>(current: Option<T>, picked: T) -> Option<T> {
    match current {
        Some(selected) if selected == picked => None,
        _ => Some(picked),
    }
}

/// Artists currently accepting bookings
pub fn available_artists() -> Vec<&'static Artist> {
    ARTISTS.iter().filter(|a| a.is_available).collect()
}

/// Distinct service categories offered by an artist, sorted
pub fn artist_categories(artist: &Artist) -> Vec<ServiceCategory> {
    artist
        .services
        .iter()
        .map(|s| s.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Services matching a category filter (`None` keeps all)
pub fn filter_services_by_category(
    services: &[Service],
    category: Option<ServiceCategory>,
) -> Vec<&Service> {
    services
        .iter()
        .filter(|s| category.is_none_or(|c| s.category == c))
        .collect()
}

/// Salon reviews left for one stylist (`None` keeps all)
pub fn filter_reviews<'a>(
    reviews: &'a [SalonReview],
    stylist_id: Option<&str>,
) -> Vec<&'a SalonReview> {
    reviews
        .iter()
        .filter(|r| stylist_id.is_none_or(|id| r.stylist_id == id))
        .collect()
}

/// Mean rating formatted to one decimal; `"0.0"` when there are no ratings.
pub fn average_rating<I>(ratings: I) -> String
where
    I: IntoIterator<Item = u8>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), r| (sum + u32::from(r), count + 1));
    if count == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", f64::from(sum) / f64::from(count))
}

/// One row of the rating histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBucket {
    pub stars: u8,
    pub count: usize,
    /// Share of all ratings, rounded to whole percent
    pub percent: u8,
}

/// Histogram of ratings from 5 stars down to 1.
pub fn rating_distribution<I>(ratings: I) -> Vec<RatingBucket>
where
    I: IntoIterator<Item = u8>,
{
    let mut counts = [0usize; 5];
    for r in ratings {
        if (1..=5).contains(&r) {
            counts[usize::from(r - 1)] += 1;
        }
    }
    let total: usize = counts.iter().sum();

    (1..=5u8)
        .rev()
        .map(|stars| {
            let count = counts[usize::from(stars - 1)];
            let percent = if total == 0 {
                0
            } else {
                ((count * 100 + total / 2) / total) as u8
            };
            RatingBucket {
                stars,
                count,
                percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{artist_or_default, SALON_REVIEWS};

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let results = search_salons("GLOW");
        assert_eq!(results.salons().len(), 1);
        assert_eq!(results.salons()[0].name, "Glow Studio");
    }

    #[test]
    fn test_search_matches_address() {
        let results = search_salons(SALONS[2].address);
        assert!(results.salons().iter().any(|s| s.id == SALONS[2].id));
    }

    #[test]
    fn test_search_no_match_is_explicit_empty() {
        let results = search_salons("zzz-nothing");
        assert!(results.is_empty());
        assert!(results.salons().is_empty());
        assert_eq!(
            results.empty_message().unwrap(),
            "No salons found for \"zzz-nothing\""
        );
    }

    #[test]
    fn test_blank_query_lists_all() {
        assert_eq!(search_salons("  ").salons().len(), SALONS.len());
    }

    #[test]
    fn test_categories_filtered_by_gender() {
        let male = categories_for(Gender::Male);
        assert!(!male.is_empty());
        assert!(male.iter().all(|c| c.gender == Gender::Male));
    }

    #[test]
    fn test_toggle_selection() {
        assert_eq!(toggle_selection(None, "mc1"), Some("mc1"));
        assert_eq!(toggle_selection(Some("mc1"), "mc1"), None);
        assert_eq!(toggle_selection(Some("mc1"), "mc2"), Some("mc2"));
    }

    #[test]
    fn test_available_artists_excludes_unavailable() {
        let artists = available_artists();
        assert!(artists.iter().all(|a| a.is_available));
        assert!(!artists.iter().any(|a| a.id == "ah4"));
    }

    #[test]
    fn test_artist_categories_unique() {
        let nisha = artist_or_default("ah1");
        let cats = artist_categories(nisha);
        assert_eq!(
            cats,
            vec![
                ServiceCategory::Packages,
                ServiceCategory::Bridal,
                ServiceCategory::Hair,
                ServiceCategory::Skin
            ]
        );
        assert_eq!(
            filter_services_by_category(nisha.services, Some(ServiceCategory::Bridal)).len(),
            2
        );
        assert_eq!(
            filter_services_by_category(nisha.services, None).len(),
            nisha.services.len()
        );
    }

    #[test]
    fn test_filter_reviews_by_stylist() {
        let all = filter_reviews(SALON_REVIEWS, None);
        assert_eq!(all.len(), SALON_REVIEWS.len());
        let stylist = SALON_REVIEWS[0].stylist_id;
        assert!(filter_reviews(SALON_REVIEWS, Some(stylist))
            .iter()
            .all(|r| r.stylist_id == stylist));
        assert!(filter_reviews(SALON_REVIEWS, Some("nobody")).is_empty());
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating([5, 4, 4]), "4.3");
        assert_eq!(average_rating([5, 5]), "5.0");
        assert_eq!(average_rating(std::iter::empty()), "0.0");
    }

    #[test]
    fn test_rating_distribution() {
        let dist = rating_distribution([5, 5, 4, 1]);
        let stars: Vec<u8> = dist.iter().map(|b| b.stars).collect();
        assert_eq!(stars, vec![5, 4, 3, 2, 1]);
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[0].percent, 50);
        assert_eq!(dist[1].percent, 25);
        assert_eq!(dist[2].count, 0);

        assert!(rating_distribution(std::iter::empty()).iter().all(|b| b.percent == 0));
    }
}
