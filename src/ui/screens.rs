//! Browsing screens
//!
//! Home, at-home artist list, explore, bookings, offers, profile, salon
//! detail, artist profile and the not-found page.

use super::header::{gender_toggle, section_title};
use crate::app::{home_salons, offer_salons, AppState, ArtistScreen, Cursor, SalonScreen};
use crate::catalog::{Artist, Salon, Service, BOOKINGS, STYLISTS};
use crate::cart::CartStore;
use crate::discovery::{
    artist_categories, available_artists, average_rating, categories_for, rating_distribution,
    search_salons,
};
use crate::pricing::format_rupees;
use crate::routes::Route;
use crate::theme::{Styles, Theme, UiConstants, UiText};
use crate::types::{ArtistTab, BookingStatus, Gender, SalonServiceTab, SalonTab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};
use std::time::Instant;
use strum::IntoEnumIterator;

// =============================================================================
// Shared pieces
// =============================================================================

fn panel(title: &str, gender: Gender) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Styles::title(gender))
        .border_style(Styles::border_inactive())
}

/// List with the cursor row highlighted
fn render_list(
    f: &mut Frame,
    area: Rect,
    items: Vec<ListItem<'static>>,
    cursor: Cursor,
    title: &str,
    gender: Gender,
) {
    let list = List::new(items)
        .block(panel(title, gender))
        .highlight_style(Styles::selected(gender))
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(cursor.index));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Centered message inside a bordered panel
fn render_message(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, gender: Gender) {
    let paragraph = Paragraph::new(lines)
        .block(panel(title, gender))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn tabs<T>(current: T, gender: Gender) -> Tabs<'static>
where
    T: IntoEnumIterator + PartialEq + Copy + std::fmt::Display,
{
    let titles: Vec<String> = T::iter().map(|t| capitalize(&t.to_string())).collect();
    let selected = T::iter().position(|t| t == current).unwrap_or(0);
    Tabs::new(titles)
        .select(selected)
        .style(Styles::text_secondary())
        .highlight_style(Styles::selected(gender))
        .divider(Span::styled("│", Styles::nav_hint()))
}

fn salon_item(salon: &Salon) -> ListItem<'static> {
    let mut first = vec![
        Span::styled(salon.name.to_string(), Styles::text_bold()),
        Span::raw("  "),
        Span::styled(format!("★ {:.1}", salon.rating), Styles::highlight()),
        Span::styled(format!(" ({})", salon.review_count), Styles::text_muted()),
        Span::raw("  "),
        Span::styled(
            if salon.is_open { "Open" } else { "Closed" },
            Theme::open_style(salon.is_open),
        ),
    ];
    if let Some(offer) = salon.offer {
        first.push(Span::raw("  "));
        first.push(Span::styled(
            format!("[{}]", offer),
            Styles::highlight().add_modifier(Modifier::BOLD),
        ));
    }
    let second = Line::from(vec![
        Span::styled(
            format!("   {} · {}", salon.address, salon.distance),
            Styles::text_secondary(),
        ),
        Span::styled(format!("  {}", salon.tags.join(" · ")), Styles::text_muted()),
    ]);
    ListItem::new(vec![Line::from(first), second])
}

fn artist_item(artist: &Artist) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(artist.name.to_string(), Styles::text_bold()),
            Span::raw("  "),
            Span::styled(format!("★ {:.1}", artist.rating), Styles::highlight()),
            Span::styled(format!(" ({})", artist.review_count), Styles::text_muted()),
            Span::styled(format!("  {}", artist.distance), Styles::text_secondary()),
        ]),
        Line::from(Span::styled(
            format!(
                "   {} · Travel fee {} · Min {}",
                artist.specialty,
                format_rupees(u64::from(artist.travel_fee)),
                format_rupees(u64::from(artist.minimum_booking)),
            ),
            Styles::text_secondary(),
        )),
    ])
}

/// Service row with price, discount and the quantity in the cart
fn service_item(service: &Service, cart: &CartStore<'_>) -> ListItem<'static> {
    let mut price = vec![
        Span::raw("   "),
        Span::styled(format_rupees(u64::from(service.price)), Styles::highlight()),
    ];
    if let Some(original) = service.original_price {
        price.push(Span::raw(" "));
        price.push(Span::styled(
            format_rupees(u64::from(original)),
            Styles::strikethrough(),
        ));
    }
    if let Some(pct) = service.discount_percent() {
        price.push(Span::styled(format!(" {}% off", pct), Styles::success()));
    }
    price.push(Span::styled(
        format!(" · {}", service.duration),
        Styles::text_muted(),
    ));

    let quantity = cart.quantity(service.id);
    let mut name = vec![Span::styled(service.name.to_string(), Styles::text_bold())];
    if quantity > 0 {
        name.push(Span::styled(format!("  × {}", quantity), Styles::success()));
    }

    ListItem::new(vec![
        Line::from(name),
        Line::from(price),
        Line::from(Span::styled(
            format!("   {}", service.description),
            Styles::text_muted(),
        )),
    ])
}

/// Average rating plus a 5-to-1 star histogram
fn rating_summary(ratings: &[u8], gender: Gender) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(average_rating(ratings.iter().copied()), Styles::title(gender)),
            Span::styled(" ★", Styles::highlight()),
            Span::styled(format!("  {} reviews", ratings.len()), Styles::text_muted()),
        ]),
        Line::from(""),
    ];
    for bucket in rating_distribution(ratings.iter().copied()) {
        let filled = usize::from(bucket.percent) / 10;
        lines.push(Line::from(vec![
            Span::styled(format!("{} ★ ", bucket.stars), Styles::text_secondary()),
            Span::styled("█".repeat(filled), Styles::highlight()),
            Span::styled("░".repeat(10 - filled), Styles::text_muted()),
            Span::styled(format!(" {:>3}%", bucket.percent), Styles::text_muted()),
        ]));
    }
    lines
}

// =============================================================================
// Tab screens
// =============================================================================

/// Render the home screen in specified area
pub fn render_home(f: &mut Frame, area: Rect, state: &AppState, gender: Gender, now: Instant) {
    if state.home.is_loading(now) {
        render_message(
            f,
            area,
            gender.heading(),
            vec![
                Line::from(""),
                Line::from(Span::styled(UiText::LOADING, Styles::text_muted())),
            ],
            gender,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        section_title(gender.heading(), gender),
        Line::from(Span::styled(
            "Book top-rated salons near you",
            Styles::text_secondary(),
        )),
    ]);
    f.render_widget(heading, chunks[0]);

    let mut chips = Vec::new();
    for (i, category) in categories_for(gender).iter().enumerate() {
        let selected = state.home.selected_category == Some(category.id);
        let mut style = if selected {
            Styles::selected(gender)
        } else {
            Styles::text_secondary()
        };
        if i == state.home.chip_cursor.index {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        chips.push(Span::styled(format!(" {} ", category.name), style));
        chips.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(chips)).block(panel("Categories", gender)),
        chunks[1],
    );

    let items = home_salons().into_iter().map(salon_item).collect();
    render_list(
        f,
        chunks[2],
        items,
        state.home.salon_cursor,
        "Featured & Nearby Salons",
        gender,
    );
}

/// Render the at-home artist list
pub fn render_at_home(f: &mut Frame, area: Rect, state: &AppState, gender: Gender) {
    let artists = available_artists();
    if artists.is_empty() {
        render_message(
            f,
            area,
            "At Home",
            vec![
                Line::from(""),
                Line::from(Span::styled(UiText::NO_ARTISTS, Styles::text_bold())),
                Line::from(Span::styled(UiText::NO_ARTISTS_HINT, Styles::text_muted())),
            ],
            gender,
        );
        return;
    }

    let items = artists.into_iter().map(artist_item).collect();
    render_list(
        f,
        area,
        items,
        state.at_home_cursor,
        "Beauty services at your doorstep",
        gender,
    );
}

/// Render the explore screen: search box and results
pub fn render_explore(f: &mut Frame, area: Rect, state: &AppState, gender: Gender) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let query = &state.explore.query;
    let input = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Styles::text_muted()),
        Span::styled(query.clone(), Styles::text()),
        Span::styled("▏", Styles::title(gender)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search salons by name or area ")
            .border_style(Styles::border_active(gender)),
    );
    f.render_widget(input, chunks[0]);

    let results = search_salons(query);
    match results.empty_message() {
        Some(message) => render_message(
            f,
            chunks[1],
            "Results",
            vec![
                Line::from(""),
                Line::from(Span::styled(message, Styles::text_muted())),
            ],
            gender,
        ),
        None => {
            let items = results.salons().iter().map(|s| salon_item(s)).collect();
            render_list(f, chunks[1], items, state.explore.cursor, "Results", gender);
        }
    }
}

/// Render the bookings list
pub fn render_bookings(f: &mut Frame, area: Rect, state: &AppState, gender: Gender) {
    let items = BOOKINGS
        .iter()
        .map(|booking| {
            let status_style = match booking.status {
                BookingStatus::Upcoming => Styles::title(gender),
                BookingStatus::Completed => Styles::success(),
                BookingStatus::Cancelled => Styles::error(),
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(booking.salon_name.to_string(), Styles::text_bold()),
                    Span::raw("  "),
                    Span::styled(capitalize(&booking.status.to_string()), status_style),
                ]),
                Line::from(Span::styled(
                    format!(
                        "   {} · {} at {} · {}",
                        booking.service,
                        booking.date,
                        booking.time,
                        format_rupees(u64::from(booking.price))
                    ),
                    Styles::text_secondary(),
                )),
            ])
        })
        .collect();
    render_list(f, area, items, state.bookings_cursor, "My Bookings", gender);
}

/// Render salons running an offer
pub fn render_offers(f: &mut Frame, area: Rect, state: &AppState, gender: Gender) {
    let items = offer_salons().into_iter().map(salon_item).collect();
    render_list(f, area, items, state.offers_cursor, "Offers near you", gender);
}

/// Render the profile screen
pub fn render_profile(f: &mut Frame, area: Rect, gender: Gender) {
    let upcoming = BOOKINGS
        .iter()
        .filter(|b| b.status == BookingStatus::Upcoming)
        .count();
    let lines = vec![
        section_title("Guest", gender),
        Line::from(""),
        Line::from(Span::styled("Display preference", Styles::text_secondary())),
        gender_toggle(gender),
        Line::from(""),
        Line::from(vec![
            Span::styled("Bookings  ", Styles::text_secondary()),
            Span::styled(
                format!("{} total, {} upcoming", BOOKINGS.len(), upcoming),
                Styles::text(),
            ),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).block(panel("Profile", gender)),
        area,
    );
}

/// Render the not-found page
pub fn render_not_found(f: &mut Frame, area: Rect, route: &Route, gender: Gender) {
    let path = match route {
        Route::NotFound(path) => path.as_str(),
        _ => "",
    };
    render_message(
        f,
        area,
        "404",
        vec![
            Line::from(""),
            Line::from(Span::styled("404", Styles::title(gender))),
            Line::from(Span::styled(UiText::NOT_FOUND, Styles::text_bold())),
            Line::from(Span::styled(
                format!("Nothing lives at {}", path),
                Styles::text_muted(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to return home",
                Styles::text_secondary(),
            )),
        ],
        gender,
    );
}

// =============================================================================
// Salon detail
// =============================================================================

/// Render the salon detail screen
pub fn render_salon(f: &mut Frame, area: Rect, screen: &SalonScreen, gender: Gender, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(UiConstants::ACTION_BAR_HEIGHT),
        ])
        .split(area);

    let salon = screen.salon;
    let info = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(salon.name.to_string(), Styles::title(gender)),
            Span::raw("  "),
            Span::styled(
                if salon.is_open { "Open now" } else { "Closed" },
                Theme::open_style(salon.is_open),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} · {}", salon.address, salon.distance),
            Styles::text_secondary(),
        )),
        Line::from(vec![
            Span::styled(format!("★ {:.1}", salon.rating), Styles::highlight()),
            Span::styled(
                format!(" ({} reviews)", salon.review_count),
                Styles::text_muted(),
            ),
        ]),
    ]);
    f.render_widget(info, chunks[0]);
    f.render_widget(tabs(screen.tab, gender), chunks[1]);

    match screen.tab {
        SalonTab::Services => render_salon_services(f, chunks[2], screen, gender),
        SalonTab::About => render_salon_about(f, chunks[2], salon, gender),
        SalonTab::Reviews => render_salon_reviews(f, chunks[2], screen, gender, now),
        SalonTab::Gallery => render_salon_gallery(f, chunks[2], salon, gender),
    }

    render_cart_bar(f, chunks[3], &screen.cart, None, gender);
}

fn render_salon_services(f: &mut Frame, area: Rect, screen: &SalonScreen, gender: Gender) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);
    f.render_widget(tabs::<SalonServiceTab>(screen.service_tab, gender), chunks[0]);

    let items = screen
        .visible_services()
        .into_iter()
        .map(|s| service_item(s, &screen.cart))
        .collect();
    render_list(f, chunks[1], items, screen.cursor, "Services", gender);
}

fn render_salon_about(f: &mut Frame, area: Rect, salon: &Salon, gender: Gender) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Address   ", Styles::text_muted()),
            Span::styled(salon.address.to_string(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Distance  ", Styles::text_muted()),
            Span::styled(salon.distance.to_string(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Tags      ", Styles::text_muted()),
            Span::styled(salon.tags.join(", "), Styles::text()),
        ]),
        Line::from(""),
        section_title("Our Stylists", gender),
    ];
    for stylist in STYLISTS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", stylist.name), Styles::text_bold()),
            Span::styled(format!("{:<20}", stylist.specialty), Styles::text_secondary()),
            Span::styled(format!("★ {:.1}", stylist.rating), Styles::highlight()),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines)
            .block(panel("About", gender))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_salon_reviews(
    f: &mut Frame,
    area: Rect,
    screen: &SalonScreen,
    gender: Gender,
    now: Instant,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Stylist chips; the active one pulses briefly after a change
    let pulsing = screen.is_pulsing(now);
    let mut chips = vec![Span::styled("Stylist: ", Styles::text_muted())];
    let all_style = if screen.stylist_filter.is_none() {
        Styles::selected(gender)
    } else {
        Styles::text_secondary()
    };
    chips.push(Span::styled(" All ", all_style));
    for stylist in STYLISTS {
        chips.push(Span::raw(" "));
        if screen.stylist_filter == Some(stylist.id) {
            let style = if pulsing {
                Styles::selected(gender).add_modifier(Modifier::RAPID_BLINK)
            } else {
                Styles::selected(gender)
            };
            let marker = if pulsing { "✦" } else { "" };
            chips.push(Span::styled(format!(" {}{} ", marker, stylist.name), style));
        } else {
            chips.push(Span::styled(
                format!(" {} ", stylist.name),
                Styles::text_secondary(),
            ));
        }
    }
    f.render_widget(Paragraph::new(Line::from(chips)), chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(chunks[1]);

    let reviews = screen.visible_reviews();
    let ratings: Vec<u8> = reviews.iter().map(|r| r.rating).collect();
    f.render_widget(
        Paragraph::new(rating_summary(&ratings, gender)).block(panel("Rating", gender)),
        body[0],
    );

    if reviews.is_empty() {
        render_message(
            f,
            body[1],
            "Reviews",
            vec![Line::from(Span::styled(UiText::NO_REVIEWS, Styles::text_muted()))],
            gender,
        );
        return;
    }

    let items = reviews
        .iter()
        .map(|review| {
            let mut head = vec![
                Span::styled(review.user_name.to_string(), Styles::text_bold()),
                Span::raw("  "),
                Span::styled(Theme::stars(review.rating), Styles::highlight()),
                Span::styled(format!("  {}", review.date), Styles::text_muted()),
            ];
            if review.has_photo {
                head.push(Span::styled("  [photo]", Styles::text_secondary()));
            }
            ListItem::new(vec![
                Line::from(head),
                Line::from(Span::styled(
                    format!("   {}", review.service),
                    Styles::text_secondary(),
                )),
                Line::from(Span::styled(format!("   {}", review.text), Styles::text())),
            ])
        })
        .collect();
    render_list(f, body[1], items, screen.cursor, "Reviews", gender);
}

fn render_salon_gallery(f: &mut Frame, area: Rect, salon: &Salon, gender: Gender) {
    let captions = ["Interior", "Styling Area", "Wash Station", "Lounge", "Products", "Team"];
    let block = panel(&format!("Gallery · {}", salon.name), gender);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(inner);
    for (r, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(*row);
        for (c, cell) in cells.iter().enumerate() {
            let caption = captions[r * 3 + c];
            f.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled("▣", Styles::text_muted())),
                    Line::from(Span::styled(caption, Styles::text_secondary())),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Styles::border_inactive()),
                ),
                *cell,
            );
        }
    }
}

/// Sticky bar with the cart total and the continue action
fn render_cart_bar(
    f: &mut Frame,
    area: Rect,
    cart: &CartStore<'_>,
    minimum: Option<u32>,
    gender: Gender,
) {
    let shortfall = minimum.and_then(|m| cart.shortfall(m));
    let (line, border) = if cart.is_empty() {
        (
            Line::from(Span::styled("Select services to book", Styles::text_muted())),
            Styles::border_inactive(),
        )
    } else {
        let mut spans = vec![
            Span::styled(cart.count_label(), Styles::text_secondary()),
            Span::styled(" · ", Styles::text_muted()),
            Span::styled(format_rupees(cart.total()), Styles::text_bold()),
            Span::raw("   "),
        ];
        match shortfall {
            Some(missing) => spans.push(Span::styled(
                format!(" Add {} more to book ", format_rupees(missing)),
                Styles::button_disabled(),
            )),
            None => spans.push(Span::styled(" [c] Continue ", Styles::button_active(gender))),
        }
        (Line::from(spans), Styles::border_active(gender))
    };

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let block = match minimum {
        Some(m) => block.title(Span::styled(
            format!(" Minimum booking {} ", format_rupees(u64::from(m))),
            if shortfall.is_some() {
                Styles::warning()
            } else {
                Styles::text_muted()
            },
        )),
        None => block,
    };
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}

// =============================================================================
// Artist profile
// =============================================================================

/// Render the at-home artist profile
pub fn render_artist(f: &mut Frame, area: Rect, screen: &ArtistScreen, gender: Gender) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(UiConstants::ACTION_BAR_HEIGHT),
        ])
        .split(area);

    let artist = screen.artist;
    let availability = if artist.is_available {
        Span::styled("Available", Styles::success())
    } else {
        Span::styled("Unavailable", Styles::error())
    };
    let info = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(artist.name.to_string(), Styles::title(gender)),
            Span::raw("  "),
            availability,
        ]),
        Line::from(Span::styled(
            format!("{} · {}", artist.specialty, artist.distance),
            Styles::text_secondary(),
        )),
        Line::from(vec![
            Span::styled(format!("★ {:.1}", artist.rating), Styles::highlight()),
            Span::styled(
                format!(
                    " ({} reviews) · {} yrs exp · {}% on time · travel fee {}",
                    artist.review_count,
                    artist.years_exp,
                    artist.on_time_percent,
                    format_rupees(u64::from(artist.travel_fee))
                ),
                Styles::text_muted(),
            ),
        ]),
    ]);
    f.render_widget(info, chunks[0]);
    f.render_widget(tabs(screen.tab, gender), chunks[1]);

    match screen.tab {
        ArtistTab::Services => render_artist_services(f, chunks[2], screen, gender),
        ArtistTab::Reviews => render_artist_reviews(f, chunks[2], screen, gender),
        ArtistTab::Portfolio => render_artist_portfolio(f, chunks[2], screen, gender),
    }

    render_cart_bar(
        f,
        chunks[3],
        &screen.cart,
        Some(artist.minimum_booking),
        gender,
    );
}

fn render_artist_services(f: &mut Frame, area: Rect, screen: &ArtistScreen, gender: Gender) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let mut chips = vec![Span::styled("Filter: ", Styles::text_muted())];
    let all_style = if screen.category_filter.is_none() {
        Styles::selected(gender)
    } else {
        Styles::text_secondary()
    };
    chips.push(Span::styled(" All ", all_style));
    for category in artist_categories(screen.artist) {
        let style = if screen.category_filter == Some(category) {
            Styles::selected(gender)
        } else {
            Styles::text_secondary()
        };
        chips.push(Span::raw(" "));
        chips.push(Span::styled(
            format!(" {} ", capitalize(&category.to_string())),
            style,
        ));
    }
    f.render_widget(Paragraph::new(Line::from(chips)), chunks[0]);

    let items = screen
        .visible_services()
        .into_iter()
        .map(|s| service_item(s, &screen.cart))
        .collect();
    render_list(f, chunks[1], items, screen.cursor, "Services", gender);
}

fn render_artist_reviews(f: &mut Frame, area: Rect, screen: &ArtistScreen, gender: Gender) {
    let reviews = screen.reviews();
    if reviews.is_empty() {
        render_message(
            f,
            area,
            "Reviews",
            vec![
                Line::from(""),
                Line::from(Span::styled(UiText::NO_REVIEWS, Styles::text_muted())),
            ],
            gender,
        );
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(area);

    let ratings: Vec<u8> = reviews.iter().map(|r| r.rating).collect();
    f.render_widget(
        Paragraph::new(rating_summary(&ratings, gender)).block(panel("Rating", gender)),
        body[0],
    );

    let items = reviews
        .iter()
        .map(|review| {
            let mut head = vec![
                Span::styled(review.user_name.to_string(), Styles::text_bold()),
                Span::raw("  "),
                Span::styled(Theme::stars(review.rating), Styles::highlight()),
                Span::styled(format!("  {}", review.date), Styles::text_muted()),
            ];
            if review.has_before_after {
                head.push(Span::styled("  [before/after]", Styles::text_secondary()));
            }
            ListItem::new(vec![
                Line::from(head),
                Line::from(Span::styled(
                    format!("   {} · {} found helpful", review.service, review.helpful),
                    Styles::text_secondary(),
                )),
                Line::from(Span::styled(format!("   {}", review.text), Styles::text())),
            ])
        })
        .collect();
    render_list(f, body[1], items, screen.cursor, "Reviews", gender);
}

fn render_artist_portfolio(f: &mut Frame, area: Rect, screen: &ArtistScreen, gender: Gender) {
    let entries = screen.artist.before_after;
    if entries.is_empty() {
        render_message(
            f,
            area,
            "Before & After",
            vec![
                Line::from(""),
                Line::from(Span::styled("No portfolio yet", Styles::text_muted())),
            ],
            gender,
        );
        return;
    }

    let items = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled("Before ", Styles::text_muted()),
                Span::styled("▸ ", Styles::title(gender)),
                Span::styled("After  ", Styles::text_bold()),
                Span::styled(entry.service.to_string(), Styles::text_secondary()),
            ]))
        })
        .collect();
    render_list(f, area, items, screen.cursor, "Before & After", gender);
}
