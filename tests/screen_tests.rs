use hospital_directory::report::console::{format_card, format_home_screen};
use hospital_directory::screen::home::HomeScreen;
use hospital_directory::screen::screen_model::ViewBadge;
use hospital_directory::viewed::store::ViewTrackingStore;

use crate::common::utils::{FailingSource, sample_source};

mod common;

// ============================================================================
// Home screen view model
// ============================================================================

#[test]
fn mounted_screen_is_loaded_and_not_loading() {
    let screen = HomeScreen::mount(sample_source());
    assert!(!screen.is_loading());
    assert_eq!(screen.visible().len(), 4);
}

#[test]
fn cards_reflect_viewed_badges() {
    let mut store = ViewTrackingStore::in_memory();
    let screen = HomeScreen::mount(sample_source());

    assert!(screen.press_view("2", &mut store));

    let cards = screen.cards(&store);
    let badges: Vec<ViewBadge> = cards.iter().map(|c| c.badge).collect();
    assert_eq!(
        badges,
        vec![ViewBadge::View, ViewBadge::Viewed, ViewBadge::View, ViewBadge::View]
    );
    assert_eq!(cards[1].badge.label(), "Viewed");
    assert_eq!(screen.viewed_label(&store), "Viewed: 1");
}

#[test]
fn pressing_view_twice_records_once() {
    let mut store = ViewTrackingStore::in_memory();
    let screen = HomeScreen::mount(sample_source());

    assert!(screen.press_view("1", &mut store));
    assert!(!screen.press_view("1", &mut store));
    assert_eq!(store.viewed_count(), 1);
}

#[test]
fn refresh_reverts_every_badge() {
    let mut store = ViewTrackingStore::in_memory();
    let screen = HomeScreen::mount(sample_source());
    screen.press_view("1", &mut store);
    screen.press_view("4", &mut store);

    screen.refresh(&mut store);

    assert!(screen.cards(&store).iter().all(|c| c.badge == ViewBadge::View));
    assert_eq!(screen.viewed_label(&store), "Viewed: 0");
}

#[test]
fn query_filters_cards_but_not_the_counter() {
    let mut store = ViewTrackingStore::in_memory();
    let mut screen = HomeScreen::mount(sample_source());
    screen.press_view("1", &mut store);

    screen.set_query("VALLEY");

    let cards = screen.cards(&store);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Green Valley Hospital");
    assert_eq!(screen.viewed_label(&store), "Viewed: 1");
}

#[test]
fn failed_load_renders_no_cards() {
    let store = ViewTrackingStore::in_memory();
    let screen = HomeScreen::mount(Box::new(FailingSource));

    assert!(screen.cards(&store).is_empty());
    assert!(!screen.is_loading());
    assert!(screen.loader().failure().is_some());
}

// ============================================================================
// Console rendering
// ============================================================================

#[test]
fn console_listing_shows_counter_and_cards() {
    let mut store = ViewTrackingStore::in_memory();
    let mut screen = HomeScreen::mount(sample_source());
    screen.press_view("4", &mut store);
    screen.set_query("valley");

    let out = format_home_screen(&screen, &store);

    assert!(out.starts_with("=== Hospitals (search: \"valley\") | Viewed: 1 ===\n\n"));
    assert!(out.contains("[Viewed] #4 Green Valley Hospital\n"));
    assert!(out.contains("    Address: 321 Hill Street, San Francisco 94103\n"));
    assert!(out.contains("    Beds: 200\n"));
    assert!(out.ends_with("=== 1 of 4 hospitals shown ===\n"));
}

#[test]
fn card_without_phone_omits_the_line() {
    let store = ViewTrackingStore::in_memory();
    let screen = HomeScreen::mount(sample_source());
    let mut card = screen.cards(&store).remove(0);
    card.phone = None;

    let out = format_card(&card);

    assert!(out.starts_with("[View]   #1 City Central Hospital\n"));
    assert!(!out.contains("Phone"));
}
