use crate::screen::home::HomeScreen;
use crate::screen::screen_model::{HospitalCard, ViewBadge};
use crate::viewed::store::ViewTrackingStore;

// ============================================================================
// Console reporter: the home screen as terminal text
// ============================================================================

/// Format the home screen for terminal output.
///
/// Produces output like:
/// ```text
/// === Hospitals (search: "valley") | Viewed: 1 ===
///
/// [Viewed] #4 Green Valley Hospital
///     Address: 321 Hill Street, San Francisco 94103
///     Phone: +1 (555) 369-2580
///     Beds: 200
///
/// === 1 of 4 hospitals shown ===
/// ```
pub fn format_home_screen(screen: &HomeScreen, store: &ViewTrackingStore) -> String {
    let mut out = String::new();

    out.push_str("=== Hospitals");
    if !screen.query().is_empty() {
        out.push_str(&format!(" (search: \"{}\")", screen.query()));
    }
    out.push_str(&format!(" | {} ===\n\n", screen.viewed_label(store)));

    // Failed loads fall through and render as an empty list.
    if screen.outcome().is_none() {
        out.push_str("Loading...\n");
        return out;
    }

    let cards = screen.cards(store);
    for card in &cards {
        out.push_str(&format_card(card));
        out.push('\n');
    }

    if cards.is_empty() {
        out.push_str("No hospitals found.\n\n");
    }

    out.push_str(&format!(
        "=== {} of {} hospitals shown ===\n",
        cards.len(),
        screen.loader().hospitals().len()
    ));

    out
}

/// Format a single card, one detail per line.
pub fn format_card(card: &HospitalCard) -> String {
    let marker = match card.badge {
        ViewBadge::View => "[View]  ",
        ViewBadge::Viewed => "[Viewed]",
    };

    let mut out = format!("{} #{} {}\n", marker, card.id, card.name);
    out.push_str(&format!("    Address: {}\n", card.address));
    if let Some(phone) = &card.phone {
        out.push_str(&format!("    Phone: {}\n", phone));
    }
    out.push_str(&format!("    Beds: {}\n", card.beds));
    out
}
