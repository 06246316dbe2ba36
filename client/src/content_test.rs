use super::*;

// =============================================================
// Ordering
// =============================================================

#[test]
fn price_tiers_keep_input_order() {
    let names: Vec<_> = PRICE_TIERS.iter().map(|t| t.service).collect();
    assert_eq!(names, ["Basic Service", "Premium Service", "Ultimate Service"]);
}

#[test]
fn services_keep_input_order() {
    let titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Plastering", "Painting", "Tiling"]);
}

#[test]
fn contacts_keep_input_order() {
    let titles: Vec<_> = CONTACTS.iter().map(|c| c.title).collect();
    assert_eq!(titles, ["Phone", "Email", "Working Hours"]);
}

#[test]
fn nav_sections_order() {
    assert_eq!(
        NAV_SECTIONS,
        &[Section::Services, Section::Pricing, Section::Contact]
    );
}

// =============================================================
// Record shape
// =============================================================

#[test]
fn every_price_tier_has_three_features() {
    for tier in PRICE_TIERS {
        assert_eq!(tier.features.len(), 3, "{}", tier.service);
        assert!(tier.price.starts_with('£'));
    }
}

#[test]
fn ultimate_tier_is_priced_per_project() {
    let ultimate = PRICE_TIERS.last().unwrap();
    assert_eq!(ultimate.price, "£1000");
    assert_eq!(ultimate.unit, "per project");
}

#[test]
fn service_and_contact_icons() {
    let service_icons: Vec<_> = SERVICES.iter().map(|s| s.icon).collect();
    assert_eq!(service_icons, [Icon::Hammer, Icon::Brush, Icon::Grid]);
    let contact_icons: Vec<_> = CONTACTS.iter().map(|c| c.icon).collect();
    assert_eq!(contact_icons, [Icon::Phone, Icon::Mail, Icon::Clock]);
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_anchor_points_at_id() {
    for section in NAV_SECTIONS {
        assert_eq!(section.anchor(), format!("#{}", section.id()));
    }
}

#[test]
fn section_labels_and_headings() {
    assert_eq!(Section::Services.label(), "Services");
    assert_eq!(Section::Services.heading(), "Our Services");
    assert_eq!(Section::Contact.heading(), "Contact Us");
}

#[test]
fn booking_url_is_https() {
    assert!(BOOKING_URL.starts_with("https://"));
}
