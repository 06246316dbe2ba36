use super::*;

const ALL: [Icon; 10] = [
    Icon::Hammer,
    Icon::Brush,
    Icon::Grid,
    Icon::Phone,
    Icon::Mail,
    Icon::Clock,
    Icon::Sun,
    Icon::Moon,
    Icon::Menu,
    Icon::Close,
];

#[test]
fn every_icon_has_svg_children() {
    for icon in ALL {
        let body = markup(icon);
        assert!(body.starts_with('<'), "{icon:?}");
        assert!(body.ends_with("/>"), "{icon:?}");
        assert!(!body.contains("<svg"), "{icon:?} must not nest an svg");
    }
}

#[test]
fn icon_markup_is_distinct() {
    for (i, a) in ALL.iter().enumerate() {
        for b in &ALL[i + 1..] {
            assert_ne!(markup(*a), markup(*b), "{a:?} vs {b:?}");
        }
    }
}
