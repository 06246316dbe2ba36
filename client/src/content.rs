//! Static page copy: services, price tiers, contact entries, navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the page says lives here as `const` data. Components iterate
//! these slices in order and never sort, filter, or deduplicate them.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Document `<title>`.
pub const SITE_TITLE: &str = "NEXEM - Construction Services";

/// Document meta description.
pub const SITE_DESCRIPTION: &str = "Professional construction services in Coventry";

pub const BRAND: &str = "NEXEM";

pub const HERO_HEADING: &str = "Expert Construction Services in Coventry";

pub const HERO_TAGLINE: &str = "Professional plastering, painting, and tiling services with exceptional quality and modern solutions";

/// External scheduling page every booking call-to-action opens.
pub const BOOKING_URL: &str = "https://tidycal.com/zane-lewis/on-site-project-consultation";

/// Icons the page can draw. Mapped to markup in `components::icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Hammer,
    Brush,
    Grid,
    Phone,
    Mail,
    Clock,
    Sun,
    Moon,
    Menu,
    Close,
}

/// Page sections reachable from the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Services,
    Pricing,
    Contact,
}

impl Section {
    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Pricing => "pricing",
            Self::Contact => "contact",
        }
    }

    /// In-page link target.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Services => "#services",
            Self::Pricing => "#pricing",
            Self::Contact => "#contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Pricing => "Pricing",
            Self::Contact => "Contact",
        }
    }

    /// Section heading.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Services => "Our Services",
            Self::Pricing => "Pricing",
            Self::Contact => "Contact Us",
        }
    }
}

/// Navigation order, shared by the desktop bar and the mobile drawer.
pub const NAV_SECTIONS: &[Section] = &[Section::Services, Section::Pricing, Section::Contact];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceTier {
    pub service: &'static str,
    pub price: &'static str,
    pub unit: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactItem {
    pub title: &'static str,
    pub content: &'static str,
    pub icon: Icon,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Plastering",
        description: "Professional plastering services with smooth finish and expert application.",
        icon: Icon::Hammer,
    },
    Service {
        title: "Painting",
        description: "Interior and exterior painting services with premium materials.",
        icon: Icon::Brush,
    },
    Service {
        title: "Tiling",
        description: "Expert tiling solutions for floors, walls, and custom designs.",
        icon: Icon::Grid,
    },
];

pub const PRICE_TIERS: &[PriceTier] = &[
    PriceTier {
        service: "Basic Service",
        price: "£200",
        unit: "per room",
        features: &["Plastering", "Basic Painting", "Tile Installation"],
    },
    PriceTier {
        service: "Premium Service",
        price: "£500",
        unit: "per room",
        features: &["Premium Plastering", "Custom Painting", "Custom Tile Design"],
    },
    PriceTier {
        service: "Ultimate Service",
        price: "£1000",
        unit: "per project",
        features: &["Full Renovation", "Expert Finish", "High-End Materials"],
    },
];

pub const CONTACTS: &[ContactItem] = &[
    ContactItem {
        title: "Phone",
        content: "123-456-7890",
        icon: Icon::Phone,
    },
    ContactItem {
        title: "Email",
        content: "info@construction.com",
        icon: Icon::Mail,
    },
    ContactItem {
        title: "Working Hours",
        content: "Mon - Fri: 9:00 AM - 5:00 PM",
        icon: Icon::Clock,
    },
];
