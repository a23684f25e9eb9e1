use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HomefinderError;

/// Image shown whenever a listing has no usable photo
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=2073&auto=format&fit=crop";

pub const BADGE_FEATURED: &str = "featured";
pub const BADGE_NEW: &str = "new";

/// Whether a listing is for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Sale,
    Rent,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Sale => "sale",
            ListingStatus::Rent => "rent",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStatus::Sale => write!(f, "For Sale"),
            ListingStatus::Rent => write!(f, "For Rent"),
        }
    }
}

impl FromStr for ListingStatus {
    type Err = HomefinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sale" => Ok(ListingStatus::Sale),
            "rent" => Ok(ListingStatus::Rent),
            other => Err(HomefinderError::InvalidFilter(format!(
                "unknown listing status '{}'",
                other
            ))),
        }
    }
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub address: String,
    pub zip: String,
}

impl Location {
    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip)
    }

    /// Embeddable map URL centred on the full street address
    pub fn maps_embed_url(&self) -> String {
        let address = self.full_address();
        url::Url::parse_with_params(
            "https://maps.google.com/maps",
            &[("q", address.as_str()), ("z", "15"), ("output", "embed")],
        )
        .map(|url| url.to_string())
        .unwrap_or_else(|_| String::from("https://maps.google.com/maps"))
    }
}

/// Listing agent contact card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub image: String,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: u64,
    pub price_unit: String,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub property_type: String,
    pub listed: NaiveDate,
    pub status: ListingStatus,
    pub agent: Agent,
}

impl Property {
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b.eq_ignore_ascii_case(badge))
    }

    pub fn is_featured(&self) -> bool {
        self.has_badge(BADGE_FEATURED)
    }

    pub fn is_new(&self) -> bool {
        self.has_badge(BADGE_NEW)
    }

    /// First listing photo, or the placeholder when there is none
    pub fn cover_image(&self) -> &str {
        self.images
            .iter()
            .map(String::as_str)
            .find(|src| !src.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Price as shown on cards, e.g. `$1,250,000` or `$2,400/month`
    pub fn display_price(&self) -> String {
        let price = format!("{}{}", self.price_unit, group_thousands(self.price));
        match self.status {
            ListingStatus::Rent => format!("{}/month", price),
            ListingStatus::Sale => price,
        }
    }
}

/// Blog article teaser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub date: String,
    pub author: String,
}

/// Client testimonial shown on the home page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub location: String,
    pub avatar: String,
    pub comment: String,
    pub stars: u8,
}

impl Testimonial {
    /// Five-slot star strip, filled up to the rating
    pub fn star_strip(&self) -> String {
        let filled = usize::from(self.stars.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// `1250000` -> `1,250,000`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Short price label used on filter bounds: `$1.5M`, `$500K`, `$900`
pub fn compact_price(value: u64) -> String {
    if value >= 1_000_000 {
        format!("${:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("${:.0}K", value as f64 / 1_000.0)
    } else {
        format!("${}", value)
    }
}
