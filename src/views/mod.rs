//! Plain-text page views built from store snapshots.

pub mod gallery;

pub use gallery::Gallery;

use crate::catalog::Catalog;
use crate::favorites::{FavoritesStore, KeyValueStorage};
use crate::models::{compact_price, group_thousands, BlogPost, Property};
use crate::pagination::{Page, PageLink};
use crate::routes::Route;
use crate::store::FilteredView;
use std::fmt;

/// Featured listings and latest posts shown on the home page
pub const HOME_SECTION_SIZE: usize = 3;

/// Compact listing card
pub struct PropertyCard<'a> {
    pub property: &'a Property,
    pub favorite: bool,
}

impl fmt::Display for PropertyCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.property;
        let heart = if self.favorite { "♥" } else { "♡" };
        write!(f, "{} {} ({})", heart, p.title, p.display_price())?;
        if !p.badges.is_empty() {
            write!(f, " [{}]", p.badges.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "   {}, {}", p.location.city, p.location.state)?;
        writeln!(
            f,
            "   {} Beds · {} Baths · {} sqft",
            p.bedrooms,
            p.bathrooms,
            group_thousands(u64::from(p.area))
        )?;
        writeln!(f, "   Image: {}", p.cover_image())?;
        write!(f, "   {}", Route::PropertyDetail { id: p.id.clone() }.path())
    }
}

/// Paginated listing page
pub struct ListingView<'a> {
    pub view: &'a FilteredView,
    pub page: Page<'a, Property>,
    pub per_page: usize,
    pub favorite_ids: &'a [String],
}

impl<'a> ListingView<'a> {
    pub fn new(view: &'a FilteredView, page: usize, per_page: usize, favorite_ids: &'a [String]) -> Self {
        Self {
            view,
            page: Page::of(&view.properties, page, per_page),
            per_page: per_page.max(1),
            favorite_ids,
        }
    }
}

impl fmt::Display for ListingView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.view.loading {
            return writeln!(f, "Loading properties...");
        }

        let filters = &self.view.filters;
        writeln!(
            f,
            "Price: {} - {}",
            compact_price(filters.price_min),
            compact_price(filters.price_max)
        )?;
        writeln!(f, "Showing {} properties", self.view.properties.len())?;
        writeln!(f)?;

        if self.page.items.is_empty() {
            writeln!(f, "No properties found")?;
            return writeln!(f, "Try adjusting your filters for better results");
        }

        for (i, property) in self.page.items.iter().enumerate() {
            let card = PropertyCard {
                property,
                favorite: self.favorite_ids.contains(&property.id),
            };
            let position = (self.page.number - 1) * self.per_page + i + 1;
            writeln!(f, "{}. {}", position, card)?;
            writeln!(f)?;
        }

        let strip: Vec<String> = self
            .page
            .page_links()
            .into_iter()
            .map(|link| match link {
                PageLink::Page(n) if n == self.page.number => format!("[{}]", n),
                PageLink::Page(n) => n.to_string(),
                PageLink::Ellipsis => "...".to_string(),
            })
            .collect();
        write!(f, "{}", if self.page.has_previous() { "« Previous " } else { "" })?;
        write!(f, "{}", strip.join(" "))?;
        writeln!(f, "{}", if self.page.has_next() { " Next »" } else { "" })
    }
}

/// Detail page, or the not-found page for an unknown id
pub enum DetailView<'a> {
    Found {
        property: &'a Property,
        gallery: Gallery<'a>,
        favorite: bool,
    },
    NotFound {
        id: String,
    },
}

impl<'a> DetailView<'a> {
    pub fn resolve<S: KeyValueStorage>(
        property: Option<&'a Property>,
        id: &str,
        favorites: &FavoritesStore<S>,
    ) -> Self {
        match property {
            Some(property) => DetailView::Found {
                property,
                gallery: Gallery::new(&property.images),
                favorite: favorites.is_favorite(&property.id),
            },
            None => DetailView::NotFound { id: id.to_string() },
        }
    }
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (property, gallery, favorite) = match self {
            DetailView::NotFound { id } => {
                writeln!(f, "Property Not Found")?;
                writeln!(
                    f,
                    "The property '{}' doesn't exist or has been removed.",
                    id
                )?;
                return writeln!(
                    f,
                    "← Back to Properties: {}",
                    Route::Properties {
                        status: None,
                        property_type: None
                    }
                    .path()
                );
            }
            DetailView::Found {
                property,
                gallery,
                favorite,
            } => (property, gallery, favorite),
        };

        writeln!(f, "{}", property.title)?;
        writeln!(f, "{}", property.location.full_address())?;
        let mut tags = vec![property.status.to_string()];
        if property.is_featured() {
            tags.push("Featured".to_string());
        }
        if property.is_new() {
            tags.push("New".to_string());
        }
        writeln!(f, "{} · {}", tags.join(" · "), if *favorite { "Saved" } else { "Save" })?;
        writeln!(f, "{}", property.display_price())?;
        writeln!(
            f,
            "{} Beds · {} Baths · {} sqft · {} · listed {}",
            property.bedrooms,
            property.bathrooms,
            group_thousands(u64::from(property.area)),
            property.property_type,
            property.listed.format("%B %-d, %Y")
        )?;
        writeln!(
            f,
            "Image {}/{}: {}",
            gallery.index() + 1,
            gallery.len().max(1),
            gallery.current()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", property.description)?;
        if !property.features.is_empty() {
            writeln!(f)?;
            writeln!(f, "Features:")?;
            for feature in &property.features {
                writeln!(f, "  ✓ {}", feature)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Agent: {}", property.agent.name)?;
        writeln!(f, "  {} · {}", property.agent.phone, property.agent.email)?;
        writeln!(f, "Map: {}", property.location.maps_embed_url())
    }
}

/// Saved properties page
pub struct FavoritesView<'a> {
    pub properties: Vec<&'a Property>,
}

impl fmt::Display for FavoritesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.properties.is_empty() {
            writeln!(f, "No favorites yet")?;
            writeln!(
                f,
                "Start adding properties to your favorites from any listing."
            )?;
            return writeln!(
                f,
                "Browse Properties: {}",
                Route::Properties {
                    status: None,
                    property_type: None
                }
                .path()
            );
        }

        writeln!(f, "You have {} saved properties", self.properties.len())?;
        writeln!(f)?;
        for property in &self.properties {
            writeln!(f, "{}", PropertyCard { property, favorite: true })?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_post(f: &mut fmt::Formatter<'_>, post: &BlogPost) -> fmt::Result {
    writeln!(f, "{} ({}, by {})", post.title, post.date, post.author)?;
    writeln!(f, "   {}", post.excerpt)
}

/// Home page sections
pub struct HomeView<'a> {
    pub catalog: &'a Catalog,
    pub favorite_ids: &'a [String],
}

impl fmt::Display for HomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Featured Properties")?;
        writeln!(f, "===================")?;
        for property in self.catalog.featured_properties(HOME_SECTION_SIZE) {
            let card = PropertyCard {
                property,
                favorite: self.favorite_ids.contains(&property.id),
            };
            writeln!(f, "{}", card)?;
        }
        writeln!(f)?;

        writeln!(f, "From the Blog")?;
        writeln!(f, "=============")?;
        for post in self.catalog.latest_posts(HOME_SECTION_SIZE) {
            write_post(f, post)?;
        }
        writeln!(f)?;

        writeln!(f, "What Our Clients Say")?;
        writeln!(f, "====================")?;
        for testimonial in &self.catalog.testimonials {
            writeln!(f, "{} \"{}\"", testimonial.star_strip(), testimonial.comment)?;
            writeln!(f, "   {} · {}", testimonial.name, testimonial.location)?;
        }
        Ok(())
    }
}

/// Blog index page
pub struct BlogView<'a> {
    pub posts: &'a [BlogPost],
}

impl fmt::Display for BlogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Latest Articles")?;
        writeln!(f)?;
        for post in self.posts {
            write_post(f, post)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::MemoryStorage;
    use crate::models::fixtures::property;
    use crate::models::ListingStatus;
    use crate::store::{PropertyStore, StoreTiming};

    #[test]
    fn card_shows_price_placeholder_and_heart() {
        let mut p = property("8", "Austin", 2_500);
        p.status = ListingStatus::Rent;
        p.images.clear();
        let text = PropertyCard { property: &p, favorite: true }.to_string();
        assert!(text.starts_with("♥ Home 8 ($2,500/month)"));
        assert!(text.contains(crate::models::PLACEHOLDER_IMAGE));
        assert!(text.contains("/property/8"));
    }

    #[test]
    fn unknown_id_renders_not_found_page() {
        let favorites = FavoritesStore::load(MemoryStorage::new());
        let text = DetailView::resolve(None, "nope", &favorites).to_string();
        assert!(text.starts_with("Property Not Found"));
        assert!(text.contains("/properties"));
    }

    #[test]
    fn detail_page_marks_saved_properties() {
        let p = property("2", "Austin", 480_000);
        let mut favorites = FavoritesStore::load(MemoryStorage::new());
        favorites.add_to_favorites(&p).unwrap();
        let view = DetailView::resolve(Some(&p), "2", &favorites);
        assert!(matches!(view, DetailView::Found { favorite: true, .. }));
        let text = view.to_string();
        assert!(text.contains("$480,000"));
        assert!(text.contains("Saved"));
        assert!(text.contains("Map: https://maps.google.com/maps?q="));
    }

    #[tokio::test]
    async fn listing_pages_and_empty_state() {
        let props: Vec<_> = (1..=8).map(|i| property(&i.to_string(), "Austin", i * 1000)).collect();
        let store = PropertyStore::new(props, StoreTiming::immediate());
        let view = store.view();

        let text = ListingView::new(&view, 2, 6, &[]).to_string();
        assert!(text.contains("Showing 8 properties"));
        assert!(text.contains("Home 7"));
        assert!(!text.contains("Home 1 "));
        assert!(text.contains("« Previous 1 [2]"));

        store.set_search_term("nowhere").await;
        let view = store.settled().await;
        let text = ListingView::new(&view, 1, 6, &[]).to_string();
        assert!(text.contains("No properties found"));
    }

    #[test]
    fn favorites_page_empty_state() {
        let text = FavoritesView { properties: vec![] }.to_string();
        assert!(text.starts_with("No favorites yet"));
    }
}
