//! Navigable pages and the listing query parameters they carry.

use crate::filters::{FilterPatch, StatusFilter};
use crate::store::PropertyStore;
use tracing::warn;

/// A page the user can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Properties {
        status: Option<StatusFilter>,
        property_type: Option<String>,
    },
    PropertyDetail {
        id: String,
    },
    Blog,
    Favorites,
    Contact,
    NotFound {
        path: String,
    },
}

impl Route {
    /// Resolve a path with optional query string, e.g. `/properties?status=rent`
    pub fn parse(target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["properties"] => Self::listing(query),
            ["property", id] => Route::PropertyDetail { id: id.to_string() },
            ["blog"] => Route::Blog,
            ["favorites"] => Route::Favorites,
            ["contact"] => Route::Contact,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    fn listing(query: &str) -> Self {
        let mut status = None;
        let mut property_type = None;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "status" => match value.parse::<StatusFilter>() {
                    Ok(parsed) => status = Some(parsed),
                    Err(e) => warn!("Ignoring status parameter: {}", e),
                },
                "type" if !value.trim().is_empty() => property_type = Some(value.into_owned()),
                _ => {}
            }
        }

        Route::Properties {
            status,
            property_type,
        }
    }

    /// Canonical path for links
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Properties {
                status,
                property_type,
            } => {
                let mut query = url::form_urlencoded::Serializer::new(String::new());
                if let Some(status) = status {
                    query.append_pair("status", status.as_str());
                }
                if let Some(property_type) = property_type {
                    query.append_pair("type", property_type);
                }
                let query = query.finish();
                if query.is_empty() {
                    "/properties".to_string()
                } else {
                    format!("/properties?{}", query)
                }
            }
            Route::PropertyDetail { id } => format!("/property/{}", id),
            Route::Blog => "/blog".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Filter update implied by the listing query parameters, if any
    pub fn filter_patch(&self) -> Option<FilterPatch> {
        match self {
            Route::Properties {
                status,
                property_type,
            } => {
                let mut patch = FilterPatch::new();
                patch.status = *status;
                patch.property_type = property_type.clone();
                (!patch.is_empty()).then_some(patch)
            }
            _ => None,
        }
    }

    /// Push listing query parameters into the store
    pub async fn apply_to(&self, store: &PropertyStore) -> bool {
        match self.filter_patch() {
            Some(patch) => {
                store.update_filters(patch).await;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;
    use crate::models::ListingStatus;
    use crate::store::StoreTiming;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/blog"), Route::Blog);
        assert_eq!(Route::parse("/favorites/"), Route::Favorites);
        assert_eq!(Route::parse("/contact"), Route::Contact);
        assert_eq!(
            Route::parse("/property/42"),
            Route::PropertyDetail { id: "42".into() }
        );
        assert_eq!(
            Route::parse("/property/42/extra"),
            Route::NotFound {
                path: "/property/42/extra".into()
            }
        );
    }

    #[test]
    fn parses_listing_query() {
        assert_eq!(
            Route::parse("/properties?status=rent&type=condo"),
            Route::Properties {
                status: Some(StatusFilter::Rent),
                property_type: Some("condo".into()),
            }
        );
        assert_eq!(
            Route::parse("/properties?status=bogus&type="),
            Route::Properties {
                status: None,
                property_type: None,
            }
        );
        assert!(Route::parse("/properties").filter_patch().is_none());
    }

    #[test]
    fn paths_round_trip() {
        for target in [
            "/",
            "/properties",
            "/properties?status=sale&type=villa",
            "/property/7",
            "/blog",
            "/favorites",
            "/contact",
        ] {
            assert_eq!(Route::parse(target).path(), target);
        }
    }

    #[tokio::test]
    async fn listing_query_updates_store_filters() {
        let mut rental = property("r", "Austin", 2_000);
        rental.status = ListingStatus::Rent;
        let store = PropertyStore::new(
            vec![property("s", "Austin", 300_000), rental],
            StoreTiming::immediate(),
        );

        assert!(Route::parse("/properties?status=rent").apply_to(&store).await);
        let view = store.settled().await;
        assert_eq!(view.properties.len(), 1);
        assert_eq!(view.properties[0].id, "r");

        assert!(!Route::Blog.apply_to(&store).await);
    }
}
