use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use homefinder::catalog::Catalog;
use homefinder::config::AppConfig;
use homefinder::favorites::{FavoritesStore, FileStorage};
use homefinder::filters::{FilterPatch, StatusFilter};
use homefinder::inquiry::{Inquiry, InquiryService, SimulatedInquiryService};
use homefinder::routes::Route;
use homefinder::store::PropertyStore;
use homefinder::views::{BlogView, DetailView, FavoritesView, HomeView, ListingView};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "homefinder", version, about = "Browse HomeFinder property listings")]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Featured properties, latest posts and testimonials
    Home,
    /// Filtered, paginated property listing
    List(ListArgs),
    /// Property detail page
    Show {
        id: String,
        /// Advance the image gallery this many times
        #[arg(long, default_value_t = 0)]
        image: usize,
    },
    /// Saved properties
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// Blog articles
    Blog,
    /// Resolve a site path such as `/properties?status=rent` and print its page
    Open {
        path: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Send an inquiry to the listing agent
    Inquire {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    List,
    Add { id: String },
    Remove { id: String },
}

#[derive(Args)]
struct ListArgs {
    /// Free text matched against title, city, state and address
    #[arg(long, short)]
    search: Option<String>,
    /// City, state or zip substring
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    min_price: Option<u64>,
    #[arg(long)]
    max_price: Option<u64>,
    /// house, apartment, condo, villa, townhouse or all
    #[arg(long = "type")]
    property_type: Option<String>,
    /// Minimum bedrooms
    #[arg(long)]
    beds: Option<u32>,
    /// Minimum bathrooms
    #[arg(long)]
    baths: Option<u32>,
    /// Minimum area in sqft
    #[arg(long)]
    area: Option<u32>,
    /// sale, rent or all
    #[arg(long)]
    status: Option<StatusFilter>,
    #[arg(long, default_value_t = 1)]
    page: usize,
}

impl ListArgs {
    fn filter_patch(&self) -> FilterPatch {
        FilterPatch {
            location: self.location.clone(),
            price_min: self.min_price,
            price_max: self.max_price,
            property_type: self.property_type.clone(),
            bedrooms: self.beds.map(Some),
            bathrooms: self.baths.map(Some),
            area_min: self.area.map(Some),
            status: self.status,
        }
    }
}

struct App {
    config: AppConfig,
    catalog: Catalog,
    store: PropertyStore,
    favorites: FavoritesStore<FileStorage>,
}

impl App {
    async fn listing(&self, page: usize) {
        let view = self.store.settled().await;
        print!(
            "{}",
            ListingView::new(&view, page, self.config.per_page, self.favorites.favorites())
        );
    }

    fn detail(&self, id: &str, image: usize) {
        let mut view = DetailView::resolve(self.store.get_property_by_id(id), id, &self.favorites);
        if let DetailView::Found { gallery, .. } = &mut view {
            for _ in 0..image {
                gallery.next();
            }
        }
        print!("{}", view);
    }

    fn home(&self) {
        print!(
            "{}",
            HomeView {
                catalog: &self.catalog,
                favorite_ids: self.favorites.favorites(),
            }
        );
    }

    fn favorites_page(&self) {
        print!(
            "{}",
            FavoritesView {
                properties: self.favorites.favorite_properties(self.store.properties()),
            }
        );
    }

    fn blog(&self) {
        print!("{}", BlogView { posts: &self.catalog.blog_posts });
    }

    fn contact(&self) {
        println!("Contact Us");
        println!("Send an inquiry about any listing with `homefinder inquire <id>`.");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("🏠 HomeFinder");

    let source = cli.config.data_source();
    let catalog = Catalog::load(source.as_ref())
        .await
        .context("Failed to load fixture data")?;
    let favorites = FavoritesStore::load(cli.config.storage());
    let store = PropertyStore::new(catalog.properties.clone(), cli.config.store_timing());

    let mut app = App {
        config: cli.config,
        catalog,
        store,
        favorites,
    };

    match cli.command {
        Command::Home => app.home(),
        Command::List(args) => {
            let patch = args.filter_patch();
            if !patch.is_empty() {
                app.store.update_filters(patch).await;
            }
            if let Some(term) = &args.search {
                app.store.set_search_term(term.clone()).await;
            }
            app.listing(args.page).await;
        }
        Command::Show { id, image } => app.detail(&id, image),
        Command::Favorites { action } => match action.unwrap_or(FavoritesAction::List) {
            FavoritesAction::List => app.favorites_page(),
            FavoritesAction::Add { id } => match app.store.get_property_by_id(&id) {
                Some(property) => {
                    let property = property.clone();
                    if !app
                        .favorites
                        .add_to_favorites(&property)
                        .context("Failed to save favorites")?
                    {
                        info!("{} is already a favorite", property.title);
                    }
                    app.favorites_page();
                }
                None => app.detail(&id, 0),
            },
            FavoritesAction::Remove { id } => {
                if !app
                    .favorites
                    .remove_from_favorites(&id)
                    .context("Failed to save favorites")?
                {
                    info!("{} was not a favorite", id);
                }
                app.favorites_page();
            }
        },
        Command::Blog => app.blog(),
        Command::Open { path, page } => {
            let route = Route::parse(&path);
            info!("Opening {}", route.path());
            match &route {
                Route::Home => app.home(),
                Route::Properties { .. } => {
                    route.apply_to(&app.store).await;
                    app.listing(page).await;
                }
                Route::PropertyDetail { id } => app.detail(id, 0),
                Route::Blog => app.blog(),
                Route::Favorites => app.favorites_page(),
                Route::Contact => app.contact(),
                Route::NotFound { path } => {
                    warn!("No page at {}", path);
                    println!("404 - Page not found: {}", path);
                    println!("Return to Home: {}", Route::Home.path());
                }
            }
        }
        Command::Inquire {
            id,
            name,
            email,
            phone,
            message,
        } => {
            if app.store.get_property_by_id(&id).is_none() {
                app.detail(&id, 0);
                return Ok(());
            }
            let service = SimulatedInquiryService::default();
            info!("Sending inquiry...");
            let receipt = service
                .submit(Inquiry {
                    property_id: id,
                    name,
                    email,
                    phone,
                    message,
                })
                .await
                .context("Inquiry was not sent")?;
            println!(
                "✅ Your inquiry about property {} has been sent ({})",
                receipt.property_id,
                receipt.received_at.to_rfc3339()
            );
        }
    }

    Ok(())
}
