pub mod activity_feed;
pub mod context;
pub mod floating_cta;
pub mod hero;
pub mod info_tabs;
pub mod notification;
pub mod page;
pub mod prize_tiers;
pub mod redirect;
pub mod simulation;
pub mod stats_bar;

pub use context::LandingContext;
pub use page::LandingPage;
