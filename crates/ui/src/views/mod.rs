mod category_grid;
mod explore;
mod fact_card;
mod feed;
mod home;
mod progress;
mod settings;
mod state;
mod timer;

pub use category_grid::CategoryGrid;
pub use explore::ExploreView;
pub use fact_card::FactCard;
pub use feed::FeedView;
pub use home::HomeView;
pub use progress::ProgressView;
pub use settings::SettingsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use timer::TimerView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
