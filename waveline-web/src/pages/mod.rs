mod dashboard;
mod layout;
mod search;

pub use dashboard::Dashboard;
pub use layout::AppLayout;
pub use search::ArtistSearch;
