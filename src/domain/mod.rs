pub mod activity;
pub mod card;
pub mod models;
pub mod title;
pub mod username;

pub use activity::{LastSeen, format_time_ago};
pub use card::PlayerCard;
pub use models::{PlayerProfile, TitledPlayersResponse};
pub use title::Title;
pub use username::UsernamePolicy;
