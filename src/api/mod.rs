pub mod chess_client;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod source;

pub use chess_client::ChessComClient;
pub use source::PlayerSource;
