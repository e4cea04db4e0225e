mod app;
mod panels;
mod state;
mod widgets;
pub mod services;

pub use app::FourierPathApp;
pub use state::AppState;
