pub mod app;
pub mod expansion;
pub mod render;
pub mod theme;
pub mod view;

pub use app::{App, AppCommand};
pub use expansion::{ExpansionController, ExpansionState};
pub use view::{compose, ContentView, RowView, View};
