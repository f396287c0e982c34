//! Small presentational building blocks shared by the screens.

mod buttons;
mod feature_card;
mod setup_guide;

pub use buttons::{styled_button, ButtonVariant};
pub use feature_card::{card_frame, feature_grid, FeatureCard};
pub use setup_guide::render_setup_guide;
