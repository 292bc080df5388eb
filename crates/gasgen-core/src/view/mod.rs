//! View state machine.
//!
//! The assistant is a four-screen wizard. `ViewState` holds the current
//! screen together with everything the screens display, and only exposes
//! the transitions the wizard allows.
//!
//! - `screen`: The screens and their back-navigation order (`Screen`)
//! - `copy`: Transient "copied" confirmation (`CopyIndicator`)
//! - `state`: The state machine itself (`ViewState`)

mod copy;
mod screen;
mod state;

pub use copy::{COPY_INDICATOR_WINDOW, CopyIndicator};
pub use screen::Screen;
pub use state::ViewState;
