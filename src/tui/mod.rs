//! Interactive terminal form.

mod form;
mod input;
mod text;

pub use form::{Action, Form, Notice, action_for};
pub use input::get_editable_input;
pub use text::print_help;

/// Run interactive mode.
pub fn run() {
    form::run();
}
