//! Routed Pages

mod playground;
mod users;
mod signup;

pub use playground::PlaygroundPage;
pub use users::UsersPage;
pub use signup::SignupPage;
