//! Application pages.

mod add_friend;
mod feed;
mod login;
mod signup;
mod user_chirps;

pub use add_friend::AddFriendPage;
pub use feed::ActivityPage;
pub use login::LoginForm;
pub use signup::SignUpPage;
pub use user_chirps::UserChirpsPage;
