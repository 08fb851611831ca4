pub(crate) mod health;
pub(crate) mod home;
pub(crate) mod sentiment;
