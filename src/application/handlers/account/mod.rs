//! User account resolution shared by the command and query handlers.

mod provision_user;

pub use provision_user::UserProvisioner;
