//! User module - application users and their personality profile.
//!
//! Users are provisioned from the token issuer's identity on first use and
//! carry two personality fields: the last MBTI assessment result and a
//! free-text personality label.

mod account;

pub use account::{
    validate_personality_label, User, EMAIL_MAX_LEN, NAME_MAX_LEN, NOT_SET_LABEL,
    PERSONALITY_LABEL_MAX_LEN, USERNAME_MAX_LEN,
};
