//! Random User Generator data model
//!
//! Mirrors the payload returned by https://randomuser.me/api/. Every field is
//! optional because submitted datasets are frequently partial.

mod lenient;
mod user;

pub use user::{
    AgeDate, Coordinates, Gender, Identification, Location, Login, Name, Picture, PostCode,
    RandomUserInfo, RandomUserResults, Street, Timezone, User,
};
