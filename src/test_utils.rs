//! Shared test utilities for userstats
//!
//! This module provides user builders and a sample generator payload
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::model::{AgeDate, Gender, Location, Name, User};

    /// A trimmed-down response from the Random User Generator
    pub const RANDOM_USER_JSON: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": {"title": "Ms", "first": "Brittany", "last": "Nguyen"},
                "location": {
                    "street": {"number": 5309, "name": "Robinson Rd"},
                    "city": "Mesa",
                    "state": "Iowa",
                    "country": "United States",
                    "postcode": 37563,
                    "coordinates": {"latitude": "-62.9522", "longitude": "75.2539"},
                    "timezone": {"offset": "+5:30", "description": "Bombay, Calcutta"}
                },
                "email": "brittany.nguyen@example.com",
                "login": {"uuid": "5c5f4c4e-9b7a-4d0e-9c57-5f2e0f6c2d1a", "username": "bluebird581"},
                "dob": {"date": "1964-09-27T08:21:44.123Z", "age": 60},
                "registered": {"date": "2010-03-03T09:05:30.312Z", "age": 14},
                "phone": "(713) 555-0102",
                "cell": "(405) 555-0166",
                "id": {"name": "SSN", "value": "123-45-6789"},
                "picture": {"large": "https://randomuser.me/api/portraits/women/1.jpg"},
                "nat": "US"
            },
            {
                "gender": "male",
                "name": {"title": "Mr", "first": "Zachary", "last": "Adams"},
                "location": {"state": "Ohio", "postcode": "44102"},
                "dob": {"date": "1999-01-12T10:00:00.000Z", "age": 25},
                "id": {"name": "SSN", "value": null},
                "nat": "US"
            }
        ],
        "info": {"seed": "b5e1c2d3f4", "results": 2, "page": 1, "version": "1.4"}
    }"#;

    /// A user with only a gender set
    pub fn user_with_gender(gender: Option<Gender>) -> User {
        User {
            gender,
            ..User::default()
        }
    }

    /// A user with only a name set
    pub fn user_named(first: Option<&str>, last: Option<&str>) -> User {
        User {
            name: Name::new(first, last),
            ..User::default()
        }
    }

    /// A user living in `state` (`None` keeps the location but drops the state)
    pub fn user_in_state(state: Option<&str>, gender: Option<Gender>) -> User {
        User {
            gender,
            location: Some(match state {
                Some(state) => Location::with_state(state),
                None => Location::default(),
            }),
            ..User::default()
        }
    }

    /// A user with only a date of birth age set
    pub fn user_aged(age: i32) -> User {
        User {
            date_of_birth: Some(AgeDate::with_age(age)),
            ..User::default()
        }
    }

    /// `count` copies of `user`
    pub fn repeat(user: User, count: usize) -> Vec<User> {
        vec![user; count]
    }
}
