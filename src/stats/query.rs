//! Built-in statistic queries
//!
//! Each query reduces the whole dataset to one named [`StatResult`]. Queries
//! are pure and independent of each other.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{Gender, User};

use super::types::{StatItem, StatResult};

pub const STAT_MALE_PCT: &str = "Percentage of males";
pub const STAT_FEMALE_PCT: &str = "Percentage of females";
pub const STAT_FIRST_NAME_A_M: &str = "Percentage of first names that start with A-M versus N-Z";
pub const STAT_LAST_NAME_A_M: &str = "Percentage of last names that start with A-M versus N-Z";
pub const STAT_STATE_PEOPLE: &str =
    "Percentage of people in each state, up to the top 10 most populous states";
pub const STAT_STATE_FEMALE: &str =
    "Percentage of females in each state, up to the top 10 most populous states";
pub const STAT_STATE_MALE: &str =
    "Percentage of males in each state, up to the top 10 most populous states";
pub const STAT_AGE: &str = "Percentage of people in the age range";

/// Group key for users without a location or state
pub const UNSPECIFIED_STATE: &str = "Unspecified";

/// Maximum number of states reported by the ranking queries
pub const TOP_STATES: usize = 10;

/// Age bucket labels, indexed by `(age - 1) / 20`
pub const AGE_BUCKETS: [&str; 6] = ["0-20", "21-40", "41-60", "61-80", "81-100", "100+"];

/// A statistic that can be registered and evaluated
///
/// Identity is the variant plus its parameter: `GenderRatio(Male)` and
/// `GenderRatio(Female)` are different queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatQuery {
    GenderRatio(Gender),
    FirstNameRatio,
    LastNameRatio,
    TopStatesByPopulation,
    TopStatesByGenderRatio(Gender),
    AgeBucketDistribution,
}

impl StatQuery {
    /// The built-in query set
    pub const DEFAULTS: [StatQuery; 8] = [
        StatQuery::GenderRatio(Gender::Male),
        StatQuery::GenderRatio(Gender::Female),
        StatQuery::FirstNameRatio,
        StatQuery::LastNameRatio,
        StatQuery::TopStatesByPopulation,
        StatQuery::TopStatesByGenderRatio(Gender::Female),
        StatQuery::TopStatesByGenderRatio(Gender::Male),
        StatQuery::AgeBucketDistribution,
    ];

    /// Name of the result this query produces
    pub fn name(&self) -> &'static str {
        match self {
            StatQuery::GenderRatio(Gender::Male) => STAT_MALE_PCT,
            StatQuery::GenderRatio(Gender::Female) => STAT_FEMALE_PCT,
            StatQuery::FirstNameRatio => STAT_FIRST_NAME_A_M,
            StatQuery::LastNameRatio => STAT_LAST_NAME_A_M,
            StatQuery::TopStatesByPopulation => STAT_STATE_PEOPLE,
            StatQuery::TopStatesByGenderRatio(Gender::Female) => STAT_STATE_FEMALE,
            StatQuery::TopStatesByGenderRatio(Gender::Male) => STAT_STATE_MALE,
            StatQuery::AgeBucketDistribution => STAT_AGE,
        }
    }

    pub fn evaluate(&self, users: &[User]) -> StatResult {
        match *self {
            StatQuery::GenderRatio(gender) => gender_ratio(users, gender),
            StatQuery::FirstNameRatio => {
                name_ratio(users, STAT_FIRST_NAME_A_M, User::first_name)
            }
            StatQuery::LastNameRatio => name_ratio(users, STAT_LAST_NAME_A_M, User::last_name),
            StatQuery::TopStatesByPopulation => top_states_by_population(users),
            StatQuery::TopStatesByGenderRatio(gender) => top_states_by_gender(users, gender),
            StatQuery::AgeBucketDistribution => age_buckets(users),
        }
    }
}

/// `count / total`, or 0 when there is nothing to divide by
pub fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// True when the first character, upper-cased, is in `A..=M`
pub fn starts_in_first_half(name: &str) -> bool {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .is_some_and(|c| ('A'..='M').contains(&c))
}

/// Bucket index for an age, or `None` for ages that fall below the first bucket
pub fn age_bucket(age: i32) -> Option<usize> {
    let bucket = age.saturating_sub(1).div_euclid(20);
    if bucket < 0 {
        None
    } else {
        Some((bucket as usize).min(AGE_BUCKETS.len() - 1))
    }
}

fn gender_ratio(users: &[User], gender: Gender) -> StatResult {
    let count = users.iter().filter(|u| u.gender == Some(gender)).count();
    let name = StatQuery::GenderRatio(gender).name();
    StatResult::single(name, ratio(count, users.len()))
}

fn name_ratio(users: &[User], name: &str, field: impl Fn(&User) -> Option<&str>) -> StatResult {
    let count = users
        .iter()
        .filter(|&u| field(u).is_some_and(starts_in_first_half))
        .count();
    StatResult::single(name, ratio(count, users.len()))
}

/// Users grouped by state, absent states collapsed into [`UNSPECIFIED_STATE`]
fn group_by_state(users: &[User]) -> HashMap<&str, Vec<&User>> {
    let mut groups: HashMap<&str, Vec<&User>> = HashMap::new();
    for user in users {
        groups
            .entry(user.state().unwrap_or(UNSPECIFIED_STATE))
            .or_default()
            .push(user);
    }
    groups
}

/// Sorts descending by key, breaking ties alphabetically, and keeps the top entries
fn rank<K: PartialOrd>(mut entries: Vec<(&str, K)>) -> Vec<(&str, K)> {
    entries.sort_by(|(a_state, a_key), (b_state, b_key)| {
        b_key
            .partial_cmp(a_key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a_state.cmp(b_state))
    });
    entries.truncate(TOP_STATES);
    entries
}

fn top_states_by_population(users: &[User]) -> StatResult {
    let counts = group_by_state(users)
        .into_iter()
        .map(|(state, group)| (state, group.len()))
        .collect();

    let items = rank(counts)
        .into_iter()
        .map(|(state, count)| {
            StatItem::new(
                format!("Percentage of people in {}", state),
                ratio(count, users.len()),
            )
        })
        .collect();

    StatResult::new(STAT_STATE_PEOPLE, items)
}

fn top_states_by_gender(users: &[User], gender: Gender) -> StatResult {
    let ratios = group_by_state(users)
        .into_iter()
        .map(|(state, group)| {
            let matching = group.iter().filter(|u| u.gender == Some(gender)).count();
            (state, ratio(matching, group.len()))
        })
        .collect();

    let items = rank(ratios)
        .into_iter()
        .map(|(state, pct)| {
            StatItem::new(
                format!("Percentage of {} in {}", gender.plural(), state),
                pct,
            )
        })
        .collect();

    StatResult::new(StatQuery::TopStatesByGenderRatio(gender).name(), items)
}

fn age_buckets(users: &[User]) -> StatResult {
    let mut counts = [0usize; AGE_BUCKETS.len()];
    for bucket in users.iter().filter_map(|u| u.age()).filter_map(age_bucket) {
        counts[bucket] += 1;
    }

    let items = AGE_BUCKETS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| {
            StatItem::new(
                format!("{} {}", STAT_AGE, label),
                ratio(count, users.len()),
            )
        })
        .collect();

    StatResult::new(STAT_AGE, items)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
