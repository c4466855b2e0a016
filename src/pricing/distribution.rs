//! Activity-to-day distribution.
//!
//! The generic rule covers every destination. Fixed itineraries for specific
//! `(destination, num_days)` pairs are registered in [`OVERRIDES`] and replace
//! the generic rule entirely.

use crate::models::{eq_ignore_case, Activity, ActivityKind};

use super::calculators::middle_day_count;

/// Day 2 of the four-day Goa itinerary.
pub const GOA_DAY_TWO: [&str; 1] = ["NORTH GOA TOUR SIC"];

/// Day 3 of the four-day Goa itinerary, in display order.
pub const GOA_DAY_THREE: [&str; 3] = [
    "SOUTH GOA TOUR SIC",
    "BOAT CRUISE RIDE",
    "SCUBA DIVING+WATERSPORTS",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Pickups on day 1, drops on the last day, sightseeing over the middle days
    Generic,
    /// Fixed four-day Goa plan with named tours on days 2 and 3
    GoaFourDay,
}

struct Override {
    destination: &'static str,
    num_days: u32,
    distribution: Distribution,
}

const OVERRIDES: &[Override] = &[Override {
    destination: "Goa",
    num_days: 4,
    distribution: Distribution::GoaFourDay,
}];

/// Activities assigned to each day; index 0 is day 1.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan<'a> {
    days: Vec<Vec<&'a Activity>>,
}

impl<'a> DayPlan<'a> {
    fn empty(num_days: u32) -> Self {
        Self {
            days: vec![Vec::new(); num_days as usize],
        }
    }

    /// Activities on a 1-based day; empty for days outside the plan.
    pub fn day(&self, day: u32) -> &[&'a Activity] {
        day.checked_sub(1)
            .and_then(|idx| self.days.get(idx as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn num_days(&self) -> u32 {
        self.days.len() as u32
    }

    fn push(&mut self, day: u32, activity: &'a Activity) {
        if let Some(slot) = day.checked_sub(1).and_then(|idx| self.days.get_mut(idx as usize)) {
            slot.push(activity);
        }
    }

    fn extend<I>(&mut self, day: u32, activities: I)
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        for activity in activities {
            self.push(day, activity);
        }
    }
}

impl Distribution {
    /// Pick the distribution for a destination and stay length.
    pub fn select(destination: &str, num_days: u32) -> Self {
        OVERRIDES
            .iter()
            .find(|o| o.num_days == num_days && eq_ignore_case(o.destination, destination))
            .map(|o| o.distribution)
            .unwrap_or(Distribution::Generic)
    }

    /// Assign a city's activities to days.
    pub fn assign<'a>(&self, activities: &'a [Activity], num_days: u32) -> DayPlan<'a> {
        match self {
            Distribution::Generic => assign_generic(activities, num_days),
            Distribution::GoaFourDay => assign_goa_four_day(activities),
        }
    }
}

fn of_kind(activities: &[Activity], kind: ActivityKind) -> impl Iterator<Item = &Activity> {
    activities.iter().filter(move |a| a.kind == kind)
}

fn assign_generic(activities: &[Activity], num_days: u32) -> DayPlan<'_> {
    let mut plan = DayPlan::empty(num_days);
    if num_days == 0 {
        return plan;
    }

    plan.extend(1, of_kind(activities, ActivityKind::Pickup));

    let middle_days = middle_day_count(num_days);
    let tours: Vec<&Activity> = activities.iter().filter(|a| a.kind.is_sightseeing()).collect();

    if middle_days > 0 {
        let last_middle = middle_days + 1;
        for (idx, tour) in tours.into_iter().enumerate() {
            // Middle days are 2..=last_middle; overflow piles onto the last one
            let day = (idx as u32 + 2).min(last_middle);
            plan.push(day, tour);
        }
    }

    plan.extend(num_days, of_kind(activities, ActivityKind::Drop));
    plan
}

fn find_named<'a>(activities: &'a [Activity], name: &str) -> Option<&'a Activity> {
    activities.iter().find(|a| eq_ignore_case(&a.name, name))
}

fn assign_goa_four_day(activities: &[Activity]) -> DayPlan<'_> {
    let mut plan = DayPlan::empty(4);

    plan.extend(1, of_kind(activities, ActivityKind::Pickup));
    plan.extend(2, GOA_DAY_TWO.iter().filter_map(|name| find_named(activities, name)));
    plan.extend(3, GOA_DAY_THREE.iter().filter_map(|name| find_named(activities, name)));
    plan.extend(4, of_kind(activities, ActivityKind::Drop));

    plan
}
