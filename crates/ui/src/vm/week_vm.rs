use chrono::Days;
use habit_core::HabitDay;

/// One entry of the week strip above the habit list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayLinkVm {
    pub day: HabitDay,
    pub route_date: String,
    pub short_label: String,
    pub day_of_month: String,
    pub selected: bool,
    pub is_today: bool,
}

/// The seven days ending at `today`, oldest first.
#[must_use]
pub fn map_week_strip(today: HabitDay, selected: HabitDay) -> Vec<DayLinkVm> {
    (0..7u64)
        .rev()
        .filter_map(|offset| today.date().checked_sub_days(Days::new(offset)))
        .map(|date| {
            let day = HabitDay::new(date);
            DayLinkVm {
                day,
                route_date: day.to_string(),
                short_label: date.format("%a").to_string(),
                day_of_month: date.format("%d").to_string(),
                selected: day == selected,
                is_today: day == today,
            }
        })
        .collect()
}
