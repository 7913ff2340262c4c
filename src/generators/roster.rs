//! Staff roster generator.
//!
//! Days are processed in ascending order. For each location the staffing
//! template's slots are filled from employees who match the role and site,
//! have no shift anywhere that day and pass the work-pattern check.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

use crate::catalog::staff::{
    staffing_template, Location, Pick, Role, ShiftShape, Slot, StaffMember, FIRST_NAMES,
    LAST_NAMES, LOCATIONS, MAX_CONSECUTIVE_DAYS, SHIFT_NOTES, STAFF,
};
use crate::error::{FixtureError, Result};
use crate::models::{EmployeeRecord, Shift};
use crate::sampling::{chance, pick_uniform, uniform_money};

/// Shifts longer than this (in hours) get a paid break.
const BREAK_THRESHOLD_HOURS: f64 = 5.0;
const BREAK_MINUTES: u32 = 30;
const EMPTY_NOTE_CHANCE: f64 = 0.20;
const PUBLISHED_CHANCE: f64 = 0.95;
/// Length of the trailing window the weekly cap applies to.
const WEEK_DAYS: i64 = 7;

/// Generated roster and the employee master list it was drawn from.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub shifts: Vec<Shift>,
    pub employees: Vec<EmployeeRecord>,
}

// ---------------------------------------------------------------------------
// WorkHistory: who worked which days so far
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct WorkHistory {
    days: HashMap<&'static str, BTreeSet<NaiveDate>>,
}

impl WorkHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, employee_id: &'static str, date: NaiveDate) {
        self.days.entry(employee_id).or_default().insert(date);
    }

    /// Whether the employee already has a shift on `date` at any location.
    pub fn is_scheduled(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.days
            .get(employee_id)
            .map(|days| days.contains(&date))
            .unwrap_or(false)
    }

    /// Unbroken run of worked calendar days ending the day before `date`.
    pub fn consecutive_days_before(&self, employee_id: &str, date: NaiveDate) -> usize {
        let Some(days) = self.days.get(employee_id) else {
            return 0;
        };
        let mut count = 0;
        let mut check = date.pred_opt();
        while let Some(day) = check {
            if !days.contains(&day) {
                break;
            }
            count += 1;
            check = day.pred_opt();
        }
        count
    }

    /// Shifts worked in the 7-day window `[date - 6, date]`.
    pub fn shifts_in_week(&self, employee_id: &str, date: NaiveDate) -> usize {
        let from = date - Duration::days(WEEK_DAYS - 1);
        self.days
            .get(employee_id)
            .map(|days| days.range(from..=date).count())
            .unwrap_or(0)
    }
}

/// Work-pattern gate for scheduling `member` on `date`.
///
/// Never after [`MAX_CONSECUTIVE_DAYS`] straight days or once the weekly
/// cap is reached; otherwise a coin flip weighted by the work pattern.
pub fn should_employee_work<R: Rng + ?Sized>(
    member: &StaffMember,
    date: NaiveDate,
    history: &WorkHistory,
    rng: &mut R,
) -> bool {
    if history.consecutive_days_before(member.id, date) >= MAX_CONSECUTIVE_DAYS {
        return false;
    }
    if history.shifts_in_week(member.id, date) >= member.pattern.weekly_cap() {
        return false;
    }
    chance(member.pattern.availability(), rng)
}

/// Employees who could take a `role` shift at `location` on `date`.
pub fn eligible_staff<R: Rng + ?Sized>(
    role: Role,
    location: &str,
    date: NaiveDate,
    history: &WorkHistory,
    rng: &mut R,
) -> Vec<&'static StaffMember> {
    STAFF
        .iter()
        .filter(|m| m.role == role && m.can_work_at(location))
        .filter(|m| !history.is_scheduled(m.id, date))
        .filter(|m| should_employee_work(m, date, history, rng))
        .collect()
}

// ---------------------------------------------------------------------------
// Shift shapes
// ---------------------------------------------------------------------------

fn at(date: NaiveDate, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|time| date.and_time(time))
        .ok_or_else(|| FixtureError::InvalidArgument(format!("Invalid time {:02}:{:02}", hour, minute)))
}

fn choose<R: Rng + ?Sized>(options: &[u32], rng: &mut R) -> u32 {
    pick_uniform(options, rng).copied().unwrap_or(0)
}

/// Start and end time of a shift of the given shape on `date`.
pub fn shift_times<R: Rng + ?Sized>(
    shape: ShiftShape,
    date: NaiveDate,
    rng: &mut R,
) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let ((sh, sm), (eh, em)) = match shape {
        ShiftShape::Opening => {
            // Mostly 06:xx starts.
            let sh = choose(&[6, 6, 6, 7], rng);
            let sm = if sh == 6 { choose(&[0, 15, 30], rng) } else { choose(&[0, 15], rng) };
            let eh = choose(&[14, 15], rng);
            let em = if eh == 14 { choose(&[30, 0], rng) } else { 0 };
            ((sh, sm), (eh, em))
        }
        ShiftShape::Mid => {
            let sh = choose(&[8, 9], rng);
            let sm = if sh == 8 { choose(&[30, 45, 0], rng) } else { choose(&[0, 15, 30], rng) };
            let eh = choose(&[14, 15, 16], rng);
            let em = if eh == 14 { choose(&[30, 0], rng) } else { 0 };
            ((sh, sm), (eh, em))
        }
        ShiftShape::PartTime => {
            let sh = choose(&[10, 11], rng);
            let sm = choose(&[0, 15, 30], rng);
            ((sh, sm), (14, choose(&[0, 30], rng)))
        }
        ShiftShape::Kitchen => ((6, 30), (14, 0)),
    };
    Ok((at(date, sh, sm)?, at(date, eh, em)?))
}

/// 30 minutes for shifts longer than five hours, otherwise none.
pub fn break_duration(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let hours = (end - start).num_minutes() as f64 / 60.0;
    if hours > BREAK_THRESHOLD_HOURS {
        BREAK_MINUTES
    } else {
        0
    }
}

fn shift_note<R: Rng + ?Sized>(rng: &mut R) -> String {
    if chance(EMPTY_NOTE_CHANCE, rng) {
        return String::new();
    }
    pick_uniform(SHIFT_NOTES, rng)
        .map(|note| note.to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Employee master list with a name and a pay rate drawn once per run.
pub fn employee_master<R: Rng + ?Sized>(rng: &mut R) -> Vec<EmployeeRecord> {
    STAFF
        .iter()
        .map(|member| {
            let first = pick_uniform(FIRST_NAMES, rng).copied().unwrap_or("Alex");
            let last = pick_uniform(LAST_NAMES, rng).copied().unwrap_or("Smith");
            EmployeeRecord {
                employee_id: member.id.to_string(),
                employee_name: format!("{} {}", first, last),
                role: member.role,
                primary_location: member.primary_location().to_string(),
                pay_rate: uniform_money(member.pay_rate.0, member.pay_rate.1, rng),
                work_pattern: member.pattern,
            }
        })
        .collect()
}

struct DayPlanner<'a, R: Rng + ?Sized> {
    date: NaiveDate,
    location: &'a Location,
    pay_rates: &'a HashMap<String, f64>,
    history: &'a mut WorkHistory,
    shifts: Vec<Shift>,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> DayPlanner<'a, R> {
    fn staffed(&self, role: Role) -> usize {
        self.shifts.iter().filter(|s| s.role == role).count()
    }

    fn fill(&mut self, slot: &Slot) -> Result<()> {
        // One availability roll per candidate for the whole slot.
        let mut pool = eligible_staff(
            slot.role,
            self.location.id,
            self.date,
            &*self.history,
            &mut *self.rng,
        );
        for _ in 0..slot.count {
            if let Some(cap) = slot.cap {
                if self.staffed(slot.role) >= cap {
                    return Ok(());
                }
            }
            if pool.is_empty() {
                break;
            }
            let index = match slot.pick {
                Pick::First => 0,
                Pick::Random => self.rng.gen_range(0..pool.len()),
            };
            let member = pool.remove(index);

            let (start, end) = shift_times(slot.shape, self.date, &mut *self.rng)?;
            let pay_rate = self.pay_rates.get(member.id).copied().unwrap_or(member.pay_rate.0);
            self.history.record(member.id, self.date);
            self.shifts.push(Shift {
                employee_id: member.id.to_string(),
                role: member.role,
                start_time: start,
                end_time: end,
                area_department: self.location.id.to_string(),
                pay_rate,
                notes: shift_note(&mut *self.rng),
                published: chance(PUBLISHED_CHANCE, &mut *self.rng),
                break_duration: break_duration(start, end),
            });
        }
        Ok(())
    }

    fn plan(mut self) -> Result<Vec<Shift>> {
        let template = staffing_template(self.location);
        for group in template.groups {
            if !chance(group.chance, &mut *self.rng) {
                continue;
            }
            for slot in group.slots {
                self.fill(slot)?;
            }
        }
        Ok(self.shifts)
    }
}

/// Roster for every operating day in `days`, sorted by start time then
/// location.
pub fn generate_with<R: Rng + ?Sized>(days: &[NaiveDate], rng: &mut R) -> Result<Roster> {
    let employees = employee_master(rng);
    let pay_rates: HashMap<String, f64> = employees
        .iter()
        .map(|e| (e.employee_id.clone(), e.pay_rate))
        .collect();

    let mut history = WorkHistory::new();
    let mut shifts = Vec::new();
    for date in days {
        for location in LOCATIONS {
            let planner = DayPlanner {
                date: *date,
                location,
                pay_rates: &pay_rates,
                history: &mut history,
                shifts: Vec::new(),
                rng: &mut *rng,
            };
            let planned = planner.plan()?;
            debug!(%date, location = location.id, shifts = planned.len(), "Staffed location");
            shifts.extend(planned);
        }
    }

    shifts.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.area_department.cmp(&b.area_department))
    });
    info!(
        days = days.len(),
        shifts = shifts.len(),
        employees = employees.len(),
        "Generated roster"
    );
    Ok(Roster { shifts, employees })
}

/// [`generate_with`] using the thread-local RNG.
pub fn generate(days: &[NaiveDate]) -> Result<Roster> {
    generate_with(days, &mut thread_rng())
}
