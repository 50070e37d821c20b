use crate::businessdayconvention::BusinessDayConvention;
use crate::calendar::FinancialCalendar;
use crate::date::Date;
use crate::dategenerationrule::DateGenerationRule;
use crate::errors::Error;
use crate::period::Period;
use crate::timeunit::TimeUnit;
use crate::types::Integer;

// Minimum length in natural days of the first period of an old-style CDS
// schedule; a shorter first stub pushes the anchor out one roll date.
const OLD_CDS_STUB_DAYS: Integer = 30;

/// The 20th of the month on or before `d`. Under the quarterly rules the
/// result additionally snaps down to the nearest IMM month (March, June,
/// September or December).
pub fn previous_twentieth(date: Date, rule: DateGenerationRule) -> Date {
    let mut result = date.truncate_to_month() + 19;
    if result > date {
        result = Date::from_month_index(result.month_index() - 1) + 19;
    }
    if snaps_to_imm_quarter(rule) {
        let skip = Integer::from(result.month()) % 3;
        if skip != 0 {
            result = Date::from_month_index(result.month_index() - skip) + 19;
        }
    }
    result
}

/// The 20th of the month on or after `d`, snapping up to the next IMM month
/// under the quarterly rules.
pub fn next_twentieth(date: Date, rule: DateGenerationRule) -> Date {
    let mut result = date.truncate_to_month() + 19;
    if result < date {
        result = Date::from_month_index(result.month_index() + 1) + 19;
    }
    if snaps_to_imm_quarter(rule) {
        let skip = 3 - Integer::from(result.month()) % 3;
        if skip != 3 {
            result = Date::from_month_index(result.month_index() + skip) + 19;
        }
    }
    result
}

fn snaps_to_imm_quarter(rule: DateGenerationRule) -> bool {
    matches!(
        rule,
        DateGenerationRule::CDS
            | DateGenerationRule::CDS2015
            | DateGenerationRule::OldCDS
            | DateGenerationRule::TwentiethIMM
    )
}

// -------------------------------------------------------------------------------------------------

// Half-open ranges with an arbitrary stride, the workhorse of the date
// generators. The stop bound is exclusive in the direction of the step.

fn arange_days(start: Date, stop: Date, step: Integer) -> Vec<Date> {
    let mut out = Vec::new();
    let mut current = start;
    if step > 0 {
        while current < stop {
            out.push(current);
            current += step;
        }
    } else {
        while current > stop {
            out.push(current);
            current += step;
        }
    }
    out
}

fn arange_months(start: Integer, stop: Integer, step: Integer) -> Vec<Integer> {
    let mut out = Vec::new();
    let mut current = start;
    if step > 0 {
        while current < stop {
            out.push(current);
            current += step;
        }
    } else {
        while current > stop {
            out.push(current);
            current += step;
        }
    }
    out
}

// -------------------------------------------------------------------------------------------------

impl FinancialCalendar {
    /// The month anchors `[first schedule month, generation start month]`
    /// bracketing a CDS accrual start (`initial == true`) or
    /// `[generation end month, final schedule month]` bracketing the
    /// protection end.
    fn cds_date_range(
        &self,
        date: Date,
        convention: BusinessDayConvention,
        initial: bool,
    ) -> [Integer; 2] {
        if initial {
            let prior = previous_twentieth(date, DateGenerationRule::CDS2015);
            let month = prior.month_index();
            if self.adjust(prior, convention) > date {
                [month, month - 3]
            } else {
                [month, month + 3]
            }
        } else {
            let next = next_twentieth(date, DateGenerationRule::CDS2015);
            let month = next.month_index();
            if self.adjust(next, convention) < date {
                [month, month + 3]
            } else {
                [month - 3, month]
            }
        }
    }

    fn daily_cds_2015(
        &self,
        effective_date: Date,
        termination_date: Date,
        step_days: Integer,
        convention: BusinessDayConvention,
        termination_convention: BusinessDayConvention,
    ) -> Vec<Date> {
        let first = self.cds_date_range(effective_date, convention, true);
        let last = self.cds_date_range(termination_date, termination_convention, false);
        let mut dates = vec![Date::from_month_index(first[0])];
        dates.extend(arange_days(
            Date::from_month_index(first[1]),
            Date::from_month_index(last[0]) + step_days,
            step_days,
        ));
        dates.push(Date::from_month_index(last[1]));
        dates
    }

    fn monthly_cds_2015(
        &self,
        effective_date: Date,
        termination_date: Date,
        step_months: Integer,
        convention: BusinessDayConvention,
        termination_convention: BusinessDayConvention,
    ) -> Vec<Date> {
        let first = self.cds_date_range(effective_date, convention, true);
        let last = self.cds_date_range(termination_date, termination_convention, false);
        let mut months = vec![first[0]];
        months.extend(arange_months(first[1], last[0] + step_months, step_months));
        months.push(last[1]);
        months
            .into_iter()
            .map(|m| Date::from_month_index(m) + 19)
            .collect()
    }

    fn old_cds_anchor(&self, effective_date: Date) -> Date {
        let mut anchor = next_twentieth(effective_date, DateGenerationRule::OldCDS);
        if anchor - effective_date < OLD_CDS_STUB_DAYS {
            anchor = next_twentieth(anchor + 1, DateGenerationRule::OldCDS);
        }
        anchor
    }

    fn daily_old_cds(
        &self,
        effective_date: Date,
        termination_date: Date,
        step_days: Integer,
        termination_convention: BusinessDayConvention,
    ) -> Vec<Date> {
        let last = self.cds_date_range(termination_date, termination_convention, false);
        let anchor = self.old_cds_anchor(effective_date);
        let stop = Date::from_month_index(last[0]) + step_days;
        let final_date = Date::from_month_index(last[1]);
        if anchor != effective_date {
            let mut dates = vec![effective_date];
            dates.extend(
                arange_days(anchor, stop, step_days)
                    .into_iter()
                    .map(|d| d + 19),
            );
            dates.push(final_date);
            dates
        } else {
            let mut dates = arange_days(effective_date, stop, step_days);
            dates.push(final_date);
            dates
        }
    }

    fn monthly_old_cds(
        &self,
        effective_date: Date,
        termination_date: Date,
        step_months: Integer,
        termination_convention: BusinessDayConvention,
    ) -> Vec<Date> {
        let last = self.cds_date_range(termination_date, termination_convention, false);
        let anchor = self.old_cds_anchor(effective_date);
        let stop = last[0] + step_months;
        let final_date = Date::from_month_index(last[1]) + 19;
        if anchor != effective_date {
            let mut dates = vec![effective_date];
            dates.extend(
                arange_months(anchor.month_index(), stop, step_months)
                    .into_iter()
                    .map(|m| Date::from_month_index(m) + 19),
            );
            dates.push(final_date);
            dates
        } else {
            let mut dates: Vec<Date> = arange_months(effective_date.month_index(), stop, step_months)
                .into_iter()
                .map(|m| Date::from_month_index(m) + 19)
                .collect();
            if let Some(head) = dates.first_mut() {
                *head = effective_date;
            }
            dates.push(final_date);
            dates
        }
    }

    fn daily_generation(
        &self,
        start: Date,
        end: Date,
        step_days: Integer,
        rule: DateGenerationRule,
        convention: BusinessDayConvention,
        termination_convention: BusinessDayConvention,
    ) -> Result<Vec<Date>, Error> {
        match rule {
            DateGenerationRule::Forward => {
                let mut dates = arange_days(start, end, step_days);
                if dates.last() != Some(&end) {
                    dates.push(end);
                }
                dates.retain(|d| *d <= end);
                Ok(dates)
            }
            DateGenerationRule::Backward => {
                let mut dates = arange_days(end, start, -step_days);
                if dates.last() != Some(&start) {
                    dates.push(start);
                }
                dates.retain(|d| *d >= start);
                dates.reverse();
                Ok(dates)
            }
            DateGenerationRule::Zero => Ok(vec![start, end]),
            DateGenerationRule::CDS | DateGenerationRule::CDS2015 => Ok(self.daily_cds_2015(
                start,
                end,
                step_days,
                convention,
                termination_convention,
            )),
            DateGenerationRule::OldCDS => {
                Ok(self.daily_old_cds(start, end, step_days, termination_convention))
            }
            other => Err(Error::RuleNotImplemented(other)),
        }
    }

    fn monthly_generation(
        &self,
        start: Date,
        end: Date,
        step_months: Integer,
        end_of_month: bool,
        rule: DateGenerationRule,
        convention: BusinessDayConvention,
        termination_convention: BusinessDayConvention,
    ) -> Result<Vec<Date>, Error> {
        match rule {
            DateGenerationRule::Forward => {
                let months = arange_months(start.month_index(), end.month_index(), step_months);
                let mut dates = attach_month_day(&months, start, end_of_month, start.day_of_month());
                if dates.last() != Some(&end) {
                    dates.push(end);
                }
                dates.retain(|d| *d <= end);
                Ok(dates)
            }
            DateGenerationRule::Backward => {
                let months = arange_months(
                    end.month_index(),
                    start.month_index() - step_months,
                    -step_months,
                );
                let mut dates = attach_month_day(&months, end, end_of_month, end.day_of_month());
                if dates.last() != Some(&start) {
                    dates.push(start);
                }
                dates.retain(|d| *d >= start);
                dates.reverse();
                Ok(dates)
            }
            DateGenerationRule::Zero => Ok(vec![start, end]),
            DateGenerationRule::CDS | DateGenerationRule::CDS2015 => Ok(self.monthly_cds_2015(
                start,
                end,
                step_months,
                convention,
                termination_convention,
            )),
            DateGenerationRule::OldCDS => {
                Ok(self.monthly_old_cds(start, end, step_months, termination_convention))
            }
            other => Err(Error::RuleNotImplemented(other)),
        }
    }

    /// Generate the adjusted coupon dates of an instrument.
    ///
    /// The sequence runs from `effective_date` to `termination_date` in
    /// steps of `period` according to `rule`. Interior dates are rolled
    /// under `convention` (or under `Preceding` when the end-of-month rule
    /// forces the roll direction), the final date under
    /// `termination_convention`. An explicit `first_date` /
    /// `next_to_last_date` introduces a stub period at the respective end.
    /// The result is sorted and duplicate-free.
    #[allow(clippy::too_many_arguments)]
    pub fn make_schedule(
        &self,
        effective_date: Date,
        termination_date: Date,
        period: Period,
        convention: BusinessDayConvention,
        termination_convention: BusinessDayConvention,
        end_of_month: bool,
        rule: DateGenerationRule,
        first_date: Option<Date>,
        next_to_last_date: Option<Date>,
    ) -> Result<Vec<Date>, Error> {
        assert!(
            effective_date <= termination_date,
            "effective date ({}) later than termination date ({})",
            effective_date,
            termination_date
        );
        assert!(
            period.length >= 0,
            "negative period ({:?}) not allowed",
            period
        );
        let rule = if period.length == 0 {
            DateGenerationRule::Zero
        } else {
            rule
        };

        let has_first = first_date.is_some() && rule != DateGenerationRule::Zero;
        let start = match first_date {
            Some(d) if has_first => d,
            _ => effective_date,
        };
        let has_next_to_last = next_to_last_date.is_some() && rule != DateGenerationRule::Zero;
        let end = match next_to_last_date {
            Some(d) if has_next_to_last && start < d => d,
            _ => termination_date,
        };

        let end_of_month = if rule == DateGenerationRule::CDS2015 {
            false
        } else {
            end_of_month
        };

        let (mut dates, interior_convention) = match period.unit {
            TimeUnit::Days => (
                self.daily_generation(start, end, period.length, rule, convention, termination_convention)?,
                convention,
            ),
            TimeUnit::Weeks => (
                self.daily_generation(
                    start,
                    end,
                    7 * period.length,
                    rule,
                    convention,
                    termination_convention,
                )?,
                convention,
            ),
            TimeUnit::Months | TimeUnit::Years => {
                let step_months = match period.unit {
                    TimeUnit::Years => 12 * period.length,
                    _ => period.length,
                };
                let interior = if end_of_month && convention != BusinessDayConvention::Unadjusted {
                    BusinessDayConvention::Preceding
                } else {
                    convention
                };
                (
                    self.monthly_generation(
                        start,
                        end,
                        step_months,
                        end_of_month,
                        rule,
                        convention,
                        termination_convention,
                    )?,
                    interior,
                )
            }
        };

        if has_first {
            dates.insert(0, self.adjust(effective_date, convention));
        }
        if has_next_to_last {
            dates.push(self.adjust(termination_date, convention));
        }

        // roll the interior dates; for old-style CDS schedules the first
        // date is the raw effective date and stays unrolled
        let skip = if rule == DateGenerationRule::OldCDS { 1 } else { 0 };
        let len = dates.len();
        if len > skip {
            for date in dates[skip..len - 1].iter_mut() {
                *date = self.adjust(*date, interior_convention);
            }
        }

        if interior_convention != convention
            && rule != DateGenerationRule::CDS2015
            && rule != DateGenerationRule::OldCDS
        {
            dates[0] = self.adjust(effective_date, convention);
        }
        if let Some(last) = dates.last_mut() {
            *last = self.adjust(*last, termination_convention);
        }

        dates.sort_unstable();
        dates.dedup();
        Ok(dates)
    }

    /// Truncate a date vector to the entries on or before `until_date`,
    /// which is itself appended. The result is sorted and unique.
    pub fn until(&self, dates: &[Date], until_date: Date) -> Result<Vec<Date>, Error> {
        if dates.is_empty() {
            return Err(Error::EmptyDates);
        }
        let mut out: Vec<Date> = dates.iter().copied().filter(|d| *d <= until_date).collect();
        out.push(until_date);
        out.sort_unstable();
        out.dedup();
        Ok(out)
    }

    /// Truncate a date vector to the entries on or after `from_date`, which
    /// is itself prepended. The result is sorted and unique.
    pub fn after(&self, dates: &[Date], from_date: Date) -> Result<Vec<Date>, Error> {
        if dates.is_empty() {
            return Err(Error::EmptyDates);
        }
        let mut out = vec![from_date];
        out.extend(dates.iter().copied().filter(|d| *d >= from_date));
        out.sort_unstable();
        out.dedup();
        Ok(out)
    }
}

// -------------------------------------------------------------------------------------------------

// Convention used when dates move from month anchors back to day
// resolution: end-of-month schedules pin every coupon to the last day of
// its month and restore the exact boundary date afterwards.
fn attach_month_day(months: &[Integer], boundary: Date, end_of_month: bool, day: crate::Day) -> Vec<Date> {
    let anchors: Vec<Date> = months.iter().map(|&m| Date::from_month_index(m)).collect();
    if end_of_month {
        let mut dates = crate::date::clamped_month_days(&anchors, 31);
        if let Some(head) = dates.first_mut() {
            *head = boundary;
        }
        dates
    } else {
        crate::date::clamped_month_days(&anchors, day)
    }
}

// -------------------------------------------------------------------------------------------------

/// Builder over [FinancialCalendar::make_schedule] carrying the optional
/// parameters with their market-standard defaults.
pub struct ScheduleBuilder<'a> {
    calendar: &'a FinancialCalendar,
    effective_date: Date,
    termination_date: Date,
    period: Period,
    convention: Option<BusinessDayConvention>,
    termination_convention: Option<BusinessDayConvention>,
    rule: Option<DateGenerationRule>,
    end_of_month: bool,
    first_date: Option<Date>,
    next_to_last_date: Option<Date>,
}

impl<'a> ScheduleBuilder<'a> {
    /// Construct the builder from the mandatory parameters.
    pub fn new(
        calendar: &'a FinancialCalendar,
        effective_date: Date,
        termination_date: Date,
        period: Period,
    ) -> Self {
        Self {
            calendar,
            effective_date,
            termination_date,
            period,
            convention: None,
            termination_convention: None,
            rule: None,
            end_of_month: false,
            first_date: None,
            next_to_last_date: None,
        }
    }

    /// Set the rolling convention for generated dates.
    pub fn with_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    /// Set the rolling convention of the final date.
    pub fn with_termination_convention(
        mut self,
        termination_convention: BusinessDayConvention,
    ) -> Self {
        self.termination_convention = Some(termination_convention);
        self
    }

    /// Set the date generation rule.
    pub fn with_rule(mut self, rule: DateGenerationRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Generate with [DateGenerationRule::Forward].
    pub fn forwards(mut self) -> Self {
        self.rule = Some(DateGenerationRule::Forward);
        self
    }

    /// Generate with [DateGenerationRule::Backward].
    pub fn backwards(mut self) -> Self {
        self.rule = Some(DateGenerationRule::Backward);
        self
    }

    /// Pin monthly coupons to the end of their month.
    pub fn with_end_of_month(mut self, end_of_month: bool) -> Self {
        self.end_of_month = end_of_month;
        self
    }

    /// Set an explicit first coupon date (an initial stub).
    pub fn with_first_date(mut self, first_date: Date) -> Self {
        self.first_date = Some(first_date);
        self
    }

    /// Set an explicit next-to-last coupon date (a final stub).
    pub fn with_next_to_last_date(mut self, next_to_last_date: Date) -> Self {
        self.next_to_last_date = Some(next_to_last_date);
        self
    }

    /// Generate the schedule.
    pub fn build(self) -> Result<Vec<Date>, Error> {
        let convention = self.convention.unwrap_or(BusinessDayConvention::Following);
        let termination_convention = self.termination_convention.unwrap_or(convention);
        let rule = self.rule.unwrap_or(DateGenerationRule::Backward);
        self.calendar.make_schedule(
            self.effective_date,
            self.termination_date,
            self.period,
            convention,
            termination_convention,
            self.end_of_month,
            rule,
            self.first_date,
            self.next_to_last_date,
        )
    }
}

// -------------------------------------------------------------------------------------------------
