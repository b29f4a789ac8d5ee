//! Pricing calculator of the marketing site.
//!
//! Prices are whole rubles per seat per month. Annual billing takes 20% off
//! the per-seat price.

use serde::{Deserialize, Serialize};

pub const ANNUAL_DISCOUNT_PERCENT: u64 = 20;
pub const MAX_SEATS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Start,
    #[default]
    Business,
    Corporate,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Start, Plan::Business, Plan::Corporate];

    pub fn title(&self) -> &'static str {
        match self {
            Plan::Start => "Старт",
            Plan::Business => "Бизнес",
            Plan::Corporate => "Корпоративный",
        }
    }

    pub fn seat_price(&self) -> u64 {
        match self {
            Plan::Start => 990,
            Plan::Business => 1990,
            Plan::Corporate => 3490,
        }
    }

    /// Active projects included; `None` means unlimited.
    pub fn included_projects(&self) -> Option<u32> {
        match self {
            Plan::Start => Some(3),
            Plan::Business => Some(20),
            Plan::Corporate => None,
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Plan::Start => &["Графики работ", "Учёт материалов", "Мобильное приложение"],
            Plan::Business => &[
                "Всё из тарифа «Старт»",
                "Сметы и акты КС-2/КС-3",
                "Роли и права доступа",
                "Интеграция с 1С",
            ],
            Plan::Corporate => &[
                "Всё из тарифа «Бизнес»",
                "Несколько организаций",
                "Выделенный менеджер",
                "SLA 99,9%",
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn months(&self) -> u64 {
        match self {
            BillingPeriod::Monthly => 1,
            BillingPeriod::Annual => 12,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub plan: Plan,
    pub seats: u32,
    pub period: BillingPeriod,
    /// Per-seat monthly price after discount.
    pub seat_price: u64,
    pub monthly_total: u64,
    /// Amount billed once per period.
    pub period_total: u64,
    /// Difference to paying the undiscounted monthly price for the same span.
    pub savings: u64,
}

/// Seats are clamped to `1..=MAX_SEATS`.
pub fn quote(plan: Plan, seats: u32, period: BillingPeriod) -> Quote {
    let seats = seats.clamp(1, MAX_SEATS);
    let list_price = plan.seat_price();
    let seat_price = match period {
        BillingPeriod::Monthly => list_price,
        BillingPeriod::Annual => list_price * (100 - ANNUAL_DISCOUNT_PERCENT) / 100,
    };
    let monthly_total = seat_price * u64::from(seats);
    let period_total = monthly_total * period.months();
    let undiscounted = list_price * u64::from(seats) * period.months();
    Quote {
        plan,
        seats,
        period,
        seat_price,
        monthly_total,
        period_total,
        savings: undiscounted - period_total,
    }
}

/// `1234567` → `"1 234 567 ₽"`.
pub fn format_rub(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 6);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out.push_str(" ₽");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_quote() {
        let q = quote(Plan::Business, 10, BillingPeriod::Monthly);
        assert_eq!(q.monthly_total, 19_900);
        assert_eq!(q.period_total, 19_900);
        assert_eq!(q.savings, 0);
    }

    #[test]
    fn test_annual_discount() {
        let q = quote(Plan::Start, 5, BillingPeriod::Annual);
        assert_eq!(q.seat_price, 792);
        assert_eq!(q.monthly_total, 3_960);
        assert_eq!(q.period_total, 47_520);
        assert_eq!(q.savings, 990 * 5 * 12 - 47_520);
    }

    #[test]
    fn test_seats_are_clamped() {
        assert_eq!(quote(Plan::Corporate, 0, BillingPeriod::Monthly).seats, 1);
        assert_eq!(quote(Plan::Corporate, 10_000, BillingPeriod::Monthly).seats, MAX_SEATS);
    }

    #[test]
    fn test_format_rub_groups_thousands() {
        assert_eq!(format_rub(0), "0 ₽");
        assert_eq!(format_rub(990), "990 ₽");
        assert_eq!(format_rub(47_520), "47 520 ₽");
        assert_eq!(format_rub(1_234_567), "1 234 567 ₽");
    }
}
