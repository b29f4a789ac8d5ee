use dioxus::prelude::*;
use store::pricing::{format_rub, quote, BillingPeriod, Plan, ANNUAL_DISCOUNT_PERCENT, MAX_SEATS};

use crate::theme::use_theme;

/// Plans side by side plus a calculator for seats and billing period.
#[component]
pub fn PricingView() -> Element {
    let theme = use_theme().classes();
    let mut plan = use_signal(Plan::default);
    let mut seats = use_signal(|| 10u32);
    let mut period = use_signal(BillingPeriod::default);

    let result = quote(plan(), seats(), period());
    let period_label = match period() {
        BillingPeriod::Monthly => "в месяц",
        BillingPeriod::Annual => "за год",
    };

    rsx! {
        section {
            class: "max-w-6xl mx-auto px-4 py-16",
            h1 { class: "text-3xl font-bold mb-2", "Тарифы" }
            p { class: "text-neutral-600 mb-10", "Оплата за пользователя в месяц. При оплате за год скидка {ANNUAL_DISCOUNT_PERCENT}%." }

            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-16",
                for p in Plan::ALL {
                    div {
                        key: "{p.title()}",
                        class: if p == plan() { format!("bg-white rounded-lg p-6 border-2 {}", theme.border) } else { "bg-white rounded-lg p-6 border".to_string() },
                        onclick: move |_| plan.set(p),
                        h3 { class: "text-lg font-semibold", "{p.title()}" }
                        div { class: "text-3xl font-bold mt-4", "{format_rub(p.seat_price())}" }
                        div { class: "text-sm text-neutral-500", "за пользователя в месяц" }
                        div {
                            class: "text-sm mt-4",
                            {match p.included_projects() {
                                Some(n) => format!("Активных проектов: {n}"),
                                None => "Проекты без ограничений".to_string(),
                            }}
                        }
                        ul {
                            class: "mt-4 flex flex-col gap-2 text-sm text-neutral-700",
                            for feature in p.features() {
                                li { key: "{feature}", "✓ {feature}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "bg-white border rounded-lg p-8 grid grid-cols-1 md:grid-cols-2 gap-8",
                div {
                    class: "flex flex-col gap-6",
                    h2 { class: "text-xl font-semibold", "Калькулятор" }
                    div {
                        label { class: "block text-sm font-medium mb-2", "Тариф" }
                        div {
                            class: "flex gap-2",
                            for p in Plan::ALL {
                                button {
                                    key: "{p.title()}",
                                    class: if p == plan() { format!("px-4 py-2 rounded text-sm {}", theme.primary) } else { "px-4 py-2 rounded text-sm border".to_string() },
                                    onclick: move |_| plan.set(p),
                                    "{p.title()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium mb-2", "Пользователей: {result.seats}" }
                        input {
                            r#type: "range",
                            class: "w-full",
                            min: "1",
                            max: "{MAX_SEATS}",
                            value: "{result.seats}",
                            oninput: move |evt| {
                                if let Ok(n) = evt.value().parse::<u32>() {
                                    seats.set(n);
                                }
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium mb-2", "Период оплаты" }
                        div {
                            class: "flex gap-2",
                            button {
                                class: if period() == BillingPeriod::Monthly { format!("px-4 py-2 rounded text-sm {}", theme.primary) } else { "px-4 py-2 rounded text-sm border".to_string() },
                                onclick: move |_| period.set(BillingPeriod::Monthly),
                                "Помесячно"
                            }
                            button {
                                class: if period() == BillingPeriod::Annual { format!("px-4 py-2 rounded text-sm {}", theme.primary) } else { "px-4 py-2 rounded text-sm border".to_string() },
                                onclick: move |_| period.set(BillingPeriod::Annual),
                                "За год −{ANNUAL_DISCOUNT_PERCENT}%"
                            }
                        }
                    }
                }
                div {
                    class: "flex flex-col justify-center gap-3 bg-neutral-50 rounded-lg p-6",
                    div { class: "text-sm text-neutral-500", "{result.plan.title()}, {result.seats} польз." }
                    div { class: "text-sm", "Цена за пользователя: {format_rub(result.seat_price)} / мес" }
                    div { class: "text-sm", "В месяц: {format_rub(result.monthly_total)}" }
                    div { class: "text-3xl font-bold", "{format_rub(result.period_total)} {period_label}" }
                    if result.savings > 0 {
                        div { class: "text-sm text-green-700", "Экономия {format_rub(result.savings)}" }
                    }
                }
            }
        }
    }
}
