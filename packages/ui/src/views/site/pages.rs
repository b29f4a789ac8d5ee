use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBoxesStacked, FaCalendarCheck, FaChartLine, FaEnvelope, FaFileInvoiceDollar, FaLocationDot, FaMobileScreen,
    FaPhone, FaUsersGear,
};
use dioxus_free_icons::Icon;

use crate::navigation::Destination;
use crate::theme::use_theme;

/// Card of the feature grid; the icon comes in as `children`.
#[component]
fn Feature(title: String, text: String, children: Element) -> Element {
    let theme = use_theme().classes();
    rsx! {
        div {
            class: "bg-white border rounded-lg p-6",
            div {
                class: "w-10 h-10 rounded flex items-center justify-center mb-4 {theme.primary}",
                {children}
            }
            h3 { class: "font-semibold mb-2", "{title}" }
            p { class: "text-sm text-neutral-600", "{text}" }
        }
    }
}

#[component]
pub fn HomeView(on_navigate: EventHandler<Destination>) -> Element {
    let theme = use_theme().classes();

    rsx! {
        section {
            class: "text-white {theme.gradient}",
            div {
                class: "max-w-6xl mx-auto px-4 py-24",
                h1 { class: "text-4xl md:text-5xl font-bold max-w-3xl", "Стройка под контролем от сметы до сдачи объекта" }
                p {
                    class: "mt-6 text-lg max-w-2xl opacity-90",
                    "Buildline собирает графики работ, материалы, документы и команду в одной системе. Прорабы работают с телефона, офис видит всё в реальном времени."
                }
                div {
                    class: "mt-10 flex gap-4",
                    button {
                        class: "px-6 py-3 rounded bg-white text-neutral-900 font-medium",
                        onclick: move |_| on_navigate.call(Destination::Pricing),
                        "Посмотреть тарифы"
                    }
                    button {
                        class: "px-6 py-3 rounded border border-white/60",
                        onclick: move |_| on_navigate.call(Destination::Blog),
                        "Читать блог"
                    }
                }
            }
        }
        section {
            class: "max-w-6xl mx-auto px-4 py-16",
            h2 { class: "text-2xl font-bold mb-8", "Что умеет Buildline" }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                Feature {
                    title: "Графики работ",
                    text: "Диаграмма Ганта с зависимостями, контроль отставаний и уведомления ответственным.",
                    Icon { width: 18, height: 18, icon: FaCalendarCheck }
                }
                Feature {
                    title: "Материалы и склад",
                    text: "Заявки, поставки и остатки по каждому объекту без таблиц и звонков.",
                    Icon { width: 18, height: 18, icon: FaBoxesStacked }
                }
                Feature {
                    title: "Сметы и акты",
                    text: "Сметы, КС-2 и КС-3 формируются из фактически выполненных работ.",
                    Icon { width: 18, height: 18, icon: FaFileInvoiceDollar }
                }
                Feature {
                    title: "Роли и доступы",
                    text: "Гибкие права для подрядчиков, прорабов, сметчиков и заказчиков.",
                    Icon { width: 18, height: 18, icon: FaUsersGear }
                }
                Feature {
                    title: "Мобильное приложение",
                    text: "Фотоотчёты, чек-листы и замечания прямо с площадки, даже без сети.",
                    Icon { width: 18, height: 18, icon: FaMobileScreen }
                }
                Feature {
                    title: "Аналитика",
                    text: "Бюджет, сроки и загрузка бригад на одной панели для руководителя.",
                    Icon { width: 18, height: 18, icon: FaChartLine }
                }
            }
        }
    }
}

#[component]
pub fn AboutView() -> Element {
    rsx! {
        section {
            class: "max-w-3xl mx-auto px-4 py-16 flex flex-col gap-6",
            h1 { class: "text-3xl font-bold", "О компании" }
            p {
                "Buildline делают инженеры, которые десять лет строили жилые комплексы и устали сводить графики в Excel. "
                "Мы знаем, как устроена стройка изнутри, и делаем инструмент, которым пользуются на площадке, а не только в офисе."
            }
            p {
                "Сегодня Buildline работает на сотнях объектов: от частных домов до промышленных корпусов. "
                "Команда находится в Москве и Казани, поддержка отвечает семь дней в неделю."
            }
            div {
                class: "grid grid-cols-3 gap-6 mt-4 text-center",
                div { div { class: "text-3xl font-bold", "2017" } div { class: "text-sm text-neutral-500", "год основания" } }
                div { div { class: "text-3xl font-bold", "650+" } div { class: "text-sm text-neutral-500", "компаний" } }
                div { div { class: "text-3xl font-bold", "4 000+" } div { class: "text-sm text-neutral-500", "объектов" } }
            }
        }
    }
}

#[component]
pub fn ContactsView() -> Element {
    rsx! {
        section {
            class: "max-w-3xl mx-auto px-4 py-16",
            h1 { class: "text-3xl font-bold mb-8", "Контакты" }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                div {
                    class: "bg-white border rounded-lg p-6 flex flex-col gap-2",
                    Icon { width: 20, height: 20, icon: FaPhone }
                    span { class: "font-semibold", "Телефон" }
                    span { class: "text-sm", "+7 (495) 120-45-67" }
                }
                div {
                    class: "bg-white border rounded-lg p-6 flex flex-col gap-2",
                    Icon { width: 20, height: 20, icon: FaEnvelope }
                    span { class: "font-semibold", "Почта" }
                    span { class: "text-sm", "hello@buildline.ru" }
                }
                div {
                    class: "bg-white border rounded-lg p-6 flex flex-col gap-2",
                    Icon { width: 20, height: 20, icon: FaLocationDot }
                    span { class: "font-semibold", "Офис" }
                    span { class: "text-sm", "Москва, Пресненская наб., 12" }
                }
            }
        }
    }
}
