use dioxus::prelude::*;
use store::filters::MultiOrgUserFilters;
use store::messages;
use store::models::Organization;
use store::pagination::Noun;

use crate::components::{EmptyState, ErrorBanner, Input, PaginationBar, Skeleton};
use crate::hooks::use_paginated_list;
use crate::notifications::use_feedback;
use crate::services::use_api;

/// Users of several organizations at once. Organization chips narrow the
/// list; with none selected every visible organization is included.
#[component]
pub fn MultiOrgUsersView() -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut list = use_paginated_list(
        api.multi_org.clone(),
        MultiOrgUserFilters::default,
        messages::LOAD_USERS_FAILED,
    );
    let mut organizations = use_signal(Vec::<Organization>::new);
    let mut search = use_signal(String::new);

    let org_api = api.multi_org.clone();
    let _organizations = use_resource(move || {
        let api = org_api.clone();
        async move {
            match api.organizations().await {
                Ok(loaded) => organizations.set(loaded),
                Err(e) => feedback.failure(&e, messages::LOAD_ORGANIZATIONS_FAILED),
            }
        }
    });

    let filters = list.filters();
    let state = list.list.read().clone();

    rsx! {
        div {
            class: "flex flex-wrap items-center gap-2 mb-4",
            {organizations().into_iter().map(|org| {
                let id = org.id;
                let selected = filters.organization_ids.contains(&id);
                let class = if selected {
                    "px-3 py-1 rounded-full text-sm bg-neutral-800 text-white"
                } else {
                    "px-3 py-1 rounded-full text-sm border border-neutral-300 hover:bg-neutral-100"
                };
                rsx! {
                    button {
                        key: "{id}",
                        class,
                        onclick: move |_| list.update(|f| f.toggle_organization(id)),
                        "{org.name} ({org.users_count})"
                    }
                }
            })}
        }
        div {
            class: "w-64 mb-4",
            Input {
                placeholder: "Имя или email",
                value: search(),
                oninput: move |evt: FormEvent| {
                    search.set(evt.value());
                    list.update(|f| f.with_search(&evt.value()));
                },
            }
        }

        if let Some(message) = state.error.clone() {
            ErrorBanner {
                message,
                on_retry: move |_| {
                    spawn(list.refetch());
                },
            }
        }

        if state.loading && state.items.is_empty() {
            Skeleton {}
        } else if state.items.is_empty() {
            EmptyState {}
        } else {
            table {
                class: "w-full bg-white border rounded-lg text-sm",
                thead {
                    tr {
                        class: "text-left text-neutral-500",
                        th { class: "p-3", "Пользователь" }
                        th { class: "p-3", "Организация" }
                        th { class: "p-3", "Роли" }
                        th { class: "p-3", "Статус" }
                    }
                }
                tbody {
                    {state.items.iter().map(|user| {
                        let organization = user.organization.as_ref().map(|o| o.name.clone()).unwrap_or_default();
                        let roles = user.roles.join(", ");
                        rsx! {
                            tr {
                                key: "{user.id}",
                                class: "border-t",
                                td {
                                    class: "p-3",
                                    div { class: "font-medium", "{user.name}" }
                                    div { class: "text-xs text-neutral-500", "{user.email}" }
                                }
                                td { class: "p-3", "{organization}" }
                                td { class: "p-3", "{roles}" }
                                td {
                                    class: "p-3",
                                    if user.is_active { "Активен" } else { "Отключён" }
                                }
                            }
                        }
                    })}
                }
            }

            PaginationBar {
                meta: state.meta,
                noun: Noun::USERS,
                on_page: move |page| list.go_to_page(page),
            }
        }
    }
}
