use dioxus::prelude::*;
use store::commands::{Command, UserCommand};
use store::filters::UserFilters;
use store::list::dispatch;
use store::messages;
use store::models::{Id, Invitation, InvitationInput, OrganizationUser, Role};
use store::pagination::Noun;
use store::validation::{validate_invitation, FieldErrors};

use crate::components::{
    Button, ButtonVariant, Checkbox, EmptyState, ErrorBanner, Input, Label, ModalOverlay, PaginationBar, Select,
    Skeleton,
};
use crate::hooks::use_paginated_list;
use crate::notifications::use_feedback;
use crate::services::{confirm, use_api};

/// Label of a role slug, falling back to the slug itself.
fn role_name(roles: &[Role], slug: &str) -> String {
    roles
        .iter()
        .find(|r| r.slug == slug)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| slug.to_string())
}

/// Organization members, pending invitations and per-user role editing.
#[component]
pub fn UsersView() -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut list = use_paginated_list(api.users.clone(), UserFilters::default, messages::LOAD_USERS_FAILED);
    let mut roles = use_signal(Vec::<Role>::new);
    let mut invitations = use_signal(Vec::<Invitation>::new);
    let mut search = use_signal(String::new);
    let mut inviting = use_signal(|| false);
    let mut editing_roles = use_signal(|| Option::<OrganizationUser>::None);

    let side_api = api.users.clone();
    let mut side_loader = use_resource(move || {
        let api = side_api.clone();
        async move {
            let (loaded_roles, loaded_invitations) = futures::join!(api.roles(), api.invitations());
            match loaded_roles {
                Ok(list) => roles.set(list),
                Err(e) => {
                    feedback.check_session(&e);
                    tracing::error!("roles for users view: {e}");
                }
            }
            match loaded_invitations {
                Ok(list) => invitations.set(list),
                Err(e) => tracing::error!("invitations: {e}"),
            }
        }
    });

    let command_api = api.users.clone();
    let run_command = use_callback(move |command: UserCommand| {
        if let Some(question) = command.confirmation() {
            if !confirm(question) {
                return;
            }
        }
        let api = command_api.clone();
        spawn(async move {
            match dispatch(&api, &command, list.refetch()).await {
                Ok(()) => feedback.success(command.success_message()),
                Err(e) => feedback.failure(&e, messages::ACTION_FAILED),
            }
        });
    });

    let invitation_api = api.users.clone();
    let invitation_action = use_callback(move |(id, resend): (Id, bool)| {
        if !resend && !confirm("Отменить приглашение?") {
            return;
        }
        let api = invitation_api.clone();
        spawn(async move {
            let result = if resend {
                api.resend_invitation(id).await
            } else {
                api.cancel_invitation(id).await
            };
            match result {
                Ok(()) if resend => feedback.success("Приглашение отправлено повторно"),
                Ok(()) => {
                    invitations.write().retain(|i| i.id != id);
                    feedback.success("Приглашение отменено");
                }
                Err(e) => feedback.failure(&e, messages::ACTION_FAILED),
            }
        });
    });

    let filters = list.filters();
    let state = list.list.read().clone();
    let known_roles = roles();
    let role_options: Vec<(String, String)> = std::iter::once((String::new(), "Все роли".to_string()))
        .chain(known_roles.iter().map(|r| (r.slug.clone(), r.name.clone())))
        .collect();
    let active_options = vec![
        (String::new(), "Все".to_string()),
        ("1".to_string(), "Активные".to_string()),
        ("0".to_string(), "Отключённые".to_string()),
    ];
    let active_value = match filters.is_active {
        Some(true) => "1",
        Some(false) => "0",
        None => "",
    };

    rsx! {
        div {
            class: "flex flex-wrap items-end gap-3 mb-4",
            div {
                class: "w-64",
                Input {
                    placeholder: "Имя или email",
                    value: search(),
                    oninput: move |evt: FormEvent| {
                        search.set(evt.value());
                        list.update(|f| f.with_search(&evt.value()));
                    },
                }
            }
            div {
                class: "w-48",
                Select {
                    value: filters.role.clone().unwrap_or_default(),
                    options: role_options,
                    onchange: move |evt: FormEvent| {
                        let role = Some(evt.value()).filter(|r| !r.is_empty());
                        list.update(|f| f.with_role(role));
                    },
                }
            }
            div {
                class: "w-40",
                Select {
                    value: active_value.to_string(),
                    options: active_options,
                    onchange: move |evt: FormEvent| {
                        let active = match evt.value().as_str() {
                            "1" => Some(true),
                            "0" => Some(false),
                            _ => None,
                        };
                        list.update(|f| f.with_active(active));
                    },
                }
            }
            div { class: "flex-1" }
            Button { onclick: move |_| inviting.set(true), "+ Пригласить" }
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
                        th { class: "p-3", "Роли" }
                        th { class: "p-3", "Статус" }
                        th { class: "p-3", "" }
                    }
                }
                tbody {
                    {state.items.iter().map(|user| {
                        let id = user.id;
                        let active = user.is_active;
                        let role_labels = user
                            .roles
                            .iter()
                            .map(|slug| role_name(&known_roles, slug))
                            .chain(
                                known_roles
                                    .iter()
                                    .filter(|r| user.custom_role_ids.contains(&r.id))
                                    .map(|r| r.name.clone()),
                            )
                            .collect::<Vec<_>>()
                            .join(", ");
                        let for_dialog = user.clone();
                        rsx! {
                            tr {
                                key: "{id}",
                                class: "border-t hover:bg-neutral-50",
                                td {
                                    class: "p-3",
                                    div { class: "font-medium", "{user.name}" }
                                    div {
                                        class: "text-xs text-neutral-500",
                                        "{user.email}"
                                        if !user.is_verified() {
                                            span { class: "ml-2 text-amber-600", "email не подтверждён" }
                                        }
                                    }
                                }
                                td { class: "p-3", "{role_labels}" }
                                td {
                                    class: "p-3",
                                    if active {
                                        span { class: "text-green-700", "Активен" }
                                    } else {
                                        span { class: "text-neutral-400", "Отключён" }
                                    }
                                }
                                td {
                                    class: "p-3 whitespace-nowrap text-right",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| editing_roles.set(Some(for_dialog.clone())),
                                        "Роли"
                                    }
                                    if active {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| run_command.call(UserCommand::Deactivate(id)),
                                            "Отключить"
                                        }
                                    } else {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| run_command.call(UserCommand::Activate(id)),
                                            "Включить"
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        class: "text-red-600",
                                        onclick: move |_| run_command.call(UserCommand::Delete(id)),
                                        "Удалить"
                                    }
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

        if !invitations().is_empty() {
            div {
                class: "mt-8",
                h3 { class: "font-semibold mb-3", "Приглашения" }
                div {
                    class: "bg-white border rounded-lg divide-y text-sm",
                    {invitations().into_iter().map(|invitation| {
                        let id = invitation.id;
                        let expires = invitation.expires_at.map(|d| d.format("до %d.%m.%Y").to_string()).unwrap_or_default();
                        let role = role_name(&known_roles, &invitation.role);
                        rsx! {
                            div {
                                key: "{id}",
                                class: "flex items-center gap-4 p-3",
                                span { class: "font-medium", "{invitation.email}" }
                                span { class: "text-neutral-500", "{role}" }
                                span { class: "text-xs text-neutral-400", "{invitation.status} {expires}" }
                                div { class: "flex-1" }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_| invitation_action.call((id, true)),
                                    "Отправить ещё раз"
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    class: "text-red-600",
                                    onclick: move |_| invitation_action.call((id, false)),
                                    "Отменить"
                                }
                            }
                        }
                    })}
                }
            }
        }

        if inviting() {
            InviteDialog {
                roles: known_roles.clone(),
                on_invited: move |invitation: Invitation| {
                    invitations.write().push(invitation);
                    inviting.set(false);
                },
                on_close: move |_| inviting.set(false),
            }
        }

        if let Some(user) = editing_roles() {
            RolesDialog {
                user,
                roles: known_roles.clone(),
                on_saved: move |_| {
                    editing_roles.set(None);
                    spawn(list.refetch());
                    side_loader.restart();
                },
                on_close: move |_| editing_roles.set(None),
            }
        }
    }
}

#[component]
fn InviteDialog(roles: Vec<Role>, on_invited: EventHandler<Invitation>, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut form = use_signal(InvitationInput::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut sending = use_signal(|| false);

    let invite_api = api.users.clone();
    let send = use_callback(move |_: ()| {
        let input = form.peek().clone();
        if let Err(found) = validate_invitation(&input) {
            errors.set(found);
            return;
        }
        sending.set(true);
        let api = invite_api.clone();
        spawn(async move {
            match api.invite(&input).await {
                Ok(invitation) => {
                    feedback.success("Приглашение отправлено");
                    on_invited.call(invitation);
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
            sending.set(false);
        });
    });

    let current = form();
    let errs = errors();
    let role_options: Vec<(String, String)> = std::iter::once((String::new(), "Выберите роль".to_string()))
        .chain(roles.iter().map(|r| (r.slug.clone(), r.name.clone())))
        .collect();

    rsx! {
        ModalOverlay {
            title: "Пригласить пользователя",
            on_close: move |_| on_close.call(()),
            div {
                class: "flex flex-col gap-4",
                div {
                    Label { html_for: "invite-email", "Email" }
                    Input {
                        id: "invite-email",
                        r#type: "email",
                        value: current.email.clone(),
                        error: errs.get("email").map(str::to_string),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                div {
                    Label { html_for: "invite-role", "Роль" }
                    Select {
                        id: "invite-role",
                        value: current.role.clone(),
                        options: role_options,
                        error: errs.get("role").map(str::to_string),
                        onchange: move |evt: FormEvent| form.write().role = evt.value(),
                    }
                }
                div {
                    class: "flex justify-end gap-2",
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Отмена" }
                    Button { disabled: sending(), onclick: move |_| send.call(()), "Пригласить" }
                }
            }
        }
    }
}

/// Built-in roles are stored by slug, custom ones by id.
#[component]
fn RolesDialog(
    user: OrganizationUser,
    roles: Vec<Role>,
    on_saved: EventHandler<OrganizationUser>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let user_id = user.id;
    let mut system_roles = use_signal(|| user.roles.clone());
    let mut custom_roles = use_signal(|| user.custom_role_ids.clone());
    let mut saving = use_signal(|| false);

    let roles_api = api.users.clone();
    let save = use_callback(move |_: ()| {
        let slugs = system_roles.peek().clone();
        let ids = custom_roles.peek().clone();
        saving.set(true);
        let api = roles_api.clone();
        spawn(async move {
            match api.update_roles(user_id, &slugs, &ids).await {
                Ok(updated) => {
                    feedback.success(messages::SAVED);
                    on_saved.call(updated);
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
            saving.set(false);
        });
    });

    rsx! {
        ModalOverlay {
            title: "Роли пользователя",
            subtitle: user.name.clone(),
            on_close: move |_| on_close.call(()),
            div {
                class: "flex flex-col gap-2",
                {roles.iter().map(|role| {
                    let role_id = role.id;
                    let slug = role.slug.clone();
                    let is_system = role.is_system;
                    let checked = if is_system {
                        system_roles().contains(&slug)
                    } else {
                        custom_roles().contains(&role_id)
                    };
                    rsx! {
                        Checkbox {
                            key: "{role_id}",
                            checked,
                            label: role.name.clone(),
                            onchange: move |on: bool| {
                                if is_system {
                                    let mut current = system_roles.write();
                                    current.retain(|s| *s != slug);
                                    if on {
                                        current.push(slug.clone());
                                    }
                                } else {
                                    let mut current = custom_roles.write();
                                    current.retain(|&id| id != role_id);
                                    if on {
                                        current.push(role_id);
                                    }
                                }
                            },
                        }
                    }
                })}
            }
            div {
                class: "flex justify-end gap-2 mt-4",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Отмена" }
                Button { disabled: saving(), onclick: move |_| save.call(()), "Сохранить" }
            }
        }
    }
}
