use std::collections::BTreeMap;

use dioxus::prelude::*;
use store::messages;
use store::models::{Id, Permission, Role, RoleInput};
use store::slug::follow_source;
use store::validation::{validate_role, FieldErrors};

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label, ModalOverlay, Skeleton, Textarea};
use crate::notifications::use_feedback;
use crate::services::{confirm, use_api};

const UNGROUPED: &str = "Прочее";

/// Permissions bucketed by their group, groups sorted by name.
fn group_permissions(permissions: &[Permission]) -> BTreeMap<String, Vec<Permission>> {
    let mut groups: BTreeMap<String, Vec<Permission>> = BTreeMap::new();
    for permission in permissions {
        let group = permission.group.clone().unwrap_or_else(|| UNGROUPED.to_string());
        groups.entry(group).or_default().push(permission.clone());
    }
    groups
}

fn role_input(role: &Role) -> RoleInput {
    RoleInput {
        name: role.name.clone(),
        slug: role.slug.clone(),
        description: role.description.clone().unwrap_or_default(),
        permissions: role.permissions.clone(),
    }
}

/// Role × permission matrix. System roles are read-only; a toggle on a
/// custom role is saved immediately and undone if the server refuses.
#[component]
pub fn RolesView() -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut roles = use_signal(Vec::<Role>::new);
    let mut permissions = use_signal(Vec::<Permission>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut creating = use_signal(|| false);

    let load_api = api.users.clone();
    let mut loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            let (loaded_roles, loaded_permissions) = futures::join!(api.roles(), api.permissions());
            match (loaded_roles, loaded_permissions) {
                (Ok(r), Ok(p)) => {
                    roles.set(r);
                    permissions.set(p);
                    error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => {
                    feedback.check_session(&e);
                    tracing::error!("roles and permissions: {e}");
                    error.set(Some(messages::LOAD_ROLES_FAILED.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let toggle_api = api.users.clone();
    let toggle_permission = use_callback(move |(role_id, permission): (Id, String)| {
        let Some(before) = roles.peek().iter().find(|r| r.id == role_id).cloned() else {
            return;
        };
        let mut input = role_input(&before);
        if input.permissions.contains(&permission) {
            input.permissions.retain(|p| *p != permission);
        } else {
            input.permissions.push(permission);
        }
        if let Some(slot) = roles.write().iter_mut().find(|r| r.id == role_id) {
            slot.permissions = input.permissions.clone();
        }
        let api = toggle_api.clone();
        spawn(async move {
            match api.update_role(role_id, &input).await {
                Ok(saved) => {
                    if let Some(slot) = roles.write().iter_mut().find(|r| r.id == role_id) {
                        *slot = saved;
                    }
                }
                Err(e) => {
                    if let Some(slot) = roles.write().iter_mut().find(|r| r.id == role_id) {
                        *slot = before;
                    }
                    feedback.failure(&e, messages::SAVE_FAILED);
                }
            }
        });
    });

    let delete_api = api.users.clone();
    let delete_role = use_callback(move |role_id: Id| {
        if !confirm("Удалить роль? Пользователи потеряют её права.") {
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_role(role_id).await {
                Ok(()) => {
                    roles.write().retain(|r| r.id != role_id);
                    feedback.success("Роль удалена");
                }
                Err(e) => feedback.failure(&e, messages::ACTION_FAILED),
            }
        });
    });

    if loading() {
        return rsx! { Skeleton { rows: 6 } };
    }
    if let Some(message) = error() {
        return rsx! {
            ErrorBanner {
                message,
                on_retry: move |_| {
                    loading.set(true);
                    loader.restart();
                },
            }
        };
    }

    let all_roles = roles();
    let groups = group_permissions(&permissions());

    rsx! {
        div {
            class: "flex justify-end mb-4",
            Button { onclick: move |_| creating.set(true), "+ Новая роль" }
        }
        div {
            class: "overflow-x-auto",
            table {
                class: "w-full bg-white border rounded-lg text-sm",
                thead {
                    tr {
                        th { class: "p-3 text-left text-neutral-500", "Право" }
                        {all_roles.iter().map(|role| {
                            let role_id = role.id;
                            rsx! {
                                th {
                                    key: "{role_id}",
                                    class: "p-3 text-center",
                                    div { class: "font-medium", "{role.name}" }
                                    if role.is_system {
                                        div { class: "text-xs text-neutral-400", "системная" }
                                    } else {
                                        button {
                                            class: "text-xs text-red-600 underline",
                                            onclick: move |_| delete_role.call(role_id),
                                            "удалить"
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
                tbody {
                    {groups.into_iter().map(|(group, members)| {
                        let span = all_roles.len() + 1;
                        rsx! {
                            tr {
                                key: "group-{group}",
                                td { class: "px-3 pt-4 pb-1 text-xs uppercase text-neutral-400", colspan: "{span}", "{group}" }
                            }
                            {members.into_iter().map(|permission| {
                                let slug = permission.slug.clone();
                                rsx! {
                                    tr {
                                        key: "{slug}",
                                        class: "border-t",
                                        td { class: "p-3", "{permission.name}" }
                                        {all_roles.iter().map(|role| {
                                            let role_id = role.id;
                                            let granted = role.permissions.contains(&slug);
                                            let cell_slug = slug.clone();
                                            rsx! {
                                                td {
                                                    key: "{role_id}",
                                                    class: "p-3 text-center",
                                                    input {
                                                        r#type: "checkbox",
                                                        checked: granted,
                                                        disabled: role.is_system,
                                                        onchange: move |_| toggle_permission.call((role_id, cell_slug.clone())),
                                                    }
                                                }
                                            }
                                        })}
                                    }
                                }
                            })}
                        }
                    })}
                }
            }
        }

        if creating() {
            RoleDialog {
                on_created: move |role: Role| {
                    roles.write().push(role);
                    creating.set(false);
                },
                on_close: move |_| creating.set(false),
            }
        }
    }
}

#[component]
fn RoleDialog(on_created: EventHandler<Role>, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut feedback = use_feedback();
    let mut form = use_signal(RoleInput::default);
    let mut errors = use_signal(FieldErrors::new);

    let create_api = api.users.clone();
    let create = use_callback(move |_: ()| {
        let input = form.peek().clone();
        if let Err(found) = validate_role(&input) {
            errors.set(found);
            return;
        }
        let api = create_api.clone();
        spawn(async move {
            match api.create_role(&input).await {
                Ok(role) => {
                    feedback.success(messages::SAVED);
                    on_created.call(role);
                }
                Err(e) => feedback.failure(&e, messages::SAVE_FAILED),
            }
        });
    });

    let current = form();
    let errs = errors();

    rsx! {
        ModalOverlay {
            title: "Новая роль",
            on_close: move |_| on_close.call(()),
            div {
                class: "flex flex-col gap-4",
                div {
                    Label { html_for: "role-name", "Название" }
                    Input {
                        id: "role-name",
                        value: current.name.clone(),
                        error: errs.get("name").map(str::to_string),
                        oninput: move |evt: FormEvent| {
                            let name = evt.value();
                            let mut f = form.write();
                            f.slug = follow_source(&f.slug, &name);
                            f.name = name;
                        },
                    }
                }
                div {
                    Label { html_for: "role-slug", "Код" }
                    Input {
                        id: "role-slug",
                        value: current.slug.clone(),
                        error: errs.get("slug").map(str::to_string),
                        oninput: move |evt: FormEvent| form.write().slug = evt.value(),
                    }
                }
                div {
                    Label { html_for: "role-description", "Описание" }
                    Textarea {
                        id: "role-description",
                        rows: 3,
                        value: current.description.clone(),
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }
                }
                p { class: "text-xs text-neutral-500", "Права назначаются в таблице после создания." }
                div {
                    class: "flex justify-end gap-2",
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Отмена" }
                    Button { onclick: move |_| create.call(()), "Создать" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permission(slug: &str, group: Option<&str>) -> Permission {
        Permission {
            slug: slug.to_string(),
            name: slug.to_string(),
            group: group.map(str::to_string),
        }
    }

    #[test]
    fn test_permissions_group_by_name_with_fallback() {
        let groups = group_permissions(&[
            permission("blog.edit", Some("Блог")),
            permission("users.invite", Some("Пользователи")),
            permission("blog.publish", Some("Блог")),
            permission("misc", None),
        ]);
        let names: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Блог", "Пользователи", UNGROUPED]);
        assert_eq!(groups["Блог"].len(), 2);
    }
}
