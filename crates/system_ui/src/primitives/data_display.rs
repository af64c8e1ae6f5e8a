use super::*;

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            role="status"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared table container; callers supply `thead`/`tbody` children.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_busy: MaybeSignal<bool>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-slot=ui_slot
            aria-label=aria_label
            aria-busy=move || bool_token(aria_busy.get())
        >
            {children()}
        </table>
    }
}

#[component]
/// Round avatar showing an image, or initials when no image is set.
///
/// Image load failures are logged and leave the broken image in place.
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let initials = avatar_initials(&name);
    let content = match src {
        Some(src) => {
            let failed_src = src.clone();
            view! {
                <img
                    src=src
                    alt=name.clone()
                    on:error=move |_| {
                        logging::warn!("avatar image failed to load: {failed_src}");
                    }
                />
            }
            .into_view()
        }
        None => view! { <span data-ui-slot="initials">{initials}</span> }.into_view(),
    };

    view! {
        <span
            class=merge_layout_class("ui-avatar", layout_class)
            role="img"
            aria-label=name
            data-ui-primitive="true"
            data-ui-kind="avatar"
        >
            {content}
        </span>
    }
}

/// First letters of up to two words of `name`, uppercased.
pub(crate) fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(avatar_initials("ada lovelace"), "AL");
        assert_eq!(avatar_initials("  Grace  Brewster Hopper "), "GB");
        assert_eq!(avatar_initials("plato"), "P");
        assert_eq!(avatar_initials(""), "");
    }
}
