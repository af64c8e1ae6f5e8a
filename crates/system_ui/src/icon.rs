//! Centralized icon API.
//!
//! Icons render as inline SVG using `currentColor`, so they follow the text color of the control
//! that hosts them.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to primitives and table cells.
pub enum IconName {
    /// Plus sign.
    Add,
    /// Trash can.
    Delete,
    /// Six-dot grip used by drag handles.
    DragHandle,
    /// Gear.
    Settings,
    /// Pencil.
    Edit,
    /// Two stacked sheets.
    Copy,
    /// Horizontal ellipsis.
    More,
    /// Check mark.
    Checkmark,
    /// Cross.
    Dismiss,
    /// Downward chevron.
    ChevronDown,
    /// Ascending sort arrow.
    ArrowUp,
    /// Descending sort arrow.
    ArrowDown,
    /// Calendar page.
    Calendar,
    /// Person silhouette.
    Person,
}

impl IconName {
    /// Resolves an icon token such as `"delete"` or `"drag-handle"`.
    pub fn from_token(token: &str) -> Option<Self> {
        let icon = match token.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" => Self::Add,
            "delete" | "trash" | "remove" => Self::Delete,
            "drag-handle" | "grip" | "reorder" => Self::DragHandle,
            "settings" | "gear" => Self::Settings,
            "edit" | "pencil" => Self::Edit,
            "copy" | "duplicate" => Self::Copy,
            "more" | "more-horizontal" | "ellipsis" => Self::More,
            "checkmark" | "check" => Self::Checkmark,
            "dismiss" | "close" => Self::Dismiss,
            "chevron-down" => Self::ChevronDown,
            "arrow-up" => Self::ArrowUp,
            "arrow-down" => Self::ArrowDown,
            "calendar" | "date" => Self::Calendar,
            "person" | "user" => Self::Person,
            _ => return None,
        };
        Some(icon)
    }

    /// Stable `data-ui-icon` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::DragHandle => "drag-handle",
            Self::Settings => "settings",
            Self::Edit => "edit",
            Self::Copy => "copy",
            Self::More => "more",
            Self::Checkmark => "checkmark",
            Self::Dismiss => "dismiss",
            Self::ChevronDown => "chevron-down",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::Calendar => "calendar",
            Self::Person => "person",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Add => "M10 3.5a.75.75 0 0 1 .75.75v5h5a.75.75 0 0 1 0 1.5h-5v5a.75.75 0 0 1-1.5 0v-5h-5a.75.75 0 0 1 0-1.5h5v-5A.75.75 0 0 1 10 3.5Z",
            Self::Delete => "M8.5 2h3a1.5 1.5 0 0 1 1.5 1.5V4h3a.75.75 0 0 1 0 1.5h-.56l-.8 10.1A2 2 0 0 1 12.65 17.5h-5.3a2 2 0 0 1-1.99-1.9L4.56 5.5H4A.75.75 0 0 1 4 4h3v-.5A1.5 1.5 0 0 1 8.5 2Zm0 1.5V4h3v-.5h-3ZM6.07 5.5l.79 10a.5.5 0 0 0 .5.5h5.29a.5.5 0 0 0 .5-.5l.78-10H6.07Z",
            Self::DragHandle => "M7 4a1.25 1.25 0 1 1 0 2.5A1.25 1.25 0 0 1 7 4Zm6 0a1.25 1.25 0 1 1 0 2.5A1.25 1.25 0 0 1 13 4ZM7 8.75a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Zm6 0a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5ZM7 13.5A1.25 1.25 0 1 1 7 16a1.25 1.25 0 0 1 0-2.5Zm6 0a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Z",
            Self::Settings => "M10 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6Zm0 1.5a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3ZM8.7 2h2.6l.42 2.1 1.48.86 2.03-.7 1.3 2.25-1.61 1.42v1.7l1.6 1.42-1.3 2.25-2.02-.7-1.48.86L11.3 18H8.7l-.42-2.1-1.48-.86-2.03.7-1.3-2.25 1.61-1.42v-1.7L3.47 8.96l1.3-2.25 2.02.7 1.48-.86L8.7 2Z",
            Self::Edit => "M13.6 3.15a1.9 1.9 0 0 1 2.69 0l.56.56a1.9 1.9 0 0 1 0 2.69l-8.7 8.7a2 2 0 0 1-.93.52l-3.3.83a.5.5 0 0 1-.6-.6l.83-3.3a2 2 0 0 1 .52-.93l8.93-8.47Zm1.63 1.06a.4.4 0 0 0-.57 0l-1.1 1.1 1.13 1.13 1.1-1.1a.4.4 0 0 0 0-.57l-.56-.56Z",
            Self::Copy => "M7 2h7a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Zm0 1.5a.5.5 0 0 0-.5.5v9a.5.5 0 0 0 .5.5h7a.5.5 0 0 0 .5-.5V4a.5.5 0 0 0-.5-.5H7ZM3 6a.75.75 0 0 1 .75.75V15c0 .69.56 1.25 1.25 1.25h7.25a.75.75 0 0 1 0 1.5H5A2.75 2.75 0 0 1 2.25 15V6.75A.75.75 0 0 1 3 6Z",
            Self::More => "M5 8.75a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Zm5 0a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Zm5 0a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Z",
            Self::Checkmark => "M16.03 5.47a.75.75 0 0 1 0 1.06l-7.5 7.5a.75.75 0 0 1-1.06 0l-3.5-3.5a.75.75 0 1 1 1.06-1.06L8 12.44l6.97-6.97a.75.75 0 0 1 1.06 0Z",
            Self::Dismiss => "M4.97 4.97a.75.75 0 0 1 1.06 0L10 8.94l3.97-3.97a.75.75 0 1 1 1.06 1.06L11.06 10l3.97 3.97a.75.75 0 1 1-1.06 1.06L10 11.06l-3.97 3.97a.75.75 0 0 1-1.06-1.06L8.94 10 4.97 6.03a.75.75 0 0 1 0-1.06Z",
            Self::ChevronDown => "M5.22 7.72a.75.75 0 0 1 1.06 0L10 11.44l3.72-3.72a.75.75 0 1 1 1.06 1.06l-4.25 4.25a.75.75 0 0 1-1.06 0L5.22 8.78a.75.75 0 0 1 0-1.06Z",
            Self::ArrowUp => "M10 3.5a.75.75 0 0 1 .53.22l4.5 4.5a.75.75 0 1 1-1.06 1.06l-3.22-3.22v9.19a.75.75 0 0 1-1.5 0V6.06L6.03 9.28a.75.75 0 0 1-1.06-1.06l4.5-4.5A.75.75 0 0 1 10 3.5Z",
            Self::ArrowDown => "M10 16.5a.75.75 0 0 1-.53-.22l-4.5-4.5a.75.75 0 1 1 1.06-1.06l3.22 3.22V4.75a.75.75 0 0 1 1.5 0v9.19l3.22-3.22a.75.75 0 1 1 1.06 1.06l-4.5 4.5a.75.75 0 0 1-.53.22Z",
            Self::Calendar => "M6.75 2a.75.75 0 0 1 .75.75V3.5h5v-.75a.75.75 0 0 1 1.5 0v.75h.5A2.5 2.5 0 0 1 17 6v8.5a2.5 2.5 0 0 1-2.5 2.5h-9A2.5 2.5 0 0 1 3 14.5V6a2.5 2.5 0 0 1 2.5-2.5H6v-.75A.75.75 0 0 1 6.75 2ZM4.5 8v6.5a1 1 0 0 0 1 1h9a1 1 0 0 0 1-1V8h-11Z",
            Self::Person => "M10 2.5a3.5 3.5 0 1 1 0 7 3.5 3.5 0 0 1 0-7ZM4.5 16.25c0-2.35 2.46-4.25 5.5-4.25s5.5 1.9 5.5 4.25a.75.75 0 0 1-.75.75h-9.5a.75.75 0 0 1-.75-.75Z",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 32px.
    Lg,
}

impl IconSize {
    /// Stable `data-ui-size` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn px(self) -> &'static str {
        match self {
            Self::Xs => "12",
            Self::Sm => "16",
            Self::Md => "20",
            Self::Lg => "32",
        }
    }
}

#[component]
/// Decorative icon; hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 20 20"
            width=size.px()
            height=size.px()
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path fill="currentColor" d=icon.path() />
        </svg>
    }
}
